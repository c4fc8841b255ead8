use common::{NewsItemDto, Sentiment};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::api_client::news::fetch_news;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::layout::header::Header;
use crate::hooks::FetchState;

const PAGE_SIZE: u32 = 12;

/// Full news listing: paginated fetch with title search plus sentiment and
/// source filters. A failed first load is a whole-page error with retry.
#[function_component(NewsPage)]
pub fn news_page() -> Html {
    let navigator = use_navigator().unwrap();

    let items = use_state(Vec::<NewsItemDto>::new);
    let initial = use_state(|| FetchState::<()>::Loading);
    let skip = use_state(|| 0u32);
    let has_more = use_state(|| true);
    let loading_more = use_state(|| false);

    let search = use_state(String::new);
    let sentiment_filter = use_state(|| None::<Sentiment>);
    let source_filter = use_state(|| None::<String>);

    let load_page = {
        let items = items.clone();
        let initial = initial.clone();
        let skip = skip.clone();
        let has_more = has_more.clone();
        let loading_more = loading_more.clone();

        Callback::from(move |reset: bool| {
            let items = items.clone();
            let initial = initial.clone();
            let skip = skip.clone();
            let has_more = has_more.clone();
            let loading_more = loading_more.clone();

            let offset = if reset { 0 } else { *skip };
            if reset {
                initial.set(FetchState::Loading);
            } else {
                loading_more.set(true);
            }

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_news(offset, PAGE_SIZE).await {
                    Ok(page) => {
                        has_more.set(page.len() as u32 == PAGE_SIZE);
                        let mut next = if reset { Vec::new() } else { (*items).clone() };
                        next.extend(page);
                        items.set(next);
                        skip.set(offset + PAGE_SIZE);
                        initial.set(FetchState::Success(()));
                    }
                    Err(err) => {
                        if reset {
                            initial.set(FetchState::Error(err));
                        } else {
                            log::warn!("Failed to load more news: {}", err);
                        }
                    }
                }
                loading_more.set(false);
            });
        })
    };

    {
        let load_page = load_page.clone();
        use_effect_with((), move |_| {
            load_page.emit(true);
            || ()
        });
    }

    if let FetchState::Error(err) = &*initial {
        let on_retry = {
            let load_page = load_page.clone();
            Callback::from(move |_| load_page.emit(true))
        };
        return html! {
            <div class="min-h-screen bg-[#020617] text-slate-200 font-sans">
                <Header />
                <ErrorDisplay message={err.clone()} on_retry={Some(on_retry)} />
            </div>
        };
    }

    if initial.is_loading() {
        return html! {
            <div class="min-h-screen bg-[#020617] text-slate-200 font-sans">
                <Header />
                <Loading text={Some("Loading news...".to_string())} />
            </div>
        };
    }

    // Source list for the filter row, derived from what is loaded.
    let mut sources: Vec<String> = items.iter().map(|item| item.source.clone()).collect();
    sources.sort();
    sources.dedup();

    let filtered: Vec<NewsItemDto> = items
        .iter()
        .filter(|item| {
            let matches_search = search.is_empty()
                || item.title.to_lowercase().contains(&search.to_lowercase());
            let matches_sentiment = sentiment_filter
                .map(|wanted| item.sentiment == wanted)
                .unwrap_or(true);
            let matches_source = source_filter
                .as_ref()
                .map(|wanted| &item.source == wanted)
                .unwrap_or(true);
            matches_search && matches_sentiment && matches_source
        })
        .cloned()
        .collect();

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            search.set(value);
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::Dashboard);
    });

    let on_load_more = {
        let load_page = load_page.clone();
        Callback::from(move |_: MouseEvent| load_page.emit(false))
    };

    let sentiment_button = |label: &'static str, value: Option<Sentiment>| -> Html {
        let active = *sentiment_filter == value;
        let class = if active {
            match value {
                Some(Sentiment::Pos) => "bg-emerald-500/20 text-emerald-400 border border-emerald-500/30",
                Some(Sentiment::Neg) => "bg-rose-500/20 text-rose-400 border border-rose-500/30",
                None => "bg-indigo-500/20 text-indigo-400 border border-indigo-500/30",
            }
        } else {
            "bg-slate-800 text-slate-400 border border-slate-700 hover:bg-slate-700"
        };
        let onclick = {
            let sentiment_filter = sentiment_filter.clone();
            Callback::from(move |_: MouseEvent| sentiment_filter.set(value))
        };
        html! {
            <button
                onclick={onclick}
                class={classes!("px-3", "py-1.5", "rounded-lg", "text-xs", "font-medium", "transition-colors", class)}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="min-h-screen bg-[#020617] text-slate-200 font-sans selection:bg-emerald-500/30 selection:text-emerald-200 pb-20">
            <Header />

            <main class="max-w-[1600px] mx-auto p-6 space-y-6">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <button
                            onclick={on_back}
                            class="flex items-center gap-2 text-slate-400 hover:text-white transition-colors"
                        >
                            <i class="fas fa-arrow-left"></i>
                            <span class="text-sm font-medium">{"Back to Dashboard"}</span>
                        </button>
                        <div class="flex items-center gap-2">
                            <i class="fas fa-newspaper text-indigo-400 text-xl"></i>
                            <h1 class="text-2xl font-bold text-white">{"All News"}</h1>
                        </div>
                    </div>
                    <div class="text-sm text-slate-500">
                        {format!("{} articles", filtered.len())}
                    </div>
                </div>

                <div class="bg-slate-900 border border-slate-800 rounded-2xl p-6 space-y-4">
                    <div class="relative">
                        <i class="fas fa-magnifying-glass absolute left-4 top-1/2 -translate-y-1/2 text-slate-400"></i>
                        <input
                            type="text"
                            placeholder="Search news titles..."
                            value={(*search).clone()}
                            oninput={on_search}
                            class="w-full pl-12 pr-4 py-3 bg-slate-800 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:border-emerald-500"
                        />
                    </div>

                    <div class="flex flex-wrap gap-4">
                        <div class="flex items-center gap-2">
                            <i class="fas fa-filter text-slate-400"></i>
                            <span class="text-sm text-slate-400 font-medium">{"Sentiment:"}</span>
                            <div class="flex gap-2">
                                {sentiment_button("All", None)}
                                {sentiment_button("Bullish", Some(Sentiment::Pos))}
                                {sentiment_button("Bearish", Some(Sentiment::Neg))}
                            </div>
                        </div>

                        <div class="flex items-center gap-2">
                            <span class="text-sm text-slate-400 font-medium">{"Source:"}</span>
                            <div class="flex gap-2 flex-wrap">
                                {{
                                    let active = source_filter.is_none();
                                    let onclick = {
                                        let source_filter = source_filter.clone();
                                        Callback::from(move |_: MouseEvent| source_filter.set(None))
                                    };
                                    html! {
                                        <button
                                            onclick={onclick}
                                            class={classes!(
                                                "px-3", "py-1.5", "rounded-lg", "text-xs", "font-medium", "transition-colors",
                                                if active {
                                                    "bg-indigo-500/20 text-indigo-400 border border-indigo-500/30"
                                                } else {
                                                    "bg-slate-800 text-slate-400 border border-slate-700 hover:bg-slate-700"
                                                }
                                            )}
                                        >
                                            {"All"}
                                        </button>
                                    }
                                }}
                                {for sources.iter().map(|source| {
                                    let active = source_filter.as_deref() == Some(source.as_str());
                                    let onclick = {
                                        let source_filter = source_filter.clone();
                                        let source = source.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            source_filter.set(Some(source.clone()))
                                        })
                                    };
                                    html! {
                                        <button
                                            key={source.clone()}
                                            onclick={onclick}
                                            class={classes!(
                                                "px-3", "py-1.5", "rounded-lg", "text-xs", "font-medium", "transition-colors",
                                                if active {
                                                    "bg-indigo-500/20 text-indigo-400 border border-indigo-500/30"
                                                } else {
                                                    "bg-slate-800 text-slate-400 border border-slate-700 hover:bg-slate-700"
                                                }
                                            )}
                                        >
                                            {source.clone()}
                                        </button>
                                    }
                                })}
                            </div>
                        </div>
                    </div>
                </div>

                {if filtered.is_empty() {
                    html! {
                        <div class="bg-slate-900 border border-slate-800 rounded-2xl p-12 text-center">
                            <p class="text-slate-400 text-lg">{"No matching articles."}</p>
                            <p class="text-slate-500 text-sm mt-2">{"Try a different search or filter."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {for filtered.iter().map(|news| {
                                let positive = news.sentiment == Sentiment::Pos;
                                html! {
                                    <div
                                        key={news.id.clone()}
                                        class="bg-slate-900 border border-slate-800 rounded-xl p-5 hover:border-slate-700 transition-all cursor-pointer group"
                                    >
                                        <div class="flex justify-between items-start mb-3">
                                            <div class="flex items-center gap-2">
                                                <span class={classes!(
                                                    "w-2", "h-2", "rounded-full",
                                                    if positive { "bg-emerald-500" } else { "bg-rose-500" }
                                                )}></span>
                                                <span class="text-xs text-slate-500 font-bold uppercase">
                                                    {&news.source}
                                                </span>
                                            </div>
                                            <span class="text-xs text-slate-600">{&news.time}</span>
                                        </div>

                                        <h3 class="text-base font-bold text-white mb-2 group-hover:text-emerald-400 transition-colors">
                                            {&news.title}
                                        </h3>

                                        {if let Some(content) = &news.content {
                                            html! {
                                                <p class="text-sm text-slate-400 leading-relaxed line-clamp-3">
                                                    {content}
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        }}

                                        <div class="mt-4 pt-4 border-t border-slate-800 flex items-center justify-between">
                                            <span class="text-xs text-slate-500">
                                                {news.date.format("%Y-%m-%d").to_string()}
                                            </span>
                                            <span class={classes!(
                                                "text-xs", "font-medium", "px-2", "py-1", "rounded",
                                                if positive {
                                                    "bg-emerald-500/10 text-emerald-400"
                                                } else {
                                                    "bg-rose-500/10 text-rose-400"
                                                }
                                            )}>
                                                {if positive { "Bullish" } else { "Bearish" }}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }}

                {if *has_more {
                    html! {
                        <div class="flex justify-center">
                            <button
                                onclick={on_load_more}
                                disabled={*loading_more}
                                class="flex items-center gap-2 px-6 py-3 bg-slate-800 hover:bg-slate-700 text-slate-300 rounded-lg transition-colors text-sm font-bold disabled:opacity-50"
                            >
                                {if *loading_more {
                                    html! { <><span class="w-4 h-4 border-2 border-slate-400 border-t-transparent rounded-full animate-spin"></span>{" Loading..."}</> }
                                } else {
                                    html! { <><i class="fas fa-chevron-down"></i>{" Load More"}</> }
                                }}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </main>
        </div>
    }
}
