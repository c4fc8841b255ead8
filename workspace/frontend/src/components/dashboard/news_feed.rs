use common::{NewsItemDto, Sentiment};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NewsFeedProps {
    /// Most recent items; the card shows the first three.
    pub items: Vec<NewsItemDto>,
    pub live: bool,
}

/// Compact market-news card with a link to the full news page.
#[function_component(NewsFeed)]
pub fn news_feed(props: &NewsFeedProps) -> Html {
    let navigator = use_navigator().unwrap();

    let on_view_all = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::News);
    });

    html! {
        <div class="xl:col-span-1 flex flex-col h-full">
            <div class="flex items-center gap-2 mb-4">
                <i class="fas fa-newspaper text-indigo-400"></i>
                <h3 class="text-white font-bold">{"Market Feed"}</h3>
                {if !props.live {
                    html! {
                        <span class="text-[10px] font-bold text-amber-400 bg-amber-500/10 border border-amber-500/30 px-2 py-0.5 rounded-full">
                            {"Demo Data"}
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>
            <div class="bg-slate-900 border border-slate-800 rounded-2xl p-4 flex-1 space-y-3">
                {if props.items.is_empty() {
                    html! {
                        <p class="text-sm text-slate-500 text-center py-6">{"No news available."}</p>
                    }
                } else {
                    html! {
                        <>
                        {for props.items.iter().take(3).map(|news| {
                            let dot_class = match news.sentiment {
                                Sentiment::Pos => "bg-emerald-500",
                                Sentiment::Neg => "bg-rose-500",
                            };
                            html! {
                                <div
                                    key={news.id.clone()}
                                    class="group p-3 rounded-xl bg-slate-950/50 hover:bg-slate-800 transition-colors border border-slate-800 hover:border-slate-700 cursor-pointer"
                                >
                                    <div class="flex justify-between items-start mb-1">
                                        <div class="flex items-center gap-2">
                                            <span class={classes!("w-1.5", "h-1.5", "rounded-full", dot_class)}></span>
                                            <span class="text-[10px] text-slate-500 font-bold uppercase">
                                                {&news.source}
                                            </span>
                                        </div>
                                        <span class="text-[10px] text-slate-600">{&news.time}</span>
                                    </div>
                                    <h5 class="text-sm text-slate-200 font-medium group-hover:text-blue-400 transition-colors">
                                        {&news.title}
                                    </h5>
                                </div>
                            }
                        })}
                        </>
                    }
                }}
                <button
                    onclick={on_view_all}
                    class="w-full py-2 text-xs text-slate-500 hover:text-white border-t border-slate-800 mt-2 flex items-center justify-center gap-1 transition-colors"
                >
                    {"View All News "}<i class="fas fa-arrow-right text-[10px]"></i>
                </button>
            </div>
        </div>
    }
}
