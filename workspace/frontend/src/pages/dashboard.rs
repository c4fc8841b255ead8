use chrono::{Duration, Local, NaiveDate};
use common::dates::{to_api_date, to_display_date};
use common::{ExplanationDto, PredictionDto};
use engine::{TimePoint, apply_simulation, apply_uniform_shift, model_accuracy, reconcile};
use yew::prelude::*;

use crate::adapters::{self, KeyFactor, MetricView, Reasoning};
use crate::api_client::explanations::fetch_explanation;
use crate::api_client::metrics::fetch_market_metrics;
use crate::api_client::news::fetch_news;
use crate::api_client::predictions::{fetch_prediction_detail, fetch_predictions};
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::Loading;
use crate::components::chart::forecast_chart::ForecastChart;
use crate::components::dashboard::key_factors::KeyFactors;
use crate::components::dashboard::market_metrics::MarketMetrics;
use crate::components::dashboard::news_feed::NewsFeed;
use crate::components::dashboard::reasoning_report::ReasoningReport;
use crate::components::dashboard::selected_date::SelectedDateCard;
use crate::components::dashboard::similar_patterns::SimilarPatterns;
use crate::components::layout::header::Header;
use crate::components::whatif::panel::{ActiveSimulation, WhatIfPanel};
use crate::hooks::{DataSource, FetchState};
use crate::mock_data;
use crate::settings;

/// Per-date drill-down: the refined prediction plus the model's
/// explanation. Either half can be absent.
#[derive(Clone, PartialEq)]
struct DateDetail {
    prediction: Option<PredictionDto>,
    explanation: Option<ExplanationDto>,
}

/// Main dashboard: forecast chart, what-if panel, XAI sections, market
/// indicators and the news feed.
///
/// The three initial fetches run concurrently and recover independently;
/// any section whose data is unavailable renders deterministic demo
/// content instead of blocking its siblings.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let today = Local::now().date_naive();
    let commodity = settings::get_settings().commodity;

    let (chart_state, chart_refetch) = use_fetch_with_refetch({
        let commodity = commodity.clone();
        move || {
            let commodity = commodity.clone();
            async move {
                let response = fetch_predictions(&commodity).await?;
                let today = Local::now().date_naive();
                Ok(reconcile(
                    &response.predictions,
                    &response.historical_prices,
                    today,
                ))
            }
        }
    });

    let (metrics_state, metrics_refetch) = use_fetch_with_refetch({
        let commodity = commodity.clone();
        move || {
            let commodity = commodity.clone();
            async move { fetch_market_metrics(&commodity, Local::now().date_naive()).await }
        }
    });

    let (news_state, news_refetch) = use_fetch_with_refetch(|| fetch_news(0, 10));

    let selected_date = use_state(|| None::<NaiveDate>);
    let detail_state = use_state(|| FetchState::<DateDetail>::NotStarted);
    // Monotonic sequence so a stale detail response can never overwrite a
    // newer selection.
    let request_seq = use_mut_ref(|| 0u64);
    let simulation = use_state(|| None::<ActiveSimulation>);

    {
        let detail_state = detail_state.clone();
        let request_seq = request_seq.clone();
        let commodity = commodity.clone();
        use_effect_with(*selected_date, move |selected| {
            match selected {
                None => detail_state.set(FetchState::NotStarted),
                Some(date) => {
                    let date = *date;
                    let seq = {
                        let mut current = request_seq.borrow_mut();
                        *current += 1;
                        *current
                    };
                    detail_state.set(FetchState::Loading);

                    let detail_state = detail_state.clone();
                    let request_seq = request_seq.clone();
                    let commodity = commodity.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let (prediction, explanation) = futures::join!(
                            fetch_prediction_detail(&commodity, date),
                            fetch_explanation(&commodity, date),
                        );

                        if *request_seq.borrow() != seq {
                            log::debug!("Discarding stale detail response for {}", date);
                            return;
                        }

                        detail_state.set(FetchState::Success(DateDetail {
                            prediction: prediction.ok(),
                            explanation: explanation.ok(),
                        }));
                    });
                }
            }
            || ()
        });
    }

    let on_date_select = {
        let selected_date = selected_date.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            log::debug!("Date selection changed: {:?}", date);
            selected_date.set(date);
        })
    };

    let on_close_selected = {
        let selected_date = selected_date.clone();
        Callback::from(move |_| selected_date.set(None))
    };

    let on_simulate = {
        let simulation = simulation.clone();
        Callback::from(move |active: Option<ActiveSimulation>| {
            simulation.set(active);
        })
    };

    // Whole-dashboard failure: every initial fetch died. Degraded-mode
    // demo content would be misleading here, so show the full error state
    // with a manual retry.
    if chart_state.is_error() && metrics_state.is_error() && news_state.is_error() {
        let on_retry = {
            let chart_refetch = chart_refetch.clone();
            let metrics_refetch = metrics_refetch.clone();
            let news_refetch = news_refetch.clone();
            Callback::from(move |_| {
                chart_refetch.emit(());
                metrics_refetch.emit(());
                news_refetch.emit(());
            })
        };
        return html! {
            <div class="min-h-screen bg-[#020617] text-slate-200 font-sans">
                <Header />
                <ErrorDisplay
                    message={"The dashboard could not load any data from the prediction service.".to_string()}
                    on_retry={Some(on_retry)}
                />
            </div>
        };
    }

    if chart_state.is_loading() {
        return html! {
            <div class="min-h-screen bg-[#020617] text-slate-200 font-sans">
                <Header />
                <Loading text={Some("Loading forecast data...".to_string())} />
            </div>
        };
    }

    let series_source: DataSource<Vec<TimePoint>> = match &*chart_state {
        FetchState::Success(points) if !points.is_empty() => DataSource::Live(points.clone()),
        _ => DataSource::Unavailable,
    };

    let base_points = match &series_source {
        DataSource::Live(points) => points.clone(),
        DataSource::Unavailable => {
            let inputs = mock_data::mock_chart_inputs(today);
            reconcile(&inputs.predictions, &inputs.historical_prices, today)
        }
    };

    let points = match &*simulation {
        Some(active) if !active.overlay.is_empty() => {
            apply_simulation(&base_points, &active.overlay)
        }
        Some(active) => apply_uniform_shift(&base_points, active.result.change),
        None => base_points.clone(),
    };

    let accuracy = model_accuracy(&points);
    let today_point = points.iter().find(|p| p.is_today()).cloned();
    let today_price = today_point
        .as_ref()
        .and_then(|p| p.actual.or(p.forecast))
        .unwrap_or(0.0);
    let base_forecast = today_point
        .as_ref()
        .and_then(|p| p.forecast.or(p.actual))
        .or_else(|| points.iter().rev().find_map(|p| p.forecast))
        .unwrap_or(452.30);

    // Inspect-date card, refined by the per-date detail when it arrives.
    let selected_point = (*selected_date).and_then(|date| {
        points.iter().find(|p| p.date == date).cloned().map(|mut point| {
            if let FetchState::Success(detail) = &*detail_state {
                if let Some(prediction) = &detail.prediction {
                    if prediction.target_date == point.date {
                        point.forecast = Some(prediction.price_pred);
                        if prediction.conf_upper.is_some() {
                            point.conf_upper = prediction.conf_upper;
                        }
                        if prediction.conf_lower.is_some() {
                            point.conf_lower = prediction.conf_lower;
                        }
                    }
                }
            }
            point
        })
    });

    let selected_label = (*selected_date).map(to_display_date);
    let date_key = selected_label
        .clone()
        .unwrap_or_else(|| to_display_date(today));

    let explanation = detail_state.data().and_then(|d| d.explanation.clone());

    let factors_source: DataSource<Vec<KeyFactor>> = explanation
        .as_ref()
        .and_then(adapters::adapt_key_factors)
        .map(DataSource::Live)
        .unwrap_or(DataSource::Unavailable);
    let factors = match &factors_source {
        DataSource::Live(factors) => factors.clone(),
        DataSource::Unavailable => mock_data::mock_key_factors(&date_key),
    };

    let reasoning_source: DataSource<Reasoning> = explanation
        .as_ref()
        .and_then(adapters::adapt_reasoning)
        .map(DataSource::Live)
        .unwrap_or(DataSource::Unavailable);
    let reasoning = match &reasoning_source {
        DataSource::Live(reasoning) => reasoning.clone(),
        DataSource::Unavailable => mock_data::mock_reasoning(&date_key),
    };

    let metrics_source: DataSource<Vec<MetricView>> = match &*metrics_state {
        FetchState::Success(response) if !response.metrics.is_empty() => DataSource::Live(
            response.metrics.iter().map(adapters::adapt_metric).collect(),
        ),
        _ => DataSource::Unavailable,
    };
    let metrics = match &metrics_source {
        DataSource::Live(metrics) => metrics.clone(),
        DataSource::Unavailable => mock_data::mock_market_metrics(),
    };

    let news_source = match &*news_state {
        FetchState::Success(items) if !items.is_empty() => DataSource::Live(items.clone()),
        _ => DataSource::Unavailable,
    };
    let news_items = match &news_source {
        DataSource::Live(items) => items.clone(),
        DataSource::Unavailable => mock_data::mock_news(today),
    };

    let pattern_range = format!(
        "{} ~ {}",
        to_api_date(today - Duration::days(30)),
        to_api_date(today)
    );

    html! {
        <div class="min-h-screen bg-[#020617] text-slate-200 font-sans selection:bg-emerald-500/30 selection:text-emerald-200 pb-20">
            <Header />

            <main class="max-w-[1600px] mx-auto p-6 space-y-8">
                {if let Some(point) = selected_point {
                    html! {
                        <SelectedDateCard
                            point={point}
                            today_price={today_price}
                            on_close={on_close_selected}
                        />
                    }
                } else {
                    html! {}
                }}

                <ForecastChart
                    points={points.clone()}
                    accuracy={accuracy}
                    selected_date={*selected_date}
                    on_date_select={on_date_select}
                    live={series_source.is_live()}
                    simulation_active={simulation.is_some()}
                />

                <WhatIfPanel
                    base_forecast={base_forecast}
                    base_date={today}
                    commodity={commodity.clone()}
                    on_simulate={on_simulate}
                />

                <section class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <KeyFactors factors={factors} selected_label={selected_label.clone()} />
                    <ReasoningReport reasoning={reasoning} selected_label={selected_label} />
                </section>

                <section class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                    <MarketMetrics metrics={metrics} live={metrics_source.is_live()} />
                    <NewsFeed items={news_items} live={news_source.is_live()} />
                </section>

                <SimilarPatterns
                    patterns={mock_data::mock_similar_patterns()}
                    current_range={pattern_range}
                />
            </main>
        </div>
    }
}
