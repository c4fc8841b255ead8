use chrono::NaiveDate;
use common::dates::{parse_api_date, to_api_date};
use engine::TimePoint;
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub points: Vec<TimePoint>,
    /// Retrospective model accuracy in percent, when computable.
    pub accuracy: Option<f64>,
    pub selected_date: Option<NaiveDate>,
    pub on_date_select: Callback<Option<NaiveDate>>,
    /// False when the series is generated demo data.
    pub live: bool,
    pub simulation_active: bool,
}

fn series(points: &[TimePoint], field: impl Fn(&TimePoint) -> Option<f64>) -> Vec<Value> {
    points
        .iter()
        .map(|p| match field(p) {
            Some(v) => json!(v),
            None => Value::Null,
        })
        .collect()
}

fn build_traces(points: &[TimePoint], simulation_active: bool) -> Value {
    let dates: Vec<String> = points.iter().map(|p| p.display_date()).collect();

    let mut traces = vec![
        // Confidence band: lower bound first, upper fills down to it.
        json!({
            "x": dates.clone(),
            "y": series(points, |p| p.conf_lower),
            "type": "scatter",
            "mode": "lines",
            "line": {"width": 0},
            "hoverinfo": "skip",
            "showlegend": false,
            "name": "ci_lower"
        }),
        json!({
            "x": dates.clone(),
            "y": series(points, |p| p.conf_upper),
            "type": "scatter",
            "mode": "lines",
            "line": {"width": 0},
            "fill": "tonexty",
            "fillcolor": "rgba(129, 140, 248, 0.15)",
            "hoverinfo": "skip",
            "showlegend": false,
            "name": "ci_upper"
        }),
        json!({
            "x": dates.clone(),
            "y": series(points, |p| p.forecast),
            "type": "scatter",
            "mode": "lines",
            "line": {"color": "#818cf8", "width": 2, "dash": "dash"},
            "name": "Forecast"
        }),
        json!({
            "x": dates.clone(),
            "y": series(points, |p| p.model_past_estimate),
            "type": "scatter",
            "mode": "lines",
            "line": {"color": "#a78bfa", "width": 2, "dash": "dot"},
            "name": "Past Estimate"
        }),
        json!({
            "x": dates.clone(),
            "y": series(points, |p| p.actual),
            "type": "scatter",
            "mode": "lines",
            "line": {"color": "#10B981", "width": 3},
            "name": "Actual"
        }),
    ];

    if simulation_active {
        traces.push(json!({
            "x": dates.clone(),
            "y": series(points, |p| p.simulated),
            "type": "scatter",
            "mode": "lines",
            "line": {"color": "#06b6d4", "width": 3, "dash": "dashdot"},
            "name": "Simulated"
        }));
    }

    Value::Array(traces)
}

fn build_layout(points: &[TimePoint], selected_date: Option<NaiveDate>) -> Value {
    let mut shapes = Vec::new();

    if let Some(today) = points.iter().find(|p| p.is_today()) {
        shapes.push(json!({
            "type": "line",
            "x0": today.display_date(),
            "y0": 0,
            "x1": today.display_date(),
            "y1": 1,
            "xref": "x",
            "yref": "paper",
            "line": {"color": "#F59E0B", "width": 1, "dash": "dot"}
        }));
    }

    if let Some(selected) = selected_date {
        if let Some(point) = points.iter().find(|p| p.date == selected) {
            shapes.push(json!({
                "type": "line",
                "x0": point.display_date(),
                "y0": 0,
                "x1": point.display_date(),
                "y1": 1,
                "xref": "x",
                "yref": "paper",
                "line": {"color": "#818cf8", "width": 2, "dash": "dash"}
            }));
        }
    }

    json!({
        "margin": {"t": 30, "r": 50, "l": 10, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"color": "#64748b", "size": 11},
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#1e293b", "side": "right"},
        "showlegend": false,
        "shapes": shapes
    })
}

/// Price forecast chart: observed prices, retrospective estimates and the
/// forward forecast with its confidence band, rendered through Plotly.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let points = props.points.clone();
        let selected_date = props.selected_date;
        let simulation_active = props.simulation_active;
        use_effect_with(
            (chart_ref.clone(), points, selected_date, simulation_active),
            move |(chart_ref, points, selected_date, simulation_active)| {
                if let Some(element) = chart_ref.cast::<Element>() {
                    let traces = build_traces(points, *simulation_active);
                    let layout = build_layout(points, *selected_date);
                    let config = json!({"responsive": true, "displayModeBar": false});

                    let div_id = element.id();
                    if !div_id.is_empty() {
                        newPlot(
                            &div_id,
                            serde_wasm_bindgen::to_value(&traces).unwrap(),
                            serde_wasm_bindgen::to_value(&layout).unwrap(),
                            serde_wasm_bindgen::to_value(&config).unwrap(),
                        );
                    }
                }
                || ()
            },
        );
    }

    let on_select_change = {
        let on_date_select = props.on_date_select.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let selected = if value.is_empty() {
                None
            } else {
                parse_api_date(&value)
            };
            on_date_select.emit(selected);
        })
    };

    let future_dates: Vec<NaiveDate> = props
        .points
        .iter()
        .filter(|p| p.is_future() && p.forecast.is_some())
        .map(|p| p.date)
        .collect();

    let selected_value = props
        .selected_date
        .map(to_api_date)
        .unwrap_or_default();

    html! {
        <section class="bg-slate-900 border border-slate-800 rounded-2xl p-6 shadow-2xl">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
                <div>
                    <div class="flex items-center gap-3 mb-1 flex-wrap">
                        <h2 class="text-2xl font-bold text-white flex items-center gap-2">
                            <i class="fas fa-bullseye text-emerald-400"></i>
                            {"Corn Futures Price Forecast"}
                        </h2>
                        {if props.simulation_active {
                            html! {
                                <span class="text-xs font-bold text-cyan-400 bg-cyan-500/10 border border-cyan-500/30 px-3 py-1 rounded-full">
                                    {"Simulation Mode"}
                                </span>
                            }
                        } else {
                            html! {}
                        }}
                        {if let Some(accuracy) = props.accuracy {
                            html! {
                                <span class="flex items-center gap-1.5 text-xs font-bold text-emerald-400 bg-emerald-500/10 border border-emerald-500/30 px-3 py-1 rounded-full">
                                    <i class="fas fa-check-circle"></i>
                                    {format!("Model Accuracy {:.1}%", accuracy)}
                                </span>
                            }
                        } else {
                            html! {}
                        }}
                        {if !props.live {
                            html! {
                                <span class="text-xs font-bold text-amber-400 bg-amber-500/10 border border-amber-500/30 px-3 py-1 rounded-full">
                                    {"Demo Data"}
                                </span>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                    <p class="text-slate-400 text-sm">
                        {if props.simulation_active {
                            "What-if simulation: 60-day forecast under adjusted market variables"
                        } else {
                            "30-day model validation and 60-day trend outlook"
                        }}
                    </p>
                </div>

                <div class="flex items-center gap-3">
                    <label class="text-xs text-slate-500 font-bold uppercase">{"Inspect date"}</label>
                    <select
                        class="bg-slate-800 border border-slate-700 text-slate-200 text-sm rounded-lg px-3 py-2 focus:outline-none focus:border-indigo-500"
                        onchange={on_select_change}
                        value={selected_value}
                    >
                        <option value="" selected={props.selected_date.is_none()}>{"Today"}</option>
                        {for future_dates.iter().map(|date| {
                            let api = to_api_date(*date);
                            html! {
                                <option
                                    value={api.clone()}
                                    selected={props.selected_date == Some(*date)}
                                >
                                    {common::dates::to_display_date(*date)}
                                </option>
                            }
                        })}
                    </select>
                </div>
            </div>

            <div class="flex gap-4 text-xs font-bold bg-slate-950 p-2 rounded-lg border border-slate-800 flex-wrap mb-4">
                <div class="flex items-center gap-2 px-2">
                    <span class="w-3 h-0.5 bg-emerald-500"></span>
                    <span class="text-slate-300">{"Actual"}</span>
                </div>
                <div class="flex items-center gap-2 px-2 border-l border-slate-800">
                    <span class="w-3 h-0.5 border-t border-dashed border-indigo-400"></span>
                    <span class="text-indigo-300">
                        {if props.simulation_active { "Forecast + Simulation" } else { "AI Forecast" }}
                    </span>
                </div>
                <div class="flex items-center gap-2 px-2 border-l border-slate-800">
                    <span class="w-3 h-3 bg-indigo-500/20 border border-indigo-500/20 rounded-sm"></span>
                    <span class="text-slate-400">{"90% Confidence"}</span>
                </div>
            </div>

            <div ref={chart_ref} id="forecast-chart" class="w-full" style="height: 400px;"></div>
        </section>
    }
}
