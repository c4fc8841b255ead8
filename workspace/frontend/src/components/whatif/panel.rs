use chrono::{Local, NaiveDate};
use common::{SimPointDto, SimulateRequest};
use engine::features::{self, FEATURE_TABLE, FeatureDef};
use engine::{Scenario, SimulationResult};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::comparison_chart::ComparisonChart;
use super::scenario_card::ScenarioCard;
use crate::api_client::simulation::run_simulation;
use crate::common::toast::ToastContext;

/// A simulation currently applied to the dashboard chart.
#[derive(Clone, PartialEq)]
pub struct ActiveSimulation {
    pub result: SimulationResult,
    /// Per-date overlay from the remote model; empty when the local
    /// sensitivity model produced the result.
    pub overlay: Vec<SimPointDto>,
}

#[derive(Properties, PartialEq)]
pub struct WhatIfPanelProps {
    /// Baseline forecast the simulation perturbs.
    pub base_forecast: f64,
    pub base_date: NaiveDate,
    pub commodity: String,
    /// Emits the active simulation (or `None` on reset) so the dashboard
    /// can merge it into the chart series.
    pub on_simulate: Callback<Option<ActiveSimulation>>,
}

/// What-if analysis panel: sliders over the canonical feature table, the
/// simulation result with per-feature attribution, and saved scenarios.
///
/// Simulation runs against the remote model; when the call fails the
/// local linear sensitivity model stands in so the panel keeps working
/// offline.
#[function_component(WhatIfPanel)]
pub fn what_if_panel(props: &WhatIfPanelProps) -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let values = use_state(features::default_values);
    let active = use_state(|| None::<ActiveSimulation>);
    let scenarios = use_state(Vec::<Scenario>::new);
    let next_scenario_id = use_state(|| 1u32);
    let show_comparison = use_state(|| false);
    let simulating = use_state(|| false);

    let on_feature_change = {
        let values = values.clone();
        Callback::from(move |(key, value): (&'static str, f64)| {
            let mut next = (*values).clone();
            next.insert(key.to_string(), value);
            values.set(next);
        })
    };

    let on_run = {
        let values = values.clone();
        let active = active.clone();
        let simulating = simulating.clone();
        let toast_ctx = toast_ctx.clone();
        let on_simulate = props.on_simulate.clone();
        let commodity = props.commodity.clone();
        let base_date = props.base_date;
        let base_forecast = props.base_forecast;

        Callback::from(move |_: MouseEvent| {
            if *simulating {
                return;
            }

            let snapshot = (*values).clone();
            let overrides = features::changed_overrides(&snapshot);
            let request = SimulateRequest {
                commodity: commodity.clone(),
                base_date,
                feature_overrides: overrides,
            };

            let active = active.clone();
            let simulating = simulating.clone();
            let toast_ctx = toast_ctx.clone();
            let on_simulate = on_simulate.clone();

            simulating.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match run_simulation(&request).await {
                    Ok(response) => match SimulationResult::from_remote(&response) {
                        Ok(result) => Some(ActiveSimulation {
                            result,
                            overlay: response.predictions,
                        }),
                        Err(err) => {
                            // Malformed payload: keep the un-simulated series.
                            log::warn!("Discarding simulation response: {}", err);
                            toast_ctx.show_warning(
                                "Simulation response was invalid; chart unchanged".to_string(),
                            );
                            None
                        }
                    },
                    Err(_) => {
                        log::warn!("Remote simulation unavailable, using local sensitivity model");
                        match engine::simulate(&snapshot, base_forecast) {
                            Ok(result) => Some(ActiveSimulation {
                                result,
                                overlay: Vec::new(),
                            }),
                            Err(err) => {
                                log::error!("Local simulation failed: {}", err);
                                toast_ctx.show_error(format!("Simulation failed: {}", err));
                                None
                            }
                        }
                    }
                };

                if result.is_some() {
                    active.set(result.clone());
                    on_simulate.emit(result);
                }
                simulating.set(false);
            });
        })
    };

    let on_reset = {
        let values = values.clone();
        let active = active.clone();
        let on_simulate = props.on_simulate.clone();
        Callback::from(move |_: MouseEvent| {
            values.set(features::default_values());
            active.set(None);
            on_simulate.emit(None);
        })
    };

    let on_save_scenario = {
        let values = values.clone();
        let active = active.clone();
        let scenarios = scenarios.clone();
        let next_scenario_id = next_scenario_id.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(simulation) = (*active).clone() else {
                return;
            };
            let id = *next_scenario_id;
            let scenario = Scenario::new(
                id,
                (*values).clone(),
                simulation.result,
                Local::now().naive_local(),
            );
            log::info!("Saved scenario {} ({})", scenario.name, scenario.id);

            let mut next = (*scenarios).clone();
            next.push(scenario);
            scenarios.set(next);
            next_scenario_id.set(id + 1);
        })
    };

    let on_toggle_comparison = {
        let show_comparison = show_comparison.clone();
        Callback::from(move |_: MouseEvent| {
            show_comparison.set(!*show_comparison);
        })
    };

    let result = (*active).as_ref().map(|a| a.result.clone());

    html! {
        <div class="bg-slate-900 border border-slate-800 rounded-2xl p-6 shadow-xl flex flex-col">
            <div class="flex items-center gap-2 mb-2">
                <i class="fas fa-sliders text-cyan-400"></i>
                <h3 class="text-white font-bold text-lg">{"What-If Analysis"}</h3>
            </div>
            <p class="text-slate-400 text-sm mb-6">
                {"Adjust market variables to see how the forecast responds"}
            </p>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8">
                {for FEATURE_TABLE.iter().map(|def| html! {
                    <FeatureSlider
                        key={def.key}
                        def={def}
                        value={*(*values).get(def.key).unwrap_or(&def.default_value)}
                        on_change={on_feature_change.clone()}
                    />
                })}
            </div>

            <div class="flex flex-wrap gap-3 mb-6">
                <button
                    onclick={on_run}
                    disabled={*simulating}
                    class="flex items-center gap-2 px-6 py-3 bg-cyan-600 hover:bg-cyan-500 text-white rounded-lg transition-colors text-sm font-bold shadow-lg hover:shadow-cyan-500/50 disabled:opacity-50"
                >
                    {if *simulating {
                        html! { <><span class="w-4 h-4 border-2 border-cyan-200 border-t-transparent rounded-full animate-spin"></span>{" Running..."}</> }
                    } else {
                        html! { <><i class="fas fa-play"></i>{" Run Forecast"}</> }
                    }}
                </button>
                <button
                    onclick={on_reset}
                    class="flex items-center gap-2 px-4 py-2 bg-slate-800 hover:bg-slate-700 text-slate-300 rounded-lg transition-colors text-sm font-bold"
                >
                    <i class="fas fa-rotate-left"></i>
                    {" Reset"}
                </button>
                {if result.is_some() {
                    html! {
                        <button
                            onclick={on_save_scenario}
                            class="flex items-center gap-2 px-4 py-2 bg-cyan-600 hover:bg-cyan-500 text-white rounded-lg transition-colors text-sm font-bold"
                        >
                            <i class="fas fa-floppy-disk"></i>
                            {" Save Scenario"}
                        </button>
                    }
                } else {
                    html! {}
                }}
                {if !scenarios.is_empty() {
                    html! {
                        <button
                            onclick={on_toggle_comparison}
                            class={classes!(
                                "flex", "items-center", "gap-2", "px-4", "py-2", "rounded-lg",
                                "transition-colors", "text-sm", "font-bold",
                                if *show_comparison {
                                    "bg-indigo-600 hover:bg-indigo-500 text-white"
                                } else {
                                    "bg-slate-800 hover:bg-slate-700 text-slate-300"
                                }
                            )}
                        >
                            <i class="fas fa-chart-bar"></i>
                            {if *show_comparison { " Hide Comparison" } else { " Compare Scenarios" }}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>

            <div class="bg-slate-950/50 border border-slate-800 rounded-xl p-6 mb-6">
                {if let Some(result) = &result {
                    html! {
                        <SimulationSummary
                            result={result.clone()}
                            base_forecast={props.base_forecast}
                        />
                    }
                } else {
                    html! {
                        <div class="flex flex-col items-center justify-center py-8 text-center">
                            <i class="fas fa-play text-slate-600 text-4xl mb-4"></i>
                            <p class="text-slate-400 text-sm">
                                {"Adjust the variables, then press "}
                                <span class="text-cyan-400 font-bold">{"\"Run Forecast\""}</span>
                            </p>
                            <p class="text-slate-400 text-sm">{"to see the simulated outcome"}</p>
                        </div>
                    }
                }}
            </div>

            {if !scenarios.is_empty() {
                html! {
                    <div class="mb-6">
                        <p class="text-xs text-slate-400 uppercase font-bold mb-3">
                            {format!("Saved Scenarios ({})", scenarios.len())}
                        </p>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-3">
                            {for scenarios.iter().map(|scenario| html! {
                                <ScenarioCard key={scenario.id} scenario={scenario.clone()} />
                            })}
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            {if *show_comparison && !scenarios.is_empty() {
                html! {
                    <div class="mt-2 pt-6 border-t border-slate-800">
                        <p class="text-xs text-slate-400 uppercase font-bold mb-4">
                            {"Scenario Comparison"}
                        </p>
                        <ComparisonChart
                            base_forecast={props.base_forecast}
                            base_date={props.base_date}
                            scenarios={(*scenarios).clone()}
                        />
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureSliderProps {
    def: &'static FeatureDef,
    value: f64,
    on_change: Callback<(&'static str, f64)>,
}

#[function_component(FeatureSlider)]
fn feature_slider(props: &FeatureSliderProps) -> Html {
    let def = props.def;
    let changed = props.value != def.default_value;

    let oninput = {
        let on_change = props.on_change.clone();
        let key = def.key;
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(value) = raw.parse::<f64>() {
                on_change.emit((key, value));
            }
        })
    };

    html! {
        <div class={classes!(
            "border", "rounded-xl", "p-4", "transition-all",
            if changed {
                "bg-cyan-900/20 border-cyan-500/50"
            } else {
                "bg-slate-800/50 border-slate-700/50"
            }
        )}>
            <div class="flex justify-between items-center mb-3">
                <label class={classes!(
                    "text-sm", "font-bold", "transition-colors",
                    if changed { "text-cyan-300" } else { "text-slate-300" }
                )}>
                    {def.label}
                </label>
                <span class={classes!(
                    "text-sm", "font-mono", "font-bold", "transition-colors",
                    if changed { "text-cyan-400" } else { "text-slate-400" }
                )}>
                    {def.format_value(props.value)}
                </span>
            </div>
            <input
                type="range"
                min={def.min.to_string()}
                max={def.max.to_string()}
                step={def.step.to_string()}
                value={props.value.to_string()}
                oninput={oninput}
                class="w-full h-2 bg-slate-700 rounded-lg appearance-none cursor-pointer accent-cyan-500"
            />
            <div class="flex justify-between text-xs text-slate-500 mt-1">
                <span>{def.format_value(def.min)}</span>
                <span class="text-slate-400">{format!("Default: {}", def.format_value(def.default_value))}</span>
                <span>{def.format_value(def.max)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SimulationSummaryProps {
    result: SimulationResult,
    base_forecast: f64,
}

#[function_component(SimulationSummary)]
fn simulation_summary(props: &SimulationSummaryProps) -> Html {
    let result = &props.result;
    let change = result.change;

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
                <div>
                    <p class="text-xs text-slate-400 uppercase font-bold mb-1">{"Current Forecast"}</p>
                    <p class="text-2xl font-bold text-slate-300 font-mono">
                        {format!("${:.2}", result.original_forecast)}
                    </p>
                </div>
                <div>
                    <p class="text-xs text-slate-400 uppercase font-bold mb-1">{"Simulated Forecast"}</p>
                    <p class="text-2xl font-bold font-mono text-cyan-400 mb-1">
                        {format!("${:.2}", result.simulated_forecast)}
                    </p>
                    {if change != 0.0 {
                        let up = change > 0.0;
                        let percent = result
                            .change_percent
                            .map(|p| format!(" ({:+.2}%)", p))
                            .unwrap_or_default();
                        html! {
                            <div class={classes!(
                                "flex", "items-center", "gap-1", "text-xs", "font-bold",
                                if up { "text-emerald-400" } else { "text-rose-400" }
                            )}>
                                <i class={if up { "fas fa-arrow-trend-up" } else { "fas fa-arrow-trend-down" }}></i>
                                <span>{format!("{:+.2}{}", change, percent)}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
                <div>
                    <p class="text-xs text-slate-400 uppercase font-bold mb-1">{"Change"}</p>
                    <p class={classes!(
                        "text-xl", "font-bold", "font-mono",
                        if change == 0.0 {
                            "text-slate-500"
                        } else if change > 0.0 {
                            "text-emerald-400"
                        } else {
                            "text-rose-400"
                        }
                    )}>
                        {if change == 0.0 {
                            "No change".to_string()
                        } else {
                            format!("{:+.2}", change)
                        }}
                    </p>
                </div>
            </div>

            {if !result.feature_impacts.is_empty() {
                html! {
                    <div class="mt-6 pt-6 border-t border-slate-800">
                        <p class="text-xs text-slate-400 uppercase font-bold mb-3">
                            {"Contribution by Variable"}
                        </p>
                        <div class="space-y-2">
                            {for result.feature_impacts.iter().map(|impact| {
                                let label = engine::features::feature(&impact.feature)
                                    .map(|def| def.label.to_string())
                                    .unwrap_or_else(|| impact.feature.clone());
                                let positive = impact.contribution > 0.0;
                                html! {
                                    <div class="flex items-center justify-between">
                                        <span class="text-sm text-slate-300">{label}</span>
                                        <div class="flex items-center gap-3">
                                            <span class="text-xs text-slate-500">
                                                {format!("{:+.2}", impact.value_change)}
                                            </span>
                                            <span class={classes!(
                                                "text-sm", "font-mono", "font-bold",
                                                if positive { "text-emerald-400" } else { "text-rose-400" }
                                            )}>
                                                {format!("{}{:.2}", if positive { "+$" } else { "-$" }, impact.contribution.abs())}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </>
    }
}
