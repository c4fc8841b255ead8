use engine::Scenario;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScenarioCardProps {
    pub scenario: Scenario,
}

/// Compact card for one saved what-if scenario.
#[function_component(ScenarioCard)]
pub fn scenario_card(props: &ScenarioCardProps) -> Html {
    let scenario = &props.scenario;
    let change = scenario.result.change;
    let positive = change > 0.0;

    html! {
        <div class="bg-slate-800/50 border border-slate-700/50 rounded-lg p-3">
            <div class="flex justify-between items-start mb-2">
                <span class="text-sm font-bold text-slate-300">{&scenario.name}</span>
                <span class={classes!(
                    "text-xs", "font-mono", "font-bold",
                    if positive { "text-emerald-400" } else { "text-rose-400" }
                )}>
                    {format!("{}{:.2}", if positive { "+$" } else { "-$" }, change.abs())}
                </span>
            </div>
            <p class="text-xs text-slate-500">
                {format!("Forecast: ${:.2}", scenario.result.simulated_forecast)}
            </p>
            <p class="text-[10px] text-slate-600 mt-1">
                {format!(
                    "{} variables · saved {}",
                    scenario.result.feature_impacts.len(),
                    scenario.saved_at.format("%H:%M:%S")
                )}
            </p>
        </div>
    }
}
