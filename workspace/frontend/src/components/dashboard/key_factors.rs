use yew::prelude::*;

use crate::adapters::KeyFactor;

#[derive(Properties, PartialEq)]
pub struct KeyFactorsProps {
    pub factors: Vec<KeyFactor>,
    /// Short label of the inspected date, when one is selected.
    #[prop_or_default]
    pub selected_label: Option<String>,
}

/// Feature-importance panel: the model's top drivers as ranked bars.
#[function_component(KeyFactors)]
pub fn key_factors(props: &KeyFactorsProps) -> Html {
    html! {
        <div class="bg-slate-900 border border-slate-800 rounded-2xl p-6 shadow-xl lg:col-span-1">
            <div class="flex items-center gap-2 mb-6">
                <i class="fas fa-layer-group text-amber-400"></i>
                <h3 class="text-white font-bold text-lg">
                    {"Top Factors"}
                    {if let Some(label) = &props.selected_label {
                        html! { <span class="text-xs text-indigo-400 ml-2">{format!("({})", label)}</span> }
                    } else {
                        html! {}
                    }}
                </h3>
            </div>
            <div class="space-y-6">
                {for props.factors.iter().map(|factor| html! {
                    <div>
                        <div class="flex justify-between text-xs mb-1.5">
                            <span class="text-slate-300 font-bold">{&factor.label}</span>
                            <span class="text-emerald-400 font-mono">{format!("{}%", factor.val)}</span>
                        </div>
                        <div class="w-full bg-slate-800 rounded-full h-2 mb-1.5 overflow-hidden">
                            <div
                                class={classes!("h-full", factor.color)}
                                style={format!("width: {}%", factor.val)}
                            ></div>
                        </div>
                        <div class="flex justify-between items-center">
                            <p class="text-[10px] text-slate-500">{&factor.desc}</p>
                            <span class="text-[9px] text-slate-600 bg-slate-950 px-1.5 py-0.5 rounded border border-slate-800">
                                {&factor.group}
                            </span>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
