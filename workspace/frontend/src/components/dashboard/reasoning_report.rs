use yew::prelude::*;

use crate::adapters::Reasoning;

#[derive(Properties, PartialEq)]
pub struct ReasoningReportProps {
    pub reasoning: Reasoning,
    #[prop_or_default]
    pub selected_label: Option<String>,
}

/// AI reasoning report: executive summary plus the top-impact news the
/// model cited for the inspected date.
#[function_component(ReasoningReport)]
pub fn reasoning_report(props: &ReasoningReportProps) -> Html {
    html! {
        <div class="bg-slate-900 border border-slate-800 rounded-2xl p-6 shadow-xl lg:col-span-2 flex flex-col">
            <div class="flex items-center gap-2 mb-6">
                <i class="fas fa-brain text-emerald-400"></i>
                <h3 class="text-white font-bold text-lg">
                    {"AI Reasoning Report"}
                    {if let Some(label) = &props.selected_label {
                        html! { <span class="text-xs text-indigo-400 ml-2">{format!("({})", label)}</span> }
                    } else {
                        html! {}
                    }}
                </h3>
                {if let Some(model) = &props.reasoning.llm_model {
                    html! {
                        <span class="text-[10px] font-mono text-slate-500 bg-slate-950 border border-slate-800 px-2 py-0.5 rounded ml-auto">
                            {model}
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>

            <div class="flex-1 space-y-6">
                <div class="bg-slate-950/50 p-5 rounded-xl border border-slate-800">
                    <div class="flex gap-3">
                        <i class="fas fa-file-lines text-slate-500 shrink-0 mt-1"></i>
                        <div>
                            <h4 class="text-emerald-400 font-bold text-sm mb-1 uppercase">
                                {"Executive Summary"}
                            </h4>
                            <p class="text-slate-300 text-sm leading-relaxed">
                                {&props.reasoning.summary}
                            </p>
                        </div>
                    </div>
                </div>

                <div>
                    <h4 class="text-slate-400 text-xs font-bold uppercase mb-3 flex items-center gap-2">
                        <i class="fas fa-bolt text-amber-400"></i>
                        {"High-Impact News (Top 3)"}
                    </h4>
                    {if props.reasoning.impact_news.is_empty() {
                        html! {
                            <p class="text-sm text-slate-500 py-4 text-center">
                                {"No high-impact news for this date."}
                            </p>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 gap-3">
                                {for props.reasoning.impact_news.iter().map(|news| html! {
                                    <div class="bg-slate-800/30 border border-slate-700/50 p-4 rounded-xl hover:bg-slate-800/50 transition-colors">
                                        <div class="flex justify-between items-start mb-2">
                                            <span class="text-xs text-slate-500 font-bold">{&news.source}</span>
                                            <span class="text-xs font-mono text-emerald-400 bg-emerald-500/10 px-2 py-0.5 rounded">
                                                {format!("Impact Score: {}", news.impact)}
                                            </span>
                                        </div>
                                        <h5 class="text-sm font-bold text-slate-200 mb-2">{&news.title}</h5>
                                        <div class="flex items-start gap-2">
                                            <i class="fas fa-brain text-indigo-400 mt-0.5 shrink-0 text-xs"></i>
                                            <p class="text-xs text-indigo-200/80 leading-snug">
                                                <span class="font-bold text-indigo-400">{"AI Analysis: "}</span>
                                                {&news.analysis}
                                            </p>
                                        </div>
                                    </div>
                                })}
                            </div>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
