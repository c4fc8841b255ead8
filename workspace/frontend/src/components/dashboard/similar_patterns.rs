use yew::prelude::*;

use crate::mock_data::SimilarPattern;

#[derive(Properties, PartialEq)]
pub struct SimilarPatternsProps {
    pub patterns: Vec<SimilarPattern>,
    /// Label of the current 30-day window being compared.
    pub current_range: String,
}

/// Historical analog periods resembling the current price pattern.
#[function_component(SimilarPatterns)]
pub fn similar_patterns(props: &SimilarPatternsProps) -> Html {
    html! {
        <div class="bg-slate-900 border border-slate-800 rounded-2xl p-6 shadow-xl">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-2">
                    <i class="fas fa-clock-rotate-left text-purple-400"></i>
                    <h3 class="text-white font-bold text-lg">{"Similar Historical Patterns"}</h3>
                </div>
                <span class="text-xs font-mono text-slate-500">
                    {format!("Current window: {}", props.current_range)}
                </span>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for props.patterns.iter().map(|pattern| {
                    let outcome_up = pattern.outcome_after_60_days > 0.0;
                    html! {
                        <div
                            key={pattern.rank}
                            class="bg-slate-950/50 border border-slate-800 rounded-xl p-4 hover:border-slate-700 transition-all"
                        >
                            <div class="flex justify-between items-start mb-3">
                                <span class="text-xs font-bold text-slate-400">
                                    {format!("#{}", pattern.rank)}
                                </span>
                                <span class="text-xs font-mono text-purple-400 bg-purple-500/10 px-2 py-0.5 rounded">
                                    {format!("{:.1}% match", pattern.similarity)}
                                </span>
                            </div>
                            <p class="text-sm font-bold text-slate-200 mb-1">
                                {format!("{} ~ {}", pattern.period_start, pattern.period_end)}
                            </p>
                            <p class="text-xs text-slate-500 mb-3">
                                {format!("${:.2} → ${:.2} ({:+.2}%)",
                                    pattern.price_start, pattern.price_end, pattern.price_change)}
                            </p>
                            <div class={classes!(
                                "text-xs", "font-bold", "mb-3",
                                if outcome_up { "text-emerald-400" } else { "text-rose-400" }
                            )}>
                                {format!("{:+.1}% after 60 days", pattern.outcome_after_60_days)}
                            </div>
                            <div class="flex flex-wrap gap-1">
                                {for pattern.key_factors.iter().map(|factor| html! {
                                    <span class="text-[10px] text-slate-400 bg-slate-800 px-1.5 py-0.5 rounded">
                                        {*factor}
                                    </span>
                                })}
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
