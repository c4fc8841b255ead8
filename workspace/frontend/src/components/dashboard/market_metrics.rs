use common::Impact;
use yew::prelude::*;

use crate::adapters::MetricView;

#[derive(Properties, PartialEq)]
pub struct MarketMetricsProps {
    pub metrics: Vec<MetricView>,
    pub live: bool,
}

/// Market-indicator grid: eight indicator cards in four columns.
#[function_component(MarketMetrics)]
pub fn market_metrics(props: &MarketMetricsProps) -> Html {
    html! {
        <div class="xl:col-span-2">
            <div class="flex items-center gap-2 mb-4">
                <i class="fas fa-chart-column text-slate-400"></i>
                <h3 class="text-white font-bold">{"Market Indicators"}</h3>
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
            {if props.metrics.is_empty() {
                html! {
                    <div class="bg-slate-900 border border-slate-800 rounded-2xl p-8 text-center text-slate-500 text-sm">
                        {"No indicator data available."}
                    </div>
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        {for props.metrics.iter().map(|metric| html! {
                            <MetricCard metric={metric.clone()} />
                        })}
                    </div>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MetricCardProps {
    metric: MetricView,
}

#[function_component(MetricCard)]
fn metric_card(props: &MetricCardProps) -> Html {
    let metric = &props.metric;

    let impact_class = match metric.impact {
        Impact::High => "text-rose-400 bg-rose-500/10",
        Impact::Medium => "text-amber-400 bg-amber-500/10",
        Impact::Low => "text-slate-400 bg-slate-700/50",
    };
    let impact_text = match metric.impact {
        Impact::High => "High",
        Impact::Medium => "Medium",
        Impact::Low => "Low",
    };

    let trend_up = metric.trend > 0.0;

    html! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl p-4 flex flex-col justify-between hover:border-slate-700 transition-all h-full relative overflow-hidden">
            <div class="absolute top-0 right-0 px-2 py-1 bg-slate-950/50 rounded-bl-lg border-b border-l border-slate-800 text-[9px] font-mono text-slate-500">
                {metric.group}
            </div>

            <div class="flex items-start gap-3 mt-1">
                <div class="p-2.5 bg-slate-800 rounded-lg text-slate-400 shrink-0">
                    <i class={metric.icon}></i>
                </div>
                <div>
                    <p class="text-xs text-slate-400 font-bold uppercase truncate pr-4">{&metric.label}</p>
                    <p class="text-lg font-bold text-white leading-tight mt-0.5">{&metric.value}</p>
                </div>
            </div>

            <div class="flex justify-between items-end mt-3">
                <p class="text-[10px] text-slate-500">{metric.sub}</p>
                <div class="text-right flex flex-col items-end gap-1">
                    <span class={classes!(
                        "text-[10px]", "px-1.5", "py-0.5", "rounded", "font-bold", "uppercase", impact_class
                    )}>
                        {impact_text}
                    </span>
                    <span class={classes!(
                        "text-xs", "font-bold", "flex", "items-center", "gap-1",
                        if trend_up { "text-emerald-400" } else { "text-rose-400" }
                    )}>
                        <i class={if trend_up { "fas fa-arrow-trend-up" } else { "fas fa-arrow-trend-down" }}></i>
                        {format!("{:.1}%", metric.trend.abs())}
                    </span>
                </div>
            </div>
        </div>
    }
}
