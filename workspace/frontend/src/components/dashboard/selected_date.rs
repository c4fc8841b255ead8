use engine::TimePoint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectedDateCardProps {
    /// The inspected future point.
    pub point: TimePoint,
    /// Today's reference price for the vs-today delta; 0 hides the delta.
    pub today_price: f64,
    pub on_close: Callback<()>,
}

/// Banner card summarizing the forecast for a user-selected future date.
#[function_component(SelectedDateCard)]
pub fn selected_date_card(props: &SelectedDateCardProps) -> Html {
    let point = &props.point;

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let delta = match (point.forecast, props.today_price > 0.0) {
        (Some(forecast), true) => {
            Some((forecast - props.today_price) / props.today_price * 100.0)
        }
        _ => None,
    };

    html! {
        <div class="bg-gradient-to-r from-indigo-500/10 via-purple-500/10 to-indigo-500/10 border border-indigo-500/30 rounded-2xl p-6 relative overflow-hidden">
            <button
                onclick={on_close}
                class="absolute top-4 right-4 text-slate-400 hover:text-white p-1 rounded-lg hover:bg-slate-800 transition-colors"
            >
                <i class="fas fa-xmark"></i>
            </button>

            <div class="flex flex-col md:flex-row items-start md:items-center gap-6">
                <div class="flex items-center gap-3">
                    <div class="p-3 bg-indigo-500/20 rounded-xl">
                        <i class="fas fa-calendar-days text-indigo-400 text-xl"></i>
                    </div>
                    <div>
                        <p class="text-xs text-slate-400 uppercase font-bold">{"Selected Forecast Date"}</p>
                        <p class="text-2xl font-bold text-white">{point.display_date()}</p>
                    </div>
                </div>

                <div class="hidden md:block w-px h-16 bg-slate-700"></div>

                <div class="flex-1 grid grid-cols-3 gap-6">
                    <div>
                        <p class="text-xs text-slate-400 uppercase font-bold mb-1">{"Forecast"}</p>
                        <p class="text-2xl font-bold text-indigo-400">
                            {point.forecast.map(|f| format!("${:.2}", f)).unwrap_or_else(|| "—".to_string())}
                        </p>
                        {if let Some(delta) = delta {
                            let up = delta > 0.0;
                            html! {
                                <div class={classes!(
                                    "flex", "items-center", "gap-1", "mt-1", "text-xs", "font-medium",
                                    if up { "text-emerald-400" } else { "text-rose-400" }
                                )}>
                                    <i class={if up { "fas fa-arrow-trend-up" } else { "fas fa-arrow-trend-down" }}></i>
                                    {format!("{:+.2}% vs today", delta)}
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div>
                        <p class="text-xs text-slate-400 uppercase font-bold mb-1">{"Upper (90%)"}</p>
                        <p class="text-lg font-bold text-emerald-400">
                            {point.conf_upper.map(|v| format!("${:.2}", v)).unwrap_or_else(|| "—".to_string())}
                        </p>
                    </div>

                    <div>
                        <p class="text-xs text-slate-400 uppercase font-bold mb-1">{"Lower (90%)"}</p>
                        <p class="text-lg font-bold text-rose-400">
                            {point.conf_lower.map(|v| format!("${:.2}", v)).unwrap_or_else(|| "—".to_string())}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
