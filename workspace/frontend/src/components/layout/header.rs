use chrono::Local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// App header: brand, navigation and the live-status strip.
#[function_component(Header)]
pub fn header() -> Html {
    let updated_at = Local::now().format("%H:%M:%S").to_string();

    html! {
        <header class="border-b border-slate-800 bg-[#020617]/80 sticky top-0 z-40 backdrop-blur-md">
            <div class="max-w-[1600px] mx-auto px-6 h-16 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="bg-emerald-500/10 p-2 rounded-lg border border-emerald-500/20">
                        <i class="fas fa-seedling text-emerald-400"></i>
                    </div>
                    <h1 class="text-xl font-bold tracking-tight text-white">
                        {"AgriFlow "}<span class="text-slate-400">{"AI"}</span>{" "}
                        <span class="text-xs font-normal text-slate-500 ml-1">
                            {"Feed & Crop Intelligence"}
                        </span>
                    </h1>
                </div>
                <div class="flex items-center gap-6">
                    <nav class="flex items-center gap-4 text-sm font-medium">
                        <Link<Route> to={Route::Dashboard} classes="text-slate-400 hover:text-white transition-colors">
                            {"Dashboard"}
                        </Link<Route>>
                        <Link<Route> to={Route::News} classes="text-slate-400 hover:text-white transition-colors">
                            {"News"}
                        </Link<Route>>
                    </nav>
                    <div class="flex items-center gap-4 text-xs font-mono text-slate-500">
                        <span class="flex items-center gap-1">
                            <span class="w-1.5 h-1.5 bg-emerald-500 rounded-full animate-pulse"></span>
                            {"Live"}
                        </span>
                        <span>{format!("Last Updated: {}", updated_at)}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}
