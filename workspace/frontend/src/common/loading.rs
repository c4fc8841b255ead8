use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner with an optional caption.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="w-8 h-8 border-2 border-slate-700 border-t-emerald-400 rounded-full animate-spin"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-slate-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-12">
            <span class="w-8 h-8 border-2 border-slate-700 border-t-emerald-400 rounded-full animate-spin"></span>
        </div>
    }
}
