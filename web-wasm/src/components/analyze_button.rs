//! 解析ボタンコンポーネント

use emotion_lens_common::messages;
use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<FA>(
    is_loading: Signal<bool>,
    has_file: Signal<bool>,
    on_analyze: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary"
            disabled=move || is_loading.get() || !has_file.get()
            on:click=move |_| on_analyze(())
        >
            {move || {
                if is_loading.get() {
                    view! { <span class="spinner"></span>{messages::LOADING_LABEL} }.into_any()
                } else {
                    view! { <span>{messages::ANALYZE_BUTTON}</span> }.into_any()
                }
            }}
        </button>
    }
}
