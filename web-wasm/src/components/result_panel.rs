//! 解析結果パネル

use crate::components::bar_chart::BarChart;
use emotion_lens_common::{messages, ResultView};
use leptos::prelude::*;

#[component]
pub fn ResultPanel(
    view_model: Signal<Option<ResultView>>,
    is_loading: Signal<bool>,
) -> impl IntoView {
    let bars = Signal::derive(move || {
        view_model
            .get()
            .map(|v| v.bars)
            .unwrap_or_default()
    });

    view! {
        <div class="result-section">
            <h2>{messages::RESULTS_HEADING}</h2>

            <Show when=move || view_model.get().is_none() && !is_loading.get()>
                <div class="idle-placeholder text-muted">
                    <div class="upload-icon">"📊"</div>
                    <p>{messages::IDLE_PROMPT}</p>
                </div>
            </Show>

            {move || view_model.get().map(|result| view! {
                <div class="result-card">
                    <div class="headline">
                        <h3>{messages::HEADLINE_CAPTION}</h3>
                        <p class="emotion">{result.emotion}</p>
                        <p class="confidence">
                            {format!("{}: {}", messages::CONFIDENCE_CAPTION, result.confidence_text)}
                        </p>
                    </div>

                    <BarChart bars=bars />
                    <p class="disclaimer text-muted">{messages::DISCLAIMER}</p>
                </div>
            })}
        </div>
    }
}
