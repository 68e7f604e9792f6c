//! メインアプリケーションコンポーネント
//!
//! 画面の状態はすべて `Session<File>` 1つに持たせ、各コンポーネントには
//! そこから派生したシグナルだけを渡す。

use crate::api::predict;
use crate::components::{
    analyze_button::AnalyzeButton,
    header::Header,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use emotion_lens_common::{Error, Session, API_URL};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, Url};

/// プレビュー用のオブジェクトURLを解放
fn release_preview(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Err(e) = Url::revoke_object_url(url) {
        gloo::console::warn!(format!("revokeObjectURL failed: {:?}", e));
    }
}

/// 表示できるプレビューURLだけを通す（作成失敗時は空文字が入る）
fn displayable_preview(preview: Option<&str>) -> Option<String> {
    preview.filter(|url| !url.is_empty()).map(str::to_string)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new_local(Session::<File>::new());

    let preview = Signal::derive(move || session.with(|s| displayable_preview(s.preview())));
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let has_file = Signal::derive(move || session.with(|s| s.has_file()));
    let result_view = Signal::derive(move || session.with(|s| s.view()));
    let error = Signal::derive(move || session.with(|s| s.error().map(str::to_string)));

    // 画像選択ハンドラ
    let on_file_selected = move |file: File| {
        let preview_url = Url::create_object_url_with_blob(&file).unwrap_or_else(|e| {
            gloo::console::error!(format!("createObjectURL failed: {:?}", e));
            String::new()
        });

        let previous = session
            .try_update(|s| s.select_file(file, preview_url))
            .flatten();
        if let Some(previous) = previous {
            release_preview(&previous.preview);
        }
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let submitted = session.try_update(|s| {
            s.submit().map(|(ticket, file)| (ticket, file.clone()))
        });

        match submitted {
            Some(Ok((ticket, file))) => {
                spawn_local(async move {
                    let outcome = predict::predict(API_URL, &file).await;
                    if let Err(e) = &outcome {
                        gloo::console::error!(format!("Error conectando al backend: {}", e));
                    }
                    session.update(|s| {
                        if !s.complete(ticket, outcome) {
                            gloo::console::log!("stale analysis response discarded");
                        }
                    });
                });
            }
            // 未選択のメッセージはセッション側で設定済み
            Some(Err(Error::NoFileSelected)) | None => {}
            // ボタンは解析中に無効化されるので通常は届かない
            Some(Err(e @ Error::Busy)) => {
                gloo::console::warn!(e.user_message());
            }
            Some(Err(e)) => {
                gloo::console::error!(format!("submit failed: {}", e));
            }
        }
    };

    on_cleanup(move || {
        if let Some(selection) = session.try_update(|s| s.close()).flatten() {
            release_preview(&selection.preview);
        }
    });

    view! {
        <div class="container">
            <Header />

            <main class="panels">
                <div class="panel">
                    <UploadArea preview=preview on_file_selected=on_file_selected />

                    <AnalyzeButton
                        is_loading=is_loading
                        has_file=has_file
                        on_analyze=on_analyze
                    />

                    {move || error.get().map(|message| view! {
                        <p class="error-message">{message}</p>
                    })}
                </div>

                <div class="panel">
                    <ResultPanel view_model=result_view is_loading=is_loading />
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displayable_preview_skips_empty_url() {
        assert_eq!(displayable_preview(Some("")), None);
        assert_eq!(displayable_preview(None), None);
    }

    #[test]
    fn test_displayable_preview_keeps_object_url() {
        assert_eq!(
            displayable_preview(Some("blob:http://localhost/abc")),
            Some("blob:http://localhost/abc".to_string())
        );
    }
}
