//! アップロードエリアコンポーネント
//!
//! クリックでのファイル選択とドラッグ&ドロップを受け付け、最初の1枚だけを
//! 親へ渡す。プレビューは親が作ったURLを表示するだけ。

use emotion_lens_common::messages;
use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

const INPUT_ID: &str = "dropzone-file";

fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|list| list.get(0))
}

#[component]
pub fn UploadArea<F>(
    preview: Signal<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            // 未選択（キャンセル）は何もしない
            if let Some(file) = first_file(input.files()) {
                on_file_selected(file);
            }
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div class="upload-section">
            <h2>{messages::UPLOAD_HEADING}</h2>

            <label
                for=INPUT_ID
                class=move || {
                    if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <div class="upload-icon">"🖼️"</div>
                <p>"Haz clic para subir o arrastra la imagen"</p>
                <p class="text-muted">"JPG, PNG (Max. 5MB)"</p>
                <input
                    id=INPUT_ID
                    type="file"
                    class="hidden"
                    accept="image/*"
                    on:change=on_change
                />
            </label>

            {move || preview.get().map(|url| view! {
                <div class="preview">
                    <p class="text-muted">{messages::PREVIEW_LABEL}</p>
                    <img src=url alt="Vista previa" class="preview-image" />
                </div>
            })}
        </div>
    }
}
