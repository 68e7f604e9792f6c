//! 選択 → 送信 → 結果反映 の一連の流れ

use crate::client::PredictClient;
use crate::error::Result;
use crate::image_file::SelectedImage;
use emotion_lens_common::messages;
use emotion_lens_common::{DisplayState, Session};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub type CliSession = Session<SelectedImage>;

/// 画像を読み込んでセッションに選択させる
pub fn select_image(session: &mut CliSession, path: &Path) -> Result<()> {
    let image = SelectedImage::load(path)?;
    let preview = image.preview_url();
    if let Some(previous) = session.select_file(image, preview) {
        tracing::debug!(file = %previous.file.file_name, "selection replaced");
    }
    Ok(())
}

/// 解析を1回実行してセッションへ反映する
///
/// 画像未選択・解析中は `Err`。リモートの失敗はセッションのエラー状態として
/// 反映され、`Ok(DisplayState::Settled)` が返る。
pub async fn run_analysis(
    session: &mut CliSession,
    client: &PredictClient,
    show_progress: bool,
) -> Result<DisplayState> {
    let (ticket, image) = session.submit()?;

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(messages::LOADING_LABEL);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = client.predict(image).await;
    spinner.finish_and_clear();

    match &outcome {
        Ok(result) => tracing::info!(emotion = %result.emotion, "analysis finished"),
        Err(e) => tracing::error!(error = %e, url = client.url(), "analysis failed"),
    }

    if !session.complete(ticket, outcome) {
        tracing::debug!("stale analysis response discarded");
    }
    Ok(session.state())
}
