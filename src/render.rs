//! 端末向けの結果表示

use emotion_lens_common::chart::AXIS_MAX;
use emotion_lens_common::messages;
use emotion_lens_common::{ChartBar, ResultView};

/// 棒の最大幅（文字数）
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// 見出し（予測カテゴリと確信度）
pub fn render_headline(view: &ResultView) -> String {
    format!(
        "{}: {}\n{}: {}",
        messages::HEADLINE_CAPTION,
        view.emotion,
        messages::CONFIDENCE_CAPTION,
        view.confidence_text
    )
}

/// 横棒グラフ
///
/// 軸は0-100%固定。100%を超える値は最大幅で打ち切る。
pub fn render_chart(bars: &[ChartBar], width: usize) -> String {
    let mut out = format!("{}\n{}\n", messages::CHART_TITLE, messages::DATASET_LABEL);

    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    for bar in bars {
        let pad = label_width - bar.label.chars().count();
        out.push_str(&format!(
            "  {}{}  {:<width$}  {:>5.1}%\n",
            bar.label,
            " ".repeat(pad),
            bar_cells(bar.percent, width),
            bar.percent,
            width = width
        ));
    }

    out
}

/// 結果全体（見出し + グラフ + 注意書き）
pub fn render_result(view: &ResultView, width: usize) -> String {
    format!(
        "{}\n\n{}\n{}",
        render_headline(view),
        render_chart(&view.bars, width),
        messages::DISCLAIMER
    )
}

fn bar_cells(percent: f64, width: usize) -> String {
    let ratio = (percent / AXIS_MAX).clamp(0.0, 1.0);
    let cells = (ratio * width as f64).round() as usize;
    BAR_CHAR.to_string().repeat(cells)
}
