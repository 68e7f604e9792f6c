//! 解析結果 → グラフ表示用データの変換
//!
//! CLIの端末グラフとWebの棒グラフはどちらもここで作った系列を描画する。

use indexmap::IndexMap;

use crate::types::AnalysisResult;

/// 棒の色（カテゴリ順に循環）
pub const PALETTE: [&str; 6] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 159, 64, 0.6)",
];

/// 縦軸の上限（%）
pub const AXIS_MAX: f64 = 100.0;

/// グラフの棒1本
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    /// 確率 × 100
    pub percent: f64,
}

/// カテゴリ確率を百分率の系列へ変換する
///
/// 入力の並び順をそのまま保つ。値の範囲や合計はチェックしない。
pub fn probability_series(probabilities: &IndexMap<String, f64>) -> Vec<ChartBar> {
    probabilities
        .iter()
        .map(|(label, probability)| ChartBar {
            label: label.clone(),
            percent: probability * 100.0,
        })
        .collect()
}

/// 確信度を "87.0%" 形式で表示
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// index番目の棒の色
pub fn bar_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// 結果表示用にまとめたもの
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub emotion: String,
    pub confidence_text: String,
    pub bars: Vec<ChartBar>,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            emotion: result.emotion.clone(),
            confidence_text: format_confidence(result.confidence),
            bars: probability_series(&result.probabilities),
        }
    }
}
