//! 棒グラフコンポーネント（SVG）
//!
//! 縦軸は0-100%固定、棒の色はパレットを順に使う。

use emotion_lens_common::chart::AXIS_MAX;
use emotion_lens_common::{bar_color, messages, ChartBar};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 260.0;
const MARGIN_LEFT: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_TOP: f64 = 12.0;
const BAR_GAP_RATIO: f64 = 0.25;
const TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// SVG上の棒1本の配置
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub value_text: String,
}

fn num(value: f64) -> String {
    format!("{:.2}", value)
}

fn plot_height() -> f64 {
    VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn y_for(percent: f64) -> f64 {
    let ratio = (percent / AXIS_MAX).clamp(0.0, 1.0);
    MARGIN_TOP + plot_height() * (1.0 - ratio)
}

/// 系列を棒の配置に変換する（入力順のまま左から並べる）
pub fn layout_bars(bars: &[ChartBar]) -> Vec<BarRect> {
    if bars.is_empty() {
        return Vec::new();
    }

    let slot = (VIEW_WIDTH - MARGIN_LEFT) / bars.len() as f64;
    let width = slot * (1.0 - BAR_GAP_RATIO);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let y = y_for(bar.percent);
            BarRect {
                label: bar.label.clone(),
                x: MARGIN_LEFT + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: MARGIN_TOP + plot_height() - y,
                color: bar_color(i),
                value_text: format!("{:.1}%", bar.percent),
            }
        })
        .collect()
}

#[component]
pub fn BarChart(bars: Signal<Vec<ChartBar>>) -> impl IntoView {
    let baseline = MARGIN_TOP + plot_height();

    view! {
        <figure class="bar-chart">
            <figcaption>{messages::CHART_TITLE}</figcaption>
            <p class="legend">
                <span class="legend-swatch" style={format!("background: {}", bar_color(0))}></span>
                {messages::DATASET_LABEL}
            </p>
            <svg viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)} role="img">
                {TICKS
                    .iter()
                    .map(|tick| {
                        let y = y_for(*tick);
                        view! {
                            <line x1={num(MARGIN_LEFT)} x2={num(VIEW_WIDTH)} y1={num(y)} y2={num(y)} class="grid-line" />
                            <text x={num(MARGIN_LEFT - 4.0)} y={num(y + 4.0)} text-anchor="end" class="tick">
                                {format!("{}", tick)}
                            </text>
                        }
                    })
                    .collect_view()}
                {move || {
                    layout_bars(&bars.get())
                        .into_iter()
                        .map(|rect| {
                            let center = rect.x + rect.width / 2.0;
                            view! {
                                <g class="bar">
                                    <rect
                                        x={num(rect.x)}
                                        y={num(rect.y)}
                                        width={num(rect.width)}
                                        height={num(rect.height)}
                                        fill=rect.color
                                    />
                                    <text x={num(center)} y={num(rect.y - 4.0)} text-anchor="middle" class="bar-value">
                                        {rect.value_text.clone()}
                                    </text>
                                    <text x={num(center)} y={num(baseline + 16.0)} text-anchor="middle" class="bar-label">
                                        {rect.label.clone()}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<ChartBar> {
        vec![
            ChartBar { label: "Alegría".to_string(), percent: 87.0 },
            ChartBar { label: "Tristeza".to_string(), percent: 5.0 },
            ChartBar { label: "Miedo".to_string(), percent: 8.0 },
        ]
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout_bars(&[]).is_empty());
    }

    #[test]
    fn test_layout_keeps_order_left_to_right() {
        let rects = layout_bars(&bars());
        let labels: Vec<&str> = rects.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Alegría", "Tristeza", "Miedo"]);
        assert!(rects[0].x < rects[1].x && rects[1].x < rects[2].x);
    }

    #[test]
    fn test_layout_heights_follow_percent() {
        let rects = layout_bars(&bars());
        assert!(rects[0].height > rects[2].height);
        assert!(rects[2].height > rects[1].height);

        let expected = plot_height() * 0.87;
        assert!((rects[0].height - expected).abs() < 1e-6);
    }

    #[test]
    fn test_layout_clamps_to_axis() {
        let rects = layout_bars(&[ChartBar { label: "X".to_string(), percent: 140.0 }]);
        assert!((rects[0].height - plot_height()).abs() < 1e-6);
        assert!((rects[0].y - MARGIN_TOP).abs() < 1e-6);
    }

    #[test]
    fn test_layout_colors_and_text() {
        let rects = layout_bars(&bars());
        assert_eq!(rects[0].color, bar_color(0));
        assert_eq!(rects[1].color, bar_color(1));
        assert_eq!(rects[0].value_text, "87.0%");
    }
}
