//! 解析結果の型定義
//!
//! `/predict` のレスポンスをそのまま表す。フィールド名はサーバ側の
//! JSONキー（スペイン語）に合わせる。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 推論サービスの解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 最も確率の高いカテゴリ
    #[serde(rename = "emocion_detectada")]
    pub emotion: String,

    /// 予測カテゴリの確信度 (0.0-1.0)
    #[serde(rename = "confianza")]
    pub confidence: f64,

    /// カテゴリ名 → 確率。レスポンス本文の並び順を保持する
    #[serde(rename = "analisis_detallado")]
    pub probabilities: IndexMap<String, f64>,
}

/// レスポンス本文をパースする
///
/// 形が合わないものはここで弾く（グラフ変換まで持ち込まない）
pub fn parse_predict_response(body: &str) -> Result<AnalysisResult> {
    serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))
}
