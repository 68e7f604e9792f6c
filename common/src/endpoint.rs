//! 推論サービスの接続先
//!
//! ビルド時に `EMOTION_LENS_API_URL` が設定されていればデプロイ先、
//! なければローカル開発サーバを使う。

/// ローカル開発用
pub const LOCAL_API_URL: &str = "http://127.0.0.1:8000";

/// ビルド時に決まる接続先
pub const API_URL: &str = match option_env!("EMOTION_LENS_API_URL") {
    Some(url) => url,
    None => LOCAL_API_URL,
};

/// `<base>/predict` を組み立てる
pub fn predict_url(base: &str) -> String {
    format!("{}/predict", base.trim_end_matches('/'))
}
