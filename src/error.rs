use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmotionLensError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] emotion_lens_common::Error),
}

impl EmotionLensError {
    /// 利用者向けの固定メッセージ（解析フローのエラーのみ）
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            EmotionLensError::Common(e) => Some(e.user_message()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmotionLensError>;
