//! エラー型定義

use thiserror::Error;

use crate::messages;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("No image selected")]
    NoFileSelected,

    #[error("An analysis request is already in flight")]
    Busy,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// 画面に表示する固定メッセージ
    ///
    /// リモート側の失敗はすべて同じ文言にまとめる
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::NoFileSelected => messages::NO_FILE_SELECTED,
            Error::Busy => messages::ANALYSIS_IN_PROGRESS,
            Error::Request(_) | Error::Status(_) | Error::MalformedResponse(_) => {
                messages::REQUEST_FAILED
            }
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
