//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use emotion_lens::error::EmotionLensError;
use emotion_lens_common::messages;

/// EmotionLensErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        EmotionLensError::Config("テスト設定エラー".to_string()),
        EmotionLensError::FileNotFound("dibujo.png".to_string()),
        EmotionLensError::Common(emotion_lens_common::Error::Status(503)),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = EmotionLensError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: EmotionLensError = io_err.into();

    assert!(matches!(err, EmotionLensError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: EmotionLensError = json_err.into();

    assert!(matches!(err, EmotionLensError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let err: EmotionLensError = emotion_lens_common::Error::Status(502).into();

    assert!(matches!(err, EmotionLensError::Common(_)));
    assert_eq!(format!("{}", err), "Server returned status 502");
}

/// 利用者向け固定メッセージ
#[test]
fn test_user_message() {
    let no_file: EmotionLensError = emotion_lens_common::Error::NoFileSelected.into();
    assert_eq!(no_file.user_message(), Some(messages::NO_FILE_SELECTED));

    let remote: EmotionLensError = emotion_lens_common::Error::Request("reset".to_string()).into();
    assert_eq!(remote.user_message(), Some(messages::REQUEST_FAILED));

    let busy: EmotionLensError = emotion_lens_common::Error::Busy.into();
    assert_eq!(busy.user_message(), Some(messages::ANALYSIS_IN_PROGRESS));

    let local = EmotionLensError::FileNotFound("x.png".to_string());
    assert!(local.user_message().is_none());
}
