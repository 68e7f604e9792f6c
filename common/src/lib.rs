//! Emotion Lens Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態管理・グラフ変換

pub mod types;
pub mod chart;
pub mod endpoint;
pub mod error;
pub mod messages;
pub mod session;

pub use types::{AnalysisResult, parse_predict_response};
pub use chart::{ChartBar, ResultView, probability_series, format_confidence, bar_color};
pub use endpoint::{API_URL, LOCAL_API_URL, predict_url};
pub use error::{Error, Result};
pub use session::{DisplayState, Selection, Session, Ticket};
