use crate::error::{EmotionLensError, Result};
use emotion_lens_common::API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 推論サービスのベースURL（未設定ならビルド時の既定値）
    pub api_url: Option<String>,
    /// クライアント側タイムアウト（未設定ならHTTP層の既定）
    pub timeout_seconds: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EmotionLensError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("emotion-lens").join("config.json"))
    }

    /// 接続先を決める（引数 > 設定ファイル > ビルド時の既定値）
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> String {
        override_url
            .or(self.api_url.as_deref())
            .unwrap_or(API_URL)
            .to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(EmotionLensError::Config(format!(
                "URLは http:// か https:// で始めてください: {}",
                url
            )));
        }
        self.api_url = Some(url);
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(EmotionLensError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = Some(seconds);
        Ok(())
    }
}
