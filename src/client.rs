//! 推論サービスへのHTTPクライアント
//!
//! `POST <base>/predict` に画像を1パートのmultipartで送る。
//! 通信エラー・非2xx・タイムアウト・不正なレスポンスはすべて
//! `emotion_lens_common::Error` として返す（呼び出し側で区別しない）。

use crate::error::Result;
use crate::image_file::SelectedImage;
use emotion_lens_common::{parse_predict_response, predict_url, AnalysisResult, Error};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

pub struct PredictClient {
    http: reqwest::Client,
    url: String,
}

impl PredictClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url: predict_url(base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn predict(&self, image: &SelectedImage) -> emotion_lens_common::Result<AnalysisResult> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| Error::Request(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(url = %self.url, file = %image.file_name, "sending predict request");

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "predict request rejected");
            return Err(Error::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        tracing::debug!(len = body.len(), "predict response received");

        parse_predict_response(&body)
    }
}
