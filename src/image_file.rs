//! 選択画像の読み込み
//!
//! 形式・サイズの検証はしない。寸法が読めない画像もそのまま送信する。

use crate::error::{EmotionLensError, Result};
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// デコードできた場合のみ (幅, 高さ)
    pub dimensions: Option<(u32, u32)>,
}

impl SelectedImage {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(EmotionLensError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let mime_type = ImageFormat::from_path(path)
            .map(|f| f.to_mime_type().to_string())
            .unwrap_or_else(|_| FALLBACK_MIME.to_string());
        let dimensions = read_dimensions(&bytes);

        tracing::debug!(
            file = %file_name,
            size = bytes.len(),
            mime = %mime_type,
            ?dimensions,
            "image loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
            bytes,
            dimensions,
        })
    }

    /// プレビュー参照（file:// URL）
    pub fn preview_url(&self) -> String {
        let absolute = self
            .path
            .canonicalize()
            .unwrap_or_else(|_| self.path.clone());
        format!("file://{}", absolute.display().to_string().replace('\\', "/"))
    }

    /// プレビュー行の表示
    pub fn describe(&self) -> String {
        match self.dimensions {
            Some((w, h)) => format!("{} ({}x{}, {} bytes)", self.file_name, w, h, self.bytes.len()),
            None => format!("{} ({} bytes)", self.file_name, self.bytes.len()),
        }
    }
}

fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file() {
        let err = SelectedImage::load(Path::new("/nonexistent/dibujo.png")).unwrap_err();
        assert!(matches!(err, EmotionLensError::FileNotFound(_)));
    }

    #[test]
    fn test_load_png_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dibujo.png");
        image::RgbImage::new(4, 3).save(&path).unwrap();

        let img = SelectedImage::load(&path).unwrap();
        assert_eq!(img.file_name, "dibujo.png");
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.dimensions, Some((4, 3)));
        assert!(img.describe().contains("4x3"));
        assert!(img.preview_url().starts_with("file://"));
    }

    #[test]
    fn test_load_unknown_format_is_not_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notas.bin");
        std::fs::write(&path, b"not an image").unwrap();

        let img = SelectedImage::load(&path).unwrap();
        assert_eq!(img.mime_type, FALLBACK_MIME);
        assert!(img.dimensions.is_none());
        assert_eq!(img.bytes, b"not an image");
    }
}
