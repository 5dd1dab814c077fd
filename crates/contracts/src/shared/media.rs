//! Медиафайлы: ссылки, ответ загрузки, построение URL.

use crate::shared::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaFormat {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaFormats {
    #[serde(default)]
    pub thumbnail: Option<MediaFormat>,
}

/// Ссылка на загруженный файл (URL относительный)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub formats: Option<MediaFormats>,
}

impl MediaRef {
    /// Миниатюра, либо исходный файл если миниатюры нет
    pub fn thumbnail_url(&self) -> &str {
        self.formats
            .as_ref()
            .and_then(|f| f.thumbnail.as_ref())
            .map(|t| t.url.as_str())
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.url)
    }
}

/// Ответ `POST /api/upload`: массив файлов, берётся первый
pub fn parse_upload_response(body: &str) -> Result<MediaRef, ApiError> {
    let files: Vec<MediaRef> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    files
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Decode("upload response is empty".to_string()))
}

/// Склеить origin и относительный путь. Абсолютные URL не меняются.
pub fn media_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        origin.to_string()
    } else {
        format!("{}/{}", origin, path)
    }
}

/// Процент загрузки, округлённый до целого, не больше 100
pub fn upload_percent(loaded: f64, total: f64) -> u8 {
    if total <= 0.0 || !loaded.is_finite() || !total.is_finite() {
        return 0;
    }
    ((loaded * 100.0) / total).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_response() {
        let body = r#"[{"id": 12, "url": "/uploads/cola.png",
            "formats": {"thumbnail": {"url": "/uploads/thumbnail_cola.png"}}}]"#;
        let media = parse_upload_response(body).unwrap();
        assert_eq!(media.id, 12);
        assert_eq!(media.thumbnail_url(), "/uploads/thumbnail_cola.png");
    }

    #[test]
    fn test_thumbnail_falls_back_to_original() {
        let media = MediaRef {
            id: 1,
            url: "/uploads/a.png".into(),
            formats: None,
        };
        assert_eq!(media.thumbnail_url(), "/uploads/a.png");
    }

    #[test]
    fn test_empty_upload_response_is_error() {
        assert!(parse_upload_response("[]").is_err());
        assert!(parse_upload_response("{").is_err());
    }

    #[test]
    fn test_media_url() {
        assert_eq!(
            media_url("http://localhost:1337/", "/uploads/a.png"),
            "http://localhost:1337/uploads/a.png"
        );
        assert_eq!(
            media_url("http://localhost:1337", "uploads/a.png"),
            "http://localhost:1337/uploads/a.png"
        );
        assert_eq!(
            media_url("http://localhost:1337", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_upload_percent() {
        assert_eq!(upload_percent(50.0, 200.0), 25);
        assert_eq!(upload_percent(1.0, 3.0), 33);
        assert_eq!(upload_percent(10.0, 0.0), 0);
        assert_eq!(upload_percent(300.0, 200.0), 100);
    }
}
