use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`. A missing prompt deserializes to an empty
/// string so validation can reject it with a 400 instead of a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Stable error shape for every non-2xx response from the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: "Server is running",
        }
    }
}

/// One successful generation, as remembered by the session gallery.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryEntry {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
}

impl GalleryEntry {
    pub fn new(image_url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            prompt: prompt.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults_missing_prompt() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.prompt, "");
    }

    #[test]
    fn test_wire_field_names() {
        let response = GenerateResponse {
            image_url: "https://x/1.png".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["imageUrl"], "https://x/1.png");

        let entry = GalleryEntry::new("https://x/1.png", "a red fox in snow");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["imageUrl"], "https://x/1.png");
        assert_eq!(json["prompt"], "a red fox in snow");
        // chrono serializes DateTime<Utc> as ISO-8601
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }
}
