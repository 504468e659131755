use crate::{
    error::{ImagenError, Result},
    upstream::traits::ImageGenerator,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const IMAGE_SIZE: &str = "1024x1024";

pub struct BlackboxAdapter {
    client: Client,
    endpoint: String,
}

impl BlackboxAdapter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ImagenError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ImageGenerator for BlackboxAdapter {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = json!({
            "prompt": prompt,
            "size": IMAGE_SIZE,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ImagenError::Upstream {
                status: status.as_u16(),
                message: upstream_error_message(&body, status.as_u16()),
            });
        }

        let parsed: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => {
                log::debug!("Upstream returned non-JSON success body: {}", body);
                return Err(ImagenError::BadResponse);
            }
        };

        extract_image_url(&parsed).ok_or_else(|| {
            log::debug!("Upstream response had no usable image URL: {}", parsed);
            ImagenError::BadResponse
        })
    }

    fn name(&self) -> &'static str {
        "blackbox"
    }
}

/// The upstream's success payload has used several shapes over time. Probe
/// the known candidates in order and take the first non-empty match.
pub fn extract_image_url(body: &Value) -> Option<String> {
    let candidates = [
        body.get("image"),
        body.get("url"),
        body.get("imageUrl"),
        body.get("data").and_then(|data| data.get("image")),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(String::from)
}

/// Pull a human-readable message out of an upstream error body, which may be
/// JSON with a `message` or `error` field, plain text, or empty.
pub fn upstream_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for field in ["message", "error"] {
            if let Some(text) = value.get(field).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Upstream responded with status {}", status)
    } else {
        trimmed.to_string()
    }
}

/// Classification priority: timeout beats connection failure beats anything
/// else, matching the order the failures are actually distinguishable in.
fn classify_transport_error(err: reqwest::Error) -> ImagenError {
    if err.is_timeout() {
        ImagenError::Timeout
    } else if err.is_connect() {
        ImagenError::Unavailable(err.to_string())
    } else {
        ImagenError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_direct_image_field() {
        let body = json!({ "image": "https://x/1.png" });
        assert_eq!(extract_image_url(&body).as_deref(), Some("https://x/1.png"));
    }

    #[test]
    fn test_extract_candidate_order() {
        // "image" wins over the later candidates when both are present
        let body = json!({ "url": "https://x/url.png", "image": "https://x/image.png" });
        assert_eq!(
            extract_image_url(&body).as_deref(),
            Some("https://x/image.png")
        );

        let body = json!({ "imageUrl": "https://x/camel.png", "url": "https://x/url.png" });
        assert_eq!(
            extract_image_url(&body).as_deref(),
            Some("https://x/url.png")
        );
    }

    #[test]
    fn test_extract_nested_data_image() {
        let body = json!({ "data": { "image": "https://x/nested.png" } });
        assert_eq!(
            extract_image_url(&body).as_deref(),
            Some("https://x/nested.png")
        );
    }

    #[test]
    fn test_extract_skips_empty_and_non_string_candidates() {
        let body = json!({ "image": "", "url": 42, "imageUrl": "  https://x/2.png  " });
        assert_eq!(extract_image_url(&body).as_deref(), Some("https://x/2.png"));
    }

    #[test]
    fn test_extract_missing_all_candidates() {
        let body = json!({ "status": "done" });
        assert_eq!(extract_image_url(&body), None);
    }

    #[test]
    fn test_upstream_error_message_json_fields() {
        assert_eq!(
            upstream_error_message(r#"{"message":"overloaded"}"#, 503),
            "overloaded"
        );
        assert_eq!(
            upstream_error_message(r#"{"error":"quota exceeded"}"#, 429),
            "quota exceeded"
        );
    }

    #[test]
    fn test_upstream_error_message_fallbacks() {
        assert_eq!(
            upstream_error_message("service melting down", 500),
            "service melting down"
        );
        assert_eq!(
            upstream_error_message("", 502),
            "Upstream responded with status 502"
        );
    }
}
