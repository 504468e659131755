use crate::error::{ImagenError, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

pub const DEFAULT_PROXY_URL: &str = "http://localhost:4000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the proxy server, used by the session. Transport failures
/// that never reach the proxy are classified here so the session can show
/// the right message for each.
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ImagenError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_env() -> Result<Self> {
        let base_url = env::var("PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a prompt to `POST /generate` and return the image URL.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(ImagenError::Upstream {
                status: status.as_u16(),
                message: server_error_message(&body, status.as_u16()),
            });
        }

        body.get("imageUrl")
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
            .map(String::from)
            .ok_or(ImagenError::BadResponse)
    }

    /// Fetch the raw bytes of an image for the download action.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImagenError::Download(format!("Failed to fetch image: {}", e)))?;

        if !response.status().is_success() {
            return Err(ImagenError::Download(format!(
                "Image fetch returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImagenError::Download(format!("Failed to read image bytes: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

/// Prefer the proxy's `message`, fall back to its `error` category, then to
/// a generic status line.
fn server_error_message(body: &Value, status: u16) -> String {
    for field in ["message", "error"] {
        if let Some(text) = body.get(field).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return text.to_string();
            }
        }
    }
    format!("Server error: {}", status)
}

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
    fn test_server_error_message_prefers_message_field() {
        let body = serde_json::json!({ "error": "Failed to generate image", "message": "overloaded" });
        assert_eq!(server_error_message(&body, 503), "overloaded");
    }

    #[test]
    fn test_server_error_message_falls_back_to_error_then_status() {
        let body = serde_json::json!({ "error": "Prompt is required" });
        assert_eq!(server_error_message(&body, 400), "Prompt is required");
        assert_eq!(server_error_message(&Value::Null, 500), "Server error: 500");
    }
}
