use crate::error::Result;
use async_trait::async_trait;

/// Seam between the proxy and whatever image-generation API sits behind it.
/// The upstream contract has drifted before (endpoint and field names), so
/// the integration stays behind this trait instead of being wired into the
/// handlers directly.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Issue exactly one generation request for a non-empty prompt and
    /// return the image URL, or a classified failure. No retries.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short adapter name for logs.
    fn name(&self) -> &'static str;
}
