use thiserror::Error;

/// Failure taxonomy for the whole pipeline. Upstream failures are mutually
/// exclusive and classified once, at the adapter; the server and the session
/// client only map them, they never reclassify.
#[derive(Debug, Error)]
pub enum ImagenError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Prompt was missing, empty, or whitespace-only. Caught before dispatch.
    #[error("Prompt is required")]
    EmptyPrompt,

    /// No response from the upstream within the timeout bound.
    #[error("Request timed out")]
    Timeout,

    /// The upstream could not be reached at all (DNS or connection failure).
    #[error("Image service unreachable: {0}")]
    Unavailable(String),

    /// The upstream responded with a non-success status.
    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Success status, but none of the candidate fields held an image URL.
    #[error("No image URL returned")]
    BadResponse,

    /// Transport failure on the requesting side, before any response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Download failed: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, ImagenError>;
