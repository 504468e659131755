pub mod client;
pub mod download;

use crate::{error::ImagenError, models::GalleryEntry};
use std::path::Path;

pub use client::ProxyClient;

/// What the UI shows. Exactly one mode is active at a time, so impossible
/// combinations (spinner over an error, stale image behind a spinner) cannot
/// be represented at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    Idle,
    Loading,
    Shown(String),
    Failed(String),
}

impl Display {
    pub fn is_loading(&self) -> bool {
        matches!(self, Display::Loading)
    }
}

/// Session-scoped client state: the prompt under edit, the active display
/// mode, and the gallery of past generations (most recent first, unbounded,
/// lost when the session ends).
///
/// Single-threaded and event-driven: the only suspending operation is the
/// call to the proxy, and the submit guard keeps at most one generation in
/// flight.
pub struct Session {
    prompt: String,
    display: Display,
    gallery: Vec<GalleryEntry>,
    client: ProxyClient,
}

impl Session {
    pub fn new(client: ProxyClient) -> Self {
        Self {
            prompt: String::new(),
            display: Display::Idle,
            gallery: Vec::new(),
            client,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    pub fn is_loading(&self) -> bool {
        self.display.is_loading()
    }

    /// Edit the prompt. Editing clears a previous error; it never disturbs a
    /// shown image. The editor is disabled while a generation is in flight,
    /// so edits during `Loading` are ignored.
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        self.prompt = text.into();
        if matches!(self.display, Display::Failed(_)) {
            self.display = Display::Idle;
        }
    }

    /// Guarded submit transition. Returns the trimmed prompt to dispatch when
    /// accepted; refuses (returning `None`) while a generation is in flight
    /// or when the prompt is empty after trimming.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        let trimmed = self.prompt.trim();
        if trimmed.is_empty() {
            self.display = Display::Failed("Please enter a prompt".to_string());
            return None;
        }

        self.display = Display::Loading;
        Some(trimmed.to_string())
    }

    /// Resolution transition, success arm: record the generation at the front
    /// of the gallery and show it.
    pub fn resolve_success(&mut self, prompt: String, image_url: String) {
        let entry = GalleryEntry::new(image_url.clone(), prompt);
        self.gallery.insert(0, entry);
        self.display = Display::Shown(image_url);
    }

    /// Resolution transition, failure arm: one human-readable message in the
    /// single error slot. The gallery is untouched.
    pub fn resolve_failure(&mut self, err: &ImagenError) {
        self.display = Display::Failed(failure_message(err));
    }

    /// Full submit flow: guard, dispatch to the proxy, resolve.
    pub async fn submit(&mut self) {
        let Some(prompt) = self.begin_submit() else {
            return;
        };

        match self.client.generate(&prompt).await {
            Ok(image_url) => self.resolve_success(prompt, image_url),
            Err(err) => {
                log::error!("Generation failed: {}", err);
                self.resolve_failure(&err);
            }
        }
    }

    /// Show a past generation again. Never refetches, never touches the
    /// gallery; out-of-range indices and in-flight generations are no-ops.
    pub fn select_thumbnail(&mut self, index: usize) {
        if self.is_loading() {
            return;
        }
        if let Some(entry) = self.gallery.get(index) {
            self.display = Display::Shown(entry.image_url.clone());
        }
    }

    /// Download the currently shown image: fetch its bytes, re-encode as a
    /// fixed-quality JPEG, write to `path`. Any step failing lands in the
    /// error slot; the gallery keeps the entry either way.
    pub async fn download_current(&mut self, path: &Path) {
        let url = match &self.display {
            Display::Shown(url) => url.clone(),
            _ => {
                self.display = Display::Failed("No image to download".to_string());
                return;
            }
        };

        if let Err(err) = self.try_download(&url, path).await {
            log::error!("Download failed: {}", err);
            self.display = Display::Failed("Failed to download image".to_string());
        }
    }

    async fn try_download(&self, url: &str, path: &Path) -> crate::error::Result<()> {
        let bytes = self.client.fetch_bytes(url).await?;
        download::save_jpeg(&bytes, path)
    }
}

/// Messages mirror where the failure happened: classified locally when the
/// proxy was never reached, server-supplied otherwise.
fn failure_message(err: &ImagenError) -> String {
    match err {
        ImagenError::Timeout => "Request timed out. Please try again.".to_string(),
        ImagenError::Unavailable(_) => "Network error. Please check backend URL.".to_string(),
        ImagenError::Upstream { message, .. } => message.clone(),
        ImagenError::BadResponse => "No image URL received from server".to_string(),
        _ => "An error occurred while generating the image".to_string(),
    }
}
