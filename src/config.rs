use std::env;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.blackbox.ai/api/generate-image";

/// Process-wide configuration, resolved once at startup and passed explicitly
/// to the components that need it. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the proxy server listens on.
    pub port: u16,
    /// The single origin allowed by CORS.
    pub frontend_url: String,
    /// Endpoint of the external image-generation API.
    pub upstream_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        Config {
            port,
            frontend_url,
            upstream_url,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_frontend_url(mut self, url: impl Into<String>) -> Self {
        self.frontend_url = url.into();
        self
    }

    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }
}
