pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod server;
pub mod session;
pub mod upstream;

pub use config::Config;
pub use error::{ImagenError, Result};
pub use models::*;
pub use session::{Display, ProxyClient, Session};
pub use upstream::{BlackboxAdapter, ImageGenerator};
