pub mod blackbox;
pub mod traits;

use crate::{config::Config, error::Result};
use std::sync::Arc;

pub use blackbox::BlackboxAdapter;
pub use traits::ImageGenerator;

/// Build the configured upstream adapter. There is exactly one provider
/// today; the trait boundary is what keeps it swappable.
pub fn from_config(config: &Config) -> Result<Arc<dyn ImageGenerator>> {
    let adapter = BlackboxAdapter::new(&config.upstream_url)?;
    Ok(Arc::new(adapter))
}
