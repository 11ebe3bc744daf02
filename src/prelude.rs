pub use anyhow::{Context, Result};
pub use tracing::{debug, info};
