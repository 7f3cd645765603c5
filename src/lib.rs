use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub mod app;
pub mod backend;
pub mod draw;
pub mod error;
pub mod exercises;
mod gl;
pub mod input;
pub mod projection;
pub mod settings;
pub mod shapes;
pub mod transform;

pub use app::{run, Exercise, Flow};
pub use error::{Error, Result};
pub use settings::Settings;

/// Logs to stderr, filtered by `RUST_LOG` ( `info` when unset ).
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()?;
    Ok(())
}
