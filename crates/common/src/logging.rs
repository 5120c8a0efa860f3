//! Logging initialization.

use std::sync::OnceLock;

use tracing::*;
use tracing_subscriber::{fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Layer};

static INIT_DONE: OnceLock<()> = OnceLock::new();

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Name emitted with the init message, identifies the process.
    pub whoami: String,

    /// Emit JSON lines instead of the compact human format.
    pub json_format: bool,
}

impl LoggerConfig {
    pub fn with_base_name(whoami: &str) -> Self {
        Self {
            whoami: whoami.to_owned(),
            json_format: false,
        }
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Defaults to INFO, overridable via `RUST_LOG`. Calling this more than once
/// is a no-op so test binaries can call it from every test.
pub fn init(config: LoggerConfig) {
    INIT_DONE.get_or_init(|| {
        let filt = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(Level::INFO.into())
            .from_env_lossy();

        let stdout_sub = if config.json_format {
            layer().json().with_filter(filt).boxed()
        } else {
            layer().compact().with_filter(filt).boxed()
        };

        tracing_subscriber::registry().with(stdout_sub).init();

        info!(whoami = %config.whoami, "logging initialized");
    });
}
