//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output
    Development,
    /// JSON structured output, one object per line
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Default filter directive for the given level, e.g. `aptdiff=warn`.
///
/// The directive matches every workspace crate since their targets all
/// start with `aptdiff`.
pub fn default_directive(level: Level) -> String {
    format!("aptdiff={}", level.as_str().to_ascii_lowercase())
}

/// Initialize the logging facility
///
/// Call once at application startup. `RUST_LOG` takes precedence over
/// `level` when it is set.
///
/// # Profiles
///
/// - **Development**: Human-readable logs on stderr
/// - **Production**: JSON structured logs on stderr
/// - **Test**: bare registry; capture is installed via `init_test_capture()`
///
/// # Example
///
/// ```
/// use aptdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development, tracing::Level::INFO);
/// ```
pub fn init(profile: Profile, level: Level) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
        };
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
