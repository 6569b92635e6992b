//! Logging bootstrap.
//!
//! Logs go to stderr so they never interleave with shell output on stdout.

use tracing_subscriber::EnvFilter;

use crate::error::{EditorError, EditorResult};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Fails if a subscriber is
/// already installed or the filter does not parse.
pub fn init_logging(default_filter: &str) -> EditorResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|err| EditorError::Logging(format!("invalid filter `{default_filter}`: {err}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| EditorError::Logging(err.to_string()))
}
