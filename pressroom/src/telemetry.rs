//! Tracing subscriber setup for the service binary.

use crate::errors::PressroomError;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `directives` follows the usual env-filter syntax (e.g. `"info"`,
/// `"pressroom=debug,info"`). `RUST_LOG` takes precedence when set.
pub fn init_tracing(directives: &str) -> Result<(), PressroomError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .map_err(|e| PressroomError::config(format!("invalid log filter: {e}")))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PressroomError::config(format!("tracing already initialized: {e}")))?;

    Ok(())
}
