//! # Diagnostic Channel
//!
//! The file logger itself never returns errors to its callers. Whatever goes wrong
//! (an unwritable `LOGLOCATION`, a `PROFILER=maybe`) is reported through `tracing`
//! instead. This module installs the subscriber that makes those reports visible.
//!
//! ## Behaviour
//!
//! - **`init_diagnostics(level)`**: installs a global subscriber writing to `stderr`
//!   with ANSI colours. The filter comes from `RUST_LOG` when set, otherwise
//!   `<level>,boillog=debug`. Guarded by `std::sync::Once`, so repeated calls are no-ops.
//! - Without a subscriber, diagnostics are silently dropped. Delivery is best-effort.
//!
//! ## Usage
//!
//! ```rust,no_run
//! boillog::utils::logging::init_diagnostics("warn").unwrap();
//! ```

use anyhow::{Context, Result};
use std::{io::stderr, sync::Once};
use tracing_subscriber::{EnvFilter, fmt::layer, prelude::*};

static INIT: Once = Once::new();

/// Initialize verbose diagnostics for tests.
pub fn init_test_logging() {
    init_diagnostics("trace").expect("Failed to initialize test logging");
}

/// Default filter directive used when `RUST_LOG` is not set.
pub fn default_directive(level: &str) -> String {
    format!("{level},boillog=debug")
}

/// Installs the global diagnostic subscriber.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive. Nothing is installed
/// in that case and a later call may try again.
pub fn init_diagnostics(level: &str) -> Result<()> {
    let fallback = EnvFilter::try_new(default_directive(level))
        .with_context(|| format!("invalid diagnostic level '{level}'"))?;

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(layer().with_writer(stderr).with_ansi(true))
            .try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_format() {
        assert_eq!(default_directive("info"), "info,boillog=debug");
        assert_eq!(default_directive("warn"), "warn,boillog=debug");
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = init_diagnostics("app=loudest").unwrap_err();
        assert!(err.to_string().contains("app=loudest"));
    }

    #[test]
    fn test_repeated_init_is_ok() {
        init_test_logging();
        assert!(init_diagnostics("info").is_ok());
    }
}
