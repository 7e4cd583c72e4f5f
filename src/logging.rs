//! # Logging
//!
//! Diagnostic logging to stderr via `tracing`. User-facing progress goes
//! through [`crate::ui`] instead; these events are for debugging a run.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects debug-level events
/// from this crate, and only warnings are shown by default. Calling this
/// more than once is harmless.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "postkit=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
