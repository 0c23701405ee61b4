//! Logging setup for host shells.
//!
//! The library itself only emits `tracing` events (and `log` records from
//! the config loader). A shell that wants to see them calls
//! [`init_tracing`] once at startup.
//!
//! ## Usage
//!
//! ```ignore
//! use activation_roi::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing();
//!     // ... build the engine and serve the calculator
//! }
//! ```
//!
//! Verbosity comes from `ACTIVATION_ROI_LOG` using `EnvFilter` syntax,
//! e.g. `ACTIVATION_ROI_LOG=activation_roi=debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "ACTIVATION_ROI_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Build the filter from `ACTIVATION_ROI_LOG`, defaulting to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a stderr fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        // The first call may race with other tests; the second must report "already set"
        init_tracing();
        assert!(!init_tracing());
    }
}
