//! Logging setup.
//!
//! Logs go to stderr so stdout stays free for reports.
//!
//! ## Environment Variables
//!
//! 1. **`UVTT2FGU_LOG`** (highest priority) - level for this crate, or a full filter
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` (or `debug` when verbose) for this crate

use std::env;
use tracing_subscriber::EnvFilter;

/// Initialize logging.
///
/// Safe to call multiple times -- later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(create_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Priority: `UVTT2FGU_LOG` > `RUST_LOG` > defaults
fn create_filter(verbose: bool) -> EnvFilter {
    if let Ok(level) = env::var("UVTT2FGU_LOG") {
        return expand_level(&level);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    expand_level(if verbose { "debug" } else { "info" })
}

/// `debug` becomes `warn,uvtt_fgu=debug,uvtt2fgu=debug`; anything with
/// directive syntax is used as-is
fn expand_level(level: &str) -> EnvFilter {
    if level.contains('=') || level.contains(',') {
        return EnvFilter::new(level);
    }
    EnvFilter::new(format!("warn,uvtt_fgu={level},uvtt2fgu={level}"))
}
