//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise only warnings are shown, or
//! everything from this crate at debug level with `--verbose`.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "tsling=debug" } else { "warn" }
}

/// Build the filter used by [`init`].
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
