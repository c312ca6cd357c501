//! Diagnostic logging to stderr.
//!
//! Reports go to stdout; everything emitted through `tracing` goes to stderr
//! so piping a report never mixes in diagnostics.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or
/// everything down to `debug` for this crate with `verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "warn,i18n_sweep=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second call (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .try_init();
}
