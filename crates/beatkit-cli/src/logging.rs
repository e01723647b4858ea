//! Log setup for the command-line front end.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter that overrides `-v`.
pub const LOG_ENV: &str = "BEATKIT_LOG";

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter: `BEATKIT_LOG` if set and valid, otherwise the level
/// implied by `verbose`.
pub fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install a stderr subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
