//! Log output of the runner.
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter for a `-v` count. `RUST_LOG`, when set, takes precedence.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber, logging to stderr so it does not mix with test output.
pub fn init(verbosity: u8) {
    let filter = if std::env::var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_default()
        .is_empty()
    {
        EnvFilter::new(default_filter(verbosity))
    } else {
        EnvFilter::from_default_env()
    };

    // A subscriber may already be installed by an embedding program.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_filter(0), "info");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(5), "trace");
    }
}
