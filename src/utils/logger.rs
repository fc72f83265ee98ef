use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `RUST_LOG` wins over everything else,
/// then `--verbose`, then the configured filter.
pub fn init(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("pairtime=debug")
        } else {
            EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("pairtime=warn"))
        }
    });

    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
