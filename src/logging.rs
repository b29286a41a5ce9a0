use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global `tracing` subscriber on stderr. `RUST_LOG` overrides
/// the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();
}
