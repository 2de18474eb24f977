use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for the CLI.
///
/// Filter comes from `RUST_LOG` (e.g. `RUST_LOG=menu_cost_rs=debug`), defaulting
/// to `default_level`. Logs go to stderr so tables on stdout stay clean.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
