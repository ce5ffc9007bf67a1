use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostic logging.
///
/// Log level comes from `RUST_LOG`; without it only warnings are shown,
/// so regular runs print nothing but the tools' own status lines.
/// Diagnostics always go to stderr, keeping stdout free for output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
