/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rustysound_lifetime=debug"));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("[logging] subscriber already installed: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    dioxus::logger::init(tracing::Level::INFO).ok();
}
