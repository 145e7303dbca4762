//! Tracing subscriber setup.

use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

/// Initialize logging to stderr.
///
/// Defaults to INFO; `RUST_LOG` overrides the filter. `json` switches to newline-delimited
/// JSON output for log aggregation.
pub fn init_logging(json: bool) -> eyre::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let layer: Box<dyn Layer<Registry> + Send + Sync> = if json {
        fmt::layer().json().with_writer(std::io::stderr).with_filter(filter).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).with_filter(filter).boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_returns_error() {
        // a global subscriber can only be installed once per process
        let _ = init_logging(false);
        assert!(init_logging(true).is_err());
    }
}
