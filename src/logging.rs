use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

// kiss3d's GL plumbing is noisy at info
pub const DEFAULT_FILTER: &str = "info,kiss3d=warn";

pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Calling this more than once is harmless; only the first call wins.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter());

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = format!("{}", default_env_filter());
        assert!(filter.contains("info"));
        assert!(filter.contains("kiss3d=warn"));
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
        tracing::info!("still here");
    }
}
