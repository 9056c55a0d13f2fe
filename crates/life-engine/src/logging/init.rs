use std::sync::Once;

/// Filter applied when neither the config nor `RUST_LOG` provides one.
///
/// wgpu is chatty at `info`; keep it to warnings so per-generation output
/// stays readable.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "life_engine=debug,wgpu=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Explicit filter; takes precedence over `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    fn resolve_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter();

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .init();

        log::debug!("logging initialized ({filter})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig::with_filter("trace");
        assert_eq!(cfg.resolve_filter(), "trace");
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::with_filter("warn"));
        init_logging(LoggingConfig::with_filter("trace"));
        log::warn!("still one logger");
    }
}
