//! `env_logger` setup for the viewer binaries. Library code only talks to
//! the `log` facade.

use std::sync::Once;

/// Used when neither `--log` nor `RUST_LOG` is set. wgpu and naga are
/// verbose at `info`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directive string, e.g. `"turntable_engine=debug"`.
    pub filter: Option<String>,
    pub style:  env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, style: env_logger::WriteStyle::Auto }
    }
}

impl LoggingConfig {
    /// `None` defers to `RUST_LOG`, then to [`DEFAULT_FILTER`].
    pub fn with_filter(filter: Option<String>) -> Self {
        Self { filter, ..Self::default() }
    }

    fn directives(&self) -> String {
        [self.filter.clone(), std::env::var("RUST_LOG").ok()]
            .into_iter()
            .flatten()
            .find(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let directives = config.directives();
        let installed = env_logger::Builder::new()
            .parse_filters(&directives)
            .write_style(config.style)
            .format_timestamp_millis()
            .try_init();

        // A test harness may have installed its own logger already.
        if installed.is_ok() {
            log::debug!("log filter: {directives}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig::with_filter(Some("debug".into()));
        assert_eq!(cfg.directives(), "debug");
    }

    #[test]
    fn blank_filter_is_skipped() {
        let cfg = LoggingConfig::with_filter(Some("  ".into()));
        assert!(!cfg.directives().trim().is_empty());
    }
}
