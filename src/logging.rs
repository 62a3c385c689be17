use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming a log file; wins over the config file.
pub const LOG_ENV: &str = "TILEDIT_LOG";

/// Picks the log file: explicit CLI path, then `TILEDIT_LOG`, then config.
pub fn log_path(cli: Option<&Path>, config: &LoggingConfig) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV).map(PathBuf::from))
        .or_else(|| config.file.as_ref().map(PathBuf::from))
}

/// Initialize tracing with file output.
///
/// Logging is disabled unless a path is given: the terminal belongs to the
/// editor and must not receive log lines. `RUST_LOG` overrides the
/// configured level.
pub fn init_tracing(path: Option<&Path>, config: &LoggingConfig) {
    let Some(path) = path else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Tests touching `TILEDIT_LOG` run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_config_file() -> LoggingConfig {
        LoggingConfig {
            file: Some("from-config.log".to_string()),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn cli_path_wins() {
        let _guard = ENV_LOCK.lock();
        std::env::set_var(LOG_ENV, "from-env.log");

        let path = log_path(Some(Path::new("cli.log")), &with_config_file());

        std::env::remove_var(LOG_ENV);
        assert_eq!(path, Some(PathBuf::from("cli.log")));
    }

    #[test]
    fn env_beats_config_file() {
        let _guard = ENV_LOCK.lock();
        std::env::set_var(LOG_ENV, "from-env.log");

        let path = log_path(None, &with_config_file());

        std::env::remove_var(LOG_ENV);
        assert_eq!(path, Some(PathBuf::from("from-env.log")));
    }

    #[test]
    fn config_file_used_alone() {
        let _guard = ENV_LOCK.lock();
        std::env::remove_var(LOG_ENV);

        let path = log_path(None, &with_config_file());
        assert_eq!(path, Some(PathBuf::from("from-config.log")));
    }

    #[test]
    fn no_source_disables_logging() {
        let _guard = ENV_LOCK.lock();
        std::env::remove_var(LOG_ENV);

        assert_eq!(log_path(None, &LoggingConfig::default()), None);
    }
}
