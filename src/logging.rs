//! tracing setup.
//!
//! The terminal is owned by the UI, so logs only ever go to a file.

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber if a log file is configured.
///
/// Returns `Ok(false)` when logging is disabled. `RUST_LOG` takes
/// precedence over `config.level`.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_file() {
        let config = LoggingConfig::default();
        assert!(!init_tracing(&config).unwrap());
    }
}
