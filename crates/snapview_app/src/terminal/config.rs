use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snapview_core::PreviewConfig;
use snapview_logging::LogDestination;
use thiserror::Error;

const CONFIG_FILENAME: &str = "snapview.ron";
const CONFIG_ENV: &str = "SNAPVIEW_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct PersistedConfig {
    demo_domain: String,
    demo_fallback: bool,
    load_delay_ms: u64,
    toast_duration_ms: u64,
    desktop_canvas_width: u32,
    mock_asset: String,
    log: LogTarget,
}

impl Default for PersistedConfig {
    fn default() -> Self {
        let preview = PreviewConfig::default();
        Self {
            demo_domain: preview.demo_domain,
            demo_fallback: preview.demo_fallback,
            load_delay_ms: duration_ms(preview.load_delay),
            toast_duration_ms: duration_ms(preview.toast_duration),
            desktop_canvas_width: preview.desktop_canvas_width,
            mock_asset: preview.mock_asset,
            log: LogTarget::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub preview: PreviewConfig,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview: PreviewConfig::default(),
            log_destination: LogDestination::File,
        }
    }
}

/// `$SNAPVIEW_CONFIG`, or `./snapview.ron`.
pub(crate) fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Loads the config file. A missing file yields the defaults.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let persisted: PersistedConfig =
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate(persisted)
}

fn validate(persisted: PersistedConfig) -> Result<AppConfig, ConfigError> {
    let demo_domain = persisted.demo_domain.trim().to_string();
    if demo_domain.is_empty() {
        return Err(ConfigError::Invalid {
            field: "demo_domain",
            reason: "must not be empty".to_string(),
        });
    }
    if persisted.load_delay_ms == 0 {
        return Err(ConfigError::Invalid {
            field: "load_delay_ms",
            reason: "must be greater than zero".to_string(),
        });
    }
    if persisted.toast_duration_ms == 0 {
        return Err(ConfigError::Invalid {
            field: "toast_duration_ms",
            reason: "must be greater than zero".to_string(),
        });
    }
    if persisted.desktop_canvas_width == 0 {
        return Err(ConfigError::Invalid {
            field: "desktop_canvas_width",
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        preview: PreviewConfig {
            demo_domain,
            demo_fallback: persisted.demo_fallback,
            load_delay: Duration::from_millis(persisted.load_delay_ms),
            toast_duration: Duration::from_millis(persisted.toast_duration_ms),
            desktop_canvas_width: persisted.desktop_canvas_width,
            mock_asset: persisted.mock_asset,
        },
        log_destination: persisted.log.into(),
    })
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
