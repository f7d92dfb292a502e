/// Player configuration
use crate::error::{CliError, Result};
use podplayer_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "podplayer.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Simulated playback seconds per session tick
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: f64,

    /// Wall-clock pause between ticks (0 runs as fast as possible)
    #[serde(default)]
    pub tick_delay_ms: u64,

    /// Upper bound on ticks, so looping sessions terminate
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Initial store flags
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Settings {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `podplayer.toml` is read when
    /// present. `PODPLAYER_*` variables override both (`__` separates nested
    /// keys, e.g. `PODPLAYER_PLAYBACK__LOOPING=true`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PODPLAYER")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let settings: Self = config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.tick_seconds.is_finite() || self.tick_seconds <= 0.0 {
            return Err(CliError::Config(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }

        if self.max_ticks == 0 {
            return Err(CliError::Config("max_ticks must be at least 1".to_string()));
        }

        Ok(())
    }
}

// Default values
fn default_log_filter() -> String {
    "podplayer=info".to_string()
}

fn default_tick_seconds() -> f64 {
    1.0
}

fn default_max_ticks() -> u64 {
    100_000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            tick_seconds: default_tick_seconds(),
            tick_delay_ms: 0,
            max_ticks: default_max_ticks(),
            playback: PlaybackConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_seconds, 1.0);
        assert_eq!(settings.max_ticks, 100_000);
        assert!(!settings.playback.looping);
        // One prefix directive covers every podplayer crate
        assert_eq!(settings.log_filter, "podplayer=info");
    }

    #[test]
    fn rejects_non_positive_tick() {
        let settings = Settings {
            tick_seconds: 0.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(CliError::Config(_))));

        let settings = Settings {
            tick_seconds: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_ticks() {
        let settings = Settings {
            max_ticks: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
