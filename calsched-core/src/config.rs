//! Calendar defaults loaded from `~/.config/calsched/config.toml`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CalSchedError, CalSchedResult};

/// Name and time zone a new calendar starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IANA zone id, e.g. `Europe/Paris`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl CalendarConfig {
    pub fn config_path() -> CalSchedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalSchedError::Config("Could not determine config directory".into()))?
            .join("calsched");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if there is no file.
    pub fn load() -> CalSchedResult<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            Self::from_file(&path)
        } else {
            tracing::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> CalSchedResult<Self> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    pub fn save(&self, path: &Path) -> CalSchedResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalSchedError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalSchedError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalSchedError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    fn validate(&self) -> CalSchedResult<()> {
        if let Some(timezone) = &self.timezone {
            timezone
                .parse::<Tz>()
                .map_err(|_| CalSchedError::InvalidTimezone(timezone.clone()))?;
        }
        Ok(())
    }
}

impl FromStr for CalendarConfig {
    type Err = CalSchedError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: CalendarConfig =
            toml::from_str(content).map_err(|e| CalSchedError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
