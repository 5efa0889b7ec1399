use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use anyhow::{bail, Context, Result};

use crate::logging::Level;
use crate::text::MAX_TAG_LENGTH;

pub const DEFAULT_CONFIG_FILE: &str = "taglog.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Treat the build as debuggable without consulting signer subjects
    pub debuggable: bool,
    /// Threshold for tags without their own entry
    pub default_level: Level,
    /// Per-tag thresholds
    pub tags: BTreeMap<String, Level>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            debuggable: false,
            default_level: Level::Info,
            tags: BTreeMap::new(),
        }
    }
}

impl LogSettings {
    pub fn threshold(&self, tag: &str) -> Level {
        self.tags.get(tag).copied().unwrap_or(self.default_level)
    }

    pub fn validate(&self) -> Result<()> {
        for tag in self.tags.keys() {
            let length = tag.chars().count();
            if length > MAX_TAG_LENGTH {
                bail!("tag {:?} is {} characters, maximum is {}", tag, length, MAX_TAG_LENGTH);
            }
        }
        Ok(())
    }
}

impl Settings {
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config {:?}", config_path))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {:?}", config_path))?;
        settings.logging.validate()?;
        tracing::debug!("Loaded config from {:?}", config_path);
        Ok(settings)
    }

    pub fn load_or_default(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if Path::new(config_file).exists() {
            Self::load(config_file)
        } else {
            tracing::debug!("No config at {}, using defaults", config_file);
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path.as_ref(), content)?;
        tracing::info!("Wrote config to {:?}", config_path.as_ref());
        Ok(())
    }
}
