use crate::error::{HabitzError, Result};
use crate::filter::FilterMode;
use crate::storage::validate_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "habits";

/// Configuration for habitz, stored in `{data_dir}/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitzConfig {
    /// Key the habit collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Filter applied when a tracker is opened
    #[serde(default)]
    pub default_filter: FilterMode,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for HabitzConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_filter: FilterMode::All,
        }
    }
}

impl HabitzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HabitzError::Io)?;
        let config: HabitzConfig =
            serde_json::from_str(&content).map_err(HabitzError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()?;
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HabitzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HabitzError::Serialization)?;
        fs::write(config_path, content).map_err(HabitzError::Io)?;
        Ok(())
    }

    /// The storage key must be one [`FileStorage`] accepts and must not
    /// collide with the config file itself.
    ///
    /// [`FileStorage`]: crate::storage::fs::FileStorage
    fn validate(&self) -> Result<()> {
        if validate_key(&self.storage_key).is_err() {
            return Err(HabitzError::Config(format!(
                "storage_key {:?} must be non-empty ASCII letters, digits, `-` or `_`",
                self.storage_key
            )));
        }
        if self.storage_key == "config" {
            return Err(HabitzError::Config(
                "storage_key `config` is reserved".to_string(),
            ));
        }
        Ok(())
    }
}
