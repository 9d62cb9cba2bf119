//! Persistent formatting preferences.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, LocaleConfig, NegativeStyle};
use crate::errors::ConfigError;
use crate::frequency::Frequency;

const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "budget_utils";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "BUDGET_UTILS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub negative_style: NegativeStyle,
    #[serde(default = "Config::default_percentage_precision")]
    pub percentage_precision: u8,
    #[serde(default)]
    pub default_frequency: Frequency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
            negative_style: NegativeStyle::default(),
            percentage_precision: Self::default_percentage_precision(),
            default_frequency: Frequency::default(),
        }
    }
}

impl Config {
    pub fn default_percentage_precision() -> u8 {
        1
    }
}

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// `$BUDGET_UTILS_CONFIG` when set, otherwise the platform config directory.
    pub fn default_location() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Self::new(PathBuf::from(path));
        }
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Missing files yield [`Config::default`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        tracing::info!(path = %self.config_path.display(), "saved config");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/tmp/config.json")),
            PathBuf::from("/tmp/config.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("settings")), PathBuf::from("settings.tmp"));
    }

    #[test]
    fn partial_json_takes_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "currency": "EUR", "percentage_precision": 2 }"#)
                .expect("valid config");
        assert_eq!(config.currency.as_str(), "EUR");
        assert_eq!(config.percentage_precision, 2);
        assert_eq!(config.locale, LocaleConfig::default());
        assert_eq!(config.default_frequency, Frequency::Monthly);
    }
}
