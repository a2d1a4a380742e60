use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialsift_core::{CoreError, CountryRule, DEFAULT_CHAT_SELECTORS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialsift";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub country: CountryRule,
    pub chat_selectors: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            country: CountryRule::default(),
            chat_selectors: DEFAULT_CHAT_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid country rule: {0}")]
    InvalidCountry(#[source] CoreError),
    #[error("invalid chat selector: {0:?}")]
    InvalidSelector(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    country: Option<CountryFile>,
    chat_selectors: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountryFile {
    dial_code: Option<String>,
    trunk_prefix: Option<char>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(country) = parsed.country {
        let dial_code = country
            .dial_code
            .unwrap_or_else(|| config.country.dial_code.clone());
        let trunk_prefix = country.trunk_prefix.unwrap_or(config.country.trunk_prefix);
        config.country =
            CountryRule::new(dial_code, trunk_prefix).map_err(ConfigError::InvalidCountry)?;
    }

    if let Some(selectors) = parsed.chat_selectors {
        for selector in &selectors {
            if selector.trim().is_empty() {
                return Err(ConfigError::InvalidSelector(selector.clone()));
            }
        }
        config.chat_selectors = selectors;
    }

    Ok(config)
}
