use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use macrofit_core::{ActivityLevel, Goal, Sex};

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking.
///
/// Profile fields act as defaults for the matching CLI flags; any that
/// are unset must be supplied on the command line. The goal alone has a
/// built-in default (maintenance).
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<ConfigValue<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<ConfigValue<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<ConfigValue<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<ConfigValue<Sex>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ConfigValue<ActivityLevel>>,
    pub goal: ConfigValue<Goal>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    sex: Option<String>,
    activity_level: Option<String>,
    goal: Option<String>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut weight_kg = None;
        let mut height_cm = None;
        let mut age = None;
        let mut sex = None;
        let mut activity_level = None;
        let mut goal = ConfigValue::new(Goal::Maintenance, ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path);

            if let Some(w) = file_config.weight_kg {
                weight_kg = Some(ConfigValue::new(w, ConfigSource::File));
            }
            if let Some(h) = file_config.height_cm {
                height_cm = Some(ConfigValue::new(h, ConfigSource::File));
            }
            if let Some(a) = file_config.age {
                age = Some(ConfigValue::new(a, ConfigSource::File));
            }
            if let Some(s) = file_config.sex {
                sex = Some(ConfigValue::new(
                    parse_field("sex", &s)?,
                    ConfigSource::File,
                ));
            }
            if let Some(level) = file_config.activity_level {
                activity_level = Some(ConfigValue::new(
                    parse_field("activity_level", &level)?,
                    ConfigSource::File,
                ));
            }
            if let Some(g) = file_config.goal {
                goal = ConfigValue::new(parse_field("goal", &g)?, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(w) = std::env::var("MACROFIT_WEIGHT_KG") {
            weight_kg = Some(ConfigValue::new(
                parse_field("MACROFIT_WEIGHT_KG", &w)?,
                ConfigSource::Environment,
            ));
        }
        if let Ok(h) = std::env::var("MACROFIT_HEIGHT_CM") {
            height_cm = Some(ConfigValue::new(
                parse_field("MACROFIT_HEIGHT_CM", &h)?,
                ConfigSource::Environment,
            ));
        }
        if let Ok(a) = std::env::var("MACROFIT_AGE") {
            age = Some(ConfigValue::new(
                parse_field("MACROFIT_AGE", &a)?,
                ConfigSource::Environment,
            ));
        }
        if let Ok(s) = std::env::var("MACROFIT_SEX") {
            sex = Some(ConfigValue::new(
                parse_field("MACROFIT_SEX", &s)?,
                ConfigSource::Environment,
            ));
        }
        if let Ok(level) = std::env::var("MACROFIT_ACTIVITY_LEVEL") {
            activity_level = Some(ConfigValue::new(
                parse_field("MACROFIT_ACTIVITY_LEVEL", &level)?,
                ConfigSource::Environment,
            ));
        }
        if let Ok(g) = std::env::var("MACROFIT_GOAL") {
            goal = ConfigValue::new(parse_field("MACROFIT_GOAL", &g)?, ConfigSource::Environment);
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age,
            sex,
            activity_level,
            goal,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/macrofit/
    /// - macOS: ~/Library/Application Support/macrofit/
    /// - Windows: %APPDATA%/macrofit/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("macrofit")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

fn parse_field<T>(field: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: field.to_string(),
        message: e.to_string(),
    })
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue { field: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
