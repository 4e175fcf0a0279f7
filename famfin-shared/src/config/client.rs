use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};
use thiserror::Error;
use url::Url;

#[cfg(not(target_arch = "wasm32"))]
use std::{env, fs, path::Path};

/// REST endpoint used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Durable storage key holding the serialized session.
pub const DEFAULT_STORAGE_KEY: &str = "auth-storage";

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const API_BASE_URL_ENV: &str = "FAMFIN_API_BASE_URL";

/// Environment variable overriding [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "FAMFIN_LOG_LEVEL";

/// Environment variable overriding [`LoggingConfig::format`].
pub const LOG_FORMAT_ENV: &str = "FAMFIN_LOG_FORMAT";

/// Errors raised while loading or validating client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported configuration format `{0}`; use yaml, json or toml")]
    UnsupportedFormat(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("invalid api_base_url `{value}`: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid {name} value `{value}`")]
    InvalidEnv { name: &'static str, value: String },
}

/// Output format for native log lines.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err("unknown log format"),
        }
    }
}

/// Logging settings consumed by the CLI subscriber.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive when `RUST_LOG` is unset.
    pub level: String,
    /// Human-readable or JSON lines.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Configuration handed to the HTTP client factory and the session store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,

    /// Key under which the session is persisted.
    pub storage_key: String,

    /// Logging settings (native binaries only).
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            logging: LoggingConfig::default(),
        }
    }

    /// Configuration baked in at compile time.
    ///
    /// Browser builds cannot read the process environment, so the base URL
    /// is captured from `FAMFIN_API_BASE_URL` when the bundle is built.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("FAMFIN_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            ..Self::with_defaults()
        }
    }

    /// Parse [`Self::api_base_url`] into a URL that can be joined with
    /// relative endpoint paths.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value is not an
    /// absolute `http`/`https` URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: self.api_base_url.clone(),
            reason,
        };

        let mut url = Url::parse(self.api_base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Parse("storage_key must not be empty".to_string()));
        }
        Ok(())
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// Environment variables only fill values the file left at their
    /// defaults; `base_url_override` (a command-line flag) wins over both.
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed, an environment value is
    /// malformed, or the resolved configuration does not validate.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(
        config_path: Option<PathBuf>,
        base_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::with_defaults(),
        };

        config.apply_env_overrides()?;

        if let Some(url) = base_url_override {
            config.api_base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => {
                serde_yml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            Some("toml") => {
                toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let defaults = Self::with_defaults();

        if self.api_base_url == defaults.api_base_url {
            if let Ok(url) = env::var(API_BASE_URL_ENV) {
                self.api_base_url = url;
            }
        }
        if self.logging.level == defaults.logging.level {
            if let Ok(level) = env::var(LOG_LEVEL_ENV) {
                self.logging.level = level;
            }
        }
        if self.logging.format == defaults.logging.format {
            if let Ok(format) = env::var(LOG_FORMAT_ENV) {
                self.logging.format =
                    format.parse().map_err(|_| ConfigError::InvalidEnv {
                        name: LOG_FORMAT_ENV,
                        value: format.clone(),
                    })?;
            }
        }
        Ok(())
    }

    /// Serialize the configuration in `yaml`, `json` or `toml`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for any other format name.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "yaml" | "yml" => {
                serde_yml::to_string(self).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "json" => {
                serde_json::to_string_pretty(self).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "toml" => toml::to_string(self).map_err(|err| ConfigError::Parse(err.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Directory holding the native session file and cookie jar.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn default_state_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("famfin"))
        .unwrap_or_else(|| PathBuf::from("./.famfin"))
}
