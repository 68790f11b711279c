use config::{Config as ConfigBuilder, ConfigError, Environment as EnvSource, File};
use meditrace_contact::{ContactConfig, ErrorVerbosity};
use serde::Deserialize;
use std::{env, str::FromStr};
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Deployment environment. Only `development` exposes raw provider errors.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn error_verbosity(self) -> ErrorVerbosity {
        match self {
            Environment::Development => ErrorVerbosity::Detailed,
            Environment::Production => ErrorVerbosity::Generic,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `json` or `pretty`; follows the environment when unset.
    #[serde(default)]
    pub log_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `RESEND_API_KEY`, `ENVIRONMENT` / `APP_ENV`
    /// 2. Environment variables (MEDITRACE__CONTACT__ENDPOINT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("environment", "production")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            EnvSource::with_prefix("MEDITRACE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("contact.api_key", api_key)?;
        }
        if let Ok(environment) = env::var("ENVIRONMENT").or_else(|_| env::var("APP_ENV")) {
            // anything other than development (staging, test, ...) runs as production
            let environment = Environment::from_str(&environment).unwrap_or_default();
            builder = builder.set_override("environment", environment.as_ref())?;
        }

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.contact.verbosity = config.environment.error_verbosity();

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.timeout_secs == 0 {
            return Err("Contact timeout_secs must be at least 1".to_string());
        }
        if self.contact.endpoint.is_empty() {
            return Err("Contact endpoint must not be empty".to_string());
        }
        Ok(())
    }
}
