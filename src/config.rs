use std::{collections::HashMap, env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::ContactFormConfig;
use folio_notification::EmailConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings used when driving the contact form from the command line.
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    #[serde(default = "folio_notification::default_contact_address")]
    pub direct_email: String,
    #[serde(default = "default_status_timeout_secs")]
    pub status_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            direct_email: folio_notification::default_contact_address(),
            status_timeout_secs: default_status_timeout_secs(),
        }
    }
}

impl From<&ContactConfig> for ContactFormConfig {
    fn from(value: &ContactConfig) -> Self {
        Self {
            endpoint: value.endpoint.to_owned(),
            direct_email: value.direct_email.to_owned(),
            status_timeout: Duration::from_secs(value.status_timeout_secs),
        }
    }
}

fn default_contact_endpoint() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_status_timeout_secs() -> u64 {
    6
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
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
    /// 1. Legacy variables (EMAIL_USER, EMAIL_PASS, EMAIL_TO)
    /// 2. Environment variables (FOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_from(config_path, env::vars().collect())
    }

    /// Same as [`Config::load`], reading variables from `vars` instead of the
    /// process environment.
    pub fn load_from(
        config_path: Option<String>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (var, key) in [
            ("EMAIL_USER", "email.smtp_username"),
            ("EMAIL_PASS", "email.smtp_password"),
            ("EMAIL_TO", "email.contact_address"),
        ] {
            if let Some(value) = vars.get(var) {
                builder = builder.set_override(key, value.to_owned())?;
            }
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.contact_address.trim().is_empty() {
            return Err("Email contact_address must not be empty".to_string());
        }
        Ok(())
    }
}
