use crate::core::ConfigProvider;
use crate::domain::ports::{default_user_agent, DEFAULT_PROVIDER_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PROVIDER_ENDPOINT.to_string(),
            user_agent: default_user_agent(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            json_logs: false,
        }
    }
}

impl ProxyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML document after expanding `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Loads `WHOIS_PROXY_CONFIG` when set, then applies the `PORT` override.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("WHOIS_PROXY_CONFIG") {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().map_err(|_| LookupError::InvalidConfigValueError {
                field: "PORT".to_string(),
                value: port.clone(),
                reason: "Port must be a number between 0 and 65535".to_string(),
            })?;
        }

        Ok(config)
    }

    // Unset variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LookupError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ConfigProvider for ProxyConfig {
    fn provider_endpoint(&self) -> &str {
        &self.provider.endpoint
    }

    fn user_agent(&self) -> String {
        self.provider.user_agent.clone()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.timeout_seconds)
    }
}

impl Validate for ProxyConfig {
    fn validate(&self) -> Result<()> {
        validate_url("provider.endpoint", &self.provider.endpoint)?;
        validate_non_empty_string("provider.user_agent", &self.provider.user_agent)?;
        validate_range(
            "provider.timeout_seconds",
            self.provider.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_non_empty_string("server.host", &self.server.host)?;

        tracing::debug!("✅ Proxy configuration validation passed");
        Ok(())
    }
}
