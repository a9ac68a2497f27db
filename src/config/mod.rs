pub mod toml_config;

pub use toml_config::ProxyConfig;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::ports::{default_user_agent, DEFAULT_PROVIDER_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "whois-proxy")]
#[command(about = "Look up a domain through the WHOIS provider and print a summary")]
pub struct CliConfig {
    #[arg(long)]
    pub domain: Option<String>,

    /// Summary to produce: "domain" or "contact"
    #[arg(long = "type", default_value = "domain")]
    pub kind: String,

    #[arg(long, env = "WHOIS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_PROVIDER_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = default_user_agent())]
    pub user_agent: String,

    /// Load provider settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Provider flags overlaid with the file named by `--config`, if any.
    pub fn apply_file(&mut self) -> crate::utils::error::Result<()> {
        if let Some(path) = &self.config {
            let file = ProxyConfig::from_file(path)?;
            self.endpoint = file.provider.endpoint;
            self.user_agent = file.provider.user_agent;
            self.timeout_seconds = file.provider.timeout_seconds;
        }
        Ok(())
    }

    pub fn lookup_request(&self) -> crate::domain::model::LookupRequest {
        crate::domain::model::LookupRequest {
            domain: self.domain.clone(),
            kind: Some(self.kind.clone()),
            api_key: self.api_key.clone(),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn provider_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            1,
            toml_config::MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["whois-proxy", "--domain", "example.com", "--api-key", "k"]);

        assert_eq!(config.kind, "domain");
        assert_eq!(config.provider_endpoint(), DEFAULT_PROVIDER_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());

        let request = config.lookup_request();
        assert_eq!(request.domain.as_deref(), Some("example.com"));
        assert_eq!(request.kind.as_deref(), Some("domain"));
        assert_eq!(request.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_cli_rejects_out_of_range_timeout() {
        let config = CliConfig::parse_from(["whois-proxy", "--timeout-seconds", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_file_overrides_provider_settings() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[provider]\nendpoint = \"http://127.0.0.1:9/whois\"\ntimeout_seconds = 3\n")
            .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let mut config = CliConfig::parse_from(["whois-proxy", "--config", path.as_str()]);
        config.apply_file().unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:9/whois");
        assert_eq!(config.timeout_seconds, 3);
    }
}
