use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_PROVIDER_ENDPOINT: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

pub fn default_user_agent() -> String {
    format!("whois-proxy/{}", env!("CARGO_PKG_VERSION"))
}

/// Performs one GET against the provider and hands back the parsed body.
///
/// Implementations make a single attempt. The lookup deadline is enforced by
/// the caller, which drops the returned future when it expires.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for std::sync::Arc<F> {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        (**self).fetch_json(url).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn provider_endpoint(&self) -> &str;
    fn user_agent(&self) -> String;
    fn request_timeout(&self) -> Duration;
}
