use crate::domain::ports::Fetcher;
use crate::utils::error::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;

/// Provider fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(user_agent)
            .map_err(|e| FetchError::Transport(format!("Invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("Provider response status: {}", response.status());

        // The whole body is buffered before parsing; the provider reports
        // errors in-body, so the status code is not interpreted here.
        let body = response.bytes().await?;
        tracing::debug!("Provider response body: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Provider body is not valid JSON: {}", e);
            FetchError::InvalidResponse
        })
    }
}
