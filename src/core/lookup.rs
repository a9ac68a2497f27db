use crate::core::registry::provider_error;
use crate::core::summary::{summarize_contacts, summarize_domain};
use crate::domain::model::{LookupData, LookupKind, LookupRequest, ResultEnvelope, ValidatedLookup};
use crate::domain::ports::{ConfigProvider, Fetcher};
use crate::utils::error::{FetchError, LookupError, Result};
use std::time::Duration;
use url::Url;

const PROVIDER_ERROR_FALLBACK: &str = "WHOIS API error";
const OUTPUT_FORMAT: &str = "JSON";

/// Validates a lookup, queries the provider once and shapes the answer.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent lookups.
pub struct LookupService<F: Fetcher> {
    fetcher: F,
    endpoint: String,
    timeout: Duration,
}

impl<F: Fetcher> LookupService<F> {
    pub fn new(fetcher: F, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider>(fetcher: F, config: &C) -> Self {
        Self::new(fetcher, config.provider_endpoint(), config.request_timeout())
    }

    pub async fn lookup(&self, request: LookupRequest) -> Result<ResultEnvelope> {
        let lookup = match validate(&request) {
            Ok(lookup) => lookup,
            Err(e) => {
                tracing::warn!("❌ Rejected lookup request: {}", e);
                return Err(e);
            }
        };

        let url = build_provider_url(&self.endpoint, &lookup)?;
        tracing::info!(
            "🔍 Looking up {} ({}) via {}",
            lookup.domain,
            lookup.kind,
            redact_api_key(&url)
        );

        // Dropping the fetch future on expiry tears down the in-flight connection.
        let payload = tokio::time::timeout(self.timeout, self.fetcher.fetch_json(url.as_str()))
            .await
            .map_err(|_| FetchError::Timeout)
            .and_then(|fetched| fetched)
            .map_err(|e| {
                tracing::error!("❌ Provider request for {} failed: {}", lookup.domain, e);
                LookupError::Fetch(e)
            })?;

        if let Some(message) = provider_error(&payload) {
            let message = message.unwrap_or(PROVIDER_ERROR_FALLBACK).to_string();
            tracing::warn!("Provider reported an error for {}: {}", lookup.domain, message);
            return Err(LookupError::Provider { message });
        }

        let data = match lookup.kind {
            LookupKind::Domain => LookupData::Domain(summarize_domain(&payload)),
            LookupKind::Contact => LookupData::Contact(summarize_contacts(&payload)),
        };

        tracing::info!("✅ Lookup for {} completed", lookup.domain);
        Ok(ResultEnvelope {
            success: true,
            kind: lookup.kind,
            domain: lookup.domain,
            data,
        })
    }
}

/// Checks presence first and only then the kind, so a request missing any
/// field always reports missing parameters.
pub fn validate(request: &LookupRequest) -> Result<ValidatedLookup> {
    let domain = present(&request.domain);
    let kind = present(&request.kind);
    let api_key = present(&request.api_key);

    let (Some(domain), Some(kind), Some(api_key)) = (domain, kind, api_key) else {
        return Err(LookupError::MissingParameters);
    };

    Ok(ValidatedLookup {
        domain: domain.to_string(),
        kind: kind.parse()?,
        api_key: api_key.to_string(),
    })
}

pub fn build_provider_url(endpoint: &str, lookup: &ValidatedLookup) -> Result<Url> {
    Url::parse_with_params(
        endpoint,
        &[
            ("apiKey", lookup.api_key.as_str()),
            ("domainName", lookup.domain.as_str()),
            ("outputFormat", OUTPUT_FORMAT),
        ],
    )
    .map_err(|e| LookupError::ConfigError {
        message: format!("Invalid provider endpoint '{}': {}", endpoint, e),
    })
}

/// Renders the provider URL for logs with the credential masked.
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "apiKey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
