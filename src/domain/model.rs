use crate::utils::error::LookupError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inbound lookup request exactly as the client sent it.
///
/// Every field is optional and accepts any JSON scalar, so that a missing
/// or mistyped field is reported as a validation error rather than a
/// decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub domain: Option<String>,
    #[serde(
        rename = "type",
        alias = "kind",
        default,
        deserialize_with = "lenient_string"
    )]
    pub kind: Option<String>,
    #[serde(
        rename = "apiKey",
        alias = "credential",
        default,
        deserialize_with = "lenient_string"
    )]
    pub api_key: Option<String>,
}

/// `null` reads as absent; non-string values keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl LookupRequest {
    pub fn new(domain: &str, kind: &str, api_key: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            kind: Some(kind.to_string()),
            api_key: Some(api_key.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Domain,
    Contact,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Domain => "domain",
            LookupKind::Contact => "contact",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domain" => Ok(LookupKind::Domain),
            "contact" => Ok(LookupKind::Contact),
            other => Err(LookupError::InvalidKind {
                value: other.to_string(),
            }),
        }
    }
}

/// A request that passed validation; only this form may reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLookup {
    pub domain: String,
    pub kind: LookupKind,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    pub domain_name: String,
    pub registrar: String,
    pub registration_date: String,
    pub expiration_date: String,
    pub estimated_domain_age: String,
    pub hostnames: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    pub registrant_name: String,
    pub technical_contact_name: String,
    pub administrative_contact_name: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupData {
    Domain(DomainSummary),
    Contact(ContactSummary),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: LookupKind,
    pub domain: String,
    pub data: LookupData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "error")]
    pub message: String,
}

impl From<&LookupError> for ErrorEnvelope {
    fn from(err: &LookupError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn now() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}
