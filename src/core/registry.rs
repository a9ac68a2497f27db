//! Field resolution over the provider's `WhoisRecord` payload.
//!
//! Providers do not always nest registration facts under
//! `WhoisRecord.registryData`; some responses flatten them onto
//! `WhoisRecord` itself. [`resolve_registry`] picks the section in that order
//! and [`RegistryView`] reads fields from it with the provider's "empty means
//! absent" semantics.

use serde_json::Value;

pub const WHOIS_RECORD_KEY: &str = "WhoisRecord";
pub const REGISTRY_DATA_KEY: &str = "registryData";
pub const PROVIDER_ERROR_KEY: &str = "ErrorMessage";

/// Contact roles as keyed under `contacts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Registrant,
    Administrative,
    Technical,
}

impl ContactRole {
    pub fn key(&self) -> &'static str {
        match self {
            ContactRole::Registrant => "registrant",
            ContactRole::Administrative => "admin",
            ContactRole::Technical => "technical",
        }
    }
}

/// Returns `WhoisRecord.registryData` when present, else `WhoisRecord`.
pub fn resolve_registry(payload: &Value) -> Option<&Value> {
    let record = present(payload.get(WHOIS_RECORD_KEY))?;
    present(record.get(REGISTRY_DATA_KEY)).or(Some(record))
}

/// Borrowed view over the resolved registry section. A missing section
/// behaves like an empty one.
#[derive(Debug, Clone, Copy)]
pub struct RegistryView<'a> {
    section: Option<&'a Value>,
}

impl<'a> RegistryView<'a> {
    pub fn new(payload: &'a Value) -> Self {
        Self {
            section: resolve_registry(payload),
        }
    }

    pub fn text(&self, key: &str) -> Option<&'a str> {
        non_empty_str(self.section?.get(key))
    }

    pub fn host_names(&self) -> Vec<&'a str> {
        self.section
            .and_then(|s| s.get("nameServers"))
            .and_then(|ns| ns.get("hostNames"))
            .and_then(Value::as_array)
            .map(|hosts| hosts.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contact_field(&self, role: ContactRole, field: &str) -> Option<&'a str> {
        let contact = self.section?.get("contacts")?.get(role.key())?;
        non_empty_str(contact.get(field))
    }
}

/// Extracts the provider's own error report, if the payload carries one.
///
/// `Some(None)` means an error object was present without a usable message.
pub fn provider_error(payload: &Value) -> Option<Option<&str>> {
    let error = present(payload.get(PROVIDER_ERROR_KEY))?;
    Some(non_empty_str(error.get("msg")))
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
