use crate::core::registry::{ContactRole, RegistryView};
use crate::domain::model::{ContactSummary, DomainSummary};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

pub const UNKNOWN: &str = "Unknown";
pub const NONE: &str = "None";
pub const NOT_AVAILABLE: &str = "Not Available";

const HOSTNAMES_MAX_CHARS: usize = 25;
const HOSTNAMES_KEEP_CHARS: usize = 22;
const ELLIPSIS: &str = "...";

pub fn summarize_domain(payload: &Value) -> DomainSummary {
    summarize_domain_at(payload, Utc::now())
}

/// Builds the domain facts with `now` as the reference instant for the age.
pub fn summarize_domain_at(payload: &Value, now: DateTime<Utc>) -> DomainSummary {
    let registry = RegistryView::new(payload);
    let created = registry.text("createdDate");

    let estimated_domain_age = created
        .and_then(parse_provider_date)
        .and_then(|created| estimate_age(created, now))
        .unwrap_or_else(|| UNKNOWN.to_string());

    DomainSummary {
        domain_name: or_default(registry.text("domainName"), UNKNOWN),
        registrar: or_default(registry.text("registrarName"), UNKNOWN),
        registration_date: or_default(created, UNKNOWN),
        expiration_date: or_default(registry.text("expiresDate"), UNKNOWN),
        estimated_domain_age,
        hostnames: format_hostnames(&registry.host_names()),
    }
}

pub fn summarize_contacts(payload: &Value) -> ContactSummary {
    let registry = RegistryView::new(payload);
    let name = |role| or_default(registry.contact_field(role, "name"), NOT_AVAILABLE);

    let contact_email = [
        ContactRole::Registrant,
        ContactRole::Administrative,
        ContactRole::Technical,
    ]
    .into_iter()
    .find_map(|role| registry.contact_field(role, "email"));

    ContactSummary {
        registrant_name: name(ContactRole::Registrant),
        technical_contact_name: name(ContactRole::Technical),
        administrative_contact_name: name(ContactRole::Administrative),
        contact_email: or_default(contact_email, NOT_AVAILABLE),
    }
}

/// Joins host names with ", " and clips the result to 25 characters.
pub fn format_hostnames(hosts: &[&str]) -> String {
    let joined = hosts.join(", ");
    if joined.is_empty() {
        return NONE.to_string();
    }

    if joined.chars().count() > HOSTNAMES_MAX_CHARS {
        let mut clipped: String = joined.chars().take(HOSTNAMES_KEEP_CHARS).collect();
        clipped.push_str(ELLIPSIS);
        clipped
    } else {
        joined
    }
}

/// Whole years plus remainder days, with a year fixed at 365 days.
/// Creation dates in the future have no meaningful age.
pub fn estimate_age(created: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    if created > now {
        return None;
    }
    let days = (now - created).num_days();
    Some(format!("{} years, {} days", days / 365, days % 365))
}

/// Parses the date formats the provider is known to emit.
pub fn parse_provider_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S UTC") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}
