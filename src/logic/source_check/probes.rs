//! Live credibility probes.
//!
//! The transport-security check and the domain-age lookup sit behind traits
//! so the scorer can be tested with deterministic doubles. Both real
//! implementations are fault-tolerant: any network or parse failure yields
//! the conservative "unknown" value and never aborts scoring.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::constants;

/// Transport-security probe.
pub trait TransportProbe: Send + Sync {
    /// True iff the URL resolves over https after redirects.
    fn resolves_https(&self, url: &str) -> bool;
}

/// Domain registration age lookup.
pub trait DomainAgeProvider: Send + Sync {
    /// Whole years since registration, or None when unknown.
    fn domain_age_years(&self, host: &str) -> Option<u32>;
}

// ============================================================================
// HTTPS PROBE
// ============================================================================

/// Real probe: GET with certificate verification and a bounded timeout.
#[derive(Debug, Clone, Default)]
pub struct HttpsProbe;

impl TransportProbe for HttpsProbe {
    fn resolves_https(&self, url: &str) -> bool {
        let response = ureq::get(url)
            .timeout(Duration::from_secs(constants::PROBE_TIMEOUT_SECS))
            .call();

        match response {
            Ok(resp) => resp.get_url().starts_with("https://"),
            // An HTTP error status still proves the transport worked.
            Err(ureq::Error::Status(_, resp)) => resp.get_url().starts_with("https://"),
            Err(e) => {
                log::debug!("ssl probe failed for {}: {}", url, e);
                false
            }
        }
    }
}

// ============================================================================
// RDAP DOMAIN AGE
// ============================================================================

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
}

/// Real lookup: RDAP registration events via the public rdap.org gateway.
#[derive(Debug, Clone)]
pub struct RdapDomainAge {
    base_url: String,
}

impl RdapDomainAge {
    pub fn new() -> Self {
        RdapDomainAge {
            base_url: constants::get_rdap_url(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        RdapDomainAge {
            base_url: base_url.into(),
        }
    }
}

impl Default for RdapDomainAge {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainAgeProvider for RdapDomainAge {
    fn domain_age_years(&self, host: &str) -> Option<u32> {
        let url = format!("{}/domain/{}", self.base_url, host);

        let body = ureq::get(&url)
            .timeout(Duration::from_secs(constants::PROBE_TIMEOUT_SECS))
            .call()
            .map_err(|e| log::debug!("rdap lookup failed for {}: {}", host, e))
            .ok()?
            .into_string()
            .ok()?;

        let response: RdapResponse = serde_json::from_str(&body)
            .map_err(|e| log::debug!("rdap parse failed for {}: {}", host, e))
            .ok()?;

        // First registration event wins when the registry lists several.
        let registered = response
            .events
            .iter()
            .find(|event| event.event_action == "registration")?
            .event_date
            .as_ref()?;

        let registered = DateTime::parse_from_rfc3339(registered).ok()?;
        Some(age_in_years(registered.with_timezone(&Utc), Utc::now()))
    }
}

/// Rounded whole years between two instants, never negative.
fn age_in_years(from: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - from).num_days();
    if days <= 0 {
        return 0;
    }
    (days as f64 / 365.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_age_in_years_rounding() {
        let from = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(age_in_years(from, now), 10);
    }

    #[test]
    fn test_age_never_negative() {
        let from = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(age_in_years(from, now), 0);
    }

    #[test]
    fn test_rdap_event_parsing() {
        let body = r#"{
            "events": [
                {"eventAction": "last changed", "eventDate": "2023-05-05T00:00:00Z"},
                {"eventAction": "registration", "eventDate": "1995-01-01T00:00:00Z"},
                {"eventAction": "registration", "eventDate": "2001-01-01T00:00:00Z"}
            ]
        }"#;

        let response: RdapResponse = serde_json::from_str(body).unwrap();
        let first = response
            .events
            .iter()
            .find(|e| e.event_action == "registration")
            .unwrap();
        assert_eq!(first.event_date.as_deref(), Some("1995-01-01T00:00:00Z"));
    }
}
