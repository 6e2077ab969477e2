//! Source credibility scorer.
//!
//! Scores the trustworthiness of a URL's host from static domain lists, a
//! live transport-security probe, a domain-age lookup and suspicious
//! hostname patterns. Never fails toward the caller: invalid input and
//! failed lookups degrade to conservative defaults with a rationale line.

mod patterns;
mod probes;
mod registry;
#[cfg(test)]
mod tests;
mod types;

pub use probes::{DomainAgeProvider, HttpsProbe, RdapDomainAge, TransportProbe};
pub use registry::DomainRegistry;
pub use types::{CredibilityFactors, CredibilityResult};

// ============================================================================
// SCORE WEIGHTS
// ============================================================================

/// Neutral starting score for an unknown host.
const BASE_SCORE: i32 = 50;

/// Bonus for a host on the known-credible list.
const KNOWN_CREDIBLE_BONUS: i32 = 30;

/// Penalty for a host on the known-fake list.
const KNOWN_FAKE_PENALTY: i32 = 30;

/// Bonus for a verified https connection.
const SSL_BONUS: i32 = 10;

/// Bonus for a domain older than ESTABLISHED_AGE_YEARS.
const DOMAIN_AGE_BONUS: i32 = 10;

/// Penalty for suspicious hostname patterns.
const SUSPICIOUS_PENALTY: i32 = 20;

/// Domains older than this many years count as established.
const ESTABLISHED_AGE_YEARS: u32 = 5;

// ============================================================================
// SCORER
// ============================================================================

/// Credibility scorer with injected registry and probes.
pub struct SourceChecker {
    registry: DomainRegistry,
    transport: Box<dyn TransportProbe>,
    domain_age: Box<dyn DomainAgeProvider>,
}

impl SourceChecker {
    /// Scorer with the default registry and live probes.
    pub fn new() -> Self {
        SourceChecker {
            registry: DomainRegistry::default(),
            transport: Box::new(HttpsProbe),
            domain_age: Box::new(RdapDomainAge::new()),
        }
    }

    /// Scorer with substituted collaborators (fixtures, alternate policy).
    pub fn with_collaborators(
        registry: DomainRegistry,
        transport: Box<dyn TransportProbe>,
        domain_age: Box<dyn DomainAgeProvider>,
    ) -> Self {
        SourceChecker {
            registry,
            transport,
            domain_age,
        }
    }

    /// Score a URL. Never errors; all failures degrade into the result.
    pub fn check(&self, url: &str) -> CredibilityResult {
        let Some(host) = parse_host(url) else {
            log::debug!("no host in {:?}, returning terminal zero score", url);
            return CredibilityResult::invalid_url();
        };

        let factors = CredibilityFactors {
            is_known_credible: self.registry.is_credible(&host),
            is_known_fake: self.registry.is_fake(&host),
            has_ssl: self.transport.resolves_https(url),
            domain_age: self.domain_age.domain_age_years(&host).unwrap_or(0),
            suspicious_patterns: patterns::is_suspicious(&host),
        };

        // Adjustments are additive and independent; the clamp is applied
        // exactly once at the end.
        let mut score = BASE_SCORE;
        if factors.is_known_credible {
            score += KNOWN_CREDIBLE_BONUS;
        }
        if factors.is_known_fake {
            score -= KNOWN_FAKE_PENALTY;
        }
        if factors.has_ssl {
            score += SSL_BONUS;
        }
        if factors.domain_age > ESTABLISHED_AGE_YEARS {
            score += DOMAIN_AGE_BONUS;
        }
        if factors.suspicious_patterns {
            score -= SUSPICIOUS_PENALTY;
        }

        let credibility_score = score.clamp(0, 100) as u8;

        CredibilityResult {
            credibility_score,
            details: build_details(credibility_score, &factors),
            factors,
        }
    }
}

impl Default for SourceChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HOST EXTRACTION
// ============================================================================

/// Extract the lowercased host from a URL-shaped string.
///
/// Requires an explicit scheme; strips userinfo, port, path, query and
/// fragment. Returns None when nothing host-like remains.
pub fn parse_host(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    };
    let host = match host.split_once(':') {
        Some((host, _)) => host,
        None => host,
    };

    if host.is_empty() {
        return None;
    }
    Some(host.to_lowercase())
}

// ============================================================================
// RATIONALE
// ============================================================================

/// Headline tier first, then one line per triggered factor in fixed order.
fn build_details(score: u8, factors: &CredibilityFactors) -> Vec<String> {
    let mut details = Vec::new();

    details.push(
        match score {
            80..=100 => "This appears to be a highly credible source.",
            60..=79 => "This source shows some indicators of credibility.",
            40..=59 => "Exercise caution with this source.",
            _ => "This source has multiple credibility concerns.",
        }
        .to_string(),
    );

    if factors.is_known_credible {
        details.push("Recognized as a credible news source".to_string());
    }
    if factors.is_known_fake {
        details.push("Known for publishing fake or satirical news".to_string());
    }
    if factors.has_ssl {
        details.push("Secure website connection (HTTPS)".to_string());
    } else {
        details.push("Insecure website connection".to_string());
    }
    if factors.domain_age > ESTABLISHED_AGE_YEARS {
        details.push(format!("Established domain ({} years old)", factors.domain_age));
    } else if factors.domain_age > 0 {
        details.push(format!(
            "Relatively new domain ({} years old)",
            factors.domain_age
        ));
    }
    if factors.suspicious_patterns {
        details.push("URL contains suspicious patterns".to_string());
    }

    details
}
