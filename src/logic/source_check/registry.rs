//! Static domain allow/deny registry.
//!
//! Immutable after construction and injected into the scorer, so tests can
//! substitute fixture domain sets.

use std::collections::HashSet;

/// Known credible news domains.
const CREDIBLE_DOMAINS: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "npr.org",
    "bbc.com",
    "bbc.co.uk",
    "nytimes.com",
    "wsj.com",
    "washingtonpost.com",
    "theguardian.com",
    "bloomberg.com",
    "economist.com",
    "forbes.com",
    "time.com",
];

/// Known fake news domains.
const FAKE_DOMAINS: &[&str] = &[
    "newsexaminer.net",
    "worldnewsdailyreport.com",
    "nationalreport.net",
    "empirenews.net",
    "huzlers.com",
    "theonion.com", // theonion.com is satire
];

/// Two disjoint sets of exact-match hostnames.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    credible: HashSet<String>,
    fake: HashSet<String>,
}

impl DomainRegistry {
    /// Registry with custom domain sets (fixtures, alternate policy).
    pub fn with_domains<C, F>(credible: C, fake: F) -> Self
    where
        C: IntoIterator<Item = String>,
        F: IntoIterator<Item = String>,
    {
        DomainRegistry {
            credible: credible.into_iter().map(|d| d.to_lowercase()).collect(),
            fake: fake.into_iter().map(|d| d.to_lowercase()).collect(),
        }
    }

    /// Exact match against the credible set. No subdomain stripping:
    /// `www.reuters.com` does not match `reuters.com`.
    pub fn is_credible(&self, host: &str) -> bool {
        self.credible.contains(host)
    }

    /// Exact match against the fake set.
    pub fn is_fake(&self, host: &str) -> bool {
        self.fake.contains(host)
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::with_domains(
            CREDIBLE_DOMAINS.iter().map(|d| d.to_string()),
            FAKE_DOMAINS.iter().map(|d| d.to_string()),
        )
    }
}
