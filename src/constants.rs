//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Every value can be overridden through a `TRUTHLENS_*` environment variable.

use std::path::PathBuf;

/// Default path of the trained model artifact (relative to the working directory)
pub const DEFAULT_MODEL_PATH: &str = "models/fake_news_model.json";

/// Default RDAP endpoint used for domain-age lookups
pub const DEFAULT_RDAP_URL: &str = "https://rdap.org";

/// Timeout for article fetches (seconds)
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Timeout for credibility probes - SSL check and RDAP lookup (seconds)
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Default number of history entries returned
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "TruthLens";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> PathBuf {
    std::env::var("TRUTHLENS_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH))
}

/// Get RDAP base URL from environment or use default
pub fn get_rdap_url() -> String {
    std::env::var("TRUTHLENS_RDAP_URL").unwrap_or_else(|_| DEFAULT_RDAP_URL.to_string())
}

/// Get history database path from environment or use the local data dir
pub fn get_history_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("TRUTHLENS_HISTORY_DB") {
        return PathBuf::from(path);
    }

    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join("history.db")
}
