//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};

/// Default base origin of the diagnostic API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Diagnostic API settings
    pub api: ApiConfig,
}

/// `[api]` section: where the diagnostic API lives.
///
/// The base origin is fixed for the lifetime of the process; it is not
/// mutable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base origin of the API, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
