use serde::{Deserialize, Serialize};

/// Public vPIC endpoint (VIN and WMI decoding).
pub const DEFAULT_VPIC_URL: &str = "https://vpic.nhtsa.dot.gov/api";

/// Public NHTSA endpoint (recalls and safety ratings).
pub const DEFAULT_SAFETY_URL: &str = "https://api.nhtsa.gov";

/// Connection settings for [`NhtsaClient`](super::NhtsaClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NhtsaConfig {
    /// Base URL of the vPIC API.
    #[serde(default = "default_vpic_url")]
    pub vpic_url: String,

    /// Base URL of the recalls / safety ratings API.
    #[serde(default = "default_safety_url")]
    pub safety_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_vpic_url() -> String {
    DEFAULT_VPIC_URL.to_string()
}

fn default_safety_url() -> String {
    DEFAULT_SAFETY_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for NhtsaConfig {
    fn default() -> Self {
        Self {
            vpic_url: default_vpic_url(),
            safety_url: default_safety_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl NhtsaConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `VINDECODE_VPIC_URL` | vPIC base URL |
    /// | `VINDECODE_SAFETY_URL` | Recalls / safety ratings base URL |
    /// | `VINDECODE_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self {
            vpic_url: std::env::var("VINDECODE_VPIC_URL").unwrap_or_else(|_| default_vpic_url()),
            safety_url: std::env::var("VINDECODE_SAFETY_URL")
                .unwrap_or_else(|_| default_safety_url()),
            timeout_secs: std::env::var("VINDECODE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the vPIC base URL.
    pub fn with_vpic_url(mut self, url: impl Into<String>) -> Self {
        self.vpic_url = url.into();
        self
    }

    /// Set the recalls / safety ratings base URL.
    pub fn with_safety_url(mut self, url: impl Into<String>) -> Self {
        self.safety_url = url.into();
        self
    }

    /// Point both APIs at the same host (useful for tests and proxies).
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.with_vpic_url(url.clone()).with_safety_url(url)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
