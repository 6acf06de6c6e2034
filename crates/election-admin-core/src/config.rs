//! Dashboard Configuration
//!
//! The server hosting the dashboard can inject settings two ways, applied in
//! order over the defaults:
//!
//! ```html
//! <script>
//!   window.__ELECTION_ADMIN_CONFIG__ = { api_base_url: "https://api.example/v1" };
//! </script>
//! <meta name="election-admin:api-url" content="https://api.example/v1">
//! <meta name="election-admin:log-level" content="debug">
//! ```
//!
//! Reading the DOM is the UI crate's job; this module only merges and checks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusFilter;
use crate::error::{AdminError, Result};

/// Prefix of the `<meta name=...>` keys
pub const META_PREFIX: &str = "election-admin:";

/// Name of the optional JS global holding a config object
pub const GLOBAL_CONFIG: &str = "__ELECTION_ADMIN_CONFIG__";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// REST root, absolute or relative to the page origin
    pub api_base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present
    pub api_token: Option<String>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// How long a toast stays visible
    pub toast_timeout_ms: u32,
    /// Tab selected when a page opens
    pub default_status: StatusFilter,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            api_token: None,
            log_level: "info".to_string(),
            toast_timeout_ms: 4000,
            default_status: StatusFilter::Active,
        }
    }
}

impl AdminConfig {
    /// Decode a JSON config object; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AdminError::Config(e.to_string()))
    }

    /// Overlay values from `<meta>` tags. `lookup` receives the key without
    /// the prefix and returns the tag's `content`, if any.
    pub fn merge_meta(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = read("api-url") {
            self.api_base_url = url;
        }
        if let Some(token) = read("api-token") {
            self.api_token = Some(token);
        }
        if let Some(level) = read("log-level") {
            self.log_level = level;
        }
        if let Some(timeout) = read("toast-timeout-ms") {
            self.toast_timeout_ms = timeout
                .parse()
                .map_err(|_| AdminError::Config(format!("toast-timeout-ms '{timeout}' is not a number")))?;
        }
        if let Some(status) = read("default-status") {
            self.default_status = StatusFilter::from_str(&status).map_err(AdminError::Config)?;
        }
        Ok(self)
    }

    /// Check and normalize the merged settings
    pub fn validate(mut self) -> Result<Self> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(AdminError::Config("api_base_url must not be empty".to_string()));
        }
        // "/" becomes "", i.e. the origin root
        self.api_base_url = base.trim_end_matches('/').to_string();
        if self.toast_timeout_ms == 0 {
            return Err(AdminError::Config("toast_timeout_ms must be positive".to_string()));
        }
        self.level()?;
        self.api_token = self.api_token.filter(|t| !t.trim().is_empty());
        Ok(self)
    }

    /// Parsed log level
    pub fn level(&self) -> Result<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| AdminError::Config(format!("unknown log level '{}'", self.log_level)))
    }
}
