//! # Client configuration (`diabetes-risk.toml`)
//!
//! Defines the TOML file the native shells read from the platform config
//! directory (filename: [`AppConfig::filename`] = `"diabetes-risk.toml"`).
//! The web build never reads a file and starts from [`AppConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [session]
//! auto_logout = true     # log out automatically when the JWT expires
//!
//! [dashboard]
//! default_chart = "glucose"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers, TOML (de)serialisation, env override. |
//! | [`ApiConfig`] | Backend location. |
//! | [`SessionConfig`] | Client-side session behaviour. |
//! | [`DashboardConfig`] | Initial chart parameter on the dashboard. |
//!
//! Every section derives `Default`, so a missing or partial file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "DIABETES_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Top-level configuration stored in `diabetes-risk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Schedule a logout when the bearer token's `exp` claim passes.
    #[serde(default = "default_auto_logout")]
    pub auto_logout: bool,
}

fn default_auto_logout() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_logout: default_auto_logout(),
        }
    }
}

/// Dashboard behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Query value of the chart parameter selected on first load.
    #[serde(default = "default_chart")]
    pub default_chart: String,
}

fn default_chart() -> String {
    "glucose".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_chart: default_chart(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to toggle automatic logout on token expiry.
    pub fn with_auto_logout(mut self, enabled: bool) -> Self {
        self.session.auto_logout = enabled;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "diabetes-risk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply a base URL override (typically read from [`API_URL_ENV`]).
    /// Blank values are ignored.
    pub fn with_base_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }
}
