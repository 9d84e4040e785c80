//! Access-control configuration.

use serde::{Deserialize, Serialize};

use primecity_core::{AdminId, Locale};

/// Credentials of the owner account synthesized into an empty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultOwner {
    pub id: AdminId,
    pub username: String,
    pub password: String,
}

impl Default for DefaultOwner {
    fn default() -> Self {
        Self {
            id: AdminId::new("owner-1"),
            username: "owner".to_string(),
            password: "admin123".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessControlConfig {
    /// Key holding the JSON array of administrator records.
    pub admins_key: String,
    /// Key holding the JSON current-session object.
    pub session_key: String,
    pub default_owner: DefaultOwner,
    pub locale: Locale,
}

impl Default for AccessControlConfig {
    fn default() -> Self {
        Self {
            admins_key: "admins".to_string(),
            session_key: "admin-session".to_string(),
            default_owner: DefaultOwner::default(),
            locale: Locale::default(),
        }
    }
}

impl AccessControlConfig {
    /// Defaults overlaid with `PRIMECITY_ADMINS_KEY`, `PRIMECITY_SESSION_KEY`
    /// and `PRIMECITY_LOCALE`.
    pub fn from_env() -> Self {
        Self::default().overlay(|name| std::env::var(name).ok())
    }

    fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("PRIMECITY_ADMINS_KEY").filter(|v| !v.is_empty()) {
            self.admins_key = key;
        }
        if let Some(key) = lookup("PRIMECITY_SESSION_KEY").filter(|v| !v.is_empty()) {
            self.session_key = key;
        }
        if let Some(raw) = lookup("PRIMECITY_LOCALE") {
            match raw.parse() {
                Ok(locale) => self.locale = locale,
                Err(err) => tracing::warn!(%err, "ignoring PRIMECITY_LOCALE; using default"),
            }
        }
        self
    }
}
