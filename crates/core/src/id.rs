//! Administrator identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an administrator record.
///
/// Stored as an opaque string so fixed ids (`owner-1`) and generated ones
/// share one type. Generated ids use UUIDv7 (time-ordered); prefer passing ids
/// explicitly in tests for determinism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(String);

impl AdminId {
    /// Generate a fresh identifier of the form `admin-<uuid v7>`.
    pub fn generate() -> Self {
        Self(format!("admin-{}", Uuid::now_v7()))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AdminId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdminId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AdminId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for AdminId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
