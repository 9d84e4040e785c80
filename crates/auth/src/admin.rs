//! Administrator records as persisted under the roster key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use primecity_core::AdminId;

use crate::{AssignedRole, Role};

/// A member of the admin roster.
///
/// The password is stored and compared in clear text. That is only acceptable
/// for a local demo; a real deployment needs a hashing boundary here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministratorRecord {
    pub id: AdminId,
    pub username: String,
    pub password: String,
    pub role: AssignedRole,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl AdministratorRecord {
    pub fn is_owner(&self) -> bool {
        self.role.is(Role::Owner)
    }

    /// Exact, case-sensitive credential match.
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Input for adding an administrator to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdministrator {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl NewAdministrator {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name: name.into(),
            role,
        }
    }
}
