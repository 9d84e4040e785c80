//! The current admin session.

use serde::{Deserialize, Serialize};

use primecity_core::AdminId;

use crate::{AdministratorRecord, AssignedRole};

/// Credential-free projection of the logged-in administrator.
///
/// At most one exists at a time; a new login overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSession {
    pub id: AdminId,
    pub username: String,
    pub role: AssignedRole,
    pub name: String,
}

impl From<&AdministratorRecord> for CurrentSession {
    fn from(record: &AdministratorRecord) -> Self {
        Self {
            id: record.id.clone(),
            username: record.username.clone(),
            role: record.role.clone(),
            name: record.name.clone(),
        }
    }
}
