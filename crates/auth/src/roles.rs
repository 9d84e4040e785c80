use core::str::FromStr;

use serde::{Deserialize, Serialize};

use primecity_core::Locale;

use crate::permissions::RolePermissions;

/// Authority level assigned to an administrator.
///
/// Closed set; only `Owner` is special-cased by the store (it can never be
/// demoted or deleted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Moderator,
    Viewer,
}

impl Role {
    /// All roles, highest authority first.
    pub const ALL: [Role; 4] = [Role::Owner, Role::Admin, Role::Moderator, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Viewer => "viewer",
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ar, Role::Owner) => "المالك",
            (Locale::Ar, Role::Admin) => "مدير",
            (Locale::Ar, Role::Moderator) => "مشرف",
            (Locale::Ar, Role::Viewer) => "مشاهد",
            (Locale::En, Role::Owner) => "Owner",
            (Locale::En, Role::Admin) => "Admin",
            (Locale::En, Role::Moderator) => "Moderator",
            (Locale::En, Role::Viewer) => "Viewer",
        }
    }

    /// Row of the static role/permission table.
    pub fn permissions(&self) -> &'static RolePermissions {
        RolePermissions::for_role(*self)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Role as found in persisted data.
///
/// Stored records and sessions may carry role strings this build does not
/// know. They are kept verbatim so the data round-trips, and resolve to no
/// permissions at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignedRole {
    Known(Role),
    Unrecognized(String),
}

impl AssignedRole {
    pub fn known(&self) -> Option<Role> {
        match self {
            AssignedRole::Known(role) => Some(*role),
            AssignedRole::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, role: Role) -> bool {
        self.known() == Some(role)
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssignedRole::Known(role) => role.as_str(),
            AssignedRole::Unrecognized(raw) => raw,
        }
    }
}

impl From<Role> for AssignedRole {
    fn from(value: Role) -> Self {
        AssignedRole::Known(value)
    }
}

impl core::fmt::Display for AssignedRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
