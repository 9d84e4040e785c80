use serde::Serialize;

use primecity_core::Locale;

use crate::{AssignedRole, CurrentSession, Permission, Role};

/// Whether a (possibly absent) role grants `permission`.
///
/// Fail-closed: no role or an unrecognized role grants nothing.
pub fn role_allows(role: Option<&AssignedRole>, permission: Permission) -> bool {
    role.and_then(AssignedRole::known)
        .is_some_and(|r| r.permissions().allows(permission))
}

/// Like [`role_allows`], but for a permission given by name.
///
/// Unknown permission names are denied.
pub fn role_allows_named(role: Option<&AssignedRole>, permission: &str) -> bool {
    permission
        .parse::<Permission>()
        .is_ok_and(|p| role_allows(role, p))
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation
// ─────────────────────────────────────────────────────────────────────────────

/// Why a permission check for the current session came out the way it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionExplanation {
    pub required_permission: Permission,
    pub granted: bool,
    pub reason: String,
    /// Role string of the session, as stored.
    pub role: Option<String>,
    pub effective_permissions: Vec<Permission>,
    pub denial: Option<DenialKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    NoSession,
    UnrecognizedRole,
    MissingPermission,
}

/// Explain the decision [`role_allows`] makes for this session.
pub fn explain_permission(
    session: Option<&CurrentSession>,
    required: Permission,
) -> PermissionExplanation {
    let Some(session) = session else {
        return PermissionExplanation {
            required_permission: required,
            granted: false,
            reason: "No administrator is logged in".to_string(),
            role: None,
            effective_permissions: Vec::new(),
            denial: Some(DenialKind::NoSession),
        };
    };

    let role_name = session.role.as_str().to_string();
    let Some(role) = session.role.known() else {
        return PermissionExplanation {
            required_permission: required,
            granted: false,
            reason: format!("Role '{role_name}' is not recognized and grants nothing"),
            role: Some(role_name),
            effective_permissions: Vec::new(),
            denial: Some(DenialKind::UnrecognizedRole),
        };
    };

    let effective = role.permissions().granted();
    if role.permissions().allows(required) {
        PermissionExplanation {
            required_permission: required,
            granted: true,
            reason: format!("Role '{role}' grants '{required}'"),
            role: Some(role_name),
            effective_permissions: effective,
            denial: None,
        }
    } else {
        let granting: Vec<&str> = Role::ALL
            .iter()
            .filter(|r| r.permissions().allows(required))
            .map(Role::as_str)
            .collect();
        PermissionExplanation {
            required_permission: required,
            granted: false,
            reason: format!(
                "Role '{role}' does not grant '{required}' (granted by: {})",
                granting.join(", ")
            ),
            role: Some(role_name),
            effective_permissions: effective,
            denial: Some(DenialKind::MissingPermission),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Role catalog
// ─────────────────────────────────────────────────────────────────────────────

/// A role with its localized name and granted permissions (for display).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    pub role: Role,
    pub display_name: &'static str,
    pub permissions: Vec<Permission>,
}

/// Every role, highest authority first.
pub fn role_catalog(locale: Locale) -> Vec<RoleDefinition> {
    Role::ALL
        .into_iter()
        .map(|role| RoleDefinition {
            role,
            display_name: role.display_name(locale),
            permissions: role.permissions().granted(),
        })
        .collect()
}
