//! `primecity-auth` — role-based access control for the admin panel.
//!
//! Roles, permissions, the admin roster and the current session, all kept in
//! an injected key/value store. Presentation and routing belong to callers.

pub mod admin;
pub mod authorize;
pub mod config;
pub mod error;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod store;

pub use admin::{AdministratorRecord, NewAdministrator};
pub use authorize::{
    explain_permission, role_allows, role_catalog, DenialKind, PermissionExplanation,
    RoleDefinition,
};
pub use config::{AccessControlConfig, DefaultOwner};
pub use error::{AccessError, AdminAction};
pub use permissions::{Permission, RolePermissions, UnknownPermission};
pub use roles::{AssignedRole, Role, UnknownRole};
pub use session::CurrentSession;
pub use store::AccessControlStore;
