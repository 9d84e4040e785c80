//! The access-control store: roster, session and guarded mutations.
//!
//! Every operation is a synchronous read-modify-write of whole values in the
//! injected [`KeyValueStore`]. Writers sharing the medium race; the last
//! write wins.

use chrono::Utc;
use serde::de::DeserializeOwned;

use primecity_core::{AdminId, KeyValueStore, StorageError};

use crate::authorize::{self, PermissionExplanation, RoleDefinition};
use crate::{
    AccessControlConfig, AccessError, AdminAction, AdministratorRecord, AssignedRole,
    CurrentSession, NewAdministrator, Permission, Role,
};

pub struct AccessControlStore<S> {
    storage: S,
    config: AccessControlConfig,
}

impl<S: KeyValueStore> AccessControlStore<S> {
    /// Open the store and bootstrap the default owner into an empty roster.
    pub fn open(storage: S, config: AccessControlConfig) -> Result<Self, AccessError> {
        let store = Self { storage, config };
        store.ensure_default_owner()?;
        Ok(store)
    }

    pub fn config(&self) -> &AccessControlConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Synthesize the default owner if the roster is missing or empty.
    ///
    /// Returns whether an owner was created. Idempotent once the roster has
    /// any record. A roster that exists but does not parse is left untouched.
    pub fn ensure_default_owner(&self) -> Result<bool, AccessError> {
        let mut admins = match self.read_roster() {
            Ok(admins) => admins,
            Err(err) => {
                tracing::warn!(error = %err, "stored roster is malformed; skipping default owner");
                return Ok(false);
            }
        };
        if !admins.is_empty() {
            return Ok(false);
        }

        let owner = &self.config.default_owner;
        admins.push(AdministratorRecord {
            id: owner.id.clone(),
            username: owner.username.clone(),
            password: owner.password.clone(),
            role: Role::Owner.into(),
            name: Role::Owner.display_name(self.config.locale).to_string(),
            created_at: Utc::now(),
        });
        self.save_admins(&admins)?;

        tracing::warn!(
            username = %owner.username,
            password = %owner.password,
            "created default owner account; change its password immediately"
        );
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────

    pub fn current_session(&self) -> Option<CurrentSession> {
        self.read_json(&self.config.session_key)
    }

    pub fn current_role(&self) -> Option<AssignedRole> {
        self.current_session().map(|s| s.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_session().is_some()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        let role = self.current_role();
        let granted = authorize::role_allows(role.as_ref(), permission);
        tracing::debug!(%permission, role = ?role, granted, "permission check");
        granted
    }

    /// Permission check by name; unknown names are denied.
    pub fn has_permission_named(&self, permission: &str) -> bool {
        authorize::role_allows_named(self.current_role().as_ref(), permission)
    }

    pub fn explain_permission(&self, permission: Permission) -> PermissionExplanation {
        authorize::explain_permission(self.current_session().as_ref(), permission)
    }

    pub fn role_catalog(&self) -> Vec<RoleDefinition> {
        authorize::role_catalog(self.config.locale)
    }

    /// Start a session for the administrator with exactly these credentials.
    ///
    /// Replaces any existing session.
    pub fn login(&self, username: &str, password: &str) -> Result<CurrentSession, AccessError> {
        let admins = self.load_admins();
        let Some(admin) = admins
            .iter()
            .find(|a| a.matches_credentials(username, password))
        else {
            tracing::warn!(%username, "login rejected");
            return Err(AccessError::InvalidCredentials);
        };

        let session = CurrentSession::from(admin);
        let encoded = serde_json::to_string(&session).map_err(StorageError::from)?;
        self.storage.set(&self.config.session_key, encoded)?;

        tracing::info!(admin_id = %session.id, role = %session.role, "administrator logged in");
        Ok(session)
    }

    pub fn logout(&self) {
        if let Err(err) = self.storage.remove(&self.config.session_key) {
            tracing::warn!(error = %err, "failed to clear admin session");
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Roster
    // ─────────────────────────────────────────────────────────────────────

    /// The full roster, or nothing if the session lacks `manageRoles`.
    pub fn list_administrators(&self) -> Vec<AdministratorRecord> {
        if !self.has_permission(Permission::ManageRoles) {
            return Vec::new();
        }
        self.load_admins()
    }

    /// Look up one record; gated like [`Self::list_administrators`].
    pub fn find_administrator(&self, admin_id: &AdminId) -> Option<AdministratorRecord> {
        self.list_administrators()
            .into_iter()
            .find(|a| &a.id == admin_id)
    }

    pub fn add_administrator(
        &self,
        new_admin: NewAdministrator,
    ) -> Result<AdministratorRecord, AccessError> {
        self.require_manage_roles(AdminAction::Add)?;

        let mut admins = self.read_roster()?;
        if admins.iter().any(|a| a.username == new_admin.username) {
            tracing::warn!(username = %new_admin.username, "add administrator rejected: username taken");
            return Err(AccessError::UsernameTaken);
        }

        // Any role is accepted here, including a second owner.
        let record = AdministratorRecord {
            id: AdminId::generate(),
            username: new_admin.username,
            password: new_admin.password,
            role: new_admin.role.into(),
            name: new_admin.name,
            created_at: Utc::now(),
        };
        admins.push(record.clone());
        self.save_admins(&admins)?;

        tracing::info!(admin_id = %record.id, role = %record.role, "administrator added");
        Ok(record)
    }

    pub fn update_administrator_role(
        &self,
        admin_id: &AdminId,
        new_role: Role,
    ) -> Result<(), AccessError> {
        self.require_manage_roles(AdminAction::UpdateRole)?;

        let mut admins = self.read_roster()?;
        let admin = admins
            .iter_mut()
            .find(|a| &a.id == admin_id)
            .ok_or(AccessError::NotFound)?;

        if admin.is_owner() && new_role != Role::Owner {
            tracing::warn!(%admin_id, %new_role, "refused to change the owner's role");
            return Err(AccessError::owner_protected(AdminAction::UpdateRole));
        }

        admin.role = new_role.into();
        self.save_admins(&admins)?;

        tracing::info!(%admin_id, %new_role, "administrator role updated");
        Ok(())
    }

    pub fn delete_administrator(&self, admin_id: &AdminId) -> Result<(), AccessError> {
        self.require_manage_roles(AdminAction::Delete)?;

        let mut admins = self.read_roster()?;
        let mut matching = admins.iter().filter(|a| &a.id == admin_id).peekable();
        if matching.peek().is_none() {
            return Err(AccessError::NotFound);
        }

        // Ids are unique by construction, but hand-edited data may repeat one.
        if matching.any(AdministratorRecord::is_owner) {
            tracing::warn!(%admin_id, "refused to delete the owner");
            return Err(AccessError::owner_protected(AdminAction::Delete));
        }

        admins.retain(|a| &a.id != admin_id);
        self.save_admins(&admins)?;

        tracing::info!(%admin_id, "administrator deleted");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    fn require_manage_roles(&self, action: AdminAction) -> Result<(), AccessError> {
        if self.has_permission(Permission::ManageRoles) {
            Ok(())
        } else {
            tracing::warn!(%action, "access denied: manageRoles required");
            Err(AccessError::permission_denied(action))
        }
    }

    /// Roster for queries: malformed data reads as empty.
    fn load_admins(&self) -> Vec<AdministratorRecord> {
        self.read_json(&self.config.admins_key).unwrap_or_default()
    }

    /// Roster for writers: missing reads as empty, malformed is an error so
    /// the stored data is never overwritten by a partial view.
    fn read_roster(&self) -> Result<Vec<AdministratorRecord>, StorageError> {
        match self.storage.get(&self.config.admins_key) {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    fn save_admins(&self, admins: &[AdministratorRecord]) -> Result<(), AccessError> {
        let encoded = serde_json::to_string(admins).map_err(StorageError::from)?;
        self.storage.set(&self.config.admins_key, encoded)?;
        Ok(())
    }

    /// Absent and malformed values both read as `None`.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.storage.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%key, error = %err, "ignoring malformed stored value");
                None
            }
        }
    }
}

impl<S> core::fmt::Debug for AccessControlStore<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessControlStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
