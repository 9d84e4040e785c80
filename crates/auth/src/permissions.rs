use core::str::FromStr;

use serde::{Deserialize, Serialize};

use primecity_core::Locale;

use crate::Role;

/// Named capability gating a query or mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    ViewApplications,
    ManageApplications,
    ManageRoles,
    DeleteApplications,
    ExportData,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::ViewApplications,
        Permission::ManageApplications,
        Permission::ManageRoles,
        Permission::DeleteApplications,
        Permission::ExportData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewApplications => "viewApplications",
            Permission::ManageApplications => "manageApplications",
            Permission::ManageRoles => "manageRoles",
            Permission::DeleteApplications => "deleteApplications",
            Permission::ExportData => "exportData",
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ar, Permission::ViewApplications) => "عرض الطلبات",
            (Locale::Ar, Permission::ManageApplications) => "إدارة الطلبات",
            (Locale::Ar, Permission::ManageRoles) => "إدارة الرتب",
            (Locale::Ar, Permission::DeleteApplications) => "حذف الطلبات",
            (Locale::Ar, Permission::ExportData) => "تصدير البيانات",
            (Locale::En, Permission::ViewApplications) => "View applications",
            (Locale::En, Permission::ManageApplications) => "Manage applications",
            (Locale::En, Permission::ManageRoles) => "Manage roles",
            (Locale::En, Permission::DeleteApplications) => "Delete applications",
            (Locale::En, Permission::ExportData) => "Export data",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission '{0}'")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// One row of the static role/permission table.
///
/// Every permission is spelled out per role; nothing is granted by absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissions {
    pub view_applications: bool,
    pub manage_applications: bool,
    pub manage_roles: bool,
    pub delete_applications: bool,
    pub export_data: bool,
}

const OWNER: RolePermissions = RolePermissions {
    view_applications: true,
    manage_applications: true,
    manage_roles: true,
    delete_applications: true,
    export_data: true,
};

const ADMIN: RolePermissions = RolePermissions {
    view_applications: true,
    manage_applications: true,
    manage_roles: false,
    delete_applications: true,
    export_data: true,
};

const MODERATOR: RolePermissions = RolePermissions {
    view_applications: true,
    manage_applications: true,
    manage_roles: false,
    delete_applications: false,
    export_data: false,
};

const VIEWER: RolePermissions = RolePermissions {
    view_applications: true,
    manage_applications: false,
    manage_roles: false,
    delete_applications: false,
    export_data: false,
};

impl RolePermissions {
    pub fn for_role(role: Role) -> &'static RolePermissions {
        match role {
            Role::Owner => &OWNER,
            Role::Admin => &ADMIN,
            Role::Moderator => &MODERATOR,
            Role::Viewer => &VIEWER,
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewApplications => self.view_applications,
            Permission::ManageApplications => self.manage_applications,
            Permission::ManageRoles => self.manage_roles,
            Permission::DeleteApplications => self.delete_applications,
            Permission::ExportData => self.export_data,
        }
    }

    /// Granted permissions in table order.
    pub fn granted(&self) -> Vec<Permission> {
        Permission::ALL
            .into_iter()
            .filter(|p| self.allows(*p))
            .collect()
    }
}
