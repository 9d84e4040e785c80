//! Refusals returned by access-control mutations.

use thiserror::Error;

use primecity_core::{Locale, StorageError};

/// Roster mutation named in refusal messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Add,
    UpdateRole,
    Delete,
}

impl core::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            AdminAction::Add => "add administrators",
            AdminAction::UpdateRole => "change roles",
            AdminAction::Delete => "delete administrators",
        })
    }
}

/// Why an access-control operation was refused.
///
/// `PermissionDenied` means the caller lacks `manageRoles`; `OwnerProtected`
/// means the action is forbidden for everyone.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("permission denied: you cannot {action}")]
    PermissionDenied { action: AdminAction },

    #[error("username already exists")]
    UsernameTaken,

    #[error("administrator not found")]
    NotFound,

    #[error("the owner is protected: cannot {action}")]
    OwnerProtected { action: AdminAction },

    /// Deliberately does not say which of username/password was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AccessError {
    pub fn permission_denied(action: AdminAction) -> Self {
        Self::PermissionDenied { action }
    }

    pub fn owner_protected(action: AdminAction) -> Self {
        Self::OwnerProtected { action }
    }

    /// User-facing message in the requested language.
    pub fn localized(&self, locale: Locale) -> String {
        match locale {
            Locale::En => match self {
                AccessError::PermissionDenied { action } => {
                    format!("You do not have permission to {action}")
                }
                AccessError::UsernameTaken => "Username already exists".to_string(),
                AccessError::NotFound => "User not found".to_string(),
                AccessError::OwnerProtected {
                    action: AdminAction::Delete,
                } => "The owner cannot be deleted".to_string(),
                AccessError::OwnerProtected { .. } => {
                    "The owner's role cannot be changed".to_string()
                }
                AccessError::InvalidCredentials => "Invalid username or password".to_string(),
                AccessError::Storage(_) => "Could not save data. Please try again.".to_string(),
            },
            Locale::Ar => match self {
                AccessError::PermissionDenied {
                    action: AdminAction::Add,
                } => "ليس لديك صلاحية لإضافة إداريين".to_string(),
                AccessError::PermissionDenied {
                    action: AdminAction::UpdateRole,
                } => "ليس لديك صلاحية لتعديل الرتب".to_string(),
                AccessError::PermissionDenied {
                    action: AdminAction::Delete,
                } => "ليس لديك صلاحية لحذف الإداريين".to_string(),
                AccessError::UsernameTaken => "اسم المستخدم موجود بالفعل".to_string(),
                AccessError::NotFound => "المستخدم غير موجود".to_string(),
                AccessError::OwnerProtected {
                    action: AdminAction::Delete,
                } => "لا يمكن حذف المالك".to_string(),
                AccessError::OwnerProtected { .. } => "لا يمكن تغيير رتبة المالك".to_string(),
                AccessError::InvalidCredentials => {
                    "اسم المستخدم أو كلمة المرور غير صحيحة".to_string()
                }
                AccessError::Storage(_) => {
                    "تعذر حفظ البيانات. يرجى المحاولة مرة أخرى.".to_string()
                }
            },
        }
    }
}
