use std::path::PathBuf;

use clap::{Parser, Subcommand};

use primecity_auth::{Permission, Role};

/// Manage admin-panel accounts stored in a local JSON file.
#[derive(Debug, Parser)]
#[command(name = "primecity-admin", version)]
pub struct Cli {
    /// Path of the JSON key/value store.
    #[arg(long, env = "PRIMECITY_STORE", default_value = "primecity-store.json")]
    pub store: PathBuf,

    /// Emit logs as JSON instead of compact lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a session (replaces any current one).
    Login { username: String, password: String },
    /// End the current session.
    Logout,
    /// Show the current session.
    Whoami,
    /// List the roster (requires manageRoles).
    List,
    /// Add an administrator (requires manageRoles).
    Add {
        username: String,
        password: String,
        name: String,
        #[arg(long, default_value = "viewer")]
        role: Role,
    },
    /// Change an administrator's role (requires manageRoles).
    SetRole { id: String, role: Role },
    /// Delete an administrator (requires manageRoles).
    Delete { id: String },
    /// Show roles and the permissions they grant.
    Roles,
    /// Explain whether the current session holds a permission.
    Explain { permission: Permission },
}
