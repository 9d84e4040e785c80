use std::io::Write;

use anyhow::Context;

use primecity_auth::{AccessControlConfig, AccessControlStore, AccessError, NewAdministrator};
use primecity_core::AdminId;
use primecity_infra::JsonFileStore;

use crate::cli::{Cli, Command};

/// Execute one command, writing results to `out`.
///
/// Returns the process exit code: refused operations print their localized
/// message and exit with 1.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<i32> {
    let config = AccessControlConfig::from_env();
    let locale = config.locale;
    let store = AccessControlStore::open(JsonFileStore::open(&cli.store), config)
        .with_context(|| format!("failed to open store at {}", cli.store.display()))?;

    // Outer result: was the operation refused. Inner: did printing succeed.
    let outcome: Result<anyhow::Result<()>, AccessError> = match &cli.command {
        Command::Login { username, password } => {
            store.login(username, password).map(|s| print_json(out, &s))
        }
        Command::Logout => {
            store.logout();
            Ok(Ok(()))
        }
        Command::Whoami => Ok(match store.current_session() {
            Some(session) => print_json(out, &session),
            None => writeln!(out, "not logged in").map_err(Into::into),
        }),
        Command::List => Ok(print_json(out, &store.list_administrators())),
        Command::Add {
            username,
            password,
            name,
            role,
        } => store
            .add_administrator(NewAdministrator::new(
                username.as_str(),
                password.as_str(),
                name.as_str(),
                *role,
            ))
            .map(|record| print_json(out, &record)),
        Command::SetRole { id, role } => store
            .update_administrator_role(&AdminId::new(id.as_str()), *role)
            .map(Ok),
        Command::Delete { id } => store
            .delete_administrator(&AdminId::new(id.as_str()))
            .map(Ok),
        Command::Roles => Ok(print_json(out, &store.role_catalog())),
        Command::Explain { permission } => {
            Ok(print_json(out, &store.explain_permission(*permission)))
        }
    };

    match outcome {
        Ok(printed) => {
            printed?;
            Ok(0)
        }
        Err(err) => {
            writeln!(out, "{}", err.localized(locale))?;
            Ok(1)
        }
    }
}

fn print_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    let encoded = serde_json::to_string_pretty(value).context("failed to encode output")?;
    writeln!(out, "{encoded}").context("failed to write output")?;
    Ok(())
}
