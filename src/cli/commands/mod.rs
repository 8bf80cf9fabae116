pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod settings;
pub mod stats;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::db::kv::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::ui::messages::warning;

use std::io::{self, Write};

/// Identity for this invocation: `--user` wins over the signed-in one.
pub fn resolve_identity(cli: &Cli, cfg: &Config) -> AppResult<Identity> {
    if let Some(id) = &cli.user {
        return Ok(Identity::new(id.clone(), None));
    }
    cfg.identity.clone().ok_or(AppError::NoIdentity)
}

/// Open the database and load the current user's records.
pub fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session<SqliteStore>> {
    let identity = resolve_identity(cli, cfg)?;
    let store = SqliteStore::open(&cfg.database)?;
    let mut session = Session::new(store);
    session.sign_in(identity)?;
    Ok(session)
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
