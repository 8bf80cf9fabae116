use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Session;
use crate::db::kv::SqliteStore;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::ui::messages::{info, success};

/// Handle `login`: load the user's records and remember the identity.
pub fn handle_login(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { id, email } = &cli.command {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::Config("user id must not be empty".into()));
        }
        let identity = Identity::new(id, email.clone());

        let mut session = Session::new(SqliteStore::open(&cfg.database)?);
        session.sign_in(identity.clone())?;

        if !cli.test {
            let updated = Config {
                identity: Some(identity.clone()),
                ..cfg.clone()
            };
            updated.save()?;
        }

        log::audit(
            session.store().conn(),
            "login",
            &identity.id,
            &format!("Signed in as {}", identity.display_name()),
        );

        success(format!("Signed in as {}", identity.display_name()));
        info(format!("{} entries on record", session.entries().len()));
    }

    Ok(())
}

/// Handle `logout`. Stored records are left untouched.
pub fn handle_logout(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Some(identity) = &cfg.identity else {
        info("Not signed in.");
        return Ok(());
    };

    if !cli.test {
        let updated = Config {
            identity: None,
            ..cfg.clone()
        };
        updated.save()?;
    }

    if let Ok(store) = SqliteStore::open(&cfg.database) {
        log::audit(
            store.conn(),
            "logout",
            &identity.id,
            &format!("Signed out {}", identity.display_name()),
        );
    }

    success(format!("Signed out {}", identity.display_name()));
    Ok(())
}
