use crate::cli::commands::{ask_confirmation, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Delete every entry of the current user. Settings are kept.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = &cli.command {
        let mut session = open_session(cli, cfg)?;
        let count = session.entries().len();
        let who = session
            .identity()
            .map(|i| i.display_name().to_string())
            .unwrap_or_default();

        if !*force {
            let prompt = format!(
                "Delete all {} entries for {}? This action is irreversible.",
                count, who
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        session.clear_data()?;

        let target = session
            .identity()
            .map(|i| i.id.clone())
            .unwrap_or_default();
        log::audit(
            session.store().conn(),
            "clear",
            &target,
            &format!("Cleared {} entries", count),
        );

        success(format!("Cleared {} entries for {}", count, who));
    }

    Ok(())
}
