use crate::cli::commands::{ask_confirmation, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_currency;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = &cli.command {
        let mut session = open_session(cli, cfg)?;
        let full_id = DeleteLogic::resolve_id(&session, id)?;

        if !*force {
            let prompt = format!("Delete entry {}? This action is irreversible.", full_id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut session, &full_id)?;
        let symbol = session.settings().currency.clone();

        log::audit(
            session.store().conn(),
            "del",
            removed.id(),
            &format!("{} net={}", removed.date_str(), removed.net()),
        );

        success(format!(
            "Deleted entry {} ({}, net {})",
            removed.id(),
            removed.date_str(),
            format_currency(removed.net(), &symbol)
        ));
    }

    Ok(())
}
