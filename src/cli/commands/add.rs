use crate::cli::commands::{open_session, resolve_identity};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::{AddLogic, EntryInput};
use crate::db::kv::SqliteStore;
use crate::db::log;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_amount, paint};
use crate::utils::format_currency;

/// Preview or record a day's earnings.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        gross,
        expenses,
        fee,
        hours,
        date,
        preview,
    } = &cli.command
    {
        let input = EntryInput {
            gross: gross.clone(),
            expenses: expenses.clone(),
            fee_percent: fee.clone(),
            hours: hours.clone(),
            date: date.clone(),
        };

        //
        // 1. Preview: validate and compute only, no identity needed
        //
        if *preview {
            let entry = AddLogic::build(&input)?;
            let symbol = preview_currency(cli, cfg);

            let net = format_currency(entry.net(), &symbol);
            info(format!(
                "Net for {}: {}",
                entry.date_str(),
                paint(&net, color_for_amount(entry.net()))
            ));
            return Ok(());
        }

        //
        // 2. Save
        //
        let mut session = open_session(cli, cfg)?;
        let entry = AddLogic::apply(&mut session, &input)?;
        let symbol = session.settings().currency.clone();

        log::audit(
            session.store().conn(),
            "add",
            entry.id(),
            &format!(
                "{} gross={} expenses={} fee={}% net={}",
                entry.date_str(),
                entry.gross(),
                entry.expenses(),
                entry.platform_fee_percent(),
                entry.net()
            ),
        );

        success(format!(
            "Saved {} for {}: net {}",
            entry.id(),
            entry.date_str(),
            paint(&format_currency(entry.net(), &symbol), color_for_amount(entry.net()))
        ));
    }

    Ok(())
}

/// Currency of the current user, read without creating or migrating the
/// database. Falls back to the default symbol.
fn preview_currency(cli: &Cli, cfg: &Config) -> String {
    let stored = resolve_identity(cli, cfg).ok().and_then(|identity| {
        let store = SqliteStore::open_read_only(&cfg.database).ok()?;
        store::load_settings(&store, &identity.id).ok()
    });
    stored.unwrap_or_default().currency
}
