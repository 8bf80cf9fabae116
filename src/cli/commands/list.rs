use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::trend::sort_history;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::{color_for_amount, paint};
use crate::utils::date::{self, DateRange};
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = &cli.command {
        let range = resolve_period(period)?;
        let session = open_session(cli, cfg)?;
        let symbol = &session.settings().currency;

        let rows: Vec<_> = sort_history(session.entries())
            .into_iter()
            .filter(|e| range.is_none_or(|r| r.contains(e.date())))
            .collect();

        if rows.is_empty() {
            info("No entries recorded for this period.");
            return Ok(());
        }

        match (period, range) {
            (Some(p), Some(_)) => println!("📅 Entries for {}:\n", p),
            _ => println!("📅 All entries:\n"),
        }

        let mut table = Table::new(vec![
            Column::left("ID", 36),
            Column::left("DATE", 10),
            Column::right("GROSS", 12),
            Column::right("EXPENSES", 12),
            Column::right("FEE", 7),
            Column::right("HOURS", 6),
            Column::right("NET", 12),
        ]);

        for e in &rows {
            table.add_row(vec![
                e.id().to_string(),
                e.date_str(),
                format_currency(e.gross(), symbol),
                format_currency(e.expenses(), symbol),
                format!("{}%", e.platform_fee_percent().normalize()),
                e.hours_worked().normalize().to_string(),
                paint(&format_currency(e.net(), symbol), color_for_amount(e.net())),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} entries", rows.len());
    }

    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Option<DateRange>> {
    match period {
        Some(p) => date::parse_period(p).map_err(AppError::InvalidPeriod),
        None => Ok(None),
    }
}
