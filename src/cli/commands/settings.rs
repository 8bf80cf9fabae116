use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{Theme, UserSettings};
use crate::ui::messages::{header, success};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::format_currency;
use crate::utils::number::{parse_amount, parse_percent};

/// Show settings, or apply the given changes and persist them.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        currency,
        tax,
        savings,
        daily_goal,
        theme,
    } = &cli.command
    {
        let mut session = open_session(cli, cfg)?;

        let mut updated = session.settings().clone();
        let mut changes = Vec::new();

        if let Some(c) = currency {
            updated.currency = c.trim().to_string();
            changes.push(format!("currency={}", updated.currency));
        }
        if let Some(t) = tax {
            updated.tax_percent = parse_percent("taxPercent", t)?;
            changes.push(format!("taxPercent={}", updated.tax_percent));
        }
        if let Some(s) = savings {
            updated.savings_target_percent = parse_percent("savingsTargetPercent", s)?;
            changes.push(format!("savingsTargetPercent={}", updated.savings_target_percent));
        }
        if let Some(g) = daily_goal {
            updated.daily_goal = parse_amount("dailyGoal", g)?;
            changes.push(format!("dailyGoal={}", updated.daily_goal));
        }
        if let Some(t) = theme {
            updated.theme = Theme::from_code(t).ok_or_else(|| AppError::InvalidSetting {
                field: "theme",
                reason: format!("'{}' is not one of light, dark", t),
            })?;
            changes.push(format!("theme={}", updated.theme));
        }

        if !changes.is_empty() {
            session.update_settings(updated)?;
            let summary = changes.join(" ");
            let target = session
                .identity()
                .map(|i| i.id.clone())
                .unwrap_or_default();
            log::audit(session.store().conn(), "settings", &target, &summary);
            success(format!("Settings updated: {}", summary));
        }

        print_settings(session.settings());
    }

    Ok(())
}

fn print_settings(s: &UserSettings) {
    header("Settings");
    println!("{}• Currency:{} {}", CYAN, RESET, s.currency);
    println!(
        "{}• Daily goal:{} {}",
        CYAN,
        RESET,
        format_currency(s.daily_goal, &s.currency)
    );
    println!(
        "{}• Savings target:{} {}%",
        CYAN,
        RESET,
        s.savings_target_percent.normalize()
    );
    println!("{}• Estimated tax:{} {}%", CYAN, RESET, s.tax_percent.normalize());
    println!("{}• Theme:{} {}", CYAN, RESET, s.theme);
}
