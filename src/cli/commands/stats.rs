use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::dashboard::Dashboard;
use crate::models::settings::UserSettings;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW, color_for_amount, color_for_score, paint};
use crate::utils::format_currency;
use crate::utils::formatting::format_percent;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = &cli.command {
        let session = open_session(cli, cfg)?;
        let dashboard = session.dashboard();

        if *json {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
            return Ok(());
        }

        let who = session
            .identity()
            .map(|i| i.display_name().to_string())
            .unwrap_or_default();
        print_dashboard(&who, &dashboard, session.settings(), session.entries().len());
    }

    Ok(())
}

fn print_dashboard(who: &str, d: &Dashboard, settings: &UserSettings, count: usize) {
    let s = &d.statistics;
    let cur = settings.currency.as_str();
    let money = |v| paint(&format_currency(v, cur), color_for_amount(v));

    header(format!("Dashboard for {}", who));

    println!(
        "{}• Health score:{} {}",
        CYAN,
        RESET,
        paint(&s.health_score.to_string(), color_for_score(s.health_score))
    );
    println!("{}• Entries:{} {}", CYAN, RESET, count);
    println!("{}• Latest net:{} {}", CYAN, RESET, money(d.latest_net));
    println!("{}• Total net:{} {}", CYAN, RESET, money(s.total_net));
    println!(
        "{}• Daily average:{} {} ({}% of {} goal)",
        CYAN,
        RESET,
        money(s.avg_daily_net),
        paint(
            &d.goal_progress_percent.to_string(),
            if d.goal_met { GREEN } else { YELLOW }
        ),
        format_currency(settings.daily_goal, cur)
    );
    println!(
        "{}• Monthly projection:{} {}",
        CYAN,
        RESET,
        money(s.monthly_projection)
    );
    println!(
        "{}• Savings target ({}%):{} {}",
        CYAN,
        settings.savings_target_percent.normalize(),
        RESET,
        money(s.savings_target)
    );
    println!(
        "{}• Est. tax ({}%):{} {}-{}{}",
        CYAN,
        settings.tax_percent.normalize(),
        RESET,
        RED,
        format_currency(d.estimated_tax, cur),
        RESET
    );
    println!(
        "{}• Burn rate:{} {}",
        CYAN,
        RESET,
        paint(
            &format_percent(s.burn_rate),
            if d.burn_rate_high { RED } else { GREEN }
        )
    );

    if !d.trend.is_empty() {
        println!("\n{}Trend (last {} entries):{}", CYAN, d.trend.len(), RESET);
        for p in &d.trend {
            println!("    {}  {}", p.date.format("%a %Y-%m-%d"), money(p.net));
        }
    }
}
