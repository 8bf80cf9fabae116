use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Inclusive range of work dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

/// Resolve a single period (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`) into its
/// first and last day.
pub fn range_from_period(p: &str) -> Result<DateRange, String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(DateRange { start: d, end: d });
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(DateRange {
            start: first,
            end: last_day_of_month(first.year(), first.month()),
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok(DateRange { start, end });
    }

    Err(format!("Invalid period: {}", p))
}

/// Parse `--period`: a single period, a `start:end` range of periods, or
/// `all` (→ `None`, no filtering).
pub fn parse_period(p: &str) -> Result<Option<DateRange>, String> {
    if p.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((from, to)) = p.split_once(':') {
        let start = range_from_period(from)?.start;
        let end = range_from_period(to)?.end;
        if end < start {
            return Err(format!("Invalid period: {} (end before start)", p));
        }
        return Ok(Some(DateRange { start, end }));
    }

    range_from_period(p).map(Some)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
