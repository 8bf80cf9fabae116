use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EarningEntry;
use crate::store::KvStore;
use crate::utils::date;
use crate::utils::number::{parse_amount, parse_optional_amount, parse_percent};
use rust_decimal::Decimal;

/// Raw form input as typed by the user.
#[derive(Debug, Default, Clone)]
pub struct EntryInput {
    pub gross: String,
    pub expenses: Option<String>,
    pub fee_percent: Option<String>,
    pub hours: Option<String>,
    pub date: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the input and build the entry (net included). Nothing is saved.
    pub fn build(input: &EntryInput) -> AppResult<EarningEntry> {
        let gross = parse_amount("gross", &input.gross)?;
        let expenses = parse_optional_amount("expenses", input.expenses.as_ref())?;
        let fee = match &input.fee_percent {
            Some(raw) => parse_percent("platformFeePercent", raw)?,
            None => Decimal::ZERO,
        };
        let hours = parse_optional_amount("hoursWorked", input.hours.as_ref())?;

        let day = match &input.date {
            Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?,
            None => date::today(),
        };

        Ok(EarningEntry::new(day, gross, expenses, fee, hours))
    }

    /// Validate, build and append to the session. Returns the stored entry.
    pub fn apply<S: KvStore>(session: &mut Session<S>, input: &EntryInput) -> AppResult<EarningEntry> {
        let entry = Self::build(input)?;
        session.add_entry(entry.clone())?;
        Ok(entry)
    }
}
