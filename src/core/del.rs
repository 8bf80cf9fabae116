use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EarningEntry;
use crate::store::KvStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Resolve a full id or an unambiguous prefix to an entry id.
    pub fn resolve_id<S: KvStore>(session: &Session<S>, needle: &str) -> AppResult<String> {
        let needle = needle.trim();
        if let Some(e) = session.find_entry(needle) {
            return Ok(e.id().to_string());
        }

        let mut matches = session
            .entries()
            .iter()
            .filter(|e| !needle.is_empty() && e.id().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(e), None) => Ok(e.id().to_string()),
            _ => Err(AppError::EntryNotFound(needle.to_string())),
        }
    }

    pub fn apply<S: KvStore>(session: &mut Session<S>, needle: &str) -> AppResult<EarningEntry> {
        let id = Self::resolve_id(session, needle)?;
        session.delete_entry(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::Identity;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn loaded_session(n: usize) -> Session<MemoryStore> {
        let mut s = Session::new(MemoryStore::new());
        s.sign_in(Identity::new("u1", None)).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for i in 0..n {
            let gross = Decimal::from(i as i64 + 1);
            s.add_entry(EarningEntry::new(date, gross, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO))
                .unwrap();
        }
        s
    }

    #[test]
    fn deletes_by_prefix() {
        let mut s = loaded_session(2);
        let id = s.entries()[1].id().to_string();
        let removed = DeleteLogic::apply(&mut s, &id[..8]).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(s.entries().len(), 1);
    }

    #[test]
    fn empty_prefix_matches_nothing() {
        let mut s = loaded_session(1);
        assert!(matches!(
            DeleteLogic::apply(&mut s, ""),
            Err(AppError::EntryNotFound(_))
        ));
    }
}
