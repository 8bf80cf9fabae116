pub mod dashboard;
pub mod entry;
pub mod identity;
pub mod settings;
pub mod statistics;
