use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database and return the migrations applied now.
/// All schema creation is delegated to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    Ok(run_pending_migrations(conn)?)
}
