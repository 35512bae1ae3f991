//! SQL DDL for the blog store and the bootstrap that applies it.

use tracing::info;

use crate::db::sqlite::Database;
use crate::error::BlogError;

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `created` filled in by SQLite on insert
/// - `title` and `content` as plain text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    title TEXT NOT NULL,
    content TEXT NOT NULL
);
"#;

/// Apply [`SQLITE_INIT`] on a dedicated connection.
///
/// Runs once before the server starts, so these statements do not go through
/// [`Database::execute`] and are not reported by `/metrics`.
pub async fn bootstrap(db: &Database) -> Result<(), BlogError> {
    let mut conn = db.acquire().await?;
    // sqlx::query runs a single statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(conn.raw()).await?;
    }
    conn.close().await?;
    info!("database schema ready");
    Ok(())
}
