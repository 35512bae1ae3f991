use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection as _, Sqlite};
use tracing::debug;

use crate::error::BlogError;

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Storage accessor: hands out one connection per operation and counts every
/// statement run through [`Database::execute`].
///
/// Clones share the same counter, so a single `Database` created at startup
/// can be injected wherever statements are issued.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
    executed: Arc<AtomicU64>,
}

impl Database {
    pub fn new(options: SqliteConnectOptions) -> Self {
        Self {
            options,
            executed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Parse a `sqlite:` URL. The database file is created on first connect if missing.
    pub fn from_url(url: &str) -> Result<Self, BlogError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(BlogError::Connect)?
            .create_if_missing(true);
        Ok(Self::new(options))
    }

    /// Open a fresh connection. Columns of returned rows are addressable by name.
    ///
    /// The connection is released when the returned guard goes out of scope,
    /// whichever way the caller leaves it.
    pub async fn acquire(&self) -> Result<Connection, BlogError> {
        let inner = self.options.connect().await.map_err(BlogError::Connect)?;
        debug!("database connection opened");
        Ok(Connection { inner })
    }

    /// Run `query` with its positionally bound parameters on `conn`.
    ///
    /// The counter is bumped before the statement runs, so failed statements
    /// are counted as well.
    pub async fn execute<'q>(
        &self,
        conn: &mut Connection,
        query: SqliteQuery<'q>,
    ) -> Result<Cursor, BlogError> {
        self.executed.fetch_add(1, Ordering::Relaxed);
        let rows = query.fetch_all(&mut conn.inner).await?;
        Ok(Cursor {
            rows: rows.into_iter(),
        })
    }

    /// Statements executed through this accessor since process start.
    pub fn executed_statements(&self) -> u64 {
        self.executed.load(Ordering::Relaxed)
    }
}

/// A connection scoped to a single operation. Dropping it closes the
/// underlying SQLite handle; [`Connection::close`] does the same but reports errors.
#[derive(Debug)]
pub struct Connection {
    inner: SqliteConnection,
}

impl Connection {
    pub async fn close(self) -> Result<(), BlogError> {
        self.inner.close().await?;
        debug!("database connection closed");
        Ok(())
    }

    /// Uncounted access for schema management.
    pub(crate) fn raw(&mut self) -> &mut SqliteConnection {
        &mut self.inner
    }
}

/// Rows produced by one statement, fetched in order.
pub struct Cursor {
    rows: std::vec::IntoIter<SqliteRow>,
}

impl Cursor {
    pub fn fetch_next(&mut self) -> Option<SqliteRow> {
        self.rows.next()
    }

    pub fn fetch_all(self) -> Vec<SqliteRow> {
        self.rows.collect()
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("remaining", &self.rows.len())
            .finish()
    }
}

impl Iterator for Cursor {
    type Item = SqliteRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.fetch_next()
    }
}
