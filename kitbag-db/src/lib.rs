//! SQL execution and transaction helpers over a pooled SQLite connection.
//!
//! [`DbSession`] resolves every statement against the right target: the open
//! transaction when one is held, the shared pool otherwise. On top of that
//! sit a bounded-retry transaction runner ([`DbSession::transaction`]) and an
//! all-or-nothing batch executor ([`DbSession::batch`]).
//!
//! Statements are prepared fresh per call (statement caching is disabled) and
//! every prepared statement and result set is released before the call
//! returns, on success and error paths alike.

mod error;
mod params;
mod session;

pub use error::{DbError, Result};
pub use params::SqlParam;
pub use session::{CommitPolicy, DbSession, Statement, BATCH_ATTEMPTS};

use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::SqlitePool;

/// Open a connection pool for the given database URL.
///
/// The sizing here is a convenience default; callers with real pooling
/// requirements should build the pool themselves and hand it in.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(url)
        .await?;
    Ok(pool)
}

/// One-shot query against the pool. See [`DbSession::query`].
pub async fn query<F>(pool: &SqlitePool, sql: &str, params: &[SqlParam], scan: F) -> Result<()>
where
    F: FnOnce(&[SqliteRow]) -> Result<()>,
{
    DbSession::new(pool.clone()).query(sql, params, scan).await
}

/// One-shot statement execution against the pool. See [`DbSession::exec`].
pub async fn exec(pool: &SqlitePool, sql: &str, params: &[SqlParam]) -> Result<i64> {
    DbSession::new(pool.clone()).exec(sql, params).await
}

/// One-shot single-row insert against the pool. See [`DbSession::insert`].
pub async fn insert(pool: &SqlitePool, sql: &str, params: &[SqlParam]) -> Result<i64> {
    DbSession::new(pool.clone()).insert(sql, params).await
}
