use std::sync::Arc;

use futures::future::BoxFuture;
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, warn};

use crate::error::{DbError, Result};
use crate::params::{bind_params, SqlParam};

/// Retry budget used by [`DbSession::batch`].
pub const BATCH_ATTEMPTS: u32 = 3;

/// What [`DbSession::transaction`] does when the unit of work succeeded but
/// the commit itself failed.
///
/// The default is [`CommitPolicy::Retry`]: the failed commit consumes the
/// attempt and the whole transaction is retried, so a commit error either
/// resolves on a later attempt or comes back as the last error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitPolicy {
    /// A failed commit consumes the attempt; the transaction is retried.
    #[default]
    Retry,
    /// A failed commit aborts the retry loop and is returned as-is.
    Fatal,
}

/// An execution-ready statement: SQL text plus positional arguments.
///
/// Immutable once built; [`DbSession::batch`] takes a slice of these.
#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Statement {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append one positional argument.
    pub fn bind(mut self, value: impl Into<SqlParam>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// Statement execution context over a shared pool.
///
/// Holds at most one open transaction; while it is open, every statement
/// runs through it instead of the pool. Methods take `&mut self`, so a
/// session cannot be shared across concurrent units of work. An unresolved
/// transaction rolls back when the session is dropped.
pub struct DbSession {
    pool: SqlitePool,
    tx: Option<Transaction<'static, Sqlite>>,
    commit_policy: CommitPolicy,
}

impl DbSession {
    pub fn new(pool: SqlitePool) -> Self {
        DbSession {
            pool,
            tx: None,
            commit_policy: CommitPolicy::default(),
        }
    }

    /// Replace the commit-failure policy for [`transaction`](Self::transaction).
    pub fn with_commit_policy(mut self, policy: CommitPolicy) -> Self {
        self.commit_policy = policy;
        self
    }

    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }

    /// Open a transaction. All statements run through it until it is
    /// resolved by [`commit`](Self::commit) or [`rollback`](Self::rollback).
    pub async fn begin(&mut self) -> Result<()> {
        if self.tx.is_some() {
            return Err(DbError::TransactionAlreadyOpen);
        }
        self.tx = Some(self.pool.begin().await?);
        Ok(())
    }

    /// Commit the open transaction. The handle is cleared even when the
    /// commit itself fails; a resolved transaction is never reused.
    pub async fn commit(&mut self) -> Result<()> {
        let tx = self.tx.take().ok_or(DbError::TransactionNotOpen)?;
        tx.commit().await?;
        Ok(())
    }

    /// Roll back the open transaction. Clears the handle like
    /// [`commit`](Self::commit).
    pub async fn rollback(&mut self) -> Result<()> {
        let tx = self.tx.take().ok_or(DbError::TransactionNotOpen)?;
        tx.rollback().await?;
        Ok(())
    }

    /// Run a row-returning statement and hand the fetched rows to `scan`
    /// exactly once.
    ///
    /// Rows and statement are released before this returns, whether `scan`
    /// succeeded or not; `scan` cannot retain the rows past its call.
    pub async fn query<F>(&mut self, sql: &str, params: &[SqlParam], scan: F) -> Result<()>
    where
        F: FnOnce(&[SqliteRow]) -> Result<()>,
    {
        let query = bind_params(sqlx::query(sql).persistent(false), params);
        let rows = match self.tx.as_mut() {
            Some(tx) => query.fetch_all(&mut **tx).await?,
            None => query.fetch_all(&self.pool).await?,
        };
        scan(&rows)
    }

    /// Run a non-row statement; returns the affected row count.
    pub async fn exec(&mut self, sql: &str, params: &[SqlParam]) -> Result<i64> {
        let done = self.run(sql, params).await?;
        Ok(done.rows_affected() as i64)
    }

    /// Run a single-row insert; returns the generated row id.
    pub async fn insert(&mut self, sql: &str, params: &[SqlParam]) -> Result<i64> {
        let done = self.run(sql, params).await?;
        Ok(done.last_insert_rowid())
    }

    async fn run(&mut self, sql: &str, params: &[SqlParam]) -> Result<SqliteQueryResult> {
        let query = bind_params(sqlx::query(sql).persistent(false), params);
        let done = match self.tx.as_mut() {
            Some(tx) => query.execute(&mut **tx).await?,
            None => query.execute(&self.pool).await?,
        };
        Ok(done)
    }

    /// Run `work` inside a transaction, retrying the whole attempt up to
    /// `attempts` times. `attempts == 0` fails immediately without touching
    /// the database.
    ///
    /// Each failed attempt is rolled back before the next begins. A rollback
    /// failure is suppressed (logged at `warn`) so the unit-of-work error
    /// stays visible. A commit failure after a successful unit of work
    /// follows the session's [`CommitPolicy`].
    pub async fn transaction<F>(&mut self, attempts: u32, mut work: F) -> Result<()>
    where
        F: for<'c> FnMut(&'c mut DbSession) -> BoxFuture<'c, Result<()>>,
    {
        if attempts == 0 {
            return Err(DbError::RetryBudgetExhausted);
        }
        let mut last_err = None;
        for attempt in 1..=attempts {
            if let Err(err) = self.begin().await {
                debug!(attempt, error = %err, "transaction begin failed");
                last_err = Some(err);
                continue;
            }
            match work(&mut *self).await {
                Ok(()) => match self.commit().await {
                    Ok(()) => return Ok(()),
                    Err(err) => match self.commit_policy {
                        CommitPolicy::Fatal => return Err(err),
                        CommitPolicy::Retry => {
                            debug!(attempt, error = %err, "transaction commit failed");
                            last_err = Some(err);
                        }
                    },
                },
                Err(err) => {
                    if let Err(rb) = self.rollback().await {
                        warn!(error = %rb, "rollback failed after unit-of-work error");
                    }
                    debug!(attempt, error = %err, "unit of work failed");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or(DbError::RetryBudgetExhausted))
    }

    /// Execute `steps` in order inside one transaction; the first failing
    /// statement aborts the batch. Either every statement applies or none
    /// do. The whole batch is retried up to [`BATCH_ATTEMPTS`] times.
    pub async fn batch(&mut self, steps: &[Statement]) -> Result<()> {
        let steps: Arc<[Statement]> = steps.into();
        self.transaction(BATCH_ATTEMPTS, move |db| {
            let steps = Arc::clone(&steps);
            Box::pin(async move {
                for step in steps.iter() {
                    db.exec(&step.sql, &step.params).await?;
                }
                Ok(())
            })
        })
        .await
    }
}
