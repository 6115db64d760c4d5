use thiserror::Error;

/// Error type for kitbag-db operations.
#[derive(Error, Debug)]
pub enum DbError {
    /// The pool or the open transaction rejected the statement, at
    /// preparation or during execution.
    #[error("database error: {0}")]
    Driver(#[from] sqlx::Error),

    /// Commit or rollback was requested with no transaction open.
    #[error("no open transaction")]
    TransactionNotOpen,

    /// Begin was requested while a transaction is already open.
    #[error("transaction already open")]
    TransactionAlreadyOpen,

    /// The transaction runner was invoked with a zero attempt budget.
    #[error("transaction retry budget must be positive")]
    RetryBudgetExhausted,

    /// Failure raised by caller-supplied code (scan callback or unit of
    /// work) that is not itself a database error.
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DbError {
    /// Wrap a non-database failure from caller-supplied code.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DbError::Other(err.into())
    }
}

/// Result type alias for kitbag-db operations.
pub type Result<T> = std::result::Result<T, DbError>;
