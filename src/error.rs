use thiserror::Error;

/// Closed error surface of the persistence core.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched a primary-key lookup.
    #[error("record not found")]
    NotFound,

    /// A uniqueness constraint rejected an insert: duplicate registration
    /// for the same user/event pair, or a duplicate identity.
    #[error("record already exists")]
    AlreadyExists,

    /// Any other database failure (connectivity, malformed statement,
    /// unexpected constraint).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// True when the driver reports a uniqueness violation. Uses the driver's
/// structured error kind, never the message text.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Maps an insert failure: uniqueness conflicts become `AlreadyExists`,
/// everything else stays a database failure.
pub(crate) fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if is_unique_violation(&err) {
        StoreError::AlreadyExists
    } else {
        StoreError::Database(err)
    }
}
