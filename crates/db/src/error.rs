//! Store-level failures.

/// A failed store operation.
///
/// [`PgStore`](crate::store::PgStore) surfaces PostgreSQL errors as
/// [`StoreError::Database`]; [`MemoryStore`](crate::store::MemoryStore)
/// reports the same constraint classes through the dedicated variants.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An error from sqlx (connectivity, constraint violation, decoding).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A referenced parent row does not exist.
    #[error("Foreign key violation: {table}.{column} references missing row")]
    ForeignKey {
        table: &'static str,
        column: &'static str,
    },

    /// A value collides with an existing row under a unique constraint.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: &'static str },

    /// A required column was not provided on insert.
    #[error("Null value in column {table}.{column} violates not-null constraint")]
    NotNull {
        table: &'static str,
        column: &'static str,
    },
}

impl StoreError {
    /// Name of the violated unique constraint, if this is a unique violation.
    ///
    /// Covers both memory-store violations and PostgreSQL error code 23505.
    pub fn unique_constraint(&self) -> Option<&str> {
        match self {
            StoreError::UniqueViolation { constraint } => Some(constraint),
            StoreError::Database(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some("23505") =>
            {
                db_err.constraint()
            }
            _ => None,
        }
    }

    /// Whether this is a foreign-key violation (PostgreSQL error code 23503).
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StoreError::ForeignKey { .. } => true,
            StoreError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some("23503")
            }
            _ => false,
        }
    }

    /// Whether this is a not-null violation (PostgreSQL error code 23502).
    pub fn is_not_null_violation(&self) -> bool {
        match self {
            StoreError::NotNull { .. } => true,
            StoreError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some("23502")
            }
            _ => false,
        }
    }
}
