//! Database error type

/// Errors raised by the store layer
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration '{name}' is recorded as applied but unknown to this build")]
    UnknownMigration { name: String },
}
