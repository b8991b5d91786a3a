//! Repository layer for database operations

pub mod books;
pub mod readers;

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Round-trip to the database (used by the readiness check)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Turn a unique violation raised by the store into `Conflict(message)`.
pub(crate) fn unique_violation_as_conflict(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Conflict(message.to_string());
        }
    }
    AppError::Database(err)
}

/// Turn a foreign key violation raised by the store into `NotFound(message)`.
pub(crate) fn foreign_key_violation_as_not_found(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound(message.to_string());
        }
    }
    AppError::Database(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_constraint_errors_stay_database_errors() {
        let err = unique_violation_as_conflict(sqlx::Error::RowNotFound, "ISBN already exists");
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));

        let err = foreign_key_violation_as_not_found(sqlx::Error::PoolTimedOut, "Reader not found");
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }
}
