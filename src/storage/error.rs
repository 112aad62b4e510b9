//! Error type for storage reads.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::fmt;

/// Failure of a read against the order store.
///
/// A failed read never yields partial rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The store could not be reached (pool checkout timed out, connection refused or closed)
    StorageUnavailable(String),
    /// Any other read failure surfaced by the engine or while decoding rows
    StorageError(String),
}

impl QueryError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, QueryError::StorageUnavailable(_))
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            QueryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<r2d2::Error> for QueryError {
    fn from(e: r2d2::Error) -> Self {
        QueryError::StorageUnavailable(e.to_string())
    }
}

impl From<DieselError> for QueryError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
                QueryError::StorageUnavailable(e.to_string())
            }
            other => QueryError::StorageError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_connection_is_unavailable() {
        let e = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection unexpectedly".to_string()),
        );
        let err = QueryError::from(e);
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("server closed the connection"));
    }

    #[test]
    fn test_other_database_errors_are_storage_errors() {
        let e = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("violates foreign key constraint".to_string()),
        );
        assert!(matches!(QueryError::from(e), QueryError::StorageError(_)));

        let e = DieselError::DeserializationError("invalid numeric".into());
        assert!(matches!(QueryError::from(e), QueryError::StorageError(_)));
    }
}
