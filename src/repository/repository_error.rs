use std::fmt;

use sqlx::error::ErrorKind;

#[derive(Debug)]
pub enum RepositoryError {
    AlreadyExists(String),
    ValidationError(String),
    DatabaseError(String),
    ConnectionError(String),
    SerializationError(String),
    /// Generic error that wraps any error implementing std::error::Error
    Generic(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::AlreadyExists(msg) => write!(f, "Already Exists: {}", msg),
            RepositoryError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            RepositoryError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            RepositoryError::ConnectionError(msg) => write!(f, "Connection Error: {}", msg),
            RepositoryError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            RepositoryError::Generic(err) => write!(f, "Repository Error: {}", err),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Generic(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

// Convenient constructors
impl RepositoryError {
    pub fn already_exists<T: Into<String>>(msg: T) -> Self {
        RepositoryError::AlreadyExists(msg.into())
    }

    pub fn database<T: Into<String>>(msg: T) -> Self {
        RepositoryError::DatabaseError(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ConnectionError(msg.into())
    }

    pub fn generic<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RepositoryError::Generic(Box::new(err))
    }
}

// SQLite-specific conversions
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                // Primary key clash on the short record id
                ErrorKind::UniqueViolation => {
                    RepositoryError::AlreadyExists(format!("Duplicate key: {}", db_err))
                }
                // A row the schema refuses: missing NOT NULL column or failed CHECK
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    RepositoryError::ValidationError(format!("Rejected by schema: {}", db_err))
                }
                _ => RepositoryError::DatabaseError(format!("Database error: {}", db_err)),
            },
            sqlx::Error::Io(io_err) => {
                RepositoryError::ConnectionError(format!("IO error: {}", io_err))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                RepositoryError::ConnectionError(format!("Connection pool unavailable: {}", err))
            }
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => {
                RepositoryError::SerializationError(format!("Row decoding error: {}", err))
            }
            other => RepositoryError::Generic(Box::new(other)),
        }
    }
}

// Result type alias for convenience
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_closed_is_connection_error() {
        let err = RepositoryError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, RepositoryError::ConnectionError(_)));
    }

    #[test]
    fn test_missing_column_is_serialization_error() {
        let err = RepositoryError::from(sqlx::Error::ColumnNotFound("price".to_string()));
        assert!(matches!(err, RepositoryError::SerializationError(_)));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_generic_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = RepositoryError::generic(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
