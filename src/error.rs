use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("Database connection error: {0}")]
    Connection(SqlxError),

    #[error("Statement error: {0}")]
    Statement(SqlxError),

    #[error("User not found: id={id}")]
    NotFound { id: i64 },

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// SQLite primary result codes that mean the file itself could not be used.
const SQLITE_CANTOPEN: i32 = 14;
const SQLITE_NOTADB: i32 = 26;

/// Errors raised before a statement reaches the database are connection
/// failures; everything else the driver reports is about the statement.
impl From<SqlxError> for StoreError {
    fn from(e: SqlxError) -> Self {
        let connection = match &e {
            SqlxError::Configuration(_)
            | SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed => true,
            SqlxError::Database(db) => is_open_failure(db.code().as_deref()),
            _ => false,
        };
        if connection {
            StoreError::Connection(e)
        } else {
            StoreError::Statement(e)
        }
    }
}

/// SQLite reports extended codes; the low byte is the primary code.
fn is_open_failure(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .map(|c| matches!(c & 0xff, SQLITE_CANTOPEN | SQLITE_NOTADB))
        .unwrap_or(false)
}
