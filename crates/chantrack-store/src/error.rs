use thiserror::Error;

/// Errors produced by the store layer.
///
/// Lookups do not have a "not found" variant: an absent row is reported as
/// `Ok(None)` by the query helpers, never as an error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A primary-key or unique constraint was violated on insert.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The database could not be opened or the connection was lost.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other SQLite error, surfaced unmodified.
    #[error("Database error: {0}")]
    Sqlite(rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<rusqlite::Error> for StoreError {
    /// Classify driver errors into the store taxonomy.
    ///
    /// Constraint violations become [`StoreError::DuplicateKey`] (the only
    /// constraints in the schema are primary keys), open/connectivity
    /// failures become [`StoreError::Connection`], everything else passes
    /// through as [`StoreError::Sqlite`].
    fn from(e: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::DuplicateKey(e.to_string()),
            Some(ErrorCode::CannotOpen)
            | Some(ErrorCode::NotADatabase)
            | Some(ErrorCode::DatabaseCorrupt) => StoreError::Connection(e.to_string()),
            _ => StoreError::Sqlite(e),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
