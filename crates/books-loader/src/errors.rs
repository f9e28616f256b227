use thiserror::Error;

/// Failure of a bulk load, tagged with the phase it happened in.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to open transaction: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("Insert of row {row} failed: {source}")]
    Insert {
        row: u64,
        #[source]
        source: sqlx::Error,
    },

    #[error("Commit failed, no rows were written: {0}")]
    Commit(#[source] sqlx::Error),

    #[error("Failed to close connection: {0}")]
    Close(#[source] sqlx::Error),

    /// Failure of caller-supplied SQL run inside a connection scope.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
