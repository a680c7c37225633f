/// Errors raised while reaching the database or running a procedure.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Connection settings are missing or malformed.
    #[error("Invalid database configuration: {0}")]
    Config(String),

    /// The database cannot be reached or the pool is unusable.
    #[error("Database unavailable: {0}")]
    Connection(#[source] sqlx::Error),

    /// The connection manager was shut down.
    #[error("Database connection manager has been shut down")]
    ShutDown,

    /// The procedure ran but reported a failure.
    #[error("Procedure {procedure} failed: {message}")]
    Procedure { procedure: String, message: String },
}

impl DbError {
    /// Classify an error raised while executing `procedure`.
    ///
    /// Transport and pool failures are connection errors; everything the
    /// server reported (raised exceptions, unknown function, bad argument
    /// types) and decoding failures belong to the procedure.
    pub fn from_call(procedure: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::Procedure {
                procedure: procedure.to_string(),
                message: db_err.message().to_string(),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            other => Self::Procedure {
                procedure: procedure.to_string(),
                message: other.to_string(),
            },
        }
    }

    /// Whether the error means the database could not be reached.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::ShutDown)
    }
}
