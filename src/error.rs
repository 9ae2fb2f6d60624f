use thiserror::Error;

/// Crate-wide error type.
///
/// Backend driver errors are carried unwrapped so that callers logging a
/// swallowed failure still see the original cause.
#[derive(Debug, Error)]
pub enum TasktrackError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("health monitor error: {0}")]
    Health(String),
}

pub type Result<T> = std::result::Result<T, TasktrackError>;
