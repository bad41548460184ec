use thiserror::Error;

#[derive(Debug, Error)]
pub enum UmamiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// Device location could not be resolved. Callers are expected to fall
    /// back to a default region rather than abort.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// An upstream collaborator (places search, geocoding) failed.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type UmamiResult<T> = Result<T, UmamiError>;
