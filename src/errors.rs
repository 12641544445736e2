use thiserror::Error;

/// Errors raised at the storefront's boundaries.
///
/// State transitions themselves never fail; these cover command parsing,
/// lookups requested by the user, serialization and I/O.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ServiceError {
    /// Errors the interactive session reports and then keeps running after.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ServiceError::NotFound(_) | ServiceError::InvalidInput(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
