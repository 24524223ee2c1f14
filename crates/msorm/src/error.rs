//! Error types for msorm

use thiserror::Error;

/// Boxed error reported by the execution layer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for msorm operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for dialect operations
#[derive(Debug, Error)]
pub enum OrmError {
    /// Statement execution failed in the underlying driver.
    ///
    /// The driver error is carried unchanged as the source.
    #[error("Execution error: {0}")]
    Execution(#[source] BoxError),

    /// Validation error (strict identifier checks)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl OrmError {
    /// Wrap a driver error as an execution error
    pub fn execution(err: impl Into<BoxError>) -> Self {
        Self::Execution(err.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an execution error
    pub fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Borrow the driver error, if this is an execution error.
    pub fn execution_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Execution(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_keeps_driver_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
        let err = OrmError::execution(io);
        assert!(err.is_execution());
        assert_eq!(err.to_string(), "Execution error: socket closed");

        let source = err.execution_source().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn execution_from_message() {
        let err = OrmError::execution("deadlock victim");
        assert_eq!(err.to_string(), "Execution error: deadlock victim");
    }

    #[test]
    fn validation_helper() {
        let err = OrmError::validation("bad name");
        assert!(err.is_validation());
        assert!(!err.is_execution());
        assert!(err.execution_source().is_none());
    }
}
