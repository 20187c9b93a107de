//! # Application Error Type
//!
//! Unified error type for the console app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error Flow                                       │
//! │                                                                         │
//! │  bad price / unknown name / bad menu choice                            │
//! │      └──► handled inside the menu loop (message + re-prompt)           │
//! │                                                                         │
//! │  CoreError (e.g. zero payment amount)                                  │
//! │      └──► reported to the user by the menu loop, loop continues        │
//! │                                                                         │
//! │  std::io::Error (stdout closed, stdin unreadable)                      │
//! │      └──► AppError::Io, propagates out of run() → exit status 1        │
//! │                                                                         │
//! │  End of input is NOT an error: the session ends like "Exit".           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopcart_core::CoreError;
use thiserror::Error;

/// Errors that can escape a console session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading from stdin or writing to stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A business rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_message() {
        let err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "Console I/O failed: closed");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: AppError = CoreError::InvalidPaymentAmount {
            reason: "0.00 is not a positive amount".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Core(_)));
        assert_eq!(
            err.to_string(),
            "Invalid payment amount: 0.00 is not a positive amount"
        );
    }
}
