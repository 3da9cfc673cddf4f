//! Error handling primitives shared by the adapter and both frontends.

use thiserror::Error;

/// Stable error codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// Call arguments failed arity or type validation.
    ArgumentType = 1,
    /// No export is registered under the requested name.
    UnknownOperation = 2,
    /// The C ABI payload could not be decoded.
    InvalidPayload = 3,
}

impl ErrorCode {
    /// Code string surfaced to hosts (the `code` property on a JS error).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",
            ErrorCode::ArgumentType => "ERR_INVALID_ARG_TYPE",
            ErrorCode::UnknownOperation => "ERR_UNKNOWN_OPERATION",
            ErrorCode::InvalidPayload => "ERR_INVALID_PAYLOAD",
        }
    }
}

/// Why a call's arguments were rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ArgumentTypeError {
    #[error("String expected")]
    StringExpected,
    #[error("Two numbers expected")]
    TwoNumbersExpected,
    #[error("Arguments must be numbers")]
    NumbersExpected,
}

/// Canonical error type for the crate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum HelloError {
    #[error(transparent)]
    ArgumentType(#[from] ArgumentTypeError),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid call payload: {0}")]
    InvalidPayload(String),
}

/// Result alias used throughout the crate.
pub type HelloResult<T> = Result<T, HelloError>;

impl HelloError {
    /// Machine parsable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            HelloError::ArgumentType(_) => ErrorCode::ArgumentType,
            HelloError::UnknownOperation(_) => ErrorCode::UnknownOperation,
            HelloError::InvalidPayload(_) => ErrorCode::InvalidPayload,
        }
    }

    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorCode::Ok as u32, 0);
        assert_eq!(ErrorCode::ArgumentType as u32, 1);
        assert_eq!(ErrorCode::UnknownOperation as u32, 2);
        assert_eq!(ErrorCode::InvalidPayload as u32, 3);
    }

    #[test]
    fn argument_errors_keep_their_messages() {
        let err = HelloError::from(ArgumentTypeError::StringExpected);
        assert_eq!(err.to_string(), "String expected");
        assert_eq!(err.code(), ErrorCode::ArgumentType);
        assert_eq!(err.code().as_str(), "ERR_INVALID_ARG_TYPE");

        assert_eq!(
            HelloError::from(ArgumentTypeError::TwoNumbersExpected).to_string(),
            "Two numbers expected"
        );
        assert_eq!(
            HelloError::from(ArgumentTypeError::NumbersExpected).to_string(),
            "Arguments must be numbers"
        );
    }

    #[test]
    fn unknown_operation_names_the_export() {
        let err = HelloError::UnknownOperation("subtract".to_string());
        assert_eq!(err.to_string(), "Unknown operation: subtract");
        assert_eq!(err.code(), ErrorCode::UnknownOperation);
    }
}
