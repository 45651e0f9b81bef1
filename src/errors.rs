use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::scorm;
use crate::duration::Designator;

/// Result codes a data-model type validator hands back to its caller.
///
/// The catalog is owned by the data model; validators only pick one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoError,
    TypeMismatch,
    UnknownException,
}

impl ErrorCode {
    pub fn is_ok(self) -> bool {
        self == ErrorCode::NoError
    }

    /// SCORM 2004 run-time error number reported through `GetLastError`.
    pub fn scorm_code(self) -> u16 {
        match self {
            ErrorCode::NoError => scorm::NO_ERROR,
            ErrorCode::TypeMismatch => scorm::TYPE_MISMATCH,
            ErrorCode::UnknownException => scorm::GENERAL_EXCEPTION,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NoError => write!(f, "NO_ERROR"),
            ErrorCode::TypeMismatch => write!(f, "TYPE_MISMATCH"),
            ErrorCode::UnknownException => write!(f, "UNKNOWN_EXCEPTION"),
        }
    }
}

/// Why a duration string could not be tokenized or normalized.
///
/// Positions are byte offsets into the input string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("Empty duration")]
    Empty,

    #[error("Duration must start with 'P'")]
    MissingPrefix,

    #[error("Unexpected character {found:?} at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    #[error("Expected digits at position {position}")]
    MissingDigits { position: usize },

    #[error("Number at position {position} has no designator")]
    MissingDesignator { position: usize },

    #[error("Designator {0} appears more than once")]
    DuplicateDesignator(Designator),

    #[error("Designator {0} is out of order")]
    OutOfOrder(Designator),

    #[error("Only seconds may carry a fraction, found one on {0}")]
    FractionNotAllowed(Designator),

    #[error("Fractional seconds allow at most {max} digits, found {digits}")]
    FractionTooLong { digits: usize, max: usize },

    #[error("Value for {0} overflows the total")]
    Overflow(Designator),

    #[error("Seconds value is not finite")]
    NonFiniteSeconds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display_matches_catalog_names() {
        assert_eq!(ErrorCode::NoError.to_string(), "NO_ERROR");
        assert_eq!(ErrorCode::TypeMismatch.to_string(), "TYPE_MISMATCH");
        assert_eq!(ErrorCode::UnknownException.to_string(), "UNKNOWN_EXCEPTION");
    }

    #[test]
    fn test_error_code_scorm_numbers() {
        assert_eq!(ErrorCode::NoError.scorm_code(), 0);
        assert_eq!(ErrorCode::TypeMismatch.scorm_code(), 406);
        assert_eq!(ErrorCode::UnknownException.scorm_code(), 101);
        assert!(ErrorCode::NoError.is_ok());
        assert!(!ErrorCode::TypeMismatch.is_ok());
    }

    #[test]
    fn test_error_code_yaml_names() {
        let code: ErrorCode = serde_yaml::from_str("TYPE_MISMATCH").unwrap();
        assert_eq!(code, ErrorCode::TypeMismatch);
        let code: ErrorCode = serde_yaml::from_str("UNKNOWN_EXCEPTION").unwrap();
        assert_eq!(code, ErrorCode::UnknownException);
    }

    #[test]
    fn test_duration_error_messages() {
        let err = DurationError::UnexpectedCharacter { found: 'X', position: 1 };
        assert_eq!(err.to_string(), "Unexpected character 'X' at position 1");

        let err = DurationError::FractionTooLong { digits: 3, max: 2 };
        assert!(err.to_string().contains("at most 2 digits"));

        let err = DurationError::OutOfOrder(Designator::Years);
        assert_eq!(err.to_string(), "Designator Y is out of order");
    }
}
