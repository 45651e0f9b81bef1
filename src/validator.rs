//! Duration data-type validator.

use tracing::debug;

use crate::constants::datatype;
use crate::duration::{parse, tokenize};
use crate::errors::{DurationError, ErrorCode};

/// Contract every data-model type validator fulfils.
///
/// Implementations hold no state between calls and are shared freely across
/// threads by the data model.
pub trait TypeValidator: Send + Sync {
    /// Name of the data-model type this validator enforces.
    fn type_name(&self) -> &'static str;

    /// Checks `value` against the type's format.
    fn validate(&self, value: Option<&str>) -> ErrorCode;

    /// Compares two values of this type for equality.
    ///
    /// `delimiters` is the set of delimiters shared by both values, for types
    /// that carry them.
    fn compare(&self, first: Option<&str>, second: Option<&str>, delimiters: Option<&[String]>) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationValidator;

impl DurationValidator {
    pub fn new() -> Self {
        Self
    }
}

impl TypeValidator for DurationValidator {
    fn type_name(&self) -> &'static str {
        datatype::TYPE_NAME
    }

    fn validate(&self, value: Option<&str>) -> ErrorCode {
        validate(value)
    }

    fn compare(&self, first: Option<&str>, second: Option<&str>, delimiters: Option<&[String]>) -> bool {
        compare(first, second, delimiters)
    }
}

/// Validates a duration value.
///
/// # Returns
/// * `UnknownException` when no value was supplied
/// * `TypeMismatch` when the value does not follow the grammar, or follows it
///   without naming any component (`P`, `PT`, `P1DT`)
/// * `NoError` otherwise
pub fn validate(value: Option<&str>) -> ErrorCode {
    let Some(value) = value else {
        debug!("Duration validation called without a value");
        return ErrorCode::UnknownException;
    };

    match check_format(value) {
        Ok(()) => ErrorCode::NoError,
        Err(e) => {
            debug!(value, error = %e, "Duration failed validation");
            ErrorCode::TypeMismatch
        }
    }
}

fn check_format(value: &str) -> Result<(), DurationError> {
    let tokens = tokenize(value)?;
    tokens.check_fraction_digits()?;

    // A string of length 1 that got this far is always "P", so the length
    // check overlaps the bare-suffix check. Both stay.
    if tokens.ends_bare() || value.len() == 1 {
        return Err(DurationError::MissingDesignator {
            position: value.len(),
        });
    }
    Ok(())
}

/// Compares two durations by their total seconds.
///
/// `P1D` equals `PT24H`. Returns `false` when either value is missing or
/// unparsable, and whenever a delimiter set is supplied, since durations
/// never carry delimiters.
pub fn compare(first: Option<&str>, second: Option<&str>, delimiters: Option<&[String]>) -> bool {
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };

    if delimiters.is_some() {
        debug!(first, second, "Delimiters supplied for a duration comparison");
        return false;
    }

    match (parse(first), parse(second)) {
        (Some(a), Some(b)) => a.total_cmp(&b).is_eq(),
        _ => false,
    }
}
