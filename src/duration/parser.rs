//! Normalization of a duration into total seconds.

use std::{fmt, str::FromStr, time::Duration};

use serde::Serialize;
use tracing::{debug, trace};

use super::tokenizer::{tokenize, Component, Designator, Tokens};
use crate::constants::{grammar, time};
use crate::errors::DurationError;

/// A tokenized duration with its numeric components.
///
/// Missing components are zero; `seconds` stays `None` when the value carries
/// no `S` component at all.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DurationValue {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: Option<f64>,
}

impl DurationValue {
    /// Tokenizes and converts `value`.
    ///
    /// Fractional seconds may carry any number of digits here; the validator
    /// is the one that enforces the two-digit limit.
    pub fn parse(value: &str) -> Result<Self, DurationError> {
        let tokens = tokenize(value)?;
        Self::from_tokens(&tokens)
    }

    pub fn from_tokens(tokens: &Tokens<'_>) -> Result<Self, DurationError> {
        let mut duration = DurationValue::default();
        for component in tokens.components() {
            match component.designator {
                Designator::Years => duration.years = parse_count(component)?,
                Designator::Months => duration.months = parse_count(component)?,
                Designator::Days => duration.days = parse_count(component)?,
                Designator::Hours => duration.hours = parse_count(component)?,
                Designator::Minutes => duration.minutes = parse_count(component)?,
                Designator::Seconds => duration.seconds = Some(parse_seconds(component.literal)?),
            }
        }
        Ok(duration)
    }

    /// Total length in seconds, using the fixed year and month factors.
    ///
    /// Fractional seconds are floored to hundredths before being added.
    ///
    /// # Errors
    /// * [`DurationError::Overflow`] when the integer part exceeds `i64::MAX`.
    /// * [`DurationError::NonFiniteSeconds`] when the sum is not finite.
    pub fn total_seconds(&self) -> Result<f64, DurationError> {
        let whole = [
            (Designator::Years, self.years),
            (Designator::Months, self.months),
            (Designator::Days, self.days),
            (Designator::Hours, self.hours),
            (Designator::Minutes, self.minutes),
        ]
        .into_iter()
        .try_fold(0_u64, |total, (designator, count)| {
            count
                .checked_mul(designator.seconds_per_unit())
                .and_then(|seconds| total.checked_add(seconds))
                .filter(|total| *total <= time::MAX_TOTAL_SECONDS)
                .ok_or(DurationError::Overflow(designator))
        })?;

        let total = match self.seconds {
            Some(seconds) => floor_to_hundredths(seconds) + whole as f64,
            None => whole as f64,
        };

        if total.is_finite() {
            Ok(total)
        } else {
            Err(DurationError::NonFiniteSeconds)
        }
    }

    /// Converts into a [`std::time::Duration`], or `None` when the total does
    /// not fit.
    pub fn to_std_duration(&self) -> Option<Duration> {
        let total = self.total_seconds().ok()?;
        Duration::try_from_secs_f64(total).ok()
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == Ok(0.0)
    }
}

impl FromStr for DurationValue {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationValue::parse(s)
    }
}

/// Canonical form: zero components are left out, seconds are shown floored to
/// hundredths, and an all-zero duration renders as `PT0S`.
impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.seconds.map(floor_to_hundredths).filter(|s| *s > 0.0);
        let has_date = self.years > 0 || self.months > 0 || self.days > 0;
        let has_time = self.hours > 0 || self.minutes > 0 || seconds.is_some();

        if !has_date && !has_time {
            return write!(f, "PT0S");
        }

        write!(f, "P")?;
        for (count, designator) in [
            (self.years, Designator::Years),
            (self.months, Designator::Months),
            (self.days, Designator::Days),
        ] {
            if count > 0 {
                write!(f, "{count}{designator}")?;
            }
        }

        if has_time {
            write!(f, "T")?;
            for (count, designator) in [(self.hours, Designator::Hours), (self.minutes, Designator::Minutes)] {
                if count > 0 {
                    write!(f, "{count}{designator}")?;
                }
            }
            if let Some(seconds) = seconds {
                write!(f, "{seconds}S")?;
            }
        }
        Ok(())
    }
}

/// Total seconds represented by `value`, or `None` when it cannot be parsed.
///
/// Never panics and never returns a partial sum.
pub fn parse(value: &str) -> Option<f64> {
    match DurationValue::parse(value).and_then(|duration| duration.total_seconds()) {
        Ok(total) => {
            trace!(value, total, "Parsed duration");
            Some(total)
        }
        Err(e) => {
            debug!(value, error = %e, "Duration is unparsable");
            None
        }
    }
}

fn parse_count(component: &Component<'_>) -> Result<u64, DurationError> {
    // Digits only, so the sole failure is a value too large for u64.
    component
        .whole
        .parse()
        .map_err(|_| DurationError::Overflow(component.designator))
}

fn parse_seconds(literal: &str) -> Result<f64, DurationError> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .ok_or(DurationError::NonFiniteSeconds)
}

fn floor_to_hundredths(seconds: f64) -> f64 {
    (seconds * grammar::FRACTION_SCALE).floor() / grammar::FRACTION_SCALE
}
