//! Single forward scan over a duration string.
//!
//! The value is split at the `T` separator first, and each half is read as a
//! run of `<digits>[.<digits>]<designator>` components. Splitting up front is
//! what tells months (`M` before `T`) from minutes (`M` after `T`). Validation
//! and parsing both consume the same [`Tokens`], so the two can never disagree
//! about what a string contains.

use std::fmt;

use crate::constants::{grammar, time};
use crate::errors::DurationError;

/// Unit letter following a number.
///
/// Variants are declared in grammar order; the derived `Ord` is what enforces
/// "years before months before days" and "hours before minutes before seconds".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Designator {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Designator {
    pub fn letter(self) -> char {
        match self {
            Designator::Years => 'Y',
            Designator::Months | Designator::Minutes => 'M',
            Designator::Days => 'D',
            Designator::Hours => 'H',
            Designator::Seconds => 'S',
        }
    }

    pub fn seconds_per_unit(self) -> u64 {
        match self {
            Designator::Years => time::SECONDS_PER_YEAR,
            Designator::Months => time::SECONDS_PER_MONTH,
            Designator::Days => time::SECONDS_PER_DAY,
            Designator::Hours => time::SECONDS_PER_HOUR,
            Designator::Minutes => time::SECONDS_PER_MINUTE,
            Designator::Seconds => 1,
        }
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Date,
    Time,
}

impl Half {
    fn designator(self, letter: u8) -> Option<Designator> {
        match (self, letter) {
            (Half::Date, b'Y') => Some(Designator::Years),
            (Half::Date, b'M') => Some(Designator::Months),
            (Half::Date, b'D') => Some(Designator::Days),
            (Half::Time, b'H') => Some(Designator::Hours),
            (Half::Time, b'M') => Some(Designator::Minutes),
            (Half::Time, b'S') => Some(Designator::Seconds),
            _ => None,
        }
    }
}

/// One `<number><designator>` pair, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component<'a> {
    pub designator: Designator,
    /// Integer digits before any fraction.
    pub whole: &'a str,
    /// Digits after the `.`; only ever present on seconds.
    pub fraction: Option<&'a str>,
    /// The full number, `whole` plus `.fraction` when there is one.
    pub literal: &'a str,
}

/// Result of tokenizing a structurally well-formed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    components: Vec<Component<'a>>,
    has_time_separator: bool,
}

impl<'a> Tokens<'a> {
    pub fn components(&self) -> &[Component<'a>] {
        &self.components
    }

    pub fn has_time_separator(&self) -> bool {
        self.has_time_separator
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True when nothing follows the last designator letter: a bare `P`, or a
    /// `T` with no time components after it.
    pub fn ends_bare(&self) -> bool {
        let last_in_time_half = self
            .components
            .last()
            .is_some_and(|c| c.designator >= Designator::Hours);
        if self.has_time_separator() {
            !last_in_time_half
        } else {
            self.is_empty()
        }
    }

    /// The tokenizer accepts any number of fractional second digits; the
    /// data-model grammar allows at most two.
    pub fn check_fraction_digits(&self) -> Result<(), DurationError> {
        match self.components.iter().find_map(|c| c.fraction).map(str::len) {
            Some(digits) if digits > grammar::MAX_FRACTION_DIGITS => {
                Err(DurationError::FractionTooLong {
                    digits,
                    max: grammar::MAX_FRACTION_DIGITS,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Tokenizes `value`, consuming the whole string.
pub fn tokenize(value: &str) -> Result<Tokens<'_>, DurationError> {
    match value.as_bytes().first() {
        None => return Err(DurationError::Empty),
        Some(&grammar::PERIOD_PREFIX) => {}
        Some(_) => return Err(DurationError::MissingPrefix),
    }

    let body = &value[1..];
    let (date, time) = match body.find(grammar::TIME_SEPARATOR as char) {
        // Offsets are relative to `value`: 'P' is at 0, `body` starts at 1.
        Some(idx) => (&body[..idx], Some((idx + 2, &body[idx + 1..]))),
        None => (body, None),
    };

    let mut components = Vec::with_capacity(6);
    scan_half(date, 1, Half::Date, &mut components)?;
    if let Some((offset, time)) = time {
        scan_half(time, offset, Half::Time, &mut components)?;
    }

    Ok(Tokens {
        components,
        has_time_separator: time.is_some(),
    })
}

fn scan_half<'a>(
    text: &'a str,
    offset: usize,
    half: Half,
    out: &mut Vec<Component<'a>>,
) -> Result<(), DurationError> {
    let bytes = text.as_bytes();
    let mut cursor = 0;
    let mut previous: Option<Designator> = None;

    while cursor < bytes.len() {
        let start = cursor;
        cursor = skip_digits(bytes, cursor);
        if cursor == start {
            return Err(unexpected(text, start, offset));
        }
        let whole = &text[start..cursor];

        let mut fraction = None;
        if bytes.get(cursor) == Some(&grammar::FRACTION_SEPARATOR) {
            let fraction_start = cursor + 1;
            cursor = skip_digits(bytes, fraction_start);
            if cursor == fraction_start {
                return Err(DurationError::MissingDigits {
                    position: offset + fraction_start,
                });
            }
            fraction = Some(&text[fraction_start..cursor]);
        }

        let Some(&letter) = bytes.get(cursor) else {
            return Err(DurationError::MissingDesignator {
                position: offset + start,
            });
        };
        let Some(designator) = half.designator(letter) else {
            return Err(unexpected(text, cursor, offset));
        };

        if fraction.is_some() && designator != Designator::Seconds {
            return Err(DurationError::FractionNotAllowed(designator));
        }
        if let Some(previous) = previous {
            if designator == previous {
                return Err(DurationError::DuplicateDesignator(designator));
            }
            if designator < previous {
                return Err(DurationError::OutOfOrder(designator));
            }
        }
        previous = Some(designator);

        out.push(Component {
            designator,
            whole,
            fraction,
            literal: &text[start..cursor],
        });
        cursor += 1;
    }

    Ok(())
}

fn skip_digits(bytes: &[u8], mut cursor: usize) -> usize {
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        cursor += 1;
    }
    cursor
}

// Only ASCII bytes are ever skipped, so `index` sits on a char boundary.
fn unexpected(text: &str, index: usize, offset: usize) -> DurationError {
    match text[index..].chars().next() {
        Some(found) => DurationError::UnexpectedCharacter {
            found,
            position: offset + index,
        },
        None => DurationError::MissingDigits {
            position: offset + index,
        },
    }
}
