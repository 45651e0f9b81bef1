// Application-wide constants

/// Seconds-per-unit factors used when normalizing a duration.
///
/// Years and months are fixed approximations, not calendar arithmetic. Other
/// implementations of the data model use the same factors, so totals only
/// compare equal across runtimes if these stay as they are.
pub mod time {
    pub const SECONDS_PER_MINUTE: u64 = 60;
    pub const SECONDS_PER_HOUR: u64 = 3600;
    pub const SECONDS_PER_DAY: u64 = 86_400;
    pub const SECONDS_PER_MONTH: u64 = 2_628_029; // 30.417 days
    pub const SECONDS_PER_YEAR: u64 = 31_536_000; // 365 days, no leap years
    /// Integer totals must fit a signed 64-bit count of seconds.
    pub const MAX_TOTAL_SECONDS: u64 = i64::MAX as u64;
}

/// Duration grammar
pub mod grammar {
    pub const PERIOD_PREFIX: u8 = b'P';
    pub const TIME_SEPARATOR: u8 = b'T';
    pub const FRACTION_SEPARATOR: u8 = b'.';
    /// Fractional second digits accepted by the validator.
    pub const MAX_FRACTION_DIGITS: usize = 2;
    /// Fractional seconds are floored to hundredths.
    pub const FRACTION_SCALE: f64 = 100.0;
}

/// Data model type identification
pub mod datatype {
    pub const TYPE_NAME: &str = "duration";
}

/// SCORM 2004 run-time error numbers for the codes this crate returns
pub mod scorm {
    pub const NO_ERROR: u16 = 0;
    pub const GENERAL_EXCEPTION: u16 = 101;
    pub const TYPE_MISMATCH: u16 = 406;
}

/// Default configuration values
pub mod defaults {
    pub const CHECK_CONFIG_PATH: &str = "durations.yaml";
    pub const LOG_LEVEL: &str = "info";
}
