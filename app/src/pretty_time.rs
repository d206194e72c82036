//! Renders durations in seconds as `HH:MM:SS`.
//!
//! Input is accepted as an integer, a float or text and goes through an
//! explicit truncating parse before formatting. Malformed or negative input
//! is rejected instead of being formatted.

use std::fmt;

use thiserror::Error;

use crate::seconds::Seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input is not a number")]
    NotANumber,
    #[error("duration cannot be negative, got {0} seconds")]
    Negative(i64),
    #[error("duration is out of range")]
    OutOfRange,
}

/// A duration as received from a caller, before coercion to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeInput<'a> {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(&'a str),
}

impl TimeInput<'_> {
    /// Coerces the input to whole, non-negative seconds.
    ///
    /// Floats are truncated toward zero. Text is parsed base 10 from its
    /// leading integer: surrounding whitespace, a sign, and digits up to the
    /// first non-digit, so `"12.9"` and `"12abc"` both yield 12.
    pub fn coerce(self) -> Result<Seconds, Error> {
        let seconds = match self {
            TimeInput::Signed(value) => Seconds(value),
            TimeInput::Unsigned(value) => {
                Seconds(i64::try_from(value).map_err(|_| Error::OutOfRange)?)
            }
            TimeInput::Float(value) => truncate_float(value)?,
            TimeInput::Text(text) => parse_leading_int(text)?,
        };
        if seconds.is_negative() {
            Err(Error::Negative(seconds.0))
        } else {
            Ok(seconds)
        }
    }
}

impl From<i64> for TimeInput<'_> {
    fn from(value: i64) -> Self {
        TimeInput::Signed(value)
    }
}

impl From<i32> for TimeInput<'_> {
    fn from(value: i32) -> Self {
        TimeInput::Signed(value.into())
    }
}

impl From<u64> for TimeInput<'_> {
    fn from(value: u64) -> Self {
        TimeInput::Unsigned(value)
    }
}

impl From<u32> for TimeInput<'_> {
    fn from(value: u32) -> Self {
        TimeInput::Unsigned(value.into())
    }
}

impl From<f64> for TimeInput<'_> {
    fn from(value: f64) -> Self {
        TimeInput::Float(value)
    }
}

impl From<f32> for TimeInput<'_> {
    fn from(value: f32) -> Self {
        TimeInput::Float(value.into())
    }
}

impl From<Seconds> for TimeInput<'_> {
    fn from(value: Seconds) -> Self {
        TimeInput::Signed(value.0)
    }
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(value: &'a str) -> Self {
        TimeInput::Text(value)
    }
}

impl<'a> From<&'a String> for TimeInput<'a> {
    fn from(value: &'a String) -> Self {
        TimeInput::Text(value.as_str())
    }
}

fn truncate_float(value: f64) -> Result<Seconds, Error> {
    if !value.is_finite() {
        return Err(Error::NotANumber);
    }
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; the cast rounds it up to 2^63.
    if truncated >= i64::MAX as f64 || truncated < i64::MIN as f64 {
        return Err(Error::OutOfRange);
    }
    Ok(Seconds(truncated as i64))
}

fn parse_leading_int(text: &str) -> Result<Seconds, Error> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digit_count = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_count == 0 {
        return Err(Error::NotANumber);
    }
    text[..sign_len + digit_count]
        .parse()
        .map(Seconds)
        .map_err(|_| Error::OutOfRange)
}

/// A non-negative duration split into hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyTime {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl PrettyTime {
    pub fn from_seconds(total: Seconds) -> Result<Self, Error> {
        if total.is_negative() {
            return Err(Error::Negative(total.0));
        }
        // Non-negative totals keep every component in range.
        Ok(Self {
            hours: total.hours() as u64,
            minutes: total.minutes() as u8,
            seconds: total.seconds() as u8,
        })
    }
}

/// Every field is padded to two digits. Hours are never truncated.
impl fmt::Display for PrettyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Formats a duration in seconds as `HH:MM:SS`.
///
/// ```
/// assert_eq!(app::make_pretty_time(3661).unwrap(), "01:01:01");
/// assert_eq!(app::make_pretty_time("125").unwrap(), "00:02:05");
/// assert_eq!(app::make_pretty_time(90000).unwrap(), "25:00:00");
/// ```
pub fn make_pretty_time<'a>(input: impl Into<TimeInput<'a>>) -> Result<String, Error> {
    let seconds = input.into().coerce()?;
    PrettyTime::from_seconds(seconds).map(|pretty| pretty.to_string())
}

#[cfg(test)]
mod tests {
    use super::{make_pretty_time, Error, PrettyTime, TimeInput};
    use crate::seconds::Seconds;
    use proptest::prelude::*;

    #[yare::parameterized(
        zero            = { 0,       "00:00:00" },
        max_seconds     = { 59,      "00:00:59" },
        one_minute      = { 60,      "00:01:00" },
        each_field      = { 3661,    "01:01:01" },
        almost_a_day    = { 86399,   "23:59:59" },
        past_a_day      = { 90000,   "25:00:00" },
        three_digit_hrs = { 360000,  "100:00:00" },
        ten_minutes     = { 600,     "00:10:00" },
    )]
    fn integer_input(secs: i64, expected: &str) {
        assert_eq!(make_pretty_time(secs).unwrap(), expected);
    }

    #[yare::parameterized(
        plain           = { "125",      "00:02:05" },
        fraction        = { "125.9",    "00:02:05" },
        trailing_text   = { "125abc",   "00:02:05" },
        padded          = { "  125  ",  "00:02:05" },
        plus_sign       = { "+125",     "00:02:05" },
        leading_zeros   = { "000125",   "00:02:05" },
        exponent_ignored = { "1e3",     "00:00:01" },
        hex_is_base_ten = { "0x10",     "00:00:00" },
        negative_zero   = { "-0",       "00:00:00" },
    )]
    fn text_input(text: &str, expected: &str) {
        assert_eq!(make_pretty_time(text).unwrap(), expected);
    }

    #[yare::parameterized(
        truncates        = { 12.9,  "00:00:12" },
        negative_fraction = { -0.4, "00:00:00" },
        whole            = { 3600.0, "01:00:00" },
    )]
    fn float_input(value: f64, expected: &str) {
        assert_eq!(make_pretty_time(value).unwrap(), expected);
    }

    #[yare::parameterized(
        empty        = { "",     Error::NotANumber },
        blank        = { "   ",  Error::NotANumber },
        letters      = { "abc",  Error::NotANumber },
        sign_only    = { "-",    Error::NotANumber },
        leading_dot  = { ".5",   Error::NotANumber },
        negative     = { "-90",  Error::Negative(-90) },
        overflow     = { "99999999999999999999", Error::OutOfRange },
    )]
    fn rejected_text(text: &str, expected: Error) {
        assert_eq!(make_pretty_time(text), Err(expected));
    }

    #[test]
    fn string_and_integer_inputs_agree() {
        assert_eq!(make_pretty_time("125"), make_pretty_time(125));
        assert_eq!(make_pretty_time(&"125".to_owned()), make_pretty_time(125u32));
    }

    #[test]
    fn rejects_negative_numbers() {
        assert_eq!(make_pretty_time(-1), Err(Error::Negative(-1)));
        assert_eq!(make_pretty_time(-3.7), Err(Error::Negative(-3)));
    }

    #[test]
    fn text_and_integer_agree_at_i64_bounds() {
        assert_eq!(
            make_pretty_time("-9223372036854775808"),
            make_pretty_time(i64::MIN)
        );
        assert_eq!(
            make_pretty_time("-9223372036854775808"),
            Err(Error::Negative(i64::MIN))
        );
        assert_eq!(
            make_pretty_time("9223372036854775807"),
            make_pretty_time(i64::MAX)
        );
    }

    #[test]
    fn rejects_non_finite_floats() {
        assert_eq!(make_pretty_time(f64::NAN), Err(Error::NotANumber));
        assert_eq!(make_pretty_time(f64::INFINITY), Err(Error::NotANumber));
        assert_eq!(make_pretty_time(f64::NEG_INFINITY), Err(Error::NotANumber));
    }

    #[test]
    fn rejects_values_beyond_i64() {
        assert_eq!(make_pretty_time(u64::MAX), Err(Error::OutOfRange));
        assert_eq!(make_pretty_time(1e19), Err(Error::OutOfRange));
    }

    #[test]
    fn largest_duration_formats() {
        assert_eq!(
            make_pretty_time(i64::MAX).unwrap(),
            "2562047788015215:30:07"
        );
    }

    #[test]
    fn coerce_keeps_whole_seconds() {
        assert_eq!(TimeInput::Text(" 42s").coerce(), Ok(Seconds(42)));
        assert_eq!(TimeInput::from(Seconds(7)).coerce(), Ok(Seconds(7)));
    }

    #[test]
    fn pretty_time_rejects_negative_totals() {
        assert_eq!(
            PrettyTime::from_seconds(Seconds(-5)),
            Err(Error::Negative(-5))
        );
    }

    proptest! {
        #[test]
        fn repeated_calls_agree(secs in 0i64..=i64::MAX) {
            prop_assert_eq!(make_pretty_time(secs), make_pretty_time(secs));
        }

        #[test]
        fn text_matches_integer(secs in 0i64..100_000_000) {
            prop_assert_eq!(make_pretty_time(secs.to_string().as_str()), make_pretty_time(secs));
        }

        #[test]
        fn fields_reassemble_to_total(secs in 0i64..100_000_000) {
            let pretty = make_pretty_time(secs).unwrap();
            let fields: Vec<&str> = pretty.split(':').collect();
            prop_assert_eq!(fields.len(), 3);
            prop_assert!(fields.iter().all(|f| f.len() >= 2));
            prop_assert_eq!(fields[1].len(), 2);
            prop_assert_eq!(fields[2].len(), 2);

            let hours: i64 = fields[0].parse().unwrap();
            let minutes: i64 = fields[1].parse().unwrap();
            let seconds: i64 = fields[2].parse().unwrap();
            prop_assert!(minutes < 60 && seconds < 60);
            prop_assert_eq!(hours * 3600 + minutes * 60 + seconds, secs);
        }
    }
}
