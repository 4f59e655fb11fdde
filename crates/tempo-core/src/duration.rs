//! Human-friendly duration parsing for slot lengths and extensions.
//!
//! Accepted forms: `"1.5 hours"`, `"2h"`, `"90 minutes"`, `"40 min"`, or a
//! bare number meaning hours. The result is always minutes.

use crate::errors::CoreError;

const HOUR_SUFFIXES: [&str; 4] = ["hours", "hour", "hrs", "hr"];
const MINUTE_SUFFIXES: [&str; 4] = ["minutes", "minute", "mins", "min"];

/// Parse a human duration into minutes. Rejects non-positive values.
pub fn parse_minutes(input: &str) -> Result<f64, CoreError> {
    let invalid = || CoreError::InvalidDuration {
        input: input.to_string(),
    };
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let minutes = if let Some(number) = strip_suffix(trimmed, &HOUR_SUFFIXES, "h") {
        number.parse::<f64>().map_err(|_| invalid())? * 60.0
    } else if let Some(number) = strip_suffix(trimmed, &MINUTE_SUFFIXES, "m") {
        number.parse::<f64>().map_err(|_| invalid())?
    } else {
        // Bare number: hours.
        trimmed.parse::<f64>().map_err(|_| invalid())? * 60.0
    };

    if minutes.is_finite() && minutes > 0.0 {
        Ok(minutes)
    } else {
        Err(invalid())
    }
}

fn strip_suffix<'a>(input: &'a str, words: &[&str], letter: &str) -> Option<&'a str> {
    let lower = input.to_ascii_lowercase();
    for suffix in words.iter().chain(std::iter::once(&letter)) {
        if lower.ends_with(suffix) {
            return Some(input[..input.len() - suffix.len()].trim_end());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::errors::CoreError;

    #[rstest]
    #[case("1.5 hours", 90.0)]
    #[case("2h", 120.0)]
    #[case("1 hr", 60.0)]
    #[case("30 minutes", 30.0)]
    #[case("40 min", 40.0)]
    #[case("90m", 90.0)]
    #[case("0.5", 30.0)]
    #[case("8", 480.0)]
    fn parses_common_forms(#[case] input: &str, #[case] expected: f64) {
        let minutes = parse_minutes(input).unwrap();
        assert!((minutes - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("")]
    #[case("soon")]
    #[case("0 minutes")]
    #[case("-1 hours")]
    #[case("hours")]
    fn rejects_invalid_or_non_positive(#[case] input: &str) {
        assert!(matches!(
            parse_minutes(input),
            Err(CoreError::InvalidDuration { .. })
        ));
    }
}
