//! Shared construction pipeline for check-digit numbers.
//!
//! All three Prüfziffer-number types funnel through the same steps: strip
//! everything but digits, parse as `i64`, apply the range check, then cache
//! the check digit computed by the injected algorithm.

use crate::error::NummerError;
use crate::ranges::RangeCheck;

/// A check-digit algorithm, injected per number type.
pub(crate) type Algorithmus = fn(i64) -> u8;

/// Strip non-digit characters and parse what remains as `i64`.
pub(crate) fn parse_digits(input: &str) -> Result<i64, NummerError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(NummerError::Parse {
            input: input.to_owned(),
            reason: "no digits left after stripping separators".to_owned(),
        });
    }
    digits.parse().map_err(|_| NummerError::Parse {
        input: input.to_owned(),
        reason: format!("{digits} overflows a 64-bit number"),
    })
}

/// Range-check `nummer`, then derive its check digit.
pub(crate) fn build(
    nummer: i64,
    check: Option<&RangeCheck>,
    algorithmus: Algorithmus,
) -> Result<(i64, u8), NummerError> {
    if let Some(check) = check {
        if !check.contains(nummer) {
            return Err(NummerError::Range {
                value: nummer,
                check: check.clone(),
            });
        }
    }
    Ok((nummer, algorithmus(nummer)))
}
