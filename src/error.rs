use thiserror::Error;

use crate::ranges::RangeCheck;

/// Errors that can occur during number construction or IBAN inspection.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum NummerError {
    /// A numeric value violated its range check. The message names the
    /// rejected value and the bounds of the failed check.
    #[error("value {value} not in range {check}")]
    Range {
        /// The rejected value.
        value: i64,
        /// The check that failed.
        check: RangeCheck,
    },

    /// String input did not contain a parsable number after stripping
    /// separators.
    #[error("cannot parse {input:?} as a number: {reason}")]
    Parse {
        /// The original, unstripped input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Clearing-number extraction was requested on an invalid IBAN.
    #[error("clearing number requires a valid IBAN, got {0:?}")]
    InvalidIban(String),
}
