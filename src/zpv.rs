//! ZPV party numbers with their strict and load-test acceptance ranges.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::zpv_pruefziffer;
use crate::error::NummerError;
use crate::nummer;
use crate::ranges::RangeCheck;

/// A ZPV party number.
///
/// Two acceptance policies exist: strict construction only accepts the
/// regular range [`ZpvNummer::MIN`], [`ZpvNummer::MAX`]; the lenient
/// constructors additionally accept the reserved load-test range
/// [`ZpvNummer::LASTTEST_MIN`], [`ZpvNummer::LASTTEST_MAX`]. Load-test
/// numbers are rejected under strict construction on purpose — the two
/// policies are distinct, not inconsistent.
///
/// Ordering sorts larger numbers first (inverse of the numeric order).
///
/// Serializes as the bare number; deserialization rebuilds through
/// [`ZpvNummer::allowing_lasttest`], so the range check applies and the
/// check digit stays derived. The lenient policy is used so that stored
/// load-test numbers round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ZpvNummer {
    nummer: i64,
    pruefziffer: u8,
}

impl ZpvNummer {
    /// Smallest regular ZPV number.
    pub const MIN: i64 = 10_000_000;
    /// Largest regular ZPV number.
    pub const MAX: i64 = 999_999_999;
    /// Smallest reserved load-test number.
    pub const LASTTEST_MIN: i64 = 1;
    /// Largest reserved load-test number.
    pub const LASTTEST_MAX: i64 = 9_999;

    fn strict_check() -> RangeCheck {
        RangeCheck::min_max(Self::MIN, Self::MAX)
    }

    fn lasttest_check() -> RangeCheck {
        RangeCheck::any_of([
            Self::strict_check(),
            RangeCheck::min_max(Self::LASTTEST_MIN, Self::LASTTEST_MAX),
        ])
    }

    /// Construct under the strict policy: only the regular range is
    /// accepted.
    pub fn new(nummer: i64) -> Result<Self, NummerError> {
        Self::with_check(nummer, &Self::strict_check())
    }

    /// Construct under the lenient policy: regular range or load-test
    /// range.
    pub fn allowing_lasttest(nummer: i64) -> Result<Self, NummerError> {
        Self::with_check(nummer, &Self::lasttest_check())
    }

    /// Parse under the lenient policy; non-digit characters are stripped
    /// first. The strict counterpart is [`FromStr`].
    pub fn parse_allowing_lasttest(input: &str) -> Result<Self, NummerError> {
        Self::allowing_lasttest(nummer::parse_digits(input)?)
    }

    fn with_check(nummer: i64, check: &RangeCheck) -> Result<Self, NummerError> {
        let (nummer, pruefziffer) = nummer::build(nummer, Some(check), zpv_pruefziffer)?;
        Ok(Self { nummer, pruefziffer })
    }

    /// The full number including its trailing check digit.
    pub fn nummer(&self) -> i64 {
        self.nummer
    }

    /// The check digit derived from the leading digits.
    pub fn pruefziffer(&self) -> u8 {
        self.pruefziffer
    }

    /// Whether the trailing digit matches the computed check digit.
    pub fn is_valid(&self) -> bool {
        self.nummer % 10 == i64::from(self.pruefziffer)
    }

    /// The raw digits without formatting.
    pub fn as_digits(&self) -> String {
        self.nummer.to_string()
    }
}

impl TryFrom<i64> for ZpvNummer {
    type Error = NummerError;

    /// Lenient conversion: regular range or load-test range.
    fn try_from(nummer: i64) -> Result<Self, Self::Error> {
        Self::allowing_lasttest(nummer)
    }
}

impl From<ZpvNummer> for i64 {
    fn from(zpv: ZpvNummer) -> i64 {
        zpv.nummer
    }
}

impl FromStr for ZpvNummer {
    type Err = NummerError;

    /// Strict parse; non-digit characters are stripped first.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(nummer::parse_digits(input)?)
    }
}

impl fmt::Display for ZpvNummer {
    /// Renders with Swiss digit grouping, e.g. `17'742'883`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.nummer.to_string();
        for (i, zeichen) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_str("'")?;
            }
            write!(f, "{zeichen}")?;
        }
        Ok(())
    }
}

impl Ord for ZpvNummer {
    fn cmp(&self, other: &Self) -> Ordering {
        // inverse: larger numbers sort first
        other.nummer.cmp(&self.nummer)
    }
}

impl PartialOrd for ZpvNummer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
