//! PostFinance postal account numbers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::postkonto_pruefziffer;
use crate::error::NummerError;
use crate::nummer;
use crate::ranges::RangeCheck;

const MIN_NUMMER: i64 = 100_000_000;
const MAX_NUMMER: i64 = 999_999_999;

/// A Swiss postal account number in its canonical 9-digit form.
///
/// Account numbers are written `XX-XXXXX-X` or `XX-XXXXXX-X`; a 5-digit
/// middle group is zero-padded to 6 digits before anything else happens,
/// so `"10-15000-6"`, `"10150006"` and `10150006` all normalize to the
/// same canonical value `100150006`.
///
/// Ordering sorts larger account numbers first (inverse of the numeric
/// order).
///
/// Serializes as the bare number; deserialization rebuilds through
/// [`PostkontoNummer::new`], so the range check applies and the check
/// digit stays derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PostkontoNummer {
    nummer: i64,
    pruefziffer: u8,
}

impl PostkontoNummer {
    /// Construct from the full number including its trailing check digit.
    ///
    /// 8-digit numbers get their middle group padded, exactly like string
    /// input. Fails with [`NummerError::Range`] when the normalized number
    /// has more than 9 digits.
    pub fn new(nummer: i64) -> Result<Self, NummerError> {
        if nummer < 0 {
            return Err(NummerError::Range {
                value: nummer,
                check: Self::range(),
            });
        }
        Self::from_input(&nummer.to_string())
    }

    fn range() -> RangeCheck {
        RangeCheck::min_max(MIN_NUMMER, MAX_NUMMER)
    }

    fn from_input(input: &str) -> Result<Self, NummerError> {
        let normalized = normalize(input)?;
        let nummer = nummer::parse_digits(&normalized)?;
        let (nummer, pruefziffer) = nummer::build(nummer, Some(&Self::range()), postkonto_pruefziffer)?;
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

    /// The canonical digits without formatting.
    pub fn as_digits(&self) -> String {
        self.nummer.to_string()
    }
}

/// Split into first two digits, middle group, and trailing check digit,
/// then zero-pad the middle group to 6 digits.
fn normalize(input: &str) -> Result<String, NummerError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return Err(NummerError::Parse {
            input: input.to_owned(),
            reason: "too few digits for a postal account number".to_owned(),
        });
    }

    let (kopf, rest) = digits.split_at(2);
    let (mitte, pruefziffer) = rest.split_at(rest.len() - 1);
    let mitte: u64 = mitte.parse().map_err(|_| NummerError::Parse {
        input: input.to_owned(),
        reason: "middle group is not a number".to_owned(),
    })?;

    Ok(format!("{kopf}{mitte:06}{pruefziffer}"))
}

impl TryFrom<i64> for PostkontoNummer {
    type Error = NummerError;

    fn try_from(nummer: i64) -> Result<Self, Self::Error> {
        Self::new(nummer)
    }
}

impl From<PostkontoNummer> for i64 {
    fn from(konto: PostkontoNummer) -> i64 {
        konto.nummer
    }
}

impl FromStr for PostkontoNummer {
    type Err = NummerError;

    /// Parse formatted input such as `"30-104596-8"` or `"10-15000-6"`.
    /// Separators are stripped; the middle group is padded to 6 digits.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_input(input)
    }
}

impl fmt::Display for PostkontoNummer {
    /// Renders as `XX-XXXXXX-X`, e.g. `"30-104596-8"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.nummer.to_string();
        write!(f, "{}-{}-{}", &digits[..2], &digits[2..8], &digits[8..])
    }
}

impl Ord for PostkontoNummer {
    fn cmp(&self, other: &Self) -> Ordering {
        // inverse: larger numbers sort first
        other.nummer.cmp(&self.nummer)
    }
}

impl PartialOrd for PostkontoNummer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
