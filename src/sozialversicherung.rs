//! Swiss social-insurance numbers (new AHV numbers).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::sozialversicherung_pruefziffer;
use crate::error::NummerError;
use crate::nummer;
use crate::ranges::RangeCheck;

const MIN_NUMMER: i64 = 1_000_000_000_000;
const MAX_NUMMER: i64 = 9_999_999_999_999;

/// A 13-digit social-insurance number, e.g. `756.9217.0769.85`.
///
/// Ordering sorts larger numbers first (inverse of the numeric order).
///
/// Serializes as the bare number; deserialization rebuilds through
/// [`SozialversicherungsNummer::new`], so the range check applies and the
/// check digit stays derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SozialversicherungsNummer {
    nummer: i64,
    pruefziffer: u8,
}

impl SozialversicherungsNummer {
    /// Construct from the full 13-digit number including its trailing
    /// check digit.
    pub fn new(nummer: i64) -> Result<Self, NummerError> {
        let (nummer, pruefziffer) = nummer::build(
            nummer,
            Some(&RangeCheck::min_max(MIN_NUMMER, MAX_NUMMER)),
            sozialversicherung_pruefziffer,
        )?;
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

    /// The raw 13 digits without formatting.
    pub fn as_digits(&self) -> String {
        self.nummer.to_string()
    }
}

impl TryFrom<i64> for SozialversicherungsNummer {
    type Error = NummerError;

    fn try_from(nummer: i64) -> Result<Self, Self::Error> {
        Self::new(nummer)
    }
}

impl From<SozialversicherungsNummer> for i64 {
    fn from(nummer: SozialversicherungsNummer) -> i64 {
        nummer.nummer
    }
}

impl FromStr for SozialversicherungsNummer {
    type Err = NummerError;

    /// Parse dotted (`"756.9217.0769.85"`) or plain (`"7569217076985"`)
    /// input; every non-digit character is stripped first.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(nummer::parse_digits(input)?)
    }
}

impl fmt::Display for SozialversicherungsNummer {
    /// Renders in the dotted form `756.9217.0769.85`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.nummer.to_string();
        write!(
            f,
            "{}.{}.{}.{}",
            &digits[..3],
            &digits[3..7],
            &digits[7..11],
            &digits[11..]
        )
    }
}

impl Ord for SozialversicherungsNummer {
    fn cmp(&self, other: &Self) -> Ordering {
        // inverse: larger numbers sort first
        other.nummer.cmp(&self.nummer)
    }
}

impl PartialOrd for SozialversicherungsNummer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_from_long() {
        let nummer = SozialversicherungsNummer::new(7569217076985).unwrap();
        assert!(nummer.is_valid());
        assert_eq!(nummer.pruefziffer(), 5);
    }

    #[test]
    fn dotted_and_plain_strings_agree() {
        let plain: SozialversicherungsNummer = "7569217076985".parse().unwrap();
        let dotted: SozialversicherungsNummer = "756.9217.0769.85".parse().unwrap();
        assert!(plain.is_valid());
        assert!(dotted.is_valid());
        assert_eq!(plain, dotted);
    }

    #[test]
    fn check_digit_zero_is_valid() {
        let nummer = SozialversicherungsNummer::new(7562844768650).unwrap();
        assert!(nummer.is_valid());
        assert_eq!(nummer.pruefziffer(), 0);
    }

    #[test]
    fn wrong_check_digit_is_not_an_error() {
        let nummer = SozialversicherungsNummer::new(7569227076983).unwrap();
        assert!(!nummer.is_valid());
    }

    #[test]
    fn formats_with_dots() {
        let nummer = SozialversicherungsNummer::new(7569217076985).unwrap();
        assert_eq!(nummer.to_string(), "756.9217.0769.85");
    }

    #[test]
    fn as_digits_is_unformatted() {
        let nummer: SozialversicherungsNummer = "1234567890123".parse().unwrap();
        assert_eq!(nummer.as_digits(), "1234567890123");
    }

    #[test]
    fn too_short_names_the_value() {
        let err = SozialversicherungsNummer::new(1).unwrap_err();
        assert!(err.to_string().contains("value 1 "));
    }

    #[test]
    fn too_long_names_the_value() {
        let err = "12345678901234".parse::<SozialversicherungsNummer>().unwrap_err();
        assert!(err.to_string().contains("12345678901234"));
    }

    #[test]
    fn serde_round_trips_as_bare_number() {
        let nummer = SozialversicherungsNummer::new(7569217076985).unwrap();
        let json = serde_json::to_string(&nummer).unwrap();
        assert_eq!(json, "7569217076985");
        assert_eq!(
            serde_json::from_str::<SozialversicherungsNummer>(&json).unwrap(),
            nummer
        );
    }

    #[test]
    fn serde_enforces_the_range_check() {
        let err = serde_json::from_str::<SozialversicherungsNummer>("1").unwrap_err();
        assert!(err.to_string().contains("value 1 "));
    }

    #[test]
    fn ordering_is_inverse() {
        let kleiner = SozialversicherungsNummer::new(7569217076985).unwrap();
        let groesser = SozialversicherungsNummer::new(7569227076983).unwrap();
        assert_eq!(kleiner.cmp(&kleiner), Ordering::Equal);
        assert_eq!(groesser.cmp(&kleiner), Ordering::Less);
        assert_eq!(kleiner.cmp(&groesser), Ordering::Greater);
    }
}
