//! IBAN account numbers (ISO 13616).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::iban_pruefsumme;
use crate::error::NummerError;

/// Per-country IBAN facts: total length and the length of the embedded
/// clearing number (0 when undocumented). Sorted by country code for
/// binary search.
static LAENDER: &[(&str, usize, usize)] = &[
    ("AD", 24, 4),
    ("AT", 20, 5),
    ("BA", 20, 3),
    ("BE", 16, 3),
    ("BG", 22, 4),
    ("CH", 21, 5),
    ("CY", 28, 3),
    ("CZ", 24, 4),
    ("DE", 22, 8),
    ("DK", 18, 4),
    ("EE", 20, 2),
    ("ES", 24, 4),
    ("FI", 18, 6),
    ("FO", 18, 0),
    ("FR", 27, 5),
    ("GB", 22, 4),
    ("GI", 23, 4),
    ("GL", 18, 0),
    ("GR", 27, 8),
    ("HR", 21, 7),
    ("HU", 28, 7),
    ("IE", 22, 4),
    ("IS", 26, 4),
    ("IT", 27, 0),
    ("LI", 21, 5),
    ("LT", 20, 5),
    ("LU", 20, 3),
    ("LV", 21, 4),
    ("MA", 24, 3),
    ("MC", 27, 5),
    ("MK", 19, 3),
    ("MT", 31, 4),
    ("NL", 18, 4),
    ("NO", 15, 4),
    ("PL", 28, 7),
    ("PT", 25, 8),
    ("RO", 24, 4),
    ("RS", 22, 3),
    ("SE", 24, 3),
    ("SI", 19, 5),
    ("SK", 24, 4),
    ("SM", 27, 0),
    ("TN", 24, 5),
    ("TR", 26, 5),
];

/// `(total_length, clearing_length)` for a 2-letter country code.
fn land_info(code: &str) -> Option<(usize, usize)> {
    LAENDER
        .binary_search_by_key(&code, |&(land, _, _)| land)
        .ok()
        .map(|i| (LAENDER[i].1, LAENDER[i].2))
}

/// An IBAN, normalized to its alphanumeric characters.
///
/// Construction never fails: separators and other punctuation are
/// stripped, anything else is kept as supplied and simply reported as
/// invalid by [`Iban::is_valid`]. The [`Default`] value is empty and never
/// valid.
///
/// Equality and ordering are lexicographic on the normalized string.
///
/// Serializes as the normalized string; deserialization runs through
/// [`Iban::new`], so the alphanumeric normalization always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Iban {
    nummer: String,
}

impl Iban {
    /// Construct from any string; non-alphanumeric characters are
    /// stripped, case is kept.
    pub fn new(input: &str) -> Self {
        Self {
            nummer: input.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
        }
    }

    /// The normalized alphanumeric value.
    pub fn as_str(&self) -> &str {
        &self.nummer
    }

    /// Validate country-specific length and the mod-97 check digits.
    ///
    /// Fails closed: too short for a country prefix, unknown country code,
    /// or a length mismatch all yield `false` without touching the
    /// checksum.
    pub fn is_valid(&self) -> bool {
        if self.nummer.len() < 2 {
            return false;
        }
        let code = self.nummer[..2].to_ascii_uppercase();
        match land_info(&code) {
            Some((laenge, _)) if self.nummer.len() == laenge => {
                iban_pruefsumme(&self.nummer) == Some(1)
            }
            _ => false,
        }
    }

    /// Extract the country-specific clearing number (bank/branch code).
    ///
    /// Only callable on a valid IBAN; returns `Ok(None)` when the country
    /// has no documented clearing-number length.
    pub fn clearing_nr(&self) -> Result<Option<String>, NummerError> {
        if !self.is_valid() {
            return Err(NummerError::InvalidIban(self.nummer.clone()));
        }
        let code = self.nummer[..2].to_ascii_uppercase();
        // is_valid() established that the country is known
        let clearing_laenge = land_info(&code).map_or(0, |(_, clearing)| clearing);
        if clearing_laenge == 0 {
            return Ok(None);
        }
        Ok(Some(self.nummer[4..4 + clearing_laenge].to_owned()))
    }
}

impl From<&str> for Iban {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Iban {
    fn from(input: String) -> Self {
        Self::new(&input)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> String {
        iban.nummer
    }
}

impl FromStr for Iban {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(input))
    }
}

impl fmt::Display for Iban {
    /// Renders in blocks of four characters separated by single spaces,
    /// whatever the length, e.g. `CH63 0900 0000 2500 9779 8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, zeichen) in self.nummer.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{zeichen}")?;
        }
        Ok(())
    }
}
