//! # pruefziffer
//!
//! Swiss identification numbers that carry an embedded check digit:
//! PostFinance account numbers ([`PostkontoNummer`]), social-insurance
//! numbers ([`SozialversicherungsNummer`]), ZPV party numbers
//! ([`ZpvNummer`]), and bank account numbers ([`Iban`]).
//!
//! Every type accepts free-form input (separators and spaces are stripped),
//! verifies it against a type-specific check-digit algorithm, and renders
//! the canonical pretty-printed form via [`std::fmt::Display`]. All values
//! are immutable after construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefziffer::{Iban, PostkontoNummer, SozialversicherungsNummer};
//!
//! let konto = PostkontoNummer::new(301045968).unwrap();
//! assert!(konto.is_valid());
//! assert_eq!(konto.to_string(), "30-104596-8");
//!
//! let ahv: SozialversicherungsNummer = "756.9217.0769.85".parse().unwrap();
//! assert_eq!(ahv.pruefziffer(), 5);
//!
//! let iban = Iban::new("CH63 0900 0000 2500 9779 8");
//! assert!(iban.is_valid());
//! assert_eq!(iban.clearing_nr().unwrap().as_deref(), Some("09000"));
//! ```
//!
//! A failed check digit is never an error: construction only rejects
//! out-of-range values and unparsable strings, while `is_valid()` reports
//! the checksum result as a plain boolean the caller must act on.

pub mod checksum;
mod error;
mod iban;
mod nummer;
mod postkonto;
mod ranges;
mod sozialversicherung;
mod zpv;

pub use error::NummerError;
pub use iban::Iban;
pub use postkonto::PostkontoNummer;
pub use ranges::RangeCheck;
pub use sozialversicherung::SozialversicherungsNummer;
pub use zpv::ZpvNummer;
