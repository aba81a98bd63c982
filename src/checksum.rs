//! The four check-digit algorithms.
//!
//! The integer-based functions take the full number **including** its
//! trailing check digit, strip it (`nummer / 10`), and derive the expected
//! digit from the remaining digits. Comparing the result against
//! `nummer % 10` is what the value types' `is_valid()` does.

/// Carry table of the recursive modulo-10 scheme used for PostFinance
/// account numbers.
const MODULO10_TABELLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Check digit of a Postkonto number (recursive modulo 10).
///
/// Walks the remaining digits left to right, folding each into a carry via
/// the table lookup `carry = TABELLE[(carry + digit) % 10]`.
pub fn postkonto_pruefziffer(nummer: i64) -> u8 {
    let rest = (nummer / 10).unsigned_abs();

    let mut uebertrag = 0u8;
    for ziffer in rest.to_string().bytes().map(|b| b - b'0') {
        uebertrag = MODULO10_TABELLE[usize::from((uebertrag + ziffer) % 10)];
    }
    (10 - uebertrag) % 10
}

/// Check digit of a Sozialversicherungsnummer (EAN-13 weighting).
///
/// Remaining digits are traversed right to left; digits at odd positions
/// (1st, 3rd, ...) are weighted with factor 3, the rest with factor 1.
pub fn sozialversicherung_pruefziffer(nummer: i64) -> u8 {
    let mut rest = (nummer / 10).unsigned_abs();
    let mut summe = 0u64;
    let mut ungerade = true;
    while rest > 0 {
        let ziffer = rest % 10;
        summe += if ungerade { ziffer * 3 } else { ziffer };
        ungerade = !ungerade;
        rest /= 10;
    }

    if summe % 10 == 0 {
        0
    } else {
        (10 - summe % 10) as u8
    }
}

/// Check digit of a ZPV number (Luhn variant).
///
/// Remaining digits are traversed right to left; digits at odd positions
/// are doubled, and a doubled value of 10 or more collapses to
/// `value % 10 + 1`.
pub fn zpv_pruefziffer(nummer: i64) -> u8 {
    let mut rest = (nummer / 10).unsigned_abs();
    let mut summe = 0u64;
    let mut ungerade = true;
    while rest > 0 {
        let mut ziffer = rest % 10;
        if ungerade {
            ziffer *= 2;
        }
        ungerade = !ungerade;
        if ziffer >= 10 {
            ziffer = ziffer % 10 + 1;
        }
        summe += ziffer;
        rest /= 10;
    }
    ((10 - summe % 10) % 10) as u8
}

/// Mod-97 remainder of a normalized IBAN string (ISO 7064).
///
/// The first four characters move to the end, letters expand to two digits
/// (`A` = 10 ... `Z` = 35, case-insensitive), digits stay as they are. The
/// resulting decimal number can run to ~68 digits, so it is never
/// materialized: the remainder is folded incrementally instead. An IBAN is
/// valid iff the remainder is exactly 1.
///
/// Returns `None` when the input is shorter than four characters or
/// contains anything but ASCII letters and digits.
pub fn iban_pruefsumme(nummer: &str) -> Option<u32> {
    if nummer.len() < 4 || !nummer.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let (kopf, rumpf) = nummer.split_at(4);
    let mut rest: u64 = 0;
    for zeichen in rumpf.bytes().chain(kopf.bytes()) {
        let zeichen = zeichen.to_ascii_uppercase();
        if zeichen.is_ascii_digit() {
            rest = (rest * 10 + u64::from(zeichen - b'0')) % 97;
        } else {
            rest = (rest * 100 + u64::from(zeichen - b'A') + 10) % 97;
        }
    }
    Some(rest as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postkonto_known_digits() {
        // 30-104596-8
        assert_eq!(postkonto_pruefziffer(301045968), 8);
        // 10-15000-6 normalized
        assert_eq!(postkonto_pruefziffer(100150006), 6);
        // transposed digits shift the check digit
        assert_ne!(postkonto_pruefziffer(301045978), 8);
    }

    #[test]
    fn postkonto_single_digit_input() {
        // nothing left after stripping the check digit: carry stays 0
        assert_eq!(postkonto_pruefziffer(7), 0);
    }

    #[test]
    fn sozialversicherung_known_digits() {
        assert_eq!(sozialversicherung_pruefziffer(7561234567897), 7);
        assert_eq!(sozialversicherung_pruefziffer(7562229390322), 2);
        assert_eq!(sozialversicherung_pruefziffer(7569217076985), 5);
        assert_eq!(sozialversicherung_pruefziffer(7561277671407), 7);
        assert_eq!(sozialversicherung_pruefziffer(7567779844851), 1);
    }

    #[test]
    fn sozialversicherung_zero_digit() {
        // a weighted sum divisible by 10 yields digit 0, not 10
        assert_eq!(sozialversicherung_pruefziffer(7562844768650), 0);
    }

    #[test]
    fn zpv_known_digits() {
        assert_eq!(zpv_pruefziffer(17742883), 3);
        assert_eq!(zpv_pruefziffer(243911690), 0);
    }

    #[test]
    fn iban_remainder_one_for_valid() {
        assert_eq!(iban_pruefsumme("CH6309000000250097798"), Some(1));
        assert_eq!(iban_pruefsumme("CH9509000000607617397"), Some(1));
        assert_eq!(iban_pruefsumme("DE89370400440532013000"), Some(1));
    }

    #[test]
    fn iban_remainder_not_one_for_corrupted() {
        assert_ne!(iban_pruefsumme("CH6309000000250097799"), Some(1));
    }

    #[test]
    fn iban_lowercase_is_equivalent() {
        assert_eq!(
            iban_pruefsumme("ch6309000000250097798"),
            iban_pruefsumme("CH6309000000250097798")
        );
    }

    #[test]
    fn iban_rejects_short_or_non_alphanumeric() {
        assert_eq!(iban_pruefsumme(""), None);
        assert_eq!(iban_pruefsumme("CH6"), None);
        assert_eq!(iban_pruefsumme("CH63 0900"), None);
        assert_eq!(iban_pruefsumme("CH63_0900"), None);
    }
}
