#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::{PostkontoNummer, SozialversicherungsNummer, ZpvNummer};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(konto) = s.parse::<PostkontoNummer>() {
            let _ = konto.is_valid();
            let _ = konto.to_string();
        }
        if let Ok(ahv) = s.parse::<SozialversicherungsNummer>() {
            let _ = ahv.is_valid();
            let _ = ahv.to_string();
        }
        if let Ok(zpv) = ZpvNummer::parse_allowing_lasttest(s) {
            let _ = zpv.is_valid();
            let _ = zpv.to_string();
        }
    }
});
