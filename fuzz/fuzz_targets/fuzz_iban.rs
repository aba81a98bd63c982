#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::Iban;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Construction never fails; nothing downstream may panic either.
        let iban = Iban::new(s);
        let _ = iban.is_valid();
        let _ = iban.clearing_nr();
        let formatted = iban.to_string();
        assert_eq!(Iban::new(&formatted), iban);
    }
});
