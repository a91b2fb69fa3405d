//! Edge cases: malformed input, unmapped characters, cycle boundaries.

#![cfg(feature = "core")]

use vindecode::*;

// ── Raw functions on unvalidated strings ────────────────────────────────────

#[test]
fn raw_functions_tolerate_empty() {
    assert!(validate_check_digit("").is_none());
    assert_eq!(estimate_model_year(""), None);
}

#[test]
fn raw_functions_tolerate_multibyte() {
    // 17 characters, more than 17 bytes
    let s = "ÄÖÜÄÖÜÄÖÜÄÖÜÄÖÜÄÖ";
    assert_eq!(s.chars().count(), 17);
    let r = validate_check_digit(s).unwrap();
    assert_eq!(r.expected, '0');
    assert_eq!(r.actual, 'Ü');
    assert!(!r.is_valid);
    assert_eq!(estimate_model_year(s), None);
}

#[test]
fn raw_functions_on_17_bytes_but_fewer_chars() {
    // 16 characters, 17 bytes
    let s = "1HGCM82633A0043Ä";
    assert_eq!(s.len(), 17);
    assert!(validate_check_digit(s).is_none());
    assert_eq!(estimate_model_year(s), None);
}

#[test]
fn forbidden_letters_count_as_zero() {
    // Replacing a zero-valued digit by I/O/Q keeps the weighted sum.
    let base = validate_check_digit("1HGCM82633A004352").unwrap();
    for ch in ['I', 'O', 'Q'] {
        let vin = format!("1HGCM82633A{ch}04352");
        let r = validate_check_digit(&vin).unwrap();
        assert_eq!(r.expected, base.expected);
    }
}

#[test]
fn lowercase_is_not_mapped_by_raw_check_digit() {
    // Callers normalise first; raw lowercase letters count as 0.
    let upper = validate_check_digit("1HGCM82633A004352").unwrap();
    let lower = validate_check_digit("1hgcm82633a004352").unwrap();
    assert_ne!(upper.expected, lower.expected);
}

#[test]
fn lowercase_cycle_flag_is_second_cycle() {
    // A letter at position 7, whatever its case, selects the second cycle.
    assert_eq!(estimate_model_year("1HGCM8a0XA0000000"), Some(2010));
}

// ── Model-year cycle boundaries ─────────────────────────────────────────────

#[test]
fn year_cycle_boundaries() {
    let cases = [
        ("1HGCM820XA0000000", 1980),
        ("1HGCM820XY0000000", 2000),
        ("1HGCM820X10000000", 2001),
        ("1HGCM820X90000000", 2009),
        ("1HGCM8A0XA0000000", 2010),
        ("1HGCM8A0XY0000000", 2030),
        ("1HGCM8A0X90000000", 2039),
    ];
    for (vin, year) in cases {
        assert_eq!(estimate_model_year(vin), Some(year), "{vin}");
    }
}

#[test]
fn zero_year_code_undeterminable() {
    let vin = Vin::parse("1HGCM82630A004352").unwrap();
    assert_eq!(vin.model_year(), None);
    let d = decode(&vin);
    assert!(d.warnings().iter().any(|w| w.field == "model_year"));
}

// ── Vin::parse edge cases ───────────────────────────────────────────────────

#[test]
fn parse_rejects_inner_whitespace() {
    assert!(matches!(
        Vin::parse("1HGCM826 3A004352"),
        Err(VinError::InvalidCharacter { ch: ' ', position: 9 })
    ));
}

#[test]
fn parse_reports_first_forbidden_letter() {
    assert_eq!(
        Vin::parse("1HGCM8263QAOO4352"),
        Err(VinError::ForbiddenCharacter { ch: 'Q', position: 10 })
    );
}

#[test]
fn parse_length_checked_before_characters() {
    assert_eq!(Vin::parse("IOQ"), Err(VinError::InvalidLength { len: 3 }));
}

#[test]
fn parse_uppercases_forbidden_letters() {
    assert!(matches!(
        Vin::parse("1hgcm82633a0o4352"),
        Err(VinError::ForbiddenCharacter { ch: 'O', .. })
    ));
}

#[test]
fn try_from_and_into_string() {
    let vin = Vin::try_from("jh4ka7561pc008269").unwrap();
    let s: String = vin.clone().into();
    assert_eq!(s, "JH4KA7561PC008269");
    assert_eq!(vin.to_string(), s);
    assert_eq!(vin.as_ref(), s.as_str());
}

#[test]
fn unknown_region_lead() {
    let vin = Vin::parse("DHGCM82633A004352").unwrap();
    assert_eq!(vin.region(), Region::Unknown);
}
