//! Property-based tests for the structural decoder.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use proptest::prelude::*;
use vindecode::*;

/// Characters allowed in a VIN.
const ALPHABET: &[u8] = b"0123456789ABCDEFGHJKLMNPRSTUVWXYZ";

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_vin_char() -> impl Strategy<Value = char> {
    prop::sample::select(ALPHABET).prop_map(char::from)
}

/// Any 17-character string over the VIN alphabet (check digit not enforced).
fn arb_vin_string() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_vin_char(), VIN_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// A VIN whose check digit has been fixed up to be correct.
fn arb_valid_vin() -> impl Strategy<Value = String> {
    arb_vin_string().prop_map(|s| {
        let expected = validate_check_digit(&s).unwrap().expected;
        let mut chars: Vec<char> = s.chars().collect();
        chars[CHECK_DIGIT_INDEX] = expected;
        chars.into_iter().collect::<String>()
    })
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn check_digit_total_and_deterministic(s in arb_vin_string()) {
        let a = validate_check_digit(&s);
        let b = validate_check_digit(&s);
        prop_assert!(a.is_some());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn expected_digit_is_in_range(s in arb_vin_string()) {
        let r = validate_check_digit(&s).unwrap();
        prop_assert!(r.expected.is_ascii_digit() || r.expected == 'X');
        prop_assert_eq!(r.is_valid, r.expected == r.actual);
    }

    #[test]
    fn fixed_up_vin_is_valid(s in arb_valid_vin()) {
        let vin = Vin::parse(&s).unwrap();
        prop_assert!(vin.check_digit().is_valid);
    }

    #[test]
    fn check_digit_ignores_position_9(s in arb_vin_string(), c in arb_vin_char()) {
        let mut chars: Vec<char> = s.chars().collect();
        chars[CHECK_DIGIT_INDEX] = c;
        let other: String = chars.into_iter().collect();
        prop_assert_eq!(
            validate_check_digit(&s).unwrap().expected,
            validate_check_digit(&other).unwrap().expected
        );
    }

    #[test]
    fn model_year_in_range(s in arb_vin_string()) {
        if let Some(year) = estimate_model_year(&s) {
            prop_assert!((1980..=2039).contains(&year));
        }
    }

    #[test]
    fn model_year_cycle_matches_position_7(s in arb_vin_string()) {
        let flag = s.as_bytes()[CYCLE_FLAG_INDEX];
        if let Some(year) = estimate_model_year(&s) {
            prop_assert_eq!(year >= 2010, !flag.is_ascii_digit());
        }
    }

    #[test]
    fn model_year_only_none_for_unencodable(s in arb_vin_string()) {
        let code = char::from(s.as_bytes()[MODEL_YEAR_INDEX]);
        prop_assert_eq!(estimate_model_year(&s).is_none(), matches!(code, 'U' | 'Z' | '0'));
    }

    #[test]
    fn wrong_length_is_sentinel(s in "[A-HJ-NPR-Z0-9]{0,40}") {
        prop_assume!(s.len() != VIN_LENGTH);
        prop_assert!(validate_check_digit(&s).is_none());
        prop_assert!(estimate_model_year(&s).is_none());
        prop_assert!(Vin::parse(&s).is_err());
    }

    #[test]
    fn region_is_case_insensitive(c in arb_vin_char()) {
        prop_assert_eq!(infer_region(c), infer_region(c.to_ascii_lowercase()));
    }

    #[test]
    fn region_never_panics(c in any::<char>()) {
        let _ = infer_region(c);
    }

    #[test]
    fn parse_accepts_every_alphabet_string(s in arb_vin_string()) {
        let vin = Vin::parse(&s.to_lowercase()).unwrap();
        prop_assert_eq!(vin.as_str(), s.as_str());
    }

    #[test]
    fn parse_never_panics(s in ".{0,40}") {
        let _ = Vin::parse(&s);
    }

    #[test]
    fn decode_is_idempotent(s in arb_vin_string()) {
        let vin = Vin::parse(&s).unwrap();
        prop_assert_eq!(decode(&vin), decode(&vin));
    }
}
