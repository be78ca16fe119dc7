//! Property-based tests for the distance engine.
//!
//! The edit distance is a metric on strings; these properties must hold for
//! arbitrary inputs, not just hand-picked command names.

use cmdhint_match::distance;
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    // Command-name-shaped strings, plus empties.
    prop::string::string_regex("[a-zA-Z0-9._+-]{0,24}").unwrap()
}

proptest! {
    #[test]
    fn symmetric(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
    }

    #[test]
    fn identity(a in arb_name()) {
        prop_assert_eq!(distance(&a, &a).unwrap(), 0);
    }

    #[test]
    fn empty_costs_length(s in arb_name()) {
        prop_assert_eq!(distance("", &s).unwrap(), s.len() as u32);
        prop_assert_eq!(distance(&s, "").unwrap(), s.len() as u32);
    }

    #[test]
    fn triangle_inequality(a in arb_name(), b in arb_name(), c in arb_name()) {
        let ab = distance(&a, &b).unwrap();
        let ac = distance(&a, &c).unwrap();
        let cb = distance(&c, &b).unwrap();
        prop_assert!(ab <= ac + cb);
    }

    #[test]
    fn bounded_by_longer_length(a in arb_name(), b in arb_name()) {
        let d = distance(&a, &b).unwrap();
        prop_assert!(d as usize <= a.len().max(b.len()));
    }

    #[test]
    fn single_substitution_costs_one(s in "[a-z]{1,24}", i in 0usize..24) {
        let i = i % s.len();
        let mut bytes = s.clone().into_bytes();
        // Swap one letter for a character outside the alphabet.
        bytes[i] = b'#';
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(distance(&s, &mutated).unwrap(), 1);
    }
}
