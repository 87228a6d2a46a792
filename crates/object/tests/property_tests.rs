//! Property-based tests for numeric comparison and the codecs
//!
//! Cross-representation comparisons are checked against exact `i128`
//! arithmetic, which holds every integer the object model can store.

use std::cmp::Ordering;

use nebula_object::checked_cast;
use nebula_object::codec::{PadPolicy, decode_base64, decode_hex, encode_base64, encode_hex};
use nebula_object::prelude::*;
use nebula_object::scalar::number::compare;
use proptest::prelude::*;

// ============================================================================
// Integer comparison soundness
// ============================================================================

proptest! {
    #[test]
    fn signed_unsigned_compare_matches_i128(a in any::<i64>(), b in any::<u64>()) {
        let expected = i128::from(a).cmp(&i128::from(b));
        prop_assert_eq!(compare::compare(a, b), Some(expected));
        prop_assert_eq!(compare::less(a, b), expected == Ordering::Less);
        prop_assert_eq!(compare::greater(a, b), expected == Ordering::Greater);
        prop_assert_eq!(compare::equal(a, b), expected == Ordering::Equal);
    }

    #[test]
    fn narrow_wide_compare_matches_i128(a in any::<i8>(), b in any::<u32>()) {
        let expected = i128::from(a).cmp(&i128::from(b));
        prop_assert_eq!(compare::compare(a, b), Some(expected));
        prop_assert_eq!(compare::compare(b, a), Some(expected.reverse()));
    }

    #[test]
    fn bool_compares_as_zero_or_one(flag in any::<bool>(), n in any::<i32>()) {
        let expected = i128::from(flag).cmp(&i128::from(n));
        prop_assert_eq!(compare::compare(flag, n), Some(expected));
    }

    #[test]
    fn less_equal_is_not_greater(a in any::<i16>(), b in any::<u16>()) {
        prop_assert_eq!(compare::less_equal(a, b), !compare::greater(a, b));
        prop_assert_eq!(compare::greater_equal(a, b), !compare::less(a, b));
    }
}

// ============================================================================
// Object equality and ordering
// ============================================================================

proptest! {
    #[test]
    fn object_equality_is_symmetric(a in any::<i32>(), b in any::<u8>()) {
        let x = Object::from(a);
        let y = Object::from(b);
        prop_assert_eq!(x == y, y == x);
        prop_assert_eq!(x == y, i64::from(a) == i64::from(b));
    }

    #[test]
    fn integer_real_agree_when_exact(n in -(1i64 << 52)..(1i64 << 52)) {
        #[allow(clippy::cast_precision_loss)]
        let real = n as f64;
        prop_assert_eq!(Object::from(n), Object::from(real));
        prop_assert!(!Object::from(n).less(&Object::from(real)).unwrap());
    }

    #[test]
    fn incompatible_ordering_fails_both_ways(n in any::<i64>(), s in ".*") {
        let number = Object::from(n);
        let text = Object::from(s.as_str());
        prop_assert!(number.less(&text).is_err());
        prop_assert!(text.less(&number).is_err());
        prop_assert!(number.greater(&text).is_err());
        prop_assert!(text.greater(&number).is_err());
        prop_assert!(number != text);
    }

    #[test]
    fn keys_equal_past_precision_hash_alike(n in any::<i64>(), shift in 0u32..40) {
        // Shifted values land around the f32 and f64 precision limits
        let n = n >> shift;
        let int = HashableObject::from(n);
        #[allow(clippy::cast_precision_loss)]
        let candidates = [
            HashableObject::from(n as f32),
            HashableObject::from(n as f64),
            HashableObject::from(n.wrapping_add(1)),
            HashableObject::from((n as f64) as f32),
        ];
        for other in candidates {
            if int == other {
                prop_assert_eq!(int.hash_code(), other.hash_code());
            }
        }
    }

    #[test]
    fn reals_equal_hash_alike(x in any::<f64>()) {
        let double = HashableObject::from(x);
        #[allow(clippy::cast_possible_truncation)]
        let float = HashableObject::from(x as f32);
        if double == float {
            prop_assert_eq!(double.hash_code(), float.hash_code());
        }
    }

    #[test]
    fn equal_keys_hash_alike(n in any::<u32>()) {
        let narrow = HashableObject::from(n);
        let wide = HashableObject::from(i64::from(n));
        let real = HashableObject::from(f64::from(n));
        prop_assert_eq!(&narrow, &wide);
        prop_assert_eq!(&narrow, &real);
        prop_assert_eq!(narrow.hash_code(), wide.hash_code());
        prop_assert_eq!(narrow.hash_code(), real.hash_code());
    }
}

// ============================================================================
// Checked narrowing
// ============================================================================

proptest! {
    #[test]
    fn narrowing_succeeds_exactly_in_range(n in any::<i64>()) {
        let in_range = i8::try_from(n).is_ok();
        let narrowed = checked_cast::<i64, i8>(n);
        prop_assert_eq!(narrowed.is_ok(), in_range);
        if let Ok(v) = narrowed {
            prop_assert_eq!(i64::from(v), n);
        }
    }

    #[test]
    fn real_to_integer_never_clamps(x in any::<f64>()) {
        if let Ok(v) = checked_cast::<f64, i64>(x) {
            #[allow(clippy::cast_precision_loss)]
            let back = v as f64;
            prop_assert_eq!(back, x.trunc());
            prop_assert!(x < 9_223_372_036_854_775_808.0);
        }
        if let Ok(v) = checked_cast::<f64, u32>(x) {
            prop_assert_eq!(f64::from(v), x.trunc());
        }
    }

    #[test]
    fn failed_set_keeps_value(start in any::<u8>(), n in 256i32..i32::MAX) {
        let mut value = UInt8::new(start);
        prop_assert!(value.set(n).is_err());
        prop_assert_eq!(value.value(), start);
    }
}

// ============================================================================
// Codecs
// ============================================================================

proptest! {
    #[test]
    fn hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = encode_hex(&bytes, true, "");
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert_eq!(decode_hex(&encoded, true, PadPolicy::Disabled).unwrap(), bytes);
    }

    #[test]
    fn base64_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = encode_base64(&bytes);
        prop_assert_eq!(decode_base64(&encoded).unwrap(), bytes);
    }

    #[test]
    fn bytes_hex_matches_codec(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let value = Bytes::from(bytes.clone());
        prop_assert_eq!(value.to_hex(), encode_hex(&bytes, true, ""));
    }
}
