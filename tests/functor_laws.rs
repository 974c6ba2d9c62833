//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use lawful::data::{Optional, Sequence};
use lawful::typeclass::Functor;
use proptest::prelude::*;

fn optional_strategy<T: Arbitrary>() -> impl Strategy<Value = Optional<T>> {
    any::<Option<T>>().prop_map(Optional::from)
}

fn sequence_strategy<T: Arbitrary>() -> impl Strategy<Value = Sequence<T>> {
    prop::collection::vec(any::<T>(), 0..32).prop_map(Sequence::from)
}

// =============================================================================
// Optional<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Optional<i32>: fmap with identity function returns the original value
    #[test]
    fn prop_optional_identity_law(value in optional_strategy::<i32>()) {
        let result = value.fmap(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Optional<i32>: mapping composed functions equals composing maps
    #[test]
    fn prop_optional_composition_law(value in optional_strategy::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law for Optional<String>: mapping length then doubling
    #[test]
    fn prop_optional_string_composition_law(value in optional_strategy::<String>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap_ref agrees with fmap on a clone
    #[test]
    fn prop_optional_fmap_ref_consistency(value in optional_strategy::<i32>()) {
        let by_reference = value.fmap_ref(|n| n.wrapping_sub(3));
        let by_value = value.fmap(|n| n.wrapping_sub(3));
        prop_assert_eq!(by_reference, by_value);
    }

    /// Mapping never changes presence
    #[test]
    fn prop_optional_fmap_preserves_presence(value in optional_strategy::<i32>()) {
        prop_assert_eq!(value.fmap(|n| n.to_string()).is_present(), value.is_present());
    }
}

// =============================================================================
// Sequence<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Sequence<i32>
    #[test]
    fn prop_sequence_identity_law(values in sequence_strategy::<i32>()) {
        let result = values.clone().fmap(|x| x);
        prop_assert_eq!(result, values);
    }

    /// Composition Law for Sequence<i32>
    #[test]
    fn prop_sequence_composition_law(values in sequence_strategy::<i32>()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| i64::from(n) - 7;

        let left = values.clone().fmap(function1).fmap(function2);
        let right = values.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Mapping keeps length and position
    #[test]
    fn prop_sequence_fmap_is_elementwise(values in sequence_strategy::<i16>()) {
        let mapped = values.fmap_ref(|n| i32::from(*n) * 2);
        prop_assert_eq!(mapped.len(), values.len());
        for (original, doubled) in values.iter().zip(mapped.iter()) {
            prop_assert_eq!(i32::from(*original) * 2, *doubled);
        }
    }

    /// replace swaps every element but keeps the shape
    #[test]
    fn prop_sequence_replace_keeps_length(values in sequence_strategy::<u8>(), replacement in any::<char>()) {
        let replaced = values.clone().replace(replacement);
        prop_assert_eq!(replaced.len(), values.len());
        prop_assert!(replaced.iter().all(|&c| c == replacement));
    }
}
