//! Property-based checks of the outcome invariants.

use outcome_rail::{filter_failed, filter_successful, Error, Outcome};
use proptest::collection::vec;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Clear,
    Add(Vec<Error>),
    Remove(&'static str),
    Reset,
}

fn code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "A", "B", "C"])
}

fn error() -> impl Strategy<Value = Error> {
    ("[a-z ]{0,12}", code()).prop_map(|(message, code)| Error::with_code(message, code))
}

fn outcome() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        Just(Outcome::success_empty()),
        vec(error(), 1..4).prop_map(|errors| Outcome::fail_many(errors).unwrap()),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Clear),
        vec(error(), 0..3).prop_map(Op::Add),
        code().prop_map(Op::Remove),
        Just(Op::Reset),
    ]
}

proptest! {
    /// Success and an empty error list always coincide
    #[test]
    fn success_tracks_error_list(mut out in outcome(), ops in vec(op(), 0..12)) {
        prop_assert_eq!(out.is_success(), out.errors().is_empty());
        for op in ops {
            let before = out.errors().to_vec();
            match op {
                Op::Clear => {
                    out.clear_errors();
                    prop_assert!(out.is_success());
                }
                Op::Add(added) => {
                    out.add_errors(added.clone());
                    let mut expected = before;
                    expected.extend(added);
                    prop_assert_eq!(out.errors(), expected.as_slice());
                }
                Op::Remove(code) => {
                    out.remove_errors_with_code(code);
                    prop_assert!(!out.has_errors_with_code(code));
                    let kept: Vec<_> = before.into_iter().filter(|e| !e.has_code(code)).collect();
                    prop_assert_eq!(out.errors(), kept.as_slice());
                }
                Op::Reset => {
                    let state = out.is_success();
                    out.reset_value();
                    prop_assert!(!out.has_value());
                    prop_assert_eq!(out.is_success(), state);
                }
            }
            prop_assert_eq!(out.is_success(), out.errors().is_empty());
            prop_assert_eq!(out.is_failure(), !out.is_success());
        }
    }

    /// Failing with a list keeps that list verbatim
    #[test]
    fn fail_many_round_trips_errors(errors in vec(error(), 1..6)) {
        let out = Outcome::<()>::fail_many(errors.clone()).unwrap();
        prop_assert!(out.is_failure());
        prop_assert_eq!(out.errors(), errors.as_slice());
    }

    /// Filtering splits a batch by success without reordering either side
    #[test]
    fn filters_partition_the_batch(batch in vec(outcome(), 0..10)) {
        let ok = filter_successful(&batch);
        let failed = filter_failed(&batch);
        prop_assert_eq!(ok.len() + failed.len(), batch.len());

        let expected_ok: Vec<_> = batch.iter().filter(|o| o.is_success()).collect();
        let expected_failed: Vec<_> = batch.iter().filter(|o| o.is_failure()).collect();
        prop_assert_eq!(ok, expected_ok);
        prop_assert_eq!(failed, expected_failed);
    }

    /// Mapping touches values only and never loses errors
    #[test]
    fn map_preserves_errors(out in outcome()) {
        let original = out.clone();
        let mapped = out.map(|x| i64::from(x) * 2);
        prop_assert_eq!(mapped.errors(), original.errors());
        if original.is_success() {
            prop_assert_eq!(mapped.value().copied(), original.value().map(|&x| i64::from(x) * 2));
        } else {
            prop_assert!(!mapped.has_value());
        }
    }

    /// Combining concatenates left errors before right errors
    #[test]
    fn combine_concatenates_errors(left in outcome(), right in outcome()) {
        let mut expected = left.errors().to_vec();
        expected.extend_from_slice(right.errors());
        let both_ok = left.is_success() && right.is_success();
        let pair = (left.value().copied(), right.value().copied());

        let combined = left.combine_with(right);
        prop_assert_eq!(combined.errors(), expected.as_slice());
        if both_ok {
            if let (Some(a), Some(b)) = pair {
                prop_assert_eq!(combined.value(), Some(&(a, b)));
            } else {
                prop_assert!(!combined.has_value());
            }
        }
    }
}
