//! Integration tests for the array helpers.

#![cfg(all(feature = "array", feature = "value"))]

use funcwrap::array::{last_index_of, last_index_of_by, pull_at};
use funcwrap::value::Value;
use rstest::rstest;

// =============================================================================
// last_index_of tests
// =============================================================================

#[rstest]
#[case(&[1, 2, 1, 2], 2, None, Some(3))]
#[case(&[1, 2, 1, 2], 2, Some(2), Some(1))]
#[case(&[1, 2, 1, 2], 1, Some(-1), Some(2))]
#[case(&[1, 2, 1, 2], 3, None, None)]
#[case(&[], 1, None, None)]
fn test_last_index_of(
    #[case] values: &[i32],
    #[case] value: i32,
    #[case] from_index: Option<isize>,
    #[case] expected: Option<usize>,
) {
    assert_eq!(last_index_of(values, &value, from_index), expected);
}

#[test]
fn test_last_index_of_values() {
    let values = vec![Value::from("a"), Value::Null, Value::from("a"), Value::Undefined];
    assert_eq!(last_index_of(&values, &Value::from("a"), None), Some(2));
    assert_eq!(last_index_of(&values, &Value::Undefined, None), Some(3));
}

#[test]
fn test_last_index_of_nan_needs_predicate() {
    let values = vec![Value::from(1), Value::from(f64::NAN), Value::from(3)];
    let nan = Value::from(f64::NAN);

    assert_eq!(last_index_of(&values, &nan, None), None);
    assert_eq!(
        last_index_of_by(&values, |value| value.same_value_zero(&nan), None),
        Some(1)
    );
}

// =============================================================================
// pull_at tests
// =============================================================================

#[test]
fn test_pull_at_removes_and_returns_in_request_order() {
    let mut letters = vec!["a", "b", "c", "d"];
    let pulled = pull_at(&mut letters, &[3, 1]);

    assert_eq!(pulled, vec![Some("d"), Some("b")]);
    assert_eq!(letters, vec!["a", "c"]);
}

#[test]
fn test_pull_at_every_index() {
    let mut values = vec![1, 2, 3];
    let pulled = pull_at(&mut values, &[0, 1, 2]);

    assert_eq!(pulled, vec![Some(1), Some(2), Some(3)]);
    assert!(values.is_empty());
}
