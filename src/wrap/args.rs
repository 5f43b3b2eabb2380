//! Argument splicing shared by the builders and the merger.

use super::slot::{Partials, Slot};
use crate::value::Value;

/// Lifts call-time arguments into slots.
pub(crate) fn to_slots(arguments: &[Value]) -> Vec<Slot> {
    arguments.iter().cloned().map(Slot::Fixed).collect()
}

/// Lowers slots into call arguments; holes read as `Undefined`.
pub(crate) fn to_values(slots: Vec<Slot>) -> Vec<Value> {
    slots.into_iter().map(Slot::into_value).collect()
}

/// Splices left partials in front of `arguments`.
///
/// The partials come first; their holes are filled in order by the leading
/// arguments and the remaining arguments are appended. Holes left without
/// an argument stay holes.
pub(crate) fn compose_left(arguments: Vec<Slot>, partials: &Partials) -> Vec<Slot> {
    let holders = partials.holders();
    let mut result =
        Vec::with_capacity(partials.len() + arguments.len().saturating_sub(holders.len()));
    result.extend_from_slice(partials.slots());

    let mut arguments = arguments.into_iter();
    for (&holder, argument) in holders.iter().zip(arguments.by_ref()) {
        result[holder] = argument;
    }
    result.extend(arguments);
    result
}

/// Splices right partials behind `arguments`.
///
/// Arguments beyond the number of holes come first, followed by the
/// partials whose holes are filled in order by the remaining arguments.
pub(crate) fn compose_right(arguments: Vec<Slot>, partials: &Partials) -> Vec<Slot> {
    let holders = partials.holders();
    let leading = arguments.len().saturating_sub(holders.len());
    let mut arguments = arguments.into_iter();

    let mut result: Vec<Slot> = Vec::with_capacity(leading + partials.len());
    result.extend(arguments.by_ref().take(leading));
    let offset = result.len();
    result.extend_from_slice(partials.slots());

    for (&holder, argument) in holders.iter().zip(arguments) {
        result[offset + holder] = argument;
    }
    result
}

/// Reorders `values` so that position `i` receives the value previously at
/// `positions[i]`. Positions past the end yield `Undefined`; values past
/// the permutation keep their place.
pub(crate) fn reorder(mut values: Vec<Value>, positions: &[usize]) -> Vec<Value> {
    let original = values.clone();
    for (slot, &position) in values.iter_mut().zip(positions) {
        *slot = original.get(position).cloned().unwrap_or_default();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots;
    use rstest::rstest;

    fn numbers(slots: &[Slot]) -> Vec<Option<f64>> {
        slots
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(value) => value.as_number(),
                Slot::Hole => None,
            })
            .collect()
    }

    #[test]
    fn test_compose_left_fills_holes_then_appends() {
        let partials = Partials::new(slots![1, __, 3]);
        let result = compose_left(slots![2, 4], &partials);
        assert_eq!(numbers(&result), vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_compose_left_keeps_unfilled_holes() {
        let partials = Partials::new(slots![__, __, 3]);
        let result = compose_left(slots![1], &partials);
        assert_eq!(result[1], Slot::Hole);
        assert_eq!(numbers(&result), vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_compose_right_leads_with_extra_arguments() {
        let partials = Partials::new(slots![__, 9]);
        let result = compose_right(slots![1, 2, 3], &partials);
        assert_eq!(numbers(&result), vec![Some(1.0), Some(2.0), Some(3.0), Some(9.0)]);
    }

    #[test]
    fn test_compose_right_without_holes_appends() {
        let partials = Partials::new(slots![8, 9]);
        let result = compose_right(slots![1], &partials);
        assert_eq!(numbers(&result), vec![Some(1.0), Some(8.0), Some(9.0)]);
    }

    #[rstest]
    #[case(vec![2, 0, 1], vec![3.0, 1.0, 2.0])]
    #[case(vec![1, 0], vec![2.0, 1.0, 3.0])]
    #[case(vec![], vec![1.0, 2.0, 3.0])]
    fn test_reorder(#[case] positions: Vec<usize>, #[case] expected: Vec<f64>) {
        let values = vec![Value::from(1), Value::from(2), Value::from(3)];
        let reordered: Vec<f64> = reorder(values, &positions)
            .iter()
            .filter_map(Value::as_number)
            .collect();
        assert_eq!(reordered, expected);
    }

    #[test]
    fn test_reorder_out_of_range_is_undefined() {
        let values = vec![Value::from(1), Value::from(2)];
        assert_eq!(reorder(values, &[5, 0]), vec![Value::Undefined, Value::from(1)]);
    }

    #[test]
    fn test_to_values_lowers_holes() {
        assert_eq!(to_values(slots![1, __]), vec![Value::from(1), Value::Undefined]);
    }
}
