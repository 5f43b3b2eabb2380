//! Array helpers.
//!
//! - [`last_index_of`] / [`last_index_of_by`]: search from the end
//! - [`pull_at`]: remove elements by index and return them

/// Resolves the position a backwards search starts from.
///
/// Negative values count from the end and stop at the first element;
/// values past the end start at the last element.
fn start_index(length: usize, from_index: Option<isize>) -> usize {
    let last = length - 1;
    match from_index {
        None => last,
        Some(index) if index < 0 => length.saturating_sub(index.unsigned_abs()),
        Some(index) => index.unsigned_abs().min(last),
    }
}

/// Returns the index of the last element equal to `value`, searching
/// backwards from `from_index` (inclusive).
///
/// A negative `from_index` is an offset from the end.
///
/// # Examples
///
/// ```
/// use funcwrap::array::last_index_of;
///
/// let values = [1, 2, 1, 2];
/// assert_eq!(last_index_of(&values, &2, None), Some(3));
/// assert_eq!(last_index_of(&values, &2, Some(2)), Some(1));
/// assert_eq!(last_index_of(&values, &2, Some(-2)), Some(1));
/// assert_eq!(last_index_of(&values, &3, None), None);
/// ```
pub fn last_index_of<T: PartialEq>(
    slice: &[T],
    value: &T,
    from_index: Option<isize>,
) -> Option<usize> {
    last_index_of_by(slice, |element| element == value, from_index)
}

/// Returns the index of the last element satisfying `predicate`, searching
/// backwards from `from_index` (inclusive).
///
/// Useful where equality does not find the element, such as `NaN`.
///
/// # Examples
///
/// ```
/// use funcwrap::array::last_index_of_by;
///
/// let values = [1.0, f64::NAN, 3.0, f64::NAN];
/// assert_eq!(last_index_of_by(&values, |value| value.is_nan(), None), Some(3));
/// assert_eq!(last_index_of_by(&values, |value| value.is_nan(), Some(2)), Some(1));
/// ```
pub fn last_index_of_by<T, P>(slice: &[T], mut predicate: P, from_index: Option<isize>) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    if slice.is_empty() {
        return None;
    }
    let start = start_index(slice.len(), from_index);
    slice[..=start].iter().rposition(|element| predicate(element))
}

/// Removes the elements at `indexes` from `values` and returns them in the
/// order requested.
///
/// Out-of-range indexes yield `None`. Repeated indexes repeat the element
/// in the result but remove it once.
///
/// # Examples
///
/// ```
/// use funcwrap::array::pull_at;
///
/// let mut letters = vec!['a', 'b', 'c', 'd'];
/// let pulled = pull_at(&mut letters, &[1, 3]);
///
/// assert_eq!(letters, vec!['a', 'c']);
/// assert_eq!(pulled, vec![Some('b'), Some('d')]);
/// ```
pub fn pull_at<T: Clone>(values: &mut Vec<T>, indexes: &[usize]) -> Vec<Option<T>> {
    let pulled = indexes
        .iter()
        .map(|&index| values.get(index).cloned())
        .collect();

    let mut removals: Vec<usize> = indexes
        .iter()
        .copied()
        .filter(|&index| index < values.len())
        .collect();
    removals.sort_unstable();
    removals.dedup();
    for index in removals.into_iter().rev() {
        values.remove(index);
    }

    pulled
}
