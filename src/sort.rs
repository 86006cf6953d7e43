//! Pure partition sort
//!
//! The pivot is always the first element. Everything that compares less than
//! or equal to it goes left, everything strictly greater goes right, and the
//! result is `left ++ [pivot] ++ right`. The input slice is never modified.
//!
//! Segments waiting to be sorted live on an explicit work stack instead of
//! the call stack, and each element is moved between partitions rather than
//! cloned, so memory stays linear in the input. Already-sorted input still
//! costs a quadratic number of comparisons.
//!
//! This is not a stable sort: equal elements keep their relative order only
//! as a side effect of the partition rule, and callers should not rely on it.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Sort `list` into a new vector using `compare`
///
/// # Examples
///
/// ```
/// use katabind::sort::quick_sort_by;
///
/// let sorted = quick_sort_by(&[3, 1, 2], |a, b| a.cmp(b));
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn quick_sort_by<T, F>(list: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    partition_sort(list.iter().cloned().collect(), &compare)
}

/// Sort `list` into a new vector by its natural ordering
pub fn quick_sort<T>(list: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    quick_sort_by(list, T::cmp)
}

/// Work left to do, popped in output order
enum Pending<T> {
    Segment(VecDeque<T>),
    Pivot(T),
}

fn partition_sort<T, F>(list: VecDeque<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(list.len());
    let mut pending = vec![Pending::Segment(list)];

    while let Some(work) = pending.pop() {
        match work {
            Pending::Pivot(pivot) => sorted.push(pivot),
            Pending::Segment(mut segment) => {
                let Some(pivot) = segment.pop_front() else {
                    continue;
                };
                let (smaller, larger) = split_around(segment, &pivot, compare);

                // Last pushed is emitted first
                if !larger.is_empty() {
                    pending.push(Pending::Segment(larger));
                }
                pending.push(Pending::Pivot(pivot));
                if !smaller.is_empty() {
                    pending.push(Pending::Segment(smaller));
                }
            }
        }
    }

    sorted
}

/// Split `segment` into the elements not greater than `pivot` and the rest,
/// keeping their order and comparing each element exactly once
fn split_around<T, F>(segment: VecDeque<T>, pivot: &T, compare: &F) -> (VecDeque<T>, VecDeque<T>)
where
    F: Fn(&T, &T) -> Ordering,
{
    let goes_left = |elt: &T| compare(elt, pivot) != Ordering::Greater;

    let Some(first_left) = segment.front().map(goes_left) else {
        return (VecDeque::new(), VecDeque::new());
    };
    let Some(turn) = segment
        .iter()
        .skip(1)
        .position(|elt| goes_left(elt) != first_left)
        .map(|offset| offset + 1)
    else {
        // One-sided split: the segment moves over whole
        return if first_left {
            (segment, VecDeque::new())
        } else {
            (VecDeque::new(), segment)
        };
    };

    let mut smaller = VecDeque::new();
    let mut larger = VecDeque::new();
    for (index, elt) in segment.into_iter().enumerate() {
        let left = match index.cmp(&turn) {
            Ordering::Less => first_left,
            Ordering::Equal => !first_left,
            Ordering::Greater => goes_left(&elt),
        };
        if left {
            smaller.push_back(elt);
        } else {
            larger.push_back(elt);
        }
    }
    (smaller, larger)
}
