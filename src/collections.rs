//! Optional-returning lookups and structure-preserving maps over std collections

use crate::optional::Optional;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// The first element matching `predicate`, or `Absent`
///
/// # Examples
///
/// ```
/// use katabind::collections::lookup;
/// use katabind::Optional;
///
/// let is_odd = |i: &i32| i % 2 == 1;
/// assert_eq!(lookup(&[], is_odd), Optional::Absent);
/// assert_eq!(lookup(&[2, 1, 3], is_odd), Optional::Present(&1));
/// ```
pub fn lookup<T, P>(items: &[T], predicate: P) -> Optional<&T>
where
    P: Fn(&T) -> bool,
{
    items.iter().find(|&item| predicate(item)).into()
}

/// The value stored under `key`, or `Absent`
pub fn lookup_key<'a, K, Q, V>(map: &'a HashMap<K, V>, key: &Q) -> Optional<&'a V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    map.get(key).into()
}

/// Apply `f` to every member; members that map to the same value collapse
pub fn map_set<T, R, F>(set: &HashSet<T>, f: F) -> HashSet<R>
where
    R: Eq + Hash,
    F: Fn(&T) -> R,
{
    set.iter().map(f).collect()
}

/// Apply `f` to every value, keeping keys unchanged
pub fn map_values<K, T, R, F>(map: &HashMap<K, T>, f: F) -> HashMap<K, R>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> R,
{
    map.iter().map(|(key, value)| (key.clone(), f(value))).collect()
}

/// `map` for [`Optional`] written with `bind` and `some` only
pub fn map_via_bind<T, R, F>(optional: Optional<T>, f: F) -> Optional<R>
where
    F: FnOnce(T) -> R,
{
    optional.bind(|value| Optional::some(f(value)))
}

/// `map` for sequences written with a flattening bind over singletons
pub fn map_seq_via_bind<T, R, F>(items: Vec<T>, f: F) -> Vec<R>
where
    F: Fn(T) -> R,
{
    items
        .into_iter()
        .flat_map(|item| std::iter::once(f(item)))
        .collect()
}
