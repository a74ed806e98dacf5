//! Equality and membership helpers.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns true if the two values are equal.
pub fn equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Returns true if the two values are not equal.
pub fn not_equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a != b
}

/// Report whether `value` is an element of `slice`.
pub fn contains_in_slice<T: PartialEq>(slice: &[T], value: &T) -> bool {
    slice.contains(value)
}

/// Report whether `key` is present in `map`.
pub fn contains_in_map<K, V, S>(map: &HashMap<K, V, S>, key: &K) -> bool
where
    K: Eq + Hash,
    S: BuildHasher,
{
    map.contains_key(key)
}
