//! Records - string-keyed associations in key order.
//!
//! A [`Record`] is a `BTreeMap<String, A>`. Its canonical order is the
//! lexicographic order of the keys, so folds and traversals give the same
//! result whatever order the entries were inserted in.
//!
//! ```rust
//! use fp_contexts::collection::{Record, RecordK};
//! use fp_contexts::typeclass::{OptionK, Traversable};
//!
//! let ports: Record<&str> = RecordK::from_entries([("http", "80"), ("admin", "8080")]);
//! let parsed = RecordK::traverse(OptionK, ports, |text: &str| text.parse::<u16>().ok());
//! assert_eq!(parsed.map(|record| RecordK::keys(&record)), Some(vec!["admin".to_string(), "http".to_string()]));
//! ```

use std::collections::BTreeMap;

use crate::control::Either;
use crate::typeclass::{
    Applicative, Compactable, Filterable, Foldable, Functor, Monoid, Semigroup, Separated,
    Traversable, TypeConstructor, kind_marker,
};

/// A string-keyed association ordered by key.
pub type Record<A> = BTreeMap<String, A>;

kind_marker! {
    /// Kind marker for [`Record`].
    pub struct RecordK;
}

impl TypeConstructor for RecordK {
    type Of<A> = Record<A>;
}

impl RecordK {
    /// Builds a record from key/value pairs; a repeated key keeps the last value.
    pub fn from_entries<K, A, I>(entries: I) -> Record<A>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, A)>,
    {
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect()
    }

    /// Builds a record from a foldable of pairs, combining the values of a
    /// repeated key with `A`'s semigroup (earlier value on the left).
    pub fn from_foldable<T, A>(pairs: T::Of<(String, A)>) -> Record<A>
    where
        T: Foldable,
        A: Semigroup,
    {
        T::reduce(pairs, Record::new(), |mut record: Record<A>, (key, value)| {
            let combined = match record.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            record.insert(key, combined);
            record
        })
    }

    /// The value stored under `key`.
    #[inline]
    pub fn lookup<'a, A>(record: &'a Record<A>, key: &str) -> Option<&'a A> {
        record.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn has<A>(record: &Record<A>, key: &str) -> bool {
        record.contains_key(key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert_at<A>(mut record: Record<A>, key: impl Into<String>, value: A) -> Record<A> {
        record.insert(key.into(), value);
        record
    }

    /// Removes `key`; an absent key leaves the record unchanged.
    pub fn delete_at<A>(mut record: Record<A>, key: &str) -> Record<A> {
        record.remove(key);
        record
    }

    /// Replaces the value of an existing key, or `None` if it is absent.
    pub fn update_at<A>(record: Record<A>, key: &str, value: A) -> Option<Record<A>> {
        Self::modify_at(record, key, move |_| value)
    }

    /// Transforms the value of an existing key, or `None` if it is absent.
    pub fn modify_at<A, F>(mut record: Record<A>, key: &str, function: F) -> Option<Record<A>>
    where
        F: FnOnce(A) -> A,
    {
        let (key, value) = record.remove_entry(key)?;
        record.insert(key, function(value));
        Some(record)
    }

    /// The keys in canonical order.
    pub fn keys<A>(record: &Record<A>) -> Vec<String> {
        record.keys().cloned().collect()
    }

    /// Maps every entry to one output, in canonical order.
    pub fn collect<A, B, F>(record: Record<A>, mut function: F) -> Vec<B>
    where
        F: FnMut(String, A) -> B,
    {
        record
            .into_iter()
            .map(|(key, value)| function(key, value))
            .collect()
    }

    /// Maps the values with access to their keys.
    pub fn map_with_key<A, B, F>(record: Record<A>, mut function: F) -> Record<B>
    where
        F: FnMut(&str, A) -> B,
    {
        record
            .into_iter()
            .map(|(key, value)| {
                let mapped = function(&key, value);
                (key, mapped)
            })
            .collect()
    }

    /// Left fold in key order with access to the keys.
    pub fn reduce_with_key<A, B, F>(record: Record<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(&str, B, A) -> B,
    {
        record
            .into_iter()
            .fold(initial, |accumulator, (key, value)| function(&key, accumulator, value))
    }

    /// Right fold in key order with access to the keys.
    pub fn reduce_right_with_key<A, B, F>(record: Record<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(&str, A, B) -> B,
    {
        record
            .into_iter()
            .rev()
            .fold(initial, |accumulator, (key, value)| function(&key, value, accumulator))
    }

    /// `fold_map` with access to the keys.
    pub fn fold_map_with_key<A, M, F>(record: Record<A>, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(&str, A) -> M,
    {
        Self::reduce_with_key(record, M::empty(), |key, accumulator, value| {
            accumulator.combine(function(key, value))
        })
    }

    /// `traverse` with access to the keys.
    pub fn traverse_with_key<F, A, B, V>(_effect: F, record: Record<A>, mut visitor: V) -> F::Of<Record<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(&str, A) -> F::Of<B>,
    {
        record
            .into_iter()
            .fold(F::of(Record::new()), |accumulator, (key, value)| {
                let visited = visitor(&key, value);
                F::map2(accumulator, visited, move |mut rebuilt: Record<B>, value: B| {
                    rebuilt.insert(key, value);
                    rebuilt
                })
            })
    }

    /// `filter_map` with access to the keys.
    pub fn filter_map_with_key<A, B, F>(record: Record<A>, mut function: F) -> Record<B>
    where
        F: FnMut(&str, A) -> Option<B>,
    {
        record
            .into_iter()
            .filter_map(|(key, value)| function(&key, value).map(|mapped| (key, mapped)))
            .collect()
    }

    /// `partition_map` with access to the keys.
    pub fn partition_map_with_key<A, B, C, F>(record: Record<A>, mut function: F) -> Separated<Record<B>, Record<C>>
    where
        F: FnMut(&str, A) -> Either<B, C>,
    {
        record
            .into_iter()
            .fold(Separated::default(), |mut halves: Separated<Record<B>, Record<C>>, (key, value)| {
                match function(&key, value) {
                    Either::Left(left) => {
                        halves.left.insert(key, left);
                    }
                    Either::Right(right) => {
                        halves.right.insert(key, right);
                    }
                }
                halves
            })
    }
}

impl Functor for RecordK {
    fn map<A, B, F>(fa: Record<A>, function: F) -> Record<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl Foldable for RecordK {
    fn reduce<A, B, F>(fa: Record<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.into_values().fold(initial, function)
    }

    fn reduce_right<A, B, F>(fa: Record<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.into_values()
            .rev()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }
}

impl Traversable for RecordK {
    fn traverse<F, A, B, V>(effect: F, ta: Record<A>, mut visitor: V) -> F::Of<Record<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        Self::traverse_with_key(effect, ta, |_, value| visitor(value))
    }
}

impl Compactable for RecordK {
    fn compact<A: 'static>(fa: Record<Option<A>>) -> Record<A> {
        fa.into_iter()
            .filter_map(|(key, value)| value.map(|present| (key, present)))
            .collect()
    }

    fn separate<A: 'static, B: 'static>(fa: Record<Either<A, B>>) -> Separated<Record<A>, Record<B>> {
        Self::partition_map_with_key(fa, |_, value| value)
    }
}

impl Filterable for RecordK {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionK, VecK, Witherable};
    use rstest::rstest;

    fn sample() -> Record<i32> {
        RecordK::from_entries([("b", 2), ("c", 3), ("a", 1)])
    }

    #[rstest]
    fn traversal_visits_keys_in_lexicographic_order() {
        let mut visited = Vec::new();
        let result = RecordK::traverse_with_key(OptionK, sample(), |key, value: i32| {
            visited.push(key.to_string());
            Some(value * 10)
        });
        assert_eq!(visited, vec!["a", "b", "c"]);
        assert_eq!(result, Some(RecordK::from_entries([("a", 10), ("b", 20), ("c", 30)])));
    }

    #[rstest]
    fn traversal_failing_on_one_key_fails_as_a_whole() {
        let result = RecordK::traverse(OptionK, sample(), |value: i32| (value != 2).then_some(value));
        assert_eq!(result, None);
    }

    #[rstest]
    fn folds_ignore_insertion_history() {
        let forwards = RecordK::from_entries([("x", "1"), ("y", "2")]);
        let backwards = RecordK::from_entries([("y", "2"), ("x", "1")]);
        let concat = |record: Record<&str>| RecordK::reduce(record, String::new(), |acc, s| acc + s);
        assert_eq!(concat(forwards), concat(backwards));
        assert_eq!(RecordK::reduce_right(sample(), Vec::new(), |n, mut acc: Vec<i32>| { acc.push(n); acc }), vec![3, 2, 1]);
    }

    #[rstest]
    fn from_foldable_combines_duplicates() {
        let pairs = vec![
            ("a".to_string(), "x".to_string()),
            ("b".to_string(), "y".to_string()),
            ("a".to_string(), "z".to_string()),
        ];
        let record = RecordK::from_foldable::<VecK, _>(pairs);
        assert_eq!(RecordK::lookup(&record, "a"), Some(&"xz".to_string()));
        assert_eq!(record.len(), 2);
    }

    #[rstest]
    #[case("a", Some(RecordK::from_entries([("a", 100), ("b", 2), ("c", 3)])))]
    #[case("z", None)]
    fn modify_at_requires_the_key(#[case] key: &str, #[case] expected: Option<Record<i32>>) {
        assert_eq!(RecordK::modify_at(sample(), key, |n| n * 100), expected);
    }

    #[rstest]
    fn insert_and_delete() {
        let record = RecordK::insert_at(sample(), "d", 4);
        assert!(RecordK::has(&record, "d"));
        let record = RecordK::delete_at(record, "a");
        assert_eq!(RecordK::keys(&record), vec!["b", "c", "d"]);
    }

    #[rstest]
    fn filterable_keeps_keys_of_survivors() {
        let evens = RecordK::filter(sample(), |n: &i32| n % 2 == 0);
        assert_eq!(evens, RecordK::from_entries([("b", 2)]));
        let halves = RecordK::partition(sample(), |n: &i32| *n > 1);
        assert_eq!(RecordK::keys(&halves.left), vec!["a"]);
        assert_eq!(RecordK::keys(&halves.right), vec!["b", "c"]);
    }

    #[rstest]
    fn wither_under_option() {
        let result = RecordK::wither(OptionK, sample(), |n: i32| Some((n > 1).then_some(n)));
        assert_eq!(result, Some(RecordK::from_entries([("b", 2), ("c", 3)])));
    }

    #[rstest]
    fn union_combines_shared_keys() {
        let left: Record<String> = RecordK::from_entries([("k", "a".to_string())]);
        let right: Record<String> = RecordK::from_entries([("k", "b".to_string()), ("j", "c".to_string())]);
        let merged = left.combine(right);
        assert_eq!(RecordK::lookup(&merged, "k"), Some(&"ab".to_string()));
        assert_eq!(merged.len(), 2);
    }

    #[rstest]
    fn collect_follows_key_order() {
        assert_eq!(RecordK::collect(sample(), |key, n| format!("{key}={n}")), vec!["a=1", "b=2", "c=3"]);
    }
}
