//! Maps ordered by an `Order` descriptor.
//!
//! An [`OrderedMap<K, A, O>`] keeps its entries sorted by the order `O`
//! rather than by `K: Ord`. Keys are unique under `O`: two keys comparing
//! equal are the same key. Folds and traversals run in that order,
//! independent of insertion history.
//!
//! ```rust
//! use fp_contexts::collection::{OrderedMap, OrderedMapK};
//! use fp_contexts::typeclass::{Foldable, Natural, Reversed};
//!
//! let scores: OrderedMap<u32, &str, Reversed<Natural>> =
//!     OrderedMap::from_entries([(1, "low"), (3, "high"), (2, "mid")]);
//! assert_eq!(OrderedMapK::<u32, Reversed<Natural>>::to_vec(scores), vec!["high", "mid", "low"]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::control::Either;
use crate::typeclass::{
    Applicative, Compactable, Filterable, Foldable, Functor, Monoid, Order, Semigroup, Separated,
    Traversable, TypeConstructor, kind_marker,
};

/// Key/value entries sorted by the order `O` over `K`.
pub struct OrderedMap<K, A, O> {
    entries: Vec<(K, A)>,
    order: PhantomData<fn() -> O>,
}

impl<K, A, O> OrderedMap<K, A, O> {
    /// An empty map.
    #[inline]
    pub const fn new() -> Self {
        Self::from_sorted(Vec::new())
    }

    /// Entries that are already sorted and unique under `O`.
    const fn from_sorted(entries: Vec<(K, A)>) -> Self {
        Self {
            entries,
            order: PhantomData,
        }
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// The values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &A> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// The entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &A)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Converts into the sorted entries.
    pub fn into_entries(self) -> Vec<(K, A)> {
        self.entries
    }

    /// Maps the values with access to their keys.
    pub fn map_with_key<B, F>(self, mut function: F) -> OrderedMap<K, B, O>
    where
        F: FnMut(&K, A) -> B,
    {
        OrderedMap::from_sorted(
            self.entries
                .into_iter()
                .map(|(key, value)| {
                    let mapped = function(&key, value);
                    (key, mapped)
                })
                .collect(),
        )
    }

    /// Left fold in canonical order with access to the keys.
    pub fn reduce_with_key<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(&K, B, A) -> B,
    {
        self.entries
            .into_iter()
            .fold(initial, |accumulator, (key, value)| function(&key, accumulator, value))
    }

    /// Right fold in canonical order with access to the keys.
    pub fn reduce_right_with_key<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(&K, A, B) -> B,
    {
        self.entries
            .into_iter()
            .rev()
            .fold(initial, |accumulator, (key, value)| function(&key, value, accumulator))
    }

    /// `fold_map` with access to the keys.
    pub fn fold_map_with_key<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(&K, A) -> M,
    {
        self.reduce_with_key(M::empty(), |key, accumulator, value| {
            accumulator.combine(function(key, value))
        })
    }

    /// `filter_map` with access to the keys.
    pub fn filter_map_with_key<B, F>(self, mut function: F) -> OrderedMap<K, B, O>
    where
        F: FnMut(&K, A) -> Option<B>,
    {
        OrderedMap::from_sorted(
            self.entries
                .into_iter()
                .filter_map(|(key, value)| function(&key, value).map(|mapped| (key, mapped)))
                .collect(),
        )
    }

    /// `partition_map` with access to the keys.
    pub fn partition_map_with_key<B, C, F>(
        self,
        mut function: F,
    ) -> Separated<OrderedMap<K, B, O>, OrderedMap<K, C, O>>
    where
        F: FnMut(&K, A) -> Either<B, C>,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (key, value) in self.entries {
            match function(&key, value) {
                Either::Left(rejected) => left.push((key, rejected)),
                Either::Right(accepted) => right.push((key, accepted)),
            }
        }
        Separated::new(OrderedMap::from_sorted(left), OrderedMap::from_sorted(right))
    }
}

impl<K, A, O: Order<K>> OrderedMap<K, A, O> {
    fn position(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(existing, _)| O::compare(existing, key))
    }

    /// A map with one entry.
    pub fn singleton(key: K, value: A) -> Self {
        Self::from_sorted(vec![(key, value)])
    }

    /// Builds a map from entries; a repeated key keeps the last value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |map, (key, value)| map.insert(key, value))
    }

    /// Stores `value` under `key`, replacing an entry with an equal key.
    pub fn insert(mut self, key: K, value: A) -> Self {
        match self.position(&key) {
            Ok(index) => self.entries[index] = (key, value),
            Err(index) => self.entries.insert(index, (key, value)),
        }
        self
    }

    /// The value stored under `key`.
    pub fn lookup(&self, key: &K) -> Option<&A> {
        self.position(key)
            .ok()
            .and_then(|index| self.entries.get(index))
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_ok()
    }

    /// Removes `key`; an absent key leaves the map unchanged.
    pub fn remove(mut self, key: &K) -> Self {
        if let Ok(index) = self.position(key) {
            self.entries.remove(index);
        }
        self
    }

    /// Transforms the value of an existing key, or `None` if it is absent.
    pub fn modify_at<F>(mut self, key: &K, function: F) -> Option<Self>
    where
        F: FnOnce(A) -> A,
    {
        let index = self.position(key).ok()?;
        let (key, value) = self.entries.remove(index);
        self.entries.insert(index, (key, function(value)));
        Some(self)
    }
}

impl<K: Clone, A: Clone, O> Clone for OrderedMap<K, A, O> {
    fn clone(&self) -> Self {
        Self::from_sorted(self.entries.clone())
    }
}

impl<K: PartialEq, A: PartialEq, O> PartialEq for OrderedMap<K, A, O> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, A: Eq, O> Eq for OrderedMap<K, A, O> {}

impl<K, A, O> Default for OrderedMap<K, A, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, A: fmt::Debug, O> fmt::Debug for OrderedMap<K, A, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Union; values of keys present on both sides are combined, left first.
impl<K, A: Semigroup, O: Order<K>> Semigroup for OrderedMap<K, A, O> {
    fn combine(self, other: Self) -> Self {
        other.entries.into_iter().fold(self, |mut map, (key, value)| {
            match map.position(&key) {
                Ok(index) => {
                    let (existing_key, existing) = map.entries.remove(index);
                    map.entries.insert(index, (existing_key, existing.combine(value)));
                }
                Err(index) => map.entries.insert(index, (key, value)),
            }
            map
        })
    }
}

impl<K, A: Semigroup, O: Order<K>> Monoid for OrderedMap<K, A, O> {
    fn empty() -> Self {
        Self::new()
    }
}

kind_marker! {
    /// Kind marker for [`OrderedMap`] with keys `K` ordered by `O`.
    pub struct OrderedMapK<K, O>;
}

impl<K: 'static, O: Order<K>> TypeConstructor for OrderedMapK<K, O> {
    type Of<A> = OrderedMap<K, A, O>;
}

impl<K: 'static, O: Order<K>> OrderedMapK<K, O> {
    /// `traverse` with access to the keys.
    pub fn traverse_with_key<F, A, B, V>(
        _effect: F,
        map: OrderedMap<K, A, O>,
        mut visitor: V,
    ) -> F::Of<OrderedMap<K, B, O>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(&K, A) -> F::Of<B>,
    {
        let capacity = map.len();
        let entries = map.entries.into_iter().fold(
            F::of(Vec::with_capacity(capacity)),
            |accumulator, (key, value)| {
                let visited = visitor(&key, value);
                F::map2(accumulator, visited, move |mut entries: Vec<(K, B)>, value: B| {
                    entries.push((key, value));
                    entries
                })
            },
        );
        F::map(entries, OrderedMap::<K, B, O>::from_sorted)
    }
}

impl<K: 'static, O: Order<K>> Functor for OrderedMapK<K, O> {
    fn map<A, B, F>(fa: OrderedMap<K, A, O>, function: F) -> OrderedMap<K, B, O>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map_with_key(|_, value| function(value))
    }
}

impl<K: 'static, O: Order<K>> Foldable for OrderedMapK<K, O> {
    fn reduce<A, B, F>(fa: OrderedMap<K, A, O>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.reduce_with_key(initial, |_, accumulator, value| function(accumulator, value))
    }

    fn reduce_right<A, B, F>(fa: OrderedMap<K, A, O>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.reduce_right_with_key(initial, |_, value, accumulator| function(value, accumulator))
    }
}

impl<K: 'static, O: Order<K>> Traversable for OrderedMapK<K, O> {
    fn traverse<F, A, B, V>(effect: F, ta: OrderedMap<K, A, O>, mut visitor: V) -> F::Of<OrderedMap<K, B, O>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        Self::traverse_with_key(effect, ta, |_, value| visitor(value))
    }
}

impl<K: 'static, O: Order<K>> Compactable for OrderedMapK<K, O> {
    fn compact<A: 'static>(fa: OrderedMap<K, Option<A>, O>) -> OrderedMap<K, A, O> {
        fa.filter_map_with_key(|_, value| value)
    }

    fn separate<A: 'static, B: 'static>(
        fa: OrderedMap<K, Either<A, B>, O>,
    ) -> Separated<OrderedMap<K, A, O>, OrderedMap<K, B, O>> {
        fa.partition_map_with_key(|_, value| value)
    }
}

impl<K: 'static, O: Order<K>> Filterable for OrderedMapK<K, O> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Natural, OptionK, Reversed, Sum, Witherable};
    use rstest::rstest;

    type Ascending = OrderedMap<i32, &'static str, Natural>;
    type Descending = OrderedMap<i32, &'static str, Reversed<Natural>>;

    #[rstest]
    fn canonical_order_ignores_insertion_history() {
        let first = Ascending::from_entries([(3, "c"), (1, "a"), (2, "b")]);
        let second = Ascending::from_entries([(2, "b"), (3, "c"), (1, "a")]);
        assert_eq!(first, second);
        assert_eq!(first.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn descending_order_drives_folds() {
        let map = Descending::from_entries([(1, "a"), (3, "c"), (2, "b")]);
        let joined = OrderedMapK::<i32, Reversed<Natural>>::reduce(map.clone(), String::new(), |acc, s| acc + s);
        assert_eq!(joined, "cba");
        let right = OrderedMapK::<i32, Reversed<Natural>>::reduce_right(map, String::new(), |s, acc| acc + s);
        assert_eq!(right, "abc");
    }

    #[rstest]
    fn from_entries_keeps_the_last_write() {
        let map = Ascending::from_entries([(1, "old"), (1, "new")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup(&1), Some(&"new"));
    }

    #[rstest]
    fn insert_remove_lookup() {
        let map = Ascending::singleton(5, "five").insert(2, "two");
        assert!(map.contains_key(&2));
        let map = map.remove(&5).remove(&9);
        assert_eq!(map.lookup(&5), None);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!["two"]);
    }

    #[rstest]
    #[case(2, Some(vec![(1, 10), (2, 200)]))]
    #[case(7, None)]
    fn modify_at_requires_the_key(#[case] key: i32, #[case] expected: Option<Vec<(i32, i32)>>) {
        let map: OrderedMap<i32, i32, Natural> = OrderedMap::from_entries([(1, 10), (2, 20)]);
        assert_eq!(map.modify_at(&key, |n| n * 10).map(OrderedMap::into_entries), expected);
    }

    #[rstest]
    fn traversal_follows_comparator_order() {
        let map = Descending::from_entries([(1, "a"), (2, "b")]);
        let mut visited = Vec::new();
        let result = OrderedMapK::traverse_with_key(OptionK, map, |key, value: &'static str| {
            visited.push(*key);
            Some(value.len())
        });
        assert_eq!(visited, vec![2, 1]);
        assert_eq!(result.map(OrderedMap::into_entries), Some(vec![(2, 1), (1, 1)]));
    }

    #[rstest]
    fn traversal_failing_on_one_key_fails_as_a_whole() {
        let map = Ascending::from_entries([(1, "a"), (2, "")]);
        let result = OrderedMapK::<i32, Natural>::traverse(OptionK, map, |value: &'static str| {
            (!value.is_empty()).then_some(value)
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn union_combines_shared_keys() {
        let left: OrderedMap<i32, Sum<i32>, Natural> = OrderedMap::from_entries([(1, Sum::new(1)), (2, Sum::new(2))]);
        let right = OrderedMap::from_entries([(2, Sum::new(10)), (3, Sum::new(3))]);
        let merged = left.combine(right);
        assert_eq!(merged.into_entries(), vec![(1, Sum::new(1)), (2, Sum::new(12)), (3, Sum::new(3))]);
    }

    #[rstest]
    fn wilt_splits_under_an_effect() {
        let map: OrderedMap<i32, i32, Natural> = OrderedMap::from_entries([(1, 1), (2, -2), (3, 3)]);
        let result = OrderedMapK::<i32, Natural>::wilt(OptionK, map, |n: i32| {
            Some(if n < 0 { Either::Left(n) } else { Either::Right(n) })
        });
        let halves = result.expect("visitor never fails");
        assert_eq!(halves.left.into_entries(), vec![(2, -2)]);
        assert_eq!(halves.right.into_entries(), vec![(1, 1), (3, 3)]);
    }

    #[rstest]
    fn fold_map_with_key_sees_keys() {
        let map: OrderedMap<i32, i32, Natural> = OrderedMap::from_entries([(2, 5), (1, 7)]);
        let weighted: Sum<i32> = map.fold_map_with_key(|key, value| Sum::new(key * value));
        assert_eq!(weighted, Sum::new(17));
    }
}
