//! Foldable type class - reducing a container to a summary value.
//!
//! Every container has a *canonical order*, fixed per container and shared
//! by `reduce`, `reduce_right`, `fold_map` and `traverse`:
//!
//! | Container | Canonical order |
//! |---|---|
//! | `Vec`, `NonEmptyVec` | index order |
//! | `Record` | lexicographic key order |
//! | `OrderedMap` | the map's `Order` |
//! | `Tree` | depth-first pre-order, value before forest |
//! | `Option`, `Result`, `These`, tuples | the single payload, if any |
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{Foldable, VecK};
//!
//! let joined = VecK::reduce(vec!["a", "b", "c"], String::new(), |mut text, part| {
//!     text.push_str(part);
//!     text
//! });
//! assert_eq!(joined, "abc");
//! ```

use super::higher::{OptionK, ResultK, TypeConstructor, VecK};
use super::monoid::Monoid;

/// A type class for containers that can be folded in canonical order.
pub trait Foldable: TypeConstructor {
    /// Accumulates left to right: `function(accumulator, element)`.
    ///
    /// An empty container returns `initial` unchanged.
    fn reduce<A, B, F>(fa: Self::Of<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B;

    /// Accumulates right to left: `function(element, accumulator)`.
    fn reduce_right<A, B, F>(fa: Self::Of<A>, initial: B, function: F) -> B
    where
        F: FnMut(A, B) -> B;

    /// Maps every element into a monoid and combines left to right.
    ///
    /// An empty container yields `M::empty()`.
    fn fold_map<A, M, F>(fa: Self::Of<A>, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
    {
        Self::reduce(fa, M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Combines the elements, which are already monoid values.
    fn fold<M: Monoid>(fa: Self::Of<M>) -> M {
        Self::fold_map(fa, |element| element)
    }

    /// Counts the elements.
    fn length<A>(fa: Self::Of<A>) -> usize {
        Self::reduce(fa, 0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in canonical order.
    fn to_vec<A>(fa: Self::Of<A>) -> Vec<A> {
        Self::reduce(fa, Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<A, P>(fa: Self::Of<A>, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        Self::reduce(fa, false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<A, P>(fa: Self::Of<A>, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        Self::reduce(fa, true, |holds, element| holds && predicate(&element))
    }
}

impl Foldable for OptionK {
    fn reduce<A, B, F>(fa: Option<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Some(element) => function(initial, element),
            None => initial,
        }
    }

    fn reduce_right<A, B, F>(fa: Option<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match fa {
            Some(element) => function(element, initial),
            None => initial,
        }
    }
}

impl<E: 'static> Foldable for ResultK<E> {
    fn reduce<A, B, F>(fa: Result<A, E>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Ok(element) => function(initial, element),
            Err(_) => initial,
        }
    }

    fn reduce_right<A, B, F>(fa: Result<A, E>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match fa {
            Ok(element) => function(element, initial),
            Err(_) => initial,
        }
    }
}

impl Foldable for VecK {
    #[inline]
    fn reduce<A, B, F>(fa: Vec<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn reduce_right<A, B, F>(fa: Vec<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length<A>(fa: Vec<A>) -> usize {
        fa.len()
    }

    #[inline]
    fn to_vec<A>(fa: Vec<A>) -> Vec<A> {
        fa
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn reduce_over_empty_returns_seed() {
        assert_eq!(VecK::reduce(Vec::<i32>::new(), 42, |a, b| a + b), 42);
        assert_eq!(OptionK::reduce(None::<i32>, 42, |a, b| a + b), 42);
    }

    #[rstest]
    fn reduce_and_reduce_right_visit_opposite_ends_first() {
        let left = VecK::reduce(vec!['a', 'b', 'c'], String::new(), |mut text, c| {
            text.push(c);
            text
        });
        let right = VecK::reduce_right(vec!['a', 'b', 'c'], String::new(), |c, mut text| {
            text.push(c);
            text
        });
        assert_eq!(left, "abc");
        assert_eq!(right, "cba");
    }

    #[rstest]
    #[case(vec![], Sum::new(0))]
    #[case(vec![1, 2, 3], Sum::new(6))]
    fn fold_map_uses_monoid_identity_for_empty(#[case] input: Vec<i32>, #[case] expected: Sum<i32>) {
        assert_eq!(VecK::fold_map(input, Sum::new), expected);
    }

    #[rstest]
    fn fold_map_keeps_canonical_order_for_non_commutative_monoid() {
        let text: String = VecK::fold_map(vec![1, 2, 3], |n: i32| n.to_string());
        assert_eq!(text, "123");
    }

    #[rstest]
    #[case(Ok(5), 6)]
    #[case(Err(()), 1)]
    fn result_reduce_ignores_error(#[case] input: Result<i32, ()>, #[case] expected: i32) {
        assert_eq!(ResultK::<()>::reduce(input, 1, |a, b| a + b), expected);
    }

    #[rstest]
    fn derived_queries() {
        assert_eq!(OptionK::length(Some(1)), 1);
        assert!(VecK::exists(vec![1, 5, 3], |n| *n > 4));
        assert!(!VecK::for_all(vec![1, 5, 3], |n| *n > 2));
        assert_eq!(OptionK::to_vec(Some('x')), vec!['x']);
    }
}
