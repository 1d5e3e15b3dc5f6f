//! Semigroup type class - values with an associative combine.
//!
//! Semigroups are the accumulation capability of this crate. They combine
//! the results of `fold_map`, the error payloads of `ValidationK` and
//! `TheseK`, the logs of `Writer` and the accumulators of tuples.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Nothing checks the law at runtime. Combinators built on a
//! non-associative instance inherit its behaviour.
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{Semigroup, Sum};
//!
//! assert_eq!("ab".to_string().combine("cd".to_string()), "abcd");
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! ```

use std::collections::BTreeMap;
use std::ops::{Add, Mul};

use super::wrappers::{First, Last, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values, `self` on the left.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines borrowed values by cloning them.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines all values left to right, or `None` when there are none.
    ///
    /// ```rust
    /// use fp_contexts::typeclass::Semigroup;
    ///
    /// let words = vec!["a".to_string(), "b".to_string()];
    /// assert_eq!(String::reduce_all(words), Some("ab".to_string()));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is neutral; two present values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

/// Union of two maps. Values under the same key are combined.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(std::cmp::max(self.0, other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(std::cmp::min(self.0, other.0))
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        other
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("a".to_string()), Some("b".to_string()), Some("ab".to_string()))]
    #[case(Some("a".to_string()), None, Some("a".to_string()))]
    #[case(None, Some("b".to_string()), Some("b".to_string()))]
    #[case(None, None, None)]
    fn option_combine_treats_none_as_neutral(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn map_union_combines_shared_keys() {
        let left = BTreeMap::from([("a", Sum::new(1)), ("b", Sum::new(2))]);
        let right = BTreeMap::from([("b", Sum::new(10)), ("c", Sum::new(3))]);
        let expected = BTreeMap::from([("a", Sum::new(1)), ("b", Sum::new(12)), ("c", Sum::new(3))]);
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn first_and_last_pick_an_end() {
        assert_eq!(First::new(1).combine(First::new(2)), First::new(1));
        assert_eq!(Last::new(1).combine(Last::new(2)), Last::new(2));
    }

    #[rstest]
    fn wrappers_combine_numbers() {
        assert_eq!(Product::new(3).combine(Product::new(4)), Product::new(12));
        assert_eq!(Max::new(3).combine(Max::new(9)), Max::new(9));
        assert_eq!(Min::new(3).combine(Min::new(9)), Min::new(3));
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let left = ("a".to_string(), Sum::new(1));
        let right = ("b".to_string(), Sum::new(2));
        assert_eq!(left.combine(right), ("ab".to_string(), Sum::new(3)));
    }

    #[rstest]
    fn vec_combine_is_associative() {
        let (a, b, c) = (vec![1], vec![2, 3], vec![4]);
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }
}
