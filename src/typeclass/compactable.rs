//! Compactable and Filterable type classes.
//!
//! `compact` drops absent values from a container of options, and
//! `separate` splits a container of [`Either`] values into its lefts and its
//! rights. Both keep the canonical order of the surviving elements.
//!
//! `Filterable` derives the familiar filtering operations from those two:
//!
//! ```text
//! filter_map(fa, f)    == compact(map(fa, f))
//! partition_map(fa, f) == separate(map(fa, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::control::Either;
//! use fp_contexts::typeclass::{Compactable, Filterable, VecK};
//!
//! assert_eq!(VecK::compact(vec![Some(1), None, Some(3)]), vec![1, 3]);
//!
//! let split = VecK::partition_map(vec![1, 2, 3, 4], |n: i32| {
//!     if n % 2 == 0 { Either::Right(n) } else { Either::Left(n) }
//! });
//! assert_eq!(split.left, vec![1, 3]);
//! assert_eq!(split.right, vec![2, 4]);
//! ```

use crate::control::Either;

use super::functor::Functor;
use super::higher::{OptionK, TypeConstructor, VecK};

/// The two halves produced by `separate` and `partition`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Separated<L, R> {
    /// Elements tagged left, or rejected by a predicate.
    pub left: L,
    /// Elements tagged right, or accepted by a predicate.
    pub right: R,
}

impl<L, R> Separated<L, R> {
    /// Builds a pair of halves.
    #[inline]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Converts into a `(left, right)` tuple.
    #[inline]
    pub fn into_tuple(self) -> (L, R) {
        (self.left, self.right)
    }
}

/// A type class for containers that can discard absent values and split
/// tagged values.
pub trait Compactable: TypeConstructor {
    /// Keeps the present values, in canonical order.
    fn compact<A: 'static>(fa: Self::Of<Option<A>>) -> Self::Of<A>;

    /// Splits lefts from rights, each half in canonical order.
    fn separate<A: 'static, B: 'static>(
        fa: Self::Of<Either<A, B>>,
    ) -> Separated<Self::Of<A>, Self::Of<B>>;
}

/// A compactable functor, giving filtering and partitioning.
///
/// Every method has a default derived from `map`, `compact` and `separate`.
pub trait Filterable: Functor + Compactable {
    /// Maps to options and keeps the present results.
    fn filter_map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        Self::compact(Self::map(fa, function))
    }

    /// Maps to `Either` and splits the results.
    fn partition_map<A, B, C, F>(fa: Self::Of<A>, function: F) -> Separated<Self::Of<B>, Self::Of<C>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: Fn(A) -> Either<B, C> + 'static,
    {
        Self::separate(Self::map(fa, function))
    }

    /// Keeps the elements satisfying `predicate`.
    fn filter<A, P>(fa: Self::Of<A>, predicate: P) -> Self::Of<A>
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        Self::filter_map(fa, move |element| predicate(&element).then_some(element))
    }

    /// Splits by `predicate`; accepted elements go right.
    fn partition<A, P>(fa: Self::Of<A>, predicate: P) -> Separated<Self::Of<A>, Self::Of<A>>
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        Self::partition_map(fa, move |element| {
            if predicate(&element) {
                Either::Right(element)
            } else {
                Either::Left(element)
            }
        })
    }
}

impl Compactable for OptionK {
    #[inline]
    fn compact<A: 'static>(fa: Option<Option<A>>) -> Option<A> {
        fa.flatten()
    }

    fn separate<A: 'static, B: 'static>(fa: Option<Either<A, B>>) -> Separated<Option<A>, Option<B>> {
        match fa {
            Some(Either::Left(left)) => Separated::new(Some(left), None),
            Some(Either::Right(right)) => Separated::new(None, Some(right)),
            None => Separated::new(None, None),
        }
    }
}

impl Filterable for OptionK {}

impl Compactable for VecK {
    #[inline]
    fn compact<A: 'static>(fa: Vec<Option<A>>) -> Vec<A> {
        fa.into_iter().flatten().collect()
    }

    fn separate<A: 'static, B: 'static>(fa: Vec<Either<A, B>>) -> Separated<Vec<A>, Vec<B>> {
        fa.into_iter()
            .fold(Separated::default(), |mut halves, element| {
                match element {
                    Either::Left(left) => halves.left.push(left),
                    Either::Right(right) => halves.right.push(right),
                }
                halves
            })
    }
}

impl Filterable for VecK {
    fn filter<A, P>(fa: Vec<A>, predicate: P) -> Vec<A>
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        fa.into_iter().filter(|element| predicate(element)).collect()
    }
}
