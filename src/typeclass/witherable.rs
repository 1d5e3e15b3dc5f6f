//! Witherable type class - effectful filtering.
//!
//! `wither` filters a container with an effectful visitor, and `wilt`
//! partitions it. Neither is a new algorithm: each runs an ordinary
//! traversal and then compacts or separates the rebuilt container inside
//! the effect.
//!
//! ```text
//! wither(F, c, f) == F::map(traverse(F, c, f), compact)
//! wilt(F, c, f)   == F::map(traverse(F, c, f), separate)
//! ```
//!
//! The derivation is written once, as a blanket implementation, so every
//! kind that is both [`Traversable`] and [`Filterable`] is witherable.
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{Identity, IdentityK, VecK, Witherable};
//!
//! let kept = VecK::wither(IdentityK, vec![1, 2, 3], |n: i32| {
//!     Identity::new((n > 1).then_some(n))
//! });
//! assert_eq!(kept, Identity::new(vec![2, 3]));
//! ```

use crate::control::Either;

use super::applicative::Applicative;
use super::compactable::{Filterable, Separated};
use super::traversable::Traversable;

/// A traversable, filterable container that can be filtered under an
/// effect.
pub trait Witherable: Traversable + Filterable {
    /// Traverses with a visitor returning optional results and keeps the
    /// present ones.
    fn wither<F, A, B, V>(effect: F, ta: Self::Of<A>, visitor: V) -> F::Of<Self::Of<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<Option<B>>;

    /// Traverses with a visitor returning `Either` and splits the results.
    fn wilt<F, A, B, C, V>(
        effect: F,
        ta: Self::Of<A>,
        visitor: V,
    ) -> F::Of<Separated<Self::Of<B>, Self::Of<C>>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        C: 'static,
        V: FnMut(A) -> F::Of<Either<B, C>>;
}

impl<T: Traversable + Filterable> Witherable for T {
    fn wither<F, A, B, V>(effect: F, ta: T::Of<A>, visitor: V) -> F::Of<T::Of<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<Option<B>>,
    {
        let traversed = T::traverse::<F, A, Option<B>, V>(effect, ta, visitor);
        F::map(traversed, |options: T::Of<Option<B>>| T::compact(options))
    }

    fn wilt<F, A, B, C, V>(effect: F, ta: T::Of<A>, visitor: V) -> F::Of<Separated<T::Of<B>, T::Of<C>>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        C: 'static,
        V: FnMut(A) -> F::Of<Either<B, C>>,
    {
        let traversed = T::traverse::<F, A, Either<B, C>, V>(effect, ta, visitor);
        F::map(traversed, |eithers: T::Of<Either<B, C>>| T::separate(eithers))
    }
}
