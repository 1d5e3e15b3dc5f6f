//! Bifunctor type class - mapping over both sides of a two-sided value.
//!
//! A bifunctor has a *left* side (an error, a rejected value, an
//! accumulator) and a *right* side (the value a `Functor` would map).
//! `map_right` agrees with `Functor::map` for every type in this crate.
//!
//! | Type | Left | Right |
//! |---|---|---|
//! | `Either<L, R>` | `L` | `R` |
//! | `Result<T, E>` | `E` | `T` |
//! | `These<E, A>` | `E` | `A` |
//! | `(A, S)` | `S` | `A` |
//!
//! # Laws
//!
//! ```text
//! x.bimap(|l| l, |r| r)                   == x
//! x.bimap(|l| f2(f1(l)), |r| g2(g1(r)))   == x.bimap(f1, g1).bimap(f2, g2)
//! x.bimap(f, g)                           == x.map_left(f).map_right(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::Bifunctor;
//!
//! let failed: Result<i32, &str> = Err("bad");
//! assert_eq!(failed.bimap(str::len, |n| n + 1), Err(3));
//!
//! let pair = (1, "acc");
//! assert_eq!(pair.map_left(str::len), (1, 3));
//! ```

use crate::control::Either;

/// A type with a left and a right side that can both be mapped.
///
/// `A` is the left type and `B` the right type; `Target<C, D>` is the same
/// shape with left `C` and right `D`.
pub trait Bifunctor<A, B>: Sized {
    /// The same shape with new side types.
    type Target<C, D>;

    /// Maps both sides.
    fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the left side only.
    fn map_left<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |right| right)
    }

    /// Maps the right side only.
    fn map_right<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
    {
        self.bimap(|left| left, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(left_function(left)),
            Self::Right(right) => Either::Right(right_function(right)),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(right_function(value)),
            Err(error) => Err(left_function(error)),
        }
    }
}

impl<A, S> Bifunctor<S, A> for (A, S) {
    type Target<C, D> = (D, C);

    #[inline]
    fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> (D, C)
    where
        F: FnOnce(S) -> C,
        G: FnOnce(A) -> D,
    {
        (right_function(self.0), left_function(self.1))
    }
}
