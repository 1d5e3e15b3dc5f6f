//! Apply and Applicative type classes - combining independent contexts.
//!
//! `Apply` combines two contexts whose computations do not depend on each
//! other. `Applicative` adds `of`, which lifts a plain value into the
//! context. These two operations are all the traversal engine needs from an
//! effect: `traverse` folds a container with `map2`, starting from `of`.
//!
//! `map2` is the primitive here. The classic `ap` (apply a wrapped function)
//! is derived from it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::ap(F::of(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::ap(F::of(f), F::of(x)) == F::of(f(x))
//! ```
//!
//! ## Associativity of `map2`
//!
//! ```text
//! F::map2(F::map2(fa, fb, pair), fc, ..) == F::map2(fa, F::map2(fb, fc, pair), ..)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{Applicative, Apply, OptionK};
//!
//! assert_eq!(OptionK::map2(Some(1), Some(2), |a, b| a + b), Some(3));
//! assert_eq!(OptionK::map2(Some(1), None::<i32>, |a, b| a + b), None);
//! assert_eq!(OptionK::of(7), Some(7));
//! ```

use super::functor::Functor;
use super::higher::{OptionK, ResultK};

/// A type class for combining two independent contexts.
///
/// Every implementation in this crate is single-valued per context, so the
/// combining function runs at most once and may consume what it captures.
pub trait Apply: Functor {
    /// Combines the values of `fa` and `fb` with `function`.
    ///
    /// The result keeps the positional order of the arguments even when the
    /// context evaluates them concurrently.
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static;

    /// Applies a wrapped function to a wrapped value.
    fn ap<A, B, F>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Self::map2(ff, fa, |function, value| function(value))
    }

    /// Pairs the values of `fa` and `fb`.
    fn product<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        Self::map2(fa, fb, |a, b| (a, b))
    }

    /// Combines three independent contexts.
    fn map3<A, B, C, D, F>(
        fa: Self::Of<A>,
        fb: Self::Of<B>,
        fc: Self::Of<C>,
        function: F,
    ) -> Self::Of<D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        F: FnOnce(A, B, C) -> D + 'static,
    {
        let ab = Self::product(fa, fb);
        Self::map2(ab, fc, move |(a, b), c| function(a, b, c))
    }
}

/// An `Apply` that can lift a plain value.
pub trait Applicative: Apply {
    /// Lifts `value` into the context with no effect.
    fn of<A: 'static>(value: A) -> Self::Of<A>;

    /// The context holding `()`.
    #[inline]
    fn unit() -> Self::Of<()> {
        Self::of(())
    }
}

// =============================================================================
// Option
// =============================================================================

impl Apply for OptionK {
    #[inline]
    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, function: F) -> Option<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl Applicative for OptionK {
    #[inline]
    fn of<A: 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

// =============================================================================
// Result
// =============================================================================

impl<E: 'static> Apply for ResultK<E> {
    /// Short-circuits on the first error in argument order.
    #[inline]
    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl<E: 'static> Applicative for ResultK<E> {
    #[inline]
    fn of<A: 'static>(value: A) -> Result<A, E> {
        Ok(value)
    }
}
