//! Alt and Alternative type classes - choosing between computations.
//!
//! `alt` keeps the first computation when it succeeds and otherwise runs a
//! fallback. The fallback is a thunk, so it costs nothing when it is not
//! needed. For containers without failure, such as arrays, `alt`
//! concatenates.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! F::alt(F::alt(a, || b), || c) == F::alt(a, || F::alt(b, || c))
//! ```
//!
//! ## Distributivity
//!
//! ```text
//! F::map(F::alt(a, || b), f) == F::alt(F::map(a, f), || F::map(b, f))
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::{OptionK, ResultK, VecK};

/// A type class for choosing between two computations of the same type.
///
/// # Examples
///
/// ```rust
/// use fp_contexts::typeclass::{Alt, OptionK};
///
/// assert_eq!(OptionK::alt(None, || Some(2)), Some(2));
/// assert_eq!(OptionK::alt(Some(1), || Some(2)), Some(1));
/// ```
pub trait Alt: Functor {
    /// Returns `fa` unless it failed, in which case `that()` is evaluated.
    fn alt<A, F>(fa: Self::Of<A>, that: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce() -> Self::Of<A> + 'static;
}

/// An applicative `Alt` with a failing computation that `alt` ignores.
pub trait Alternative: Applicative + Alt {
    /// The computation that always fails.
    fn zero<A: 'static>() -> Self::Of<A>;

    /// Keeps the first success among `alternatives`, or `zero()`.
    fn alt_all<A, I>(alternatives: I) -> Self::Of<A>
    where
        A: 'static,
        I: IntoIterator<Item = Self::Of<A>>,
        Self::Of<A>: 'static,
    {
        alternatives
            .into_iter()
            .fold(Self::zero(), |accumulator, next| Self::alt(accumulator, move || next))
    }

    /// Succeeds with `()` when `condition` holds, otherwise fails.
    fn guard(condition: bool) -> Self::Of<()> {
        if condition { Self::of(()) } else { Self::zero() }
    }
}

impl Alt for OptionK {
    #[inline]
    fn alt<A, F>(fa: Option<A>, that: F) -> Option<A>
    where
        A: 'static,
        F: FnOnce() -> Option<A> + 'static,
    {
        fa.or_else(that)
    }
}

impl Alternative for OptionK {
    #[inline]
    fn zero<A: 'static>() -> Option<A> {
        None
    }
}

impl<E: 'static> Alt for ResultK<E> {
    /// The fallback's outcome replaces the first error.
    #[inline]
    fn alt<A, F>(fa: Result<A, E>, that: F) -> Result<A, E>
    where
        A: 'static,
        F: FnOnce() -> Result<A, E> + 'static,
    {
        fa.or_else(|_| that())
    }
}

impl Alt for VecK {
    /// Concatenation; the fallback is always evaluated.
    fn alt<A, F>(mut fa: Vec<A>, that: F) -> Vec<A>
    where
        A: 'static,
        F: FnOnce() -> Vec<A> + 'static,
    {
        fa.extend(that());
        fa
    }
}
