//! Chain and Monad type classes - sequencing dependent computations.
//!
//! `Chain` runs a computation whose shape depends on the value produced by
//! the previous one. A `Monad` is an `Applicative` that can also chain; the
//! trait is implemented automatically for every such type.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::chain(M::of(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! M::chain(m, M::of) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! M::chain(M::chain(m, f), g) == M::chain(m, |x| M::chain(f(x), g))
//! ```

use super::applicative::{Applicative, Apply};
use super::higher::{OptionK, ResultK};

/// A type class for sequencing a computation that depends on a previous
/// result.
///
/// # Examples
///
/// ```rust
/// use fp_contexts::typeclass::{Chain, OptionK};
///
/// let parse = |text: &'static str| text.parse::<i32>().ok();
/// assert_eq!(OptionK::chain(Some("42"), parse), Some(42));
/// assert_eq!(OptionK::chain(Some("x"), parse), None);
/// ```
pub trait Chain: Apply {
    /// Feeds the value of `fa` to `function` and flattens the result.
    ///
    /// When `fa` carries no value (an error, an absent option) `function` is
    /// not called.
    fn chain<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static;

    /// Removes one level of nesting.
    fn flatten<A: 'static>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::chain(ffa, |fa| fa)
    }
}

/// An `Applicative` that can chain.
pub trait Monad: Applicative + Chain {}

impl<M: Applicative + Chain> Monad for M {}

impl Chain for OptionK {
    #[inline]
    fn chain<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

impl<E: 'static> Chain for ResultK<E> {
    #[inline]
    fn chain<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        fa.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(n: i32) -> Result<i32, String> {
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            Err(format!("{n} is odd"))
        }
    }

    #[rstest]
    #[case(Ok(8), Ok(2))]
    #[case(Ok(6), Err("3 is odd".to_string()))]
    #[case(Err("early".to_string()), Err("early".to_string()))]
    fn result_chain_stops_at_first_error(
        #[case] input: Result<i32, String>,
        #[case] expected: Result<i32, String>,
    ) {
        let result = ResultK::<String>::chain(ResultK::<String>::chain(input, half), half);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn left_identity_for_option() {
        let function = |n: i32| if n > 0 { Some(n) } else { None };
        assert_eq!(OptionK::chain(OptionK::of(3), function), function(3));
    }

    #[rstest]
    fn flatten_removes_one_level() {
        assert_eq!(OptionK::flatten(Some(Some(1))), Some(1));
        assert_eq!(OptionK::flatten(Some(None::<i32>)), None);
    }

    #[rstest]
    fn monad_is_implemented_for_option_and_result() {
        fn assert_monad<M: Monad>() {}
        assert_monad::<OptionK>();
        assert_monad::<ResultK<()>>();
    }
}
