//! Functor type class - mapping over the values of a context.
//!
//! A `Functor` transforms the contents of a container or effect without
//! changing its shape: an absent option stays absent, an array keeps its
//! length, a tree keeps its branching.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{Functor, OptionK, VecK};
//!
//! assert_eq!(OptionK::map(Some(5), |n: i32| n.to_string()), Some("5".to_string()));
//! assert_eq!(VecK::map(vec![1, 2, 3], |n: i32| n * 10), vec![10, 20, 30]);
//! ```

use super::higher::{OptionK, ResultK, TypeConstructor, VecK};

/// A type class for contexts whose values can be transformed.
///
/// The mapped function is shared by every element of a multi-valued
/// container, so it is `Fn`. It must be `'static` because lazy effects
/// (`Reader`, `State`, `Task`) store it until they run.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_contexts::typeclass::{Functor, ResultK};
    ///
    /// let parsed: Result<i32, String> = Ok(20);
    /// assert_eq!(ResultK::<String>::map(parsed, |n| n + 1), Ok(21));
    /// ```
    fn map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;

    /// Replaces every value inside `fa` with a clone of `value`.
    fn replace<A, B>(fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::map(fa, move |_| value.clone())
    }

    /// Discards the values inside `fa`, keeping its shape.
    fn void<A: 'static>(fa: Self::Of<A>) -> Self::Of<()> {
        Self::map(fa, |_| ())
    }
}

impl Functor for OptionK {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<E: 'static> Functor for ResultK<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Functor for VecK {
    #[inline]
    fn map<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_map_doubles_present_value(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionK::map(input, |n| n * 2), expected);
    }

    #[rstest]
    #[case(Ok(3), Ok(4))]
    #[case(Err("boom".to_string()), Err("boom".to_string()))]
    fn result_map_leaves_error_untouched(
        #[case] input: Result<i32, String>,
        #[case] expected: Result<i32, String>,
    ) {
        assert_eq!(ResultK::<String>::map(input, |n| n + 1), expected);
    }

    #[rstest]
    fn vec_map_preserves_length_and_order() {
        let mapped = VecK::map(vec![1, 2, 3], |n: i32| format!("#{n}"));
        assert_eq!(mapped, vec!["#1", "#2", "#3"]);
    }

    #[rstest]
    fn replace_and_void_keep_shape() {
        assert_eq!(VecK::replace(vec![1, 2], 'x'), vec!['x', 'x']);
        assert_eq!(OptionK::void(Some(9)), Some(()));
        assert_eq!(OptionK::void(None::<i32>), None);
    }
}
