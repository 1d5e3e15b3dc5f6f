//! `ReaderT` - Reader Monad Transformer.
//!
//! `ReaderT<M, R>` adds a read-only environment `R` to any effect `M`.
//!
//! # Overview
//!
//! A `ReaderT<M, R>` value is a [`Reader<R, M::Of<A>>`]: given the
//! environment it produces an `M` computation. Every instance is lifted
//! from `M`, handing each sub-computation its own clone of the
//! environment, so the environment type must be `Clone` wherever two
//! computations are combined.
//!
//! # Laws
//!
//! ```text
//! ReaderT::run(ReaderT::lift(ma), r)      == ma
//! ReaderT::run(ReaderT::ask(), r)         == M::of(r)
//! ReaderT::run(ReaderT::local(m, f), r)   == ReaderT::run(m, f(r))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::ReaderT;
//! use fp_contexts::typeclass::{Chain, OptionK};
//!
//! type Lookup = ReaderT<OptionK, Vec<&'static str>>;
//!
//! let second = Lookup::chain(Lookup::asks(|names: Vec<&'static str>| names.len()), |length| {
//!     Lookup::lift(if length > 1 { Some(length - 1) } else { None })
//! });
//! assert_eq!(Lookup::run(second, vec!["a", "b"]), Some(1));
//! ```

use crate::typeclass::{Alt, Applicative, Apply, Chain, Functor, TypeConstructor, kind_marker};

use super::reader::Reader;

kind_marker! {
    /// Kind marker for `Reader<R, M<_>>`.
    pub struct ReaderT<M, R>;
}

impl<M: TypeConstructor, R: 'static> TypeConstructor for ReaderT<M, R> {
    type Of<A> = Reader<R, M::Of<A>>;
}

// =============================================================================
// Environment operations
// =============================================================================

impl<M: TypeConstructor, R: 'static> ReaderT<M, R> {
    /// Returns the environment.
    pub fn ask() -> Reader<R, M::Of<R>>
    where
        M: Applicative,
    {
        Reader::new(|environment| M::of(environment))
    }

    /// Projects the environment.
    pub fn asks<A, F>(projection: F) -> Reader<R, M::Of<A>>
    where
        M: Applicative,
        A: 'static,
        F: FnOnce(R) -> A + 'static,
    {
        Reader::new(move |environment| M::of(projection(environment)))
    }

    /// Runs `fa` in an environment derived from the outer one.
    pub fn local<Q, A, F>(fa: Reader<R, M::Of<A>>, function: F) -> Reader<Q, M::Of<A>>
    where
        Q: 'static,
        A: 'static,
        F: FnOnce(Q) -> R + 'static,
    {
        Reader::new(move |environment| fa.run(function(environment)))
    }

    /// Lifts an `M` computation that ignores the environment.
    pub fn lift<A: 'static>(ma: M::Of<A>) -> Reader<R, M::Of<A>> {
        Reader::new(move |_| ma)
    }

    /// Lifts a plain reader.
    pub fn from_reader<A: 'static>(reader: Reader<R, A>) -> Reader<R, M::Of<A>>
    where
        M: Applicative,
    {
        Reader::new(move |environment| M::of(reader.run(environment)))
    }

    /// Supplies the environment.
    #[inline]
    pub fn run<A>(fa: Reader<R, M::Of<A>>, environment: R) -> M::Of<A> {
        fa.run(environment)
    }
}

// =============================================================================
// Type-class instances
// =============================================================================

impl<M: Functor, R: 'static> Functor for ReaderT<M, R> {
    fn map<A, B, F>(fa: Reader<R, M::Of<A>>, function: F) -> Reader<R, M::Of<B>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Reader::new(move |environment| M::map(fa.run(environment), function))
    }
}

impl<M: Apply, R: Clone + 'static> Apply for ReaderT<M, R> {
    fn map2<A, B, C, F>(fa: Reader<R, M::Of<A>>, fb: Reader<R, M::Of<B>>, function: F) -> Reader<R, M::Of<C>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Reader::new(move |environment: R| {
            let first = fa.run(environment.clone());
            M::map2(first, fb.run(environment), function)
        })
    }
}

impl<M: Applicative, R: Clone + 'static> Applicative for ReaderT<M, R> {
    fn of<A: 'static>(value: A) -> Reader<R, M::Of<A>> {
        Reader::new(move |_| M::of(value))
    }
}

impl<M: Chain, R: Clone + 'static> Chain for ReaderT<M, R> {
    fn chain<A, B, F>(fa: Reader<R, M::Of<A>>, function: F) -> Reader<R, M::Of<B>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Reader<R, M::Of<B>> + 'static,
    {
        Reader::new(move |environment: R| {
            let shared = environment.clone();
            M::chain(fa.run(environment), move |value| function(value).run(shared))
        })
    }
}

impl<M: Alt, R: Clone + 'static> Alt for ReaderT<M, R> {
    fn alt<A, F>(fa: Reader<R, M::Of<A>>, that: F) -> Reader<R, M::Of<A>>
    where
        A: 'static,
        F: FnOnce() -> Reader<R, M::Of<A>> + 'static,
    {
        Reader::new(move |environment: R| {
            let fallback = environment.clone();
            M::alt(fa.run(environment), move || that().run(fallback))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::ReaderK;
    use crate::typeclass::{OptionK, ResultK, Traversable, VecK};
    use rstest::rstest;

    #[derive(Debug, Clone)]
    struct Limits {
        maximum: i32,
    }

    type Guarded = ReaderT<ResultK<String>, Limits>;

    fn within(value: i32) -> Reader<Limits, Result<i32, String>> {
        Reader::new(move |limits: Limits| {
            if value <= limits.maximum {
                Ok(value)
            } else {
                Err(format!("{value} > {}", limits.maximum))
            }
        })
    }

    #[rstest]
    #[case(10, Ok(vec![1, 5]))]
    #[case(3, Err("5 > 3".to_string()))]
    fn traverse_checks_each_element_against_environment(
        #[case] maximum: i32,
        #[case] expected: Result<Vec<i32>, String>,
    ) {
        let checked = VecK::traverse(Guarded::new(), vec![1, 5], within);
        assert_eq!(Guarded::run(checked, Limits { maximum }), expected);
    }

    #[rstest]
    fn chain_passes_the_environment_to_the_continuation() {
        let program = Guarded::chain(within(2), |n| within(n * 10));
        assert_eq!(Guarded::run(program, Limits { maximum: 15 }), Err("20 > 15".to_string()));
    }

    #[rstest]
    fn local_and_ask() {
        let loosened = Guarded::local(within(20), |limits: Limits| Limits { maximum: limits.maximum * 2 });
        assert_eq!(Guarded::run(loosened, Limits { maximum: 10 }), Ok(20));
        let maximum = Guarded::map(Guarded::ask(), |limits: Limits| limits.maximum);
        assert_eq!(Guarded::run(maximum, Limits { maximum: 4 }), Ok(4));
    }

    #[rstest]
    #[case(1, Some(1))]
    #[case(7, Some(0))]
    fn alt_retries_with_the_same_environment(#[case] value: i32, #[case] expected: Option<i32>) {
        type Optional = ReaderT<OptionK, i32>;
        let first = Reader::new(move |limit: i32| (value <= limit).then_some(value));
        let program = Optional::alt(first, || Optional::asks(|limit: i32| limit - 5));
        assert_eq!(Optional::run(program, 5), expected);
    }

    #[rstest]
    fn lift_and_from_reader() {
        assert_eq!(Guarded::run(Guarded::lift(Err::<i32, _>("e".to_string())), Limits { maximum: 0 }), Err("e".to_string()));
        let doubled = Guarded::from_reader(ReaderK::asks(|limits: Limits| limits.maximum * 2));
        assert_eq!(Guarded::run(doubled, Limits { maximum: 4 }), Ok(8));
    }
}
