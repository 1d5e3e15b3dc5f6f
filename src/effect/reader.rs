//! Reader - computation that reads from an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads
//! one environment through all of them, which makes `Reader` the base for
//! dependency injection and for the `ReaderT` transformer.
//!
//! # One-shot evaluation
//!
//! A reader is run at most once: [`Reader::run`] consumes it. Because of
//! that the stored function is `FnOnce`, so it may move captured values
//! into its result, and `map2`/`chain` accept `FnOnce` continuations.
//! Combining two readers hands each a copy of the environment, hence the
//! `R: Clone` bound on `Apply` and `Chain`.
//!
//! # Laws
//!
//! ```text
//! ReaderK::chain(ReaderK::of(a), f)          == f(a)
//! ReaderK::chain(m, ReaderK::of)             == m
//! ReaderK::local(ReaderK::ask(), |r| r).run  == ReaderK::ask().run
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::{Reader, ReaderK};
//! use fp_contexts::typeclass::Apply;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let host = ReaderK::asks(|config: Config| config.host);
//! let port = ReaderK::asks(|config: Config| config.port);
//! let address = ReaderK::<Config>::map2(host, port, |host, port| format!("{host}:{port}"));
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Apply, Chain, Functor, TypeConstructor, kind_marker};

/// A computation producing an `A` from an environment `R`.
pub struct Reader<R, A> {
    run_function: Box<dyn FnOnce(R) -> A>,
}

impl<R, A> Reader<R, A> {
    /// Wraps a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_contexts::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(doubled.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the computation with `environment`.
    #[inline]
    pub fn run(self, environment: R) -> A {
        (self.run_function)(environment)
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

kind_marker! {
    /// Kind marker for `Reader<R, _>`.
    pub struct ReaderK<R>;
}

impl<R: 'static> TypeConstructor for ReaderK<R> {
    type Of<A> = Reader<R, A>;
}

impl<R: 'static> ReaderK<R> {
    /// Returns the environment.
    pub fn ask() -> Reader<R, R> {
        Reader::new(|environment| environment)
    }

    /// Projects the environment.
    pub fn asks<A, F>(projection: F) -> Reader<R, A>
    where
        F: FnOnce(R) -> A + 'static,
    {
        Reader::new(projection)
    }

    /// Runs `fa` in an environment derived from the outer one.
    pub fn local<Q, A, F>(fa: Reader<R, A>, function: F) -> Reader<Q, A>
    where
        Q: 'static,
        A: 'static,
        F: FnOnce(Q) -> R + 'static,
    {
        Reader::new(move |environment| fa.run(function(environment)))
    }
}

impl<R: 'static> Functor for ReaderK<R> {
    fn map<A, B, F>(fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Reader::new(move |environment| function(fa.run(environment)))
    }
}

impl<R: Clone + 'static> Apply for ReaderK<R> {
    fn map2<A, B, C, F>(fa: Reader<R, A>, fb: Reader<R, B>, function: F) -> Reader<R, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Reader::new(move |environment: R| {
            let a = fa.run(environment.clone());
            function(a, fb.run(environment))
        })
    }
}

impl<R: Clone + 'static> Applicative for ReaderK<R> {
    fn of<A: 'static>(value: A) -> Reader<R, A> {
        Reader::new(move |_| value)
    }
}

impl<R: Clone + 'static> Chain for ReaderK<R> {
    fn chain<A, B, F>(fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Reader<R, B> + 'static,
    {
        Reader::new(move |environment: R| {
            let a = fa.run(environment.clone());
            function(a).run(environment)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Traversable, VecK};
    use rstest::rstest;

    #[rstest]
    fn chain_sees_the_same_environment() {
        let computation = ReaderK::<i32>::chain(ReaderK::ask(), |first| {
            ReaderK::asks(move |environment: i32| first + environment)
        });
        assert_eq!(computation.run(10), 20);
    }

    #[rstest]
    fn local_rewrites_the_environment() {
        let length = ReaderK::<usize>::local(ReaderK::ask(), |text: &'static str| text.len());
        assert_eq!(length.run("four"), 4);
    }

    #[rstest]
    fn of_ignores_the_environment() {
        assert_eq!(ReaderK::<String>::of(5).run("unused".to_string()), 5);
    }

    #[rstest]
    #[case(3, vec![4, 5])]
    #[case(-4, vec![-3, -2])]
    fn traverse_shares_one_environment(#[case] offset: i32, #[case] expected: Vec<i32>) {
        let readers = VecK::traverse(ReaderK::<i32>::new(), vec![1, 2], |n: i32| {
            ReaderK::asks(move |offset: i32| n + offset)
        });
        assert_eq!(readers.run(offset), expected);
    }
}
