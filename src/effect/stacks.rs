//! Reader-based effect stacks.
//!
//! These are the transformers instantiated over [`ReaderK`], with the
//! environment helpers that only make sense once the base effect is fixed.
//!
//! | Stack | Shape |
//! |---|---|
//! | [`ReaderEither<R, E>`] | `Reader<R, Result<A, E>>`, first error wins |
//! | [`ReaderValidation<R, E>`] | `Reader<R, Result<A, E>>`, errors accumulate |
//!
//! ```rust
//! use fp_contexts::effect::ReaderValidation;
//! use fp_contexts::typeclass::Apply;
//!
//! type Check = ReaderValidation<u32, Vec<String>>;
//!
//! let at_least = |minimum: u32| {
//!     Check::asks_result(move |age: u32| {
//!         if age >= minimum { Ok(age) } else { Err(vec![format!("under {minimum}")]) }
//!     })
//! };
//! let both = Check::map2(at_least(18), at_least(21), |a, _| a);
//! assert_eq!(both.run(16), Err(vec!["under 18".to_string(), "under 21".to_string()]));
//! ```

use super::either_transformer::EitherT;
use super::reader::{Reader, ReaderK};
use super::validation_transformer::ValidationT;

/// `Reader<R, Result<A, E>>` with short-circuiting errors.
pub type ReaderEither<R, E> = EitherT<ReaderK<R>, E>;

/// `Reader<R, Result<A, E>>` with accumulating errors.
pub type ReaderValidation<R, E> = ValidationT<ReaderK<R>, E>;

impl<R: 'static, E: 'static> EitherT<ReaderK<R>, E> {
    /// Returns the environment.
    pub fn ask() -> Reader<R, Result<R, E>> {
        Reader::new(Ok)
    }

    /// Projects the environment.
    pub fn asks<A, F>(projection: F) -> Reader<R, Result<A, E>>
    where
        F: FnOnce(R) -> A + 'static,
    {
        Reader::new(move |environment| Ok(projection(environment)))
    }

    /// Projects the environment into a result.
    pub fn asks_result<A, F>(projection: F) -> Reader<R, Result<A, E>>
    where
        F: FnOnce(R) -> Result<A, E> + 'static,
    {
        Reader::new(projection)
    }

    /// Lifts a reader as a success.
    pub fn right_reader<A: 'static>(reader: Reader<R, A>) -> Reader<R, Result<A, E>> {
        Reader::new(move |environment| Ok(reader.run(environment)))
    }

    /// Lifts a reader as a failure.
    pub fn left_reader<A: 'static>(reader: Reader<R, E>) -> Reader<R, Result<A, E>> {
        Reader::new(move |environment| Err(reader.run(environment)))
    }

    /// Runs `fa` in an environment derived from the outer one.
    pub fn local<Q, A, F>(fa: Reader<R, Result<A, E>>, function: F) -> Reader<Q, Result<A, E>>
    where
        Q: 'static,
        A: 'static,
        F: FnOnce(Q) -> R + 'static,
    {
        ReaderK::local(fa, function)
    }
}

impl<R: 'static, E: 'static> ValidationT<ReaderK<R>, E> {
    /// Returns the environment.
    pub fn ask() -> Reader<R, Result<R, E>> {
        Reader::new(Ok)
    }

    /// Projects the environment.
    pub fn asks<A, F>(projection: F) -> Reader<R, Result<A, E>>
    where
        F: FnOnce(R) -> A + 'static,
    {
        Reader::new(move |environment| Ok(projection(environment)))
    }

    /// Projects the environment into a result.
    pub fn asks_result<A, F>(projection: F) -> Reader<R, Result<A, E>>
    where
        F: FnOnce(R) -> Result<A, E> + 'static,
    {
        Reader::new(projection)
    }

    /// Lifts a reader as a success.
    pub fn right_reader<A: 'static>(reader: Reader<R, A>) -> Reader<R, Result<A, E>> {
        Reader::new(move |environment| Ok(reader.run(environment)))
    }

    /// Lifts a reader as a failure.
    pub fn left_reader<A: 'static>(reader: Reader<R, E>) -> Reader<R, Result<A, E>> {
        Reader::new(move |environment| Err(reader.run(environment)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Alt, Apply, Chain, Traversable, VecK};
    use rstest::rstest;

    #[derive(Debug, Clone)]
    struct Settings {
        retries: u32,
        name: &'static str,
    }

    type Configured = ReaderEither<Settings, String>;
    type Checked = ReaderValidation<Settings, Vec<String>>;

    fn settings() -> Settings {
        Settings { retries: 2, name: "svc" }
    }

    #[rstest]
    fn either_reads_and_short_circuits() {
        let program = Configured::chain(Configured::asks(|s: Settings| s.retries), |retries| {
            if retries > 5 {
                Configured::right(retries)
            } else {
                Configured::left_reader(ReaderK::asks(|s: Settings| format!("{}: too few retries", s.name)))
            }
        });
        assert_eq!(program.run(settings()), Err("svc: too few retries".to_string()));
    }

    #[rstest]
    fn either_local_and_alt() {
        let bumped = Configured::local(Configured::ask(), |s: Settings| Settings { retries: s.retries + 1, ..s });
        assert_eq!(bumped.run(settings()).map(|s| s.retries), Ok(3));

        let recovered = Configured::alt(Configured::left::<u32>("no".to_string()), || {
            Configured::right_reader(ReaderK::asks(|s: Settings| s.retries))
        });
        assert_eq!(recovered.run(settings()), Ok(2));
    }

    #[rstest]
    #[case(vec!["a", "bb"], Ok(vec![1, 2]))]
    #[case(vec!["", "bb", ""], Err(vec!["item 0".to_string(), "item 2".to_string()]))]
    fn validation_traversal_accumulates(#[case] items: Vec<&'static str>, #[case] expected: Result<Vec<usize>, Vec<String>>) {
        let indexed: Vec<(usize, &'static str)> = items.into_iter().enumerate().collect();
        let checked = VecK::traverse(Checked::new(), indexed, |(index, item): (usize, &'static str)| {
            Checked::asks_result(move |_: Settings| {
                if item.is_empty() { Err(vec![format!("item {index}")]) } else { Ok(item.len()) }
            })
        });
        assert_eq!(checked.run(settings()), expected);
    }

    #[rstest]
    fn validation_lifts_readers() {
        let named = Checked::map2(
            Checked::right_reader(ReaderK::asks(|s: Settings| s.name)),
            Checked::ask(),
            |name, s| format!("{name}/{}", s.retries),
        );
        assert_eq!(named.run(settings()), Ok("svc/2".to_string()));
        let failed = Checked::left_reader::<u32>(ReaderK::asks(|s: Settings| vec![s.name.to_string()]));
        assert_eq!(failed.run(settings()), Err(vec!["svc".to_string()]));
        assert_eq!(Checked::asks(|s: Settings| s.retries).run(settings()), Ok(2));
    }
}
