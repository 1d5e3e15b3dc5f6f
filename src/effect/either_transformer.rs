//! `EitherT` - failure layered over another effect.
//!
//! # Overview
//!
//! `EitherT<M, E>` describes `M<Result<A, E>>`: a computation in `M` that
//! may end in an error `E`. Its applicative instance is the composition of
//! `M` with [`ResultK<E>`]; when `M` is a monad it also gets `chain` and
//! `alt`, both driven by the inner result:
//!
//! | inner result | `chain(fa, f)`     | `alt(fa, that)`   |
//! |---|---|---|
//! | `Err(e)`     | `M::of(Err(e))`, `f` is not called | `that()` |
//! | `Ok(a)`      | `f(a)`             | `M::of(Ok(a))`    |
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::{EitherT, ReaderK};
//! use fp_contexts::typeclass::Chain;
//!
//! type Lookup = EitherT<ReaderK<Vec<i32>>, String>;
//!
//! let first = Lookup::right_m(ReaderK::asks(|values: Vec<i32>| values.first().copied()));
//! let present = Lookup::chain(first, |head| match head {
//!     Some(value) => Lookup::right(value),
//!     None => Lookup::left("empty".to_string()),
//! });
//!
//! assert_eq!(present.run(vec![]), Err("empty".to_string()));
//! ```

use crate::typeclass::{
    Alt, Applicative, Apply, Chain, Functor, Monad, ResultK, TypeConstructor, kind_marker,
};

use super::composition::Compose;

kind_marker! {
    /// Kind marker for `M<Result<_, E>>`.
    pub struct EitherT<M, E>;
}

impl<M: TypeConstructor, E: 'static> TypeConstructor for EitherT<M, E> {
    type Of<A> = M::Of<Result<A, E>>;
}

// =============================================================================
// Constructors
// =============================================================================

impl<M: TypeConstructor, E: 'static> EitherT<M, E> {
    /// A successful computation.
    #[inline]
    pub fn right<A: 'static>(value: A) -> M::Of<Result<A, E>>
    where
        M: Applicative,
    {
        M::of(Ok(value))
    }

    /// A failed computation.
    #[inline]
    pub fn left<A: 'static>(error: E) -> M::Of<Result<A, E>>
    where
        M: Applicative,
    {
        M::of(Err(error))
    }

    /// Lifts an `M` computation as a success.
    pub fn right_m<A: 'static>(ma: M::Of<A>) -> M::Of<Result<A, E>>
    where
        M: Functor,
    {
        M::map(ma, Ok)
    }

    /// Lifts an `M` computation as a failure.
    pub fn left_m<A: 'static>(me: M::Of<E>) -> M::Of<Result<A, E>>
    where
        M: Functor,
    {
        M::map(me, Err)
    }

    /// Lifts a plain result.
    #[inline]
    pub fn from_result<A: 'static>(result: Result<A, E>) -> M::Of<Result<A, E>>
    where
        M: Applicative,
    {
        M::of(result)
    }

    /// Lifts an option, failing with `on_none()` when it is empty.
    pub fn from_option<A, F>(option: Option<A>, on_none: F) -> M::Of<Result<A, E>>
    where
        M: Applicative,
        A: 'static,
        F: FnOnce() -> E,
    {
        M::of(option.ok_or_else(on_none))
    }

    /// Succeeds with `value` when it satisfies `predicate`, otherwise fails
    /// with `on_false(value)`.
    pub fn from_predicate<A, P, F>(value: A, predicate: P, on_false: F) -> M::Of<Result<A, E>>
    where
        M: Applicative,
        A: 'static,
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        if predicate(&value) {
            M::of(Ok(value))
        } else {
            M::of(Err(on_false(value)))
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<M: TypeConstructor, E: 'static> EitherT<M, E> {
    /// Maps both the error and the value.
    pub fn bimap<A, B, E2, L, R>(fa: M::Of<Result<A, E>>, on_left: L, on_right: R) -> M::Of<Result<B, E2>>
    where
        M: Functor,
        A: 'static,
        B: 'static,
        E2: 'static,
        L: Fn(E) -> E2 + 'static,
        R: Fn(A) -> B + 'static,
    {
        M::map(fa, move |result: Result<A, E>| result.map(&on_right).map_err(&on_left))
    }

    /// Maps the error.
    pub fn map_left<A, E2, L>(fa: M::Of<Result<A, E>>, function: L) -> M::Of<Result<A, E2>>
    where
        M: Functor,
        A: 'static,
        E2: 'static,
        L: Fn(E) -> E2 + 'static,
    {
        M::map(fa, move |result: Result<A, E>| result.map_err(&function))
    }

    /// Exchanges the error and the value.
    pub fn swap<A: 'static>(fa: M::Of<Result<A, E>>) -> M::Of<Result<E, A>>
    where
        M: Functor,
    {
        M::map(fa, |result: Result<A, E>| match result {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        })
    }

    /// Fails with `on_false(value)` when the value does not satisfy
    /// `predicate`.
    pub fn filter_or_else<A, P, F>(fa: M::Of<Result<A, E>>, predicate: P, on_false: F) -> M::Of<Result<A, E>>
    where
        M: Functor,
        A: 'static,
        P: Fn(&A) -> bool + 'static,
        F: Fn(A) -> E + 'static,
    {
        M::map(fa, move |result: Result<A, E>| match result {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(value) => Err(on_false(value)),
            Err(error) => Err(error),
        })
    }

    /// Eliminates the result into `M`.
    pub fn fold<A, B, L, R>(fa: M::Of<Result<A, E>>, on_left: L, on_right: R) -> M::Of<B>
    where
        M: Chain,
        A: 'static,
        B: 'static,
        L: FnOnce(E) -> M::Of<B> + 'static,
        R: FnOnce(A) -> M::Of<B> + 'static,
    {
        M::chain(fa, move |result| match result {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        })
    }

    /// Recovers from an error with an `M` computation.
    pub fn get_or_else<A, L>(fa: M::Of<Result<A, E>>, on_left: L) -> M::Of<A>
    where
        M: Monad,
        A: 'static,
        L: FnOnce(E) -> M::Of<A> + 'static,
    {
        M::chain(fa, move |result| match result {
            Ok(value) => M::of(value),
            Err(error) => on_left(error),
        })
    }

    /// Recovers from an error with another `EitherT` computation, which may
    /// change the error type.
    pub fn or_else<A, E2, L>(fa: M::Of<Result<A, E>>, on_left: L) -> M::Of<Result<A, E2>>
    where
        M: Monad,
        A: 'static,
        E2: 'static,
        L: FnOnce(E) -> M::Of<Result<A, E2>> + 'static,
    {
        M::chain(fa, move |result| match result {
            Ok(value) => M::of(Ok(value)),
            Err(error) => on_left(error),
        })
    }

    /// Continues with a plain result.
    pub fn chain_result<A, B, F>(fa: M::Of<Result<A, E>>, function: F) -> M::Of<Result<B, E>>
    where
        M: Monad,
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        M::chain(fa, move |result| M::of(result.and_then(function)))
    }
}

// =============================================================================
// Type-class instances
// =============================================================================

impl<M: Functor, E: 'static> Functor for EitherT<M, E> {
    #[inline]
    fn map<A, B, F>(fa: M::Of<Result<A, E>>, function: F) -> M::Of<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Compose::<M, ResultK<E>>::map(fa, function)
    }
}

impl<M: Apply, E: 'static> Apply for EitherT<M, E> {
    #[inline]
    fn map2<A, B, C, F>(fa: M::Of<Result<A, E>>, fb: M::Of<Result<B, E>>, function: F) -> M::Of<Result<C, E>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Compose::<M, ResultK<E>>::map2(fa, fb, function)
    }
}

impl<M: Applicative, E: 'static> Applicative for EitherT<M, E> {
    #[inline]
    fn of<A: 'static>(value: A) -> M::Of<Result<A, E>> {
        M::of(Ok(value))
    }
}

impl<M: Monad, E: 'static> Chain for EitherT<M, E> {
    fn chain<A, B, F>(fa: M::Of<Result<A, E>>, function: F) -> M::Of<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> M::Of<Result<B, E>> + 'static,
    {
        M::chain(fa, move |result| match result {
            Ok(value) => function(value),
            Err(error) => M::of(Err(error)),
        })
    }
}

impl<M: Monad, E: 'static> Alt for EitherT<M, E> {
    fn alt<A, F>(fa: M::Of<Result<A, E>>, that: F) -> M::Of<Result<A, E>>
    where
        A: 'static,
        F: FnOnce() -> M::Of<Result<A, E>> + 'static,
    {
        M::chain(fa, move |result| match result {
            Ok(value) => M::of(Ok(value)),
            Err(_) => that(),
        })
    }
}
