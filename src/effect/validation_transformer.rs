//! `ValidationT` - error-accumulating failure over another effect.
//!
//! `ValidationT<M, E>` has the same shape as [`EitherT<M, E>`]:
//! `M<Result<A, E>>`. The difference is that independent failures are
//! merged with `E`'s [`Semigroup`] instead of the first one winning:
//!
//! * `map2` composes `M` with [`ValidationK<E>`], so two errors combine
//!   left then right.
//! * `chain` is sequential and short-circuits like `EitherT`.
//! * `alt` keeps a first success. Otherwise it runs the fallback, whose
//!   success wins outright. Only when both fail are the two errors
//!   combined.
//!
//! [`EitherT<M, E>`]: super::EitherT
//!
//! ```rust
//! use fp_contexts::effect::ValidationT;
//! use fp_contexts::typeclass::{Alt, OptionK};
//!
//! type Check = ValidationT<OptionK, Vec<&'static str>>;
//!
//! let both_failed = Check::alt(Check::left::<i32>(vec!["no a"]), || Check::left(vec!["no b"]));
//! assert_eq!(both_failed, Some(Err(vec!["no a", "no b"])));
//! ```

use crate::typeclass::{
    Alt, Applicative, Apply, Chain, Functor, Monad, Semigroup, TypeConstructor, ValidationK,
    kind_marker,
};

use super::composition::Compose;

kind_marker! {
    /// Kind marker for `M<Result<_, E>>` with accumulating errors.
    pub struct ValidationT<M, E>;
}

impl<M: TypeConstructor, E: 'static> TypeConstructor for ValidationT<M, E> {
    type Of<A> = M::Of<Result<A, E>>;
}

impl<M: TypeConstructor, E: 'static> ValidationT<M, E> {
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

    /// Maps the accumulated error.
    pub fn map_left<A, E2, L>(fa: M::Of<Result<A, E>>, function: L) -> M::Of<Result<A, E2>>
    where
        M: Functor,
        A: 'static,
        E2: 'static,
        L: Fn(E) -> E2 + 'static,
    {
        M::map(fa, move |result: Result<A, E>| result.map_err(&function))
    }
}

impl<M: Functor, E: 'static> Functor for ValidationT<M, E> {
    #[inline]
    fn map<A, B, F>(fa: M::Of<Result<A, E>>, function: F) -> M::Of<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        M::map(fa, move |result: Result<A, E>| result.map(&function))
    }
}

impl<M: Apply, E: Semigroup + 'static> Apply for ValidationT<M, E> {
    #[inline]
    fn map2<A, B, C, F>(fa: M::Of<Result<A, E>>, fb: M::Of<Result<B, E>>, function: F) -> M::Of<Result<C, E>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Compose::<M, ValidationK<E>>::map2(fa, fb, function)
    }
}

impl<M: Applicative, E: Semigroup + 'static> Applicative for ValidationT<M, E> {
    #[inline]
    fn of<A: 'static>(value: A) -> M::Of<Result<A, E>> {
        M::of(Ok(value))
    }
}

impl<M: Monad, E: Semigroup + 'static> Chain for ValidationT<M, E> {
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

impl<M: Monad, E: Semigroup + 'static> Alt for ValidationT<M, E> {
    fn alt<A, F>(fa: M::Of<Result<A, E>>, that: F) -> M::Of<Result<A, E>>
    where
        A: 'static,
        F: FnOnce() -> M::Of<Result<A, E>> + 'static,
    {
        M::chain(fa, move |first| match first {
            Ok(value) => M::of(Ok(value)),
            Err(first_error) => M::chain(that(), move |second| {
                M::of(match second {
                    Err(second_error) => Err(first_error.combine(second_error)),
                    success => success,
                })
            }),
        })
    }
}
