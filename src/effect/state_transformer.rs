//! `StateT` - State Monad Transformer.
//!
//! `StateT<M, S>` threads a state `S` through computations in an effect
//! `M`.
//!
//! # Overview
//!
//! A `StateT<M, S>` value is a [`Reader<S, M::Of<(A, S)>>`]: from the
//! initial state it produces an `M` computation of the value paired with
//! the next state. Sequencing needs `M` to be a monad, because the second
//! step cannot start before the first has produced its state; for the same
//! reason `map2` is sequential here even when `M` is concurrent.
//!
//! # Laws
//!
//! ```text
//! StateT::run(StateT::put(s), _)    == M::of(((), s))
//! StateT::run(StateT::get(), s)     == M::of((s, s))
//! StateT::run(StateT::lift(ma), s)  == M::map(ma, |a| (a, s))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::StateT;
//! use fp_contexts::typeclass::{Chain, ResultK};
//!
//! type Stack = StateT<ResultK<String>, Vec<i32>>;
//!
//! let pop = || {
//!     Stack::chain(Stack::get(), |mut stack: Vec<i32>| match stack.pop() {
//!         Some(top) => Stack::chain(Stack::put(stack), move |()| Stack::lift(Ok(top))),
//!         None => Stack::lift(Err("empty stack".to_string())),
//!     })
//! };
//!
//! assert_eq!(Stack::run(pop(), vec![1, 2]), Ok((2, vec![1])));
//! assert_eq!(Stack::eval(pop(), vec![]), Err("empty stack".to_string()));
//! ```

use crate::typeclass::{Alt, Applicative, Apply, Chain, Functor, Monad, TypeConstructor, kind_marker};

use super::reader::Reader;
use super::state::State;

kind_marker! {
    /// Kind marker for `Reader<S, M<(_, S)>>`.
    pub struct StateT<M, S>;
}

impl<M: TypeConstructor, S: 'static> TypeConstructor for StateT<M, S> {
    type Of<A> = Reader<S, M::Of<(A, S)>>;
}

// =============================================================================
// State operations
// =============================================================================

impl<M: TypeConstructor, S: 'static> StateT<M, S> {
    /// Reads the current state.
    pub fn get() -> Reader<S, M::Of<(S, S)>>
    where
        M: Applicative,
        S: Clone,
    {
        Reader::new(|state: S| M::of((state.clone(), state)))
    }

    /// Reads a projection of the current state.
    pub fn gets<A, F>(projection: F) -> Reader<S, M::Of<(A, S)>>
    where
        M: Applicative,
        A: 'static,
        F: FnOnce(&S) -> A + 'static,
    {
        Reader::new(move |state: S| {
            let value = projection(&state);
            M::of((value, state))
        })
    }

    /// Replaces the state.
    pub fn put(state: S) -> Reader<S, M::Of<((), S)>>
    where
        M: Applicative,
    {
        Reader::new(move |_| M::of(((), state)))
    }

    /// Transforms the state.
    pub fn modify<F>(function: F) -> Reader<S, M::Of<((), S)>>
    where
        M: Applicative,
        F: FnOnce(S) -> S + 'static,
    {
        Reader::new(move |state| M::of(((), function(state))))
    }

    /// Lifts an `M` computation that leaves the state alone.
    pub fn lift<A: 'static>(ma: M::Of<A>) -> Reader<S, M::Of<(A, S)>>
    where
        M: Monad,
    {
        Reader::new(move |state: S| M::chain(ma, move |value| M::of((value, state))))
    }

    /// Lifts a plain state transition.
    pub fn from_state<A: 'static>(state: State<S, A>) -> Reader<S, M::Of<(A, S)>>
    where
        M: Applicative,
    {
        Reader::new(move |initial| M::of(state.run(initial)))
    }

    /// Runs `fa` from `initial`, producing the value and the final state.
    #[inline]
    pub fn run<A>(fa: Reader<S, M::Of<(A, S)>>, initial: S) -> M::Of<(A, S)> {
        fa.run(initial)
    }

    /// Runs `fa` from `initial` and keeps the value.
    pub fn eval<A: 'static>(fa: Reader<S, M::Of<(A, S)>>, initial: S) -> M::Of<A>
    where
        M: Functor,
    {
        M::map(fa.run(initial), |(value, _)| value)
    }

    /// Runs `fa` from `initial` and keeps the final state.
    pub fn exec<A: 'static>(fa: Reader<S, M::Of<(A, S)>>, initial: S) -> M::Of<S>
    where
        M: Functor,
    {
        M::map(fa.run(initial), |(_, state)| state)
    }
}

// =============================================================================
// Type-class instances
// =============================================================================

impl<M: Functor, S: 'static> Functor for StateT<M, S> {
    fn map<A, B, F>(fa: Reader<S, M::Of<(A, S)>>, function: F) -> Reader<S, M::Of<(B, S)>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Reader::new(move |state| {
            M::map(fa.run(state), move |(value, next): (A, S)| (function(value), next))
        })
    }
}

impl<M: Monad, S: 'static> Apply for StateT<M, S> {
    fn map2<A, B, C, F>(
        fa: Reader<S, M::Of<(A, S)>>,
        fb: Reader<S, M::Of<(B, S)>>,
        function: F,
    ) -> Reader<S, M::Of<(C, S)>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Reader::new(move |state| {
            M::chain(fa.run(state), move |(a, middle): (A, S)| {
                M::chain(fb.run(middle), move |(b, last): (B, S)| M::of((function(a, b), last)))
            })
        })
    }
}

impl<M: Monad, S: 'static> Applicative for StateT<M, S> {
    fn of<A: 'static>(value: A) -> Reader<S, M::Of<(A, S)>> {
        Reader::new(move |state| M::of((value, state)))
    }
}

impl<M: Monad, S: 'static> Chain for StateT<M, S> {
    fn chain<A, B, F>(fa: Reader<S, M::Of<(A, S)>>, function: F) -> Reader<S, M::Of<(B, S)>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Reader<S, M::Of<(B, S)>> + 'static,
    {
        Reader::new(move |state| {
            M::chain(fa.run(state), move |(value, next): (A, S)| function(value).run(next))
        })
    }
}

impl<M: Alt, S: Clone + 'static> Alt for StateT<M, S> {
    fn alt<A, F>(fa: Reader<S, M::Of<(A, S)>>, that: F) -> Reader<S, M::Of<(A, S)>>
    where
        A: 'static,
        F: FnOnce() -> Reader<S, M::Of<(A, S)>> + 'static,
    {
        Reader::new(move |state: S| {
            let saved = state.clone();
            M::alt(fa.run(state), move || that().run(saved))
        })
    }
}
