//! State - computation threading a state value.
//!
//! A `State<S, A>` wraps a function `S -> (A, S)`. `chain` feeds the state
//! left by one step into the next, so a sequence of steps reads like
//! imperative code over a single mutable variable while staying pure.
//!
//! # Laws
//!
//! ```text
//! chain(get(), put)            == of(())
//! chain(put(s), |()| get())    yields s
//! chain(put(s1), |()| put(s2)) == put(s2)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::StateK;
//! use fp_contexts::typeclass::Chain;
//!
//! let increment = || StateK::<i32>::modify(|count| count + 1);
//! let counter = StateK::<i32>::chain(increment(), move |()| {
//!     StateK::<i32>::chain(increment(), |()| StateK::get())
//! });
//!
//! assert_eq!(StateK::run(counter, 0), (2, 2));
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Apply, Chain, Functor, TypeConstructor, kind_marker};

/// A computation producing an `A` while transforming a state `S`.
pub struct State<S, A> {
    run_function: Box<dyn FnOnce(S) -> (A, S)>,
}

impl<S, A> State<S, A> {
    /// Wraps a state transition.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the computation, returning the value and the final state.
    #[inline]
    pub fn run(self, initial: S) -> (A, S) {
        (self.run_function)(initial)
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

kind_marker! {
    /// Kind marker for `State<S, _>`.
    pub struct StateK<S>;
}

impl<S: 'static> TypeConstructor for StateK<S> {
    type Of<A> = State<S, A>;
}

// =============================================================================
// State operations
// =============================================================================

impl<S: 'static> StateK<S> {
    /// Reads the current state.
    pub fn get() -> State<S, S>
    where
        S: Clone,
    {
        State::new(|state: S| (state.clone(), state))
    }

    /// Reads a projection of the current state.
    pub fn gets<A, F>(projection: F) -> State<S, A>
    where
        F: FnOnce(&S) -> A + 'static,
    {
        State::new(move |state| (projection(&state), state))
    }

    /// Replaces the state.
    pub fn put(state: S) -> State<S, ()> {
        State::new(move |_| ((), state))
    }

    /// Transforms the state.
    pub fn modify<F>(function: F) -> State<S, ()>
    where
        F: FnOnce(S) -> S + 'static,
    {
        State::new(move |state| ((), function(state)))
    }

    /// Runs `fa` from `initial`.
    #[inline]
    pub fn run<A>(fa: State<S, A>, initial: S) -> (A, S) {
        fa.run(initial)
    }

    /// Runs `fa` from `initial` and keeps the value.
    pub fn eval<A>(fa: State<S, A>, initial: S) -> A {
        fa.run(initial).0
    }

    /// Runs `fa` from `initial` and keeps the final state.
    pub fn exec<A>(fa: State<S, A>, initial: S) -> S {
        fa.run(initial).1
    }
}

// =============================================================================
// Type-class instances
// =============================================================================

impl<S: 'static> Functor for StateK<S> {
    fn map<A, B, F>(fa: State<S, A>, function: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        State::new(move |state| {
            let (value, next) = fa.run(state);
            (function(value), next)
        })
    }
}

impl<S: 'static> Apply for StateK<S> {
    fn map2<A, B, C, F>(fa: State<S, A>, fb: State<S, B>, function: F) -> State<S, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        State::new(move |state| {
            let (a, middle) = fa.run(state);
            let (b, last) = fb.run(middle);
            (function(a, b), last)
        })
    }
}

impl<S: 'static> Applicative for StateK<S> {
    fn of<A: 'static>(value: A) -> State<S, A> {
        State::new(move |state| (value, state))
    }
}

impl<S: 'static> Chain for StateK<S> {
    fn chain<A, B, F>(fa: State<S, A>, function: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> State<S, B> + 'static,
    {
        State::new(move |state| {
            let (value, next) = fa.run(state);
            function(value).run(next)
        })
    }
}
