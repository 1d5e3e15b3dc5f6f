//! Accumulator pairs.
//!
//! [`TupleK<S>`] views `(A, S)` as a context holding `A` with an
//! accumulator `S` riding along. Mapping and traversal touch only `A`;
//! `map2` and `chain` combine the accumulators with `S`'s semigroup,
//! left operand first, and `of` starts from `S::empty()`.
//!
//! ```rust
//! use fp_contexts::collection::TupleK;
//! use fp_contexts::typeclass::Chain;
//!
//! let logged = TupleK::<Vec<&str>>::chain((2, vec!["start"]), |n| (n * 3, vec!["tripled"]));
//! assert_eq!(logged, (6, vec!["start", "tripled"]));
//! ```

use crate::typeclass::{
    Applicative, Apply, Chain, Comonad, Extend, Foldable, Functor, Monoid, Semigroup, Traversable,
    TypeConstructor, kind_marker,
};

kind_marker! {
    /// Kind marker for `(_, S)`.
    pub struct TupleK<S>;
}

impl<S: 'static> TypeConstructor for TupleK<S> {
    type Of<A> = (A, S);
}

impl<S: 'static> TupleK<S> {
    /// The value.
    #[inline]
    pub fn fst<A>(fa: (A, S)) -> A {
        fa.0
    }

    /// The accumulator.
    #[inline]
    pub fn snd<A>(fa: (A, S)) -> S {
        fa.1
    }

    /// Exchanges value and accumulator.
    #[inline]
    pub fn swap<A>(fa: (A, S)) -> (S, A) {
        (fa.1, fa.0)
    }

    /// Maps the accumulator.
    #[inline]
    pub fn map_snd<A, T, F>(fa: (A, S), function: F) -> (A, T)
    where
        F: FnOnce(S) -> T,
    {
        (fa.0, function(fa.1))
    }
}

impl<S: 'static> Functor for TupleK<S> {
    #[inline]
    fn map<A, B, F>(fa: (A, S), function: F) -> (B, S)
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        (function(fa.0), fa.1)
    }
}

impl<S: Semigroup + 'static> Apply for TupleK<S> {
    fn map2<A, B, C, F>(fa: (A, S), fb: (B, S), function: F) -> (C, S)
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        (function(fa.0, fb.0), fa.1.combine(fb.1))
    }
}

impl<S: Monoid + 'static> Applicative for TupleK<S> {
    #[inline]
    fn of<A: 'static>(value: A) -> (A, S) {
        (value, S::empty())
    }
}

impl<S: Monoid + 'static> Chain for TupleK<S> {
    fn chain<A, B, F>(fa: (A, S), function: F) -> (B, S)
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> (B, S) + 'static,
    {
        let (value, accumulator) = fa;
        let (next, more) = function(value);
        (next, accumulator.combine(more))
    }
}

impl<S: 'static> Foldable for TupleK<S> {
    fn reduce<A, B, F>(fa: (A, S), initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    fn reduce_right<A, B, F>(fa: (A, S), initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(fa.0, initial)
    }
}

impl<S: 'static> Traversable for TupleK<S> {
    fn traverse<F, A, B, V>(_effect: F, ta: (A, S), mut visitor: V) -> F::Of<(B, S)>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        let (value, accumulator) = ta;
        F::map2(visitor(value), F::of(accumulator), |value: B, accumulator: S| (value, accumulator))
    }
}

impl<S: 'static> Extend for TupleK<S> {
    fn extend<A, B, F>(wa: (A, S), function: F) -> (B, S)
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(&(A, S)) -> B + 'static,
    {
        let value = function(&wa);
        (value, wa.1)
    }
}

impl<S: 'static> Comonad for TupleK<S> {
    #[inline]
    fn extract<A>(wa: (A, S)) -> A {
        wa.0
    }
}
