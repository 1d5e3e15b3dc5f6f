//! Extend and Comonad type classes - computing from a whole context.
//!
//! Where a monad feeds a value into a function producing a context, a
//! comonad feeds a whole context into a function producing a value. `extend`
//! applies such a function at every position: for a non-empty sequence, to
//! every suffix; for a tree, to every subtree.
//!
//! # Laws
//!
//! ```text
//! W::extend(wa, W::extract)                 == wa
//! W::extract(W::extend(wa, f))              == f(&wa)
//! W::extend(W::extend(wa, f), g)            == W::extend(wa, |w| g(&W::extend(w.clone(), f)))
//! ```

use super::functor::Functor;

/// A functor whose positions can each see their surrounding context.
pub trait Extend: Functor {
    /// Replaces the value at every position by `function` applied to the
    /// context focused on that position.
    ///
    /// Building the focused contexts copies elements, hence `A: Clone`.
    fn extend<A, B, F>(wa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(&Self::Of<A>) -> B + 'static;

    /// Replaces every value by the context focused on it.
    fn duplicate<A>(wa: Self::Of<A>) -> Self::Of<Self::Of<A>>
    where
        A: Clone + 'static,
        Self::Of<A>: Clone + 'static,
    {
        Self::extend(wa, |focused: &Self::Of<A>| focused.clone())
    }
}

/// An `Extend` with a focused value.
pub trait Comonad: Extend {
    /// Returns the value at the focus.
    fn extract<A>(wa: Self::Of<A>) -> A;
}
