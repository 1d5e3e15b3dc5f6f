//! The store comonad.
//!
//! A [`Store<S, A>`] is a lookup function from positions `S` to values `A`
//! together with a current position. `extract` reads the value at the
//! current position, and `extend` rebuilds the lookup so that every
//! position sees the store focused on it.
//!
//! ```rust
//! use fp_contexts::collection::{Store, StoreK};
//! use fp_contexts::typeclass::{Comonad, Extend};
//!
//! let squares = Store::new(|n: i64| n * n, 3);
//! assert_eq!(squares.peek(5), 25);
//!
//! // Difference to the square on the left.
//! let deltas = StoreK::<i64>::extend(squares, |store: &Store<i64, i64>| {
//!     store.extract_ref() - store.peeks(|n| n - 1)
//! });
//! assert_eq!(StoreK::<i64>::extract(deltas), 5);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Comonad, Extend, Functor, TypeConstructor, kind_marker};

/// A lookup function with a current position.
pub struct Store<S, A> {
    peek: Rc<dyn Fn(S) -> A>,
    position: S,
}

impl<S, A> Store<S, A> {
    /// Builds a store from a lookup function and a starting position.
    pub fn new<F>(peek: F, position: S) -> Self
    where
        F: Fn(S) -> A + 'static,
    {
        Self {
            peek: Rc::new(peek),
            position,
        }
    }

    /// The current position.
    #[inline]
    pub const fn position(&self) -> &S {
        &self.position
    }

    /// The value at `position`.
    #[inline]
    pub fn peek(&self, position: S) -> A {
        (self.peek)(position)
    }

    /// Moves to `position`.
    pub fn seek(self, position: S) -> Self {
        Self {
            peek: self.peek,
            position,
        }
    }

    /// Moves to a position computed from the current one.
    pub fn seeks<F>(self, function: F) -> Self
    where
        F: FnOnce(S) -> S,
    {
        Self {
            peek: self.peek,
            position: function(self.position),
        }
    }

    /// The value at a position computed from the current one.
    pub fn peeks<F>(&self, function: F) -> A
    where
        F: FnOnce(&S) -> S,
    {
        (self.peek)(function(&self.position))
    }

    /// Looks up every position produced in the functor `F`.
    pub fn experiment<F, G>(&self, function: G) -> F::Of<A>
    where
        F: Functor,
        S: 'static,
        A: 'static,
        G: FnOnce(&S) -> F::Of<S>,
    {
        let peek = Rc::clone(&self.peek);
        F::map(function(&self.position), move |position| peek(position))
    }
}

impl<S: Clone, A> Store<S, A> {
    /// The value at the current position, without consuming the store.
    pub fn extract_ref(&self) -> A {
        (self.peek)(self.position.clone())
    }
}

impl<S: Clone, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            peek: Rc::clone(&self.peek),
            position: self.position.clone(),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Store")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

kind_marker! {
    /// Kind marker for [`Store`] over positions `S`.
    pub struct StoreK<S>;
}

impl<S: 'static> TypeConstructor for StoreK<S> {
    type Of<A> = Store<S, A>;
}

impl<S: 'static> Functor for StoreK<S> {
    fn map<A, B, F>(fa: Store<S, A>, function: F) -> Store<S, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let Store { peek, position } = fa;
        Store::new(move |at| function(peek(at)), position)
    }
}

impl<S: 'static> Extend for StoreK<S> {
    fn extend<A, B, F>(wa: Store<S, A>, function: F) -> Store<S, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(&Store<S, A>) -> B + 'static,
    {
        let Store { peek, position } = wa;
        Store::new(
            move |at| {
                function(&Store {
                    peek: Rc::clone(&peek),
                    position: at,
                })
            },
            position,
        )
    }
}

impl<S: 'static> Comonad for StoreK<S> {
    #[inline]
    fn extract<A>(wa: Store<S, A>) -> A {
        (wa.peek)(wa.position)
    }
}
