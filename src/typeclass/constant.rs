//! The constant functor.
//!
//! `Const<M, A>` stores an `M` and only pretends to hold an `A`. Mapping
//! leaves the stored value alone and `map2` combines the stored values with
//! `M`'s semigroup, so traversing a container under [`ConstK`] folds it:
//!
//! ```rust
//! use fp_contexts::typeclass::{Const, ConstK, Foldable, Sum, Traversable, VecK};
//!
//! let folded = VecK::traverse(ConstK::<Sum<i32>>::new(), vec![1, 2, 3], |n: i32| {
//!     Const::<Sum<i32>, ()>::new(Sum::new(n))
//! });
//! assert_eq!(folded.get(), VecK::fold_map(vec![1, 2, 3], Sum::new));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::applicative::{Applicative, Apply};
use super::functor::Functor;
use super::higher::{TypeConstructor, kind_marker};
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A value of type `M` standing in for a context of `A`.
pub struct Const<M, A> {
    value: M,
    phantom: PhantomData<fn() -> A>,
}

impl<M, A> Const<M, A> {
    /// Stores `value`.
    #[inline]
    pub const fn new(value: M) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// Returns the stored value.
    #[inline]
    pub fn get(self) -> M {
        self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<M, B> {
        Const::new(self.value)
    }
}

impl<M: Clone, A> Clone for Const<M, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: PartialEq, A> PartialEq for Const<M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Eq, A> Eq for Const<M, A> {}

impl<M: fmt::Debug, A> fmt::Debug for Const<M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

kind_marker! {
    /// Kind marker for [`Const`] over a fixed stored type `M`.
    pub struct ConstK<M>;
}

impl<M: 'static> TypeConstructor for ConstK<M> {
    type Of<A> = Const<M, A>;
}

impl<M: 'static> Functor for ConstK<M> {
    #[inline]
    fn map<A, B, F>(fa: Const<M, A>, _function: F) -> Const<M, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.retag()
    }
}

impl<M: Semigroup + 'static> Apply for ConstK<M> {
    #[inline]
    fn map2<A, B, C, F>(fa: Const<M, A>, fb: Const<M, B>, _function: F) -> Const<M, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Const::new(fa.value.combine(fb.value))
    }
}

impl<M: Monoid + 'static> Applicative for ConstK<M> {
    #[inline]
    fn of<A: 'static>(_value: A) -> Const<M, A> {
        Const::new(M::empty())
    }
}
