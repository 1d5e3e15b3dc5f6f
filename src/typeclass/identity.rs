//! Identity wrapper type - the identity functor.
//!
//! `Identity` holds exactly one value and adds no effect. Traversing under
//! [`IdentityK`] is plain mapping, which makes it the reference effect for
//! the traversal identity law, and the base of transformer stacks that need
//! "no effect".

use super::alt::Alt;
use super::applicative::{Applicative, Apply};
use super::comonad::{Comonad, Extend};
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::{TypeConstructor, kind_marker};
use super::monad::Chain;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::traversable::Traversable;

/// The identity functor.
///
/// # Examples
///
/// ```rust
/// use fp_contexts::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(7).0, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A: Semigroup> Semigroup for Identity<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Monoid> Monoid for Identity<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}

kind_marker! {
    /// Kind marker for [`Identity`].
    pub struct IdentityK;
}

impl TypeConstructor for IdentityK {
    type Of<A> = Identity<A>;
}

impl Functor for IdentityK {
    #[inline]
    fn map<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Apply for IdentityK {
    #[inline]
    fn map2<A, B, C, F>(fa: Identity<A>, fb: Identity<B>, function: F) -> Identity<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Identity(function(fa.0, fb.0))
    }
}

impl Applicative for IdentityK {
    #[inline]
    fn of<A: 'static>(value: A) -> Identity<A> {
        Identity(value)
    }
}

impl Chain for IdentityK {
    #[inline]
    fn chain<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }
}

impl Alt for IdentityK {
    /// Identity never fails, so the fallback is never evaluated.
    #[inline]
    fn alt<A, F>(fa: Identity<A>, _that: F) -> Identity<A>
    where
        A: 'static,
        F: FnOnce() -> Identity<A> + 'static,
    {
        fa
    }
}

impl Foldable for IdentityK {
    fn reduce<A, B, F>(fa: Identity<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    fn reduce_right<A, B, F>(fa: Identity<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(fa.0, initial)
    }
}

impl Traversable for IdentityK {
    fn traverse<F, A, B, V>(_effect: F, ta: Identity<A>, mut visitor: V) -> F::Of<Identity<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        F::map(visitor(ta.0), Identity)
    }
}

impl Extend for IdentityK {
    fn extend<A, B, F>(wa: Identity<A>, function: F) -> Identity<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(&Identity<A>) -> B + 'static,
    {
        Identity(function(&wa))
    }
}

impl Comonad for IdentityK {
    #[inline]
    fn extract<A>(wa: Identity<A>) -> A {
        wa.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionK, Sum};
    use rstest::rstest;

    #[rstest]
    fn monad_operations_are_plain_application() {
        let value = IdentityK::chain(IdentityK::of(3), |n: i32| Identity(n + 1));
        assert_eq!(value, Identity(4));
        assert_eq!(IdentityK::map2(Identity(2), Identity(5), |a, b| a * b), Identity(10));
    }

    #[rstest]
    #[case(Some(2), Some(Identity(2)))]
    #[case(None, None)]
    fn traverse_moves_the_effect_outside(#[case] inner: Option<i32>, #[case] expected: Option<Identity<i32>>) {
        assert_eq!(IdentityK::traverse(OptionK, Identity(0), move |_| inner), expected);
    }

    #[rstest]
    fn semigroup_combines_inner_values() {
        assert_eq!(Identity(Sum::new(1)).combine(Identity(Sum::new(2))), Identity(Sum::new(3)));
        assert_eq!(Identity::<String>::empty(), Identity(String::new()));
    }

    #[rstest]
    fn fold_map_reads_the_single_value() {
        assert_eq!(IdentityK::fold_map(Identity(5), Sum::new), Sum::new(5));
        assert_eq!(IdentityK::alt(Identity(1), || Identity(2)), Identity(1));
    }
}
