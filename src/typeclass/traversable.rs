//! Traversable type class - visiting a container under an effect.
//!
//! `traverse` applies an effectful visitor to every element in canonical
//! order and gathers the effects with the effect's `map2`, starting from
//! `of(empty)`. The result is one effect wrapping a container of the same
//! shape.
//!
//! The effect is chosen by passing its kind marker as the first argument.
//! It can be any [`Applicative`]: `OptionK`, `ResultK<E>`, `ValidationK<E>`,
//! `ConstK<M>`, `IdentityK`, `TaskK`, or a composition of them.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! C::traverse(F, c, F::of) == F::of(c)
//! ```
//!
//! ## Composition
//!
//! ```text
//! C::traverse(Compose<F, G>, c, |x| F::map(f(x), g))
//!     == F::map(C::traverse(F, c, f), |c2| C::traverse(G, c2, g))
//! ```
//!
//! ## Compatibility with `fold_map`
//!
//! ```text
//! C::fold_map(c, f) == C::traverse(ConstK<M>, c, |x| Const::new(f(x))).get()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{OptionK, Traversable, VecK};
//!
//! let all_small = VecK::traverse(OptionK, vec![1, 2, 3], |n: i32| (n < 10).then_some(n));
//! assert_eq!(all_small, Some(vec![1, 2, 3]));
//!
//! let nested = vec![Some(1), None, Some(3)];
//! assert_eq!(VecK::sequence(OptionK, nested), None);
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::{OptionK, ResultK, VecK};

/// A type class for containers that can be traversed under an applicative
/// effect.
pub trait Traversable: Functor + Foldable {
    /// Applies `visitor` to every element in canonical order, collecting the
    /// effects into one effect wrapping the rebuilt container.
    ///
    /// An empty container yields `F::of(empty)` and `visitor` is never
    /// called.
    fn traverse<F, A, B, V>(effect: F, ta: Self::Of<A>, visitor: V) -> F::Of<Self::Of<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>;

    /// Turns a container of effects inside out.
    fn sequence<F, A>(effect: F, tfa: Self::Of<F::Of<A>>) -> F::Of<Self::Of<A>>
    where
        F: Applicative,
        A: 'static,
        F::Of<A>: 'static,
    {
        Self::traverse::<F, F::Of<A>, A, _>(effect, tfa, |fa| fa)
    }
}

impl Traversable for OptionK {
    fn traverse<F, A, B, V>(_effect: F, ta: Option<A>, mut visitor: V) -> F::Of<Option<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        match ta {
            Some(element) => F::map(visitor(element), Some),
            None => F::of(None),
        }
    }
}

impl<E: 'static> Traversable for ResultK<E> {
    fn traverse<F, A, B, V>(_effect: F, ta: Result<A, E>, mut visitor: V) -> F::Of<Result<B, E>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        match ta {
            Ok(element) => F::map(visitor(element), Ok),
            Err(error) => F::of(Err(error)),
        }
    }
}

impl Traversable for VecK {
    fn traverse<F, A, B, V>(_effect: F, ta: Vec<A>, mut visitor: V) -> F::Of<Vec<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        let capacity = ta.len();
        ta.into_iter()
            .fold(F::of(Vec::with_capacity(capacity)), |accumulator, element| {
                F::map2(accumulator, visitor(element), |mut elements: Vec<B>, value: B| {
                    elements.push(value);
                    elements
                })
            })
    }
}
