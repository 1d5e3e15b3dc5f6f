//! Type class traits for functional programming abstractions.
//!
//! Every capability is a trait implemented on a *kind marker* (see
//! [`TypeConstructor`]), so generic code can be handed "the effect to use"
//! as a value:
//!
//! - [`Functor`]: mapping over contained values
//! - [`Apply`] / [`Applicative`]: combining independent contexts, lifting values
//! - [`Chain`] / [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: reducing a structure to a summary
//! - [`Traversable`]: visiting a structure under an applicative effect
//! - [`Compactable`] / [`Filterable`]: dropping or splitting elements
//! - [`Witherable`]: effectful filtering, derived from traverse and compact
//! - [`Alt`] / [`Alternative`]: choosing between contexts
//! - [`Extend`] / [`Comonad`]: context-dependent computation
//! - [`Bifunctor`]: mapping both sides of a two-sided value
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a semigroup with an identity `empty`
//! - [`Order`]: a total order given as a value
//!
//! ## Foundation Types
//!
//! - [`OptionK`], [`ResultK`], [`VecK`]: markers for standard containers
//! - [`ValidationK`]: `Result` with error accumulation
//! - [`Identity`] / [`IdentityK`], [`Const`] / [`ConstK`]
//! - [`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`]: monoid selectors
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
//! ```
//!
//! ```rust
//! use fp_contexts::typeclass::{Applicative, Apply, OptionK};
//!
//! let lifted: Option<i32> = OptionK::of(42);
//! assert_eq!(OptionK::map2(lifted, Some(1), |a, b| a + b), Some(43));
//! ```

mod alt;
mod applicative;
mod bifunctor;
mod comonad;
mod compactable;
mod constant;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod order;
mod semigroup;
mod traversable;
mod validation;
mod witherable;
mod wrappers;

pub use alt::{Alt, Alternative};
pub use applicative::{Applicative, Apply};
pub use bifunctor::Bifunctor;
pub use comonad::{Comonad, Extend};
pub use compactable::{Compactable, Filterable, Separated};
pub use constant::{Const, ConstK};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::{OptionK, ResultK, TypeConstructor, VecK};
pub use identity::{Identity, IdentityK};
pub use monad::{Chain, Monad};
pub use monoid::Monoid;
pub use order::{Natural, Order, Reversed};
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use validation::ValidationK;
pub use witherable::Witherable;
pub use wrappers::{Bounded, First, Last, Max, Min, Product, Sum};

pub(crate) use higher::kind_marker;
