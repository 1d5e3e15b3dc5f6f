//! # fp-contexts
//!
//! Algebraic abstractions, traversable containers, and effect composition
//! for Rust.
//!
//! ## Overview
//!
//! Calling code composes operations over *contexts* (optionality, failure,
//! asynchrony, environment-dependence, accumulation) through one small
//! vocabulary: `map`, `map2`, `chain`, `reduce`, `traverse`, `wither`, ...
//!
//! - **Type Classes**: Functor, Apply, Applicative, Chain, Monad, Foldable,
//!   Traversable, Compactable, Filterable, Witherable, Bifunctor, Extend,
//!   Comonad, Alt, Alternative, plus Semigroup / Monoid / Order
//! - **Control**: the `Either` and `These` disjoint unions
//! - **Collections**: non-empty vectors, records, ordered maps, rose trees,
//!   accumulator tuples, and the store comonad
//! - **Effects**: Reader, State, Writer, Task, the composition engine
//!   (`Compose`, `EitherT`, `ValidationT`, `TheseT`, `ReaderT`, `StateT`)
//!   and pre-built stacks such as `ReaderTaskEither`
//!
//! Type classes are implemented on zero-sized *kind markers* (`OptionK`,
//! `VecK`, `EitherT<TaskK, E>`, ...). A marker is passed as a value wherever
//! an algorithm has to be told which effect to run under.
//!
//! ## Feature Flags
//!
//! - `collection`: non-empty, record, ordered map, tree, tuple, store
//! - `effect`: reader, state, writer, composition, transformers
//! - `async`: the task effect and task-based stacks (pulls in `futures`)
//! - `full`: everything (also the default)
//!
//! The `typeclass` and `control` modules are always available.
//!
//! ## Example
//!
//! ```rust
//! use fp_contexts::prelude::*;
//!
//! let record = RecordK::from_entries([("b", 2), ("a", 1), ("c", 3)]);
//! let scaled_odds = RecordK::traverse(OptionK, record, |n: i32| (n % 2 == 1).then_some(n * 10));
//! assert_eq!(scaled_odds, None);
//!
//! let kept = VecK::wither(IdentityK, vec![1, 2, 3], |n: i32| Identity::new((n > 1).then_some(n)));
//! assert_eq!(kept.into_inner(), vec![2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every type class, container and effect.
///
/// # Usage
///
/// ```rust
/// use fp_contexts::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod control;
pub mod typeclass;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "effect")]
pub mod effect;
