//! Effects, effect composition, and pre-built effect stacks.
//!
//! # Base effects
//!
//! - [`Reader`] / [`ReaderK`]: computations that read an environment
//! - [`State`] / [`StateK`]: computations that thread a state
//! - [`Writer`] / [`WriterK`]: values with accumulated output
//! - [`Task`] / [`TaskK`]: lazily polled futures (feature `async`)
//!
//! # Composition
//!
//! [`Compose<F, G>`] is the applicative composition of any two kinds. The
//! transformers specialise the inner layer and add a monad when the outer
//! kind is one:
//!
//! | Transformer | Shape | Failure mode |
//! |---|---|---|
//! | [`EitherT<M, E>`] | `M<Result<A, E>>` | first error wins |
//! | [`ValidationT<M, E>`] | `M<Result<A, E>>` | errors accumulate |
//! | [`TheseT<M, E>`] | `M<These<E, A>>` | warnings accumulate |
//! | [`ReaderT<M, R>`] | `Reader<R, M<A>>` | from `M` |
//! | [`StateT<M, S>`] | `Reader<S, M<(A, S)>>` | from `M` |
//!
//! # Stacks
//!
//! [`ReaderEither`] and [`ReaderValidation`] are always available;
//! [`TaskEither`], [`TaskThese`], [`ReaderTaskEither`] and
//! [`StateReaderTaskEither`] need the `async` feature.
//!
//! # Example
//!
//! ```rust
//! use fp_contexts::effect::{EitherT, StateK};
//! use fp_contexts::typeclass::{Traversable, VecK};
//!
//! type Budget = EitherT<StateK<u32>, String>;
//!
//! let remaining_after = |cost: u32| {
//!     Budget::chain_result(Budget::right_m(StateK::get()), move |left: u32| {
//!         left.checked_sub(cost).ok_or_else(|| format!("cannot afford {cost}"))
//!     })
//! };
//! let remaining = VecK::traverse(Budget::new(), vec![1, 2], remaining_after);
//! assert_eq!(StateK::eval(remaining, 10), Ok(vec![9, 8]));
//! ```

// =============================================================================
// Base Effects
// =============================================================================

mod reader;
mod state;
mod writer;

pub use reader::{Reader, ReaderK};
pub use state::{State, StateK};
pub use writer::{Writer, WriterK};

#[cfg(feature = "async")]
mod task;

#[cfg(feature = "async")]
pub use task::{Task, TaskK};

// =============================================================================
// Composition and Transformers
// =============================================================================

mod composition;
mod either_transformer;
mod reader_transformer;
mod state_transformer;
mod these_transformer;
mod validation_transformer;

pub use composition::Compose;
pub use either_transformer::EitherT;
pub use reader_transformer::ReaderT;
pub use state_transformer::StateT;
pub use these_transformer::TheseT;
pub use validation_transformer::ValidationT;

// =============================================================================
// Stacks
// =============================================================================

mod stacks;

pub use stacks::{ReaderEither, ReaderValidation};

#[cfg(feature = "async")]
mod task_stacks;

#[cfg(feature = "async")]
pub use task_stacks::{ReaderTaskEither, StateReaderTaskEither, TaskEither, TaskThese};

// =============================================================================
// Do-Notation
// =============================================================================

mod bind_macro;
