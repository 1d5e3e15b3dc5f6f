//! Immutable containers and their type-class instances.
//!
//! - [`NonEmptyVec`] / [`NonEmptyK`]: sequences with at least one element
//! - [`Record`] / [`RecordK`]: string-keyed maps in key order
//! - [`OrderedMap`] / [`OrderedMapK`]: maps ordered by an [`Order`](crate::typeclass::Order)
//! - [`Tree`] / [`TreeK`]: rose trees in pre-order
//! - [`TupleK`]: `(A, S)` pairs threading an accumulator
//! - [`Store`] / [`StoreK`]: the store comonad
//!
//! The array helpers (`flat_map`, the `*_with_index` family) are inherent
//! functions on [`VecK`](crate::typeclass::VecK).

mod array;
mod non_empty;
mod ordered_map;
mod record;
mod store;
mod tree;
mod tuple;

pub use non_empty::{NonEmptyK, NonEmptyVec};
pub use ordered_map::{OrderedMap, OrderedMapK};
pub use record::{Record, RecordK};
pub use store::{Store, StoreK};
pub use tree::{Forest, Tree, TreeK, draw_forest};
pub use tuple::TupleK;
