//! Two-sided data types.
//!
//! - [`Either`]: one of two alternatives, the tag used by `separate` and `wilt`
//! - [`These`]: a left value, a right value, or both
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::control::{Either, These};
//!
//! let tagged: Either<&str, i32> = Either::Right(1);
//! assert!(tagged.is_right());
//!
//! let partial: These<Vec<&str>, i32> = These::Both(vec!["rounded"], 3);
//! assert_eq!(partial.get_right(), Some(3));
//! ```

mod either;
mod these;

pub use either::Either;
pub use these::{These, TheseK};
