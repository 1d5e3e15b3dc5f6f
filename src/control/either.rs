//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is the tag type consumed by `separate`, `partition_map`
//! and `wilt`: lefts go to one half, rights to the other. Unlike `Result`
//! neither side means failure.
//!
//! ```rust
//! use fp_contexts::control::Either;
//! use fp_contexts::typeclass::Bifunctor;
//!
//! let parsed: Either<String, i32> = Either::Right(21);
//! assert_eq!(parsed.map_right(|n| n * 2).right(), Some(42));
//!
//! let label = Either::<i32, &str>::Left(3).fold(|n| n.to_string(), str::to_string);
//! assert_eq!(label, "3");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Eliminates both cases into one type.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
        }
    }

    /// Exchanges the sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(left) => Either::Right(left),
            Self::Right(right) => Either::Left(right),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(left) => formatter.debug_tuple("Left").field(left).finish(),
            Self::Right(right) => formatter.debug_tuple("Right").field(right).finish(),
        }
    }
}

/// `Err` becomes `Left`, `Ok` becomes `Right`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(right) => Self::Right(right),
            Err(left) => Self::Left(left),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(left) => Err(left),
            Either::Right(right) => Ok(right),
        }
    }
}
