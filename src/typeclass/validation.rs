//! Error-accumulating applicative over `Result`.
//!
//! [`ValidationK<E>`] describes the same values as `ResultK<E>`, but its
//! `map2` combines two errors with `E`'s semigroup instead of keeping only
//! the first. Traversing under it reports every failure at once:
//!
//! ```rust
//! use fp_contexts::typeclass::{Traversable, ValidationK, VecK};
//!
//! let checked = VecK::traverse(ValidationK::<Vec<String>>::new(), vec![1, -2, 3, -4], |n: i32| {
//!     if n > 0 { Ok(n) } else { Err(vec![format!("{n}")]) }
//! });
//! assert_eq!(checked, Err(vec!["-2".to_string(), "-4".to_string()]));
//! ```
//!
//! `chain` cannot accumulate, since the second computation needs the first
//! one's value, so it short-circuits exactly like `ResultK`.

use super::alt::Alt;
use super::applicative::{Applicative, Apply};
use super::functor::Functor;
use super::higher::{TypeConstructor, kind_marker};
use super::monad::Chain;
use super::semigroup::Semigroup;

kind_marker! {
    /// Kind marker for `Result<_, E>` with error accumulation.
    pub struct ValidationK<E>;
}

impl<E: 'static> TypeConstructor for ValidationK<E> {
    type Of<A> = Result<A, E>;
}

impl<E: 'static> Functor for ValidationK<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<E: Semigroup + 'static> Apply for ValidationK<E> {
    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(first), Err(second)) => Err(first.combine(second)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl<E: Semigroup + 'static> Applicative for ValidationK<E> {
    #[inline]
    fn of<A: 'static>(value: A) -> Result<A, E> {
        Ok(value)
    }
}

impl<E: Semigroup + 'static> Chain for ValidationK<E> {
    #[inline]
    fn chain<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        fa.and_then(function)
    }
}

impl<E: Semigroup + 'static> Alt for ValidationK<E> {
    /// A success on either side wins; two failures are combined.
    fn alt<A, F>(fa: Result<A, E>, that: F) -> Result<A, E>
    where
        A: 'static,
        F: FnOnce() -> Result<A, E> + 'static,
    {
        match fa {
            Ok(value) => Ok(value),
            Err(first) => match that() {
                Ok(value) => Ok(value),
                Err(second) => Err(first.combine(second)),
            },
        }
    }
}
