//! These type - a left value, a right value, or both at once.
//!
//! `These<E, A>` extends the two cases of `Either` with `Both(E, A)`: a
//! result that carries a value *and* something to report alongside it, such
//! as warnings collected while still producing an answer.
//!
//! # Accumulation
//!
//! With a semigroup on `E`, [`TheseK<E>`] is a monad whose `chain` keeps
//! collecting left payloads:
//!
//! | `fa` | `f(a)` | result |
//! |---|---|---|
//! | `Left(e)` | not called | `Left(e)` |
//! | `Right(a)` | any `r` | `r` |
//! | `Both(e, a)` | `Left(e2)` | `Left(e ⋄ e2)` |
//! | `Both(e, a)` | `Right(b)` | `Both(e, b)` |
//! | `Both(e, a)` | `Both(e2, b)` | `Both(e ⋄ e2, b)` |
//!
//! ```rust
//! use fp_contexts::control::{These, TheseK};
//! use fp_contexts::typeclass::Chain;
//!
//! let warned: These<String, i32> = These::Both("slow;".to_string(), 2);
//! let result = TheseK::<String>::chain(warned, |n| These::Both("retried;".to_string(), n * 10));
//! assert_eq!(result, These::Both("slow;retried;".to_string(), 20));
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Apply, Bifunctor, Chain, Foldable, Functor, Semigroup, Traversable,
    TypeConstructor, kind_marker,
};

/// A left value, a right value, or both.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum These<E, A> {
    /// Only a left value.
    Left(E),
    /// Only a right value.
    Right(A),
    /// A left and a right value.
    Both(E, A),
}

impl<E, A> These<E, A> {
    /// Eliminates all three cases into one type.
    pub fn fold<T, L, R, B>(self, on_left: L, on_right: R, on_both: B) -> T
    where
        L: FnOnce(E) -> T,
        R: FnOnce(A) -> T,
        B: FnOnce(E, A) -> T,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
            Self::Both(left, right) => on_both(left, right),
        }
    }

    /// Returns `true` for `Left` only.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right` only.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for `Both`.
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    /// The left value of `Left` or `Both`.
    pub fn get_left(self) -> Option<E> {
        match self {
            Self::Left(left) | Self::Both(left, _) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// The right value of `Right` or `Both`.
    pub fn get_right(self) -> Option<A> {
        match self {
            Self::Right(right) | Self::Both(_, right) => Some(right),
            Self::Left(_) => None,
        }
    }

    /// The left value of a `Left`, but not of a `Both`.
    pub fn get_left_only(self) -> Option<E> {
        match self {
            Self::Left(left) => Some(left),
            _ => None,
        }
    }

    /// The right value of a `Right`, but not of a `Both`.
    pub fn get_right_only(self) -> Option<A> {
        match self {
            Self::Right(right) => Some(right),
            _ => None,
        }
    }

    /// `Left(left)`, or `Both` when a right value is present.
    pub fn left_or_both(left: E, right: Option<A>) -> Self {
        match right {
            Some(right) => Self::Both(left, right),
            None => Self::Left(left),
        }
    }

    /// `Right(right)`, or `Both` when a left value is present.
    pub fn right_or_both(right: A, left: Option<E>) -> Self {
        match left {
            Some(left) => Self::Both(left, right),
            None => Self::Right(right),
        }
    }

    /// Builds a value from two options; `None` when both are absent.
    pub fn from_options(left: Option<E>, right: Option<A>) -> Option<Self> {
        match (left, right) {
            (Some(left), Some(right)) => Some(Self::Both(left, right)),
            (Some(left), None) => Some(Self::Left(left)),
            (None, Some(right)) => Some(Self::Right(right)),
            (None, None) => None,
        }
    }

    /// Both sides as a pair, filling a missing side with its default.
    pub fn to_tuple(self, default_left: E, default_right: A) -> (E, A) {
        match self {
            Self::Left(left) => (left, default_right),
            Self::Right(right) => (default_left, right),
            Self::Both(left, right) => (left, right),
        }
    }

    /// Exchanges the sides.
    pub fn swap(self) -> These<A, E> {
        match self {
            Self::Left(left) => These::Right(left),
            Self::Right(right) => These::Left(right),
            Self::Both(left, right) => These::Both(right, left),
        }
    }

    /// Maps the right value.
    pub fn map<B, F>(self, function: F) -> These<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.bimap(|left| left, function)
    }
}

impl<E: Semigroup, A> These<E, A> {
    /// Sequences a dependent computation, accumulating left values.
    pub fn and_then<B, F>(self, function: F) -> These<E, B>
    where
        F: FnOnce(A) -> These<E, B>,
    {
        match self {
            Self::Left(left) => These::Left(left),
            Self::Right(right) => function(right),
            Self::Both(left, right) => match function(right) {
                These::Left(next) => These::Left(left.combine(next)),
                These::Right(next) => These::Both(left, next),
                These::Both(next_left, next) => These::Both(left.combine(next_left), next),
            },
        }
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for These<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(left) => formatter.debug_tuple("Left").field(left).finish(),
            Self::Right(right) => formatter.debug_tuple("Right").field(right).finish(),
            Self::Both(left, right) => formatter
                .debug_tuple("Both")
                .field(left)
                .field(right)
                .finish(),
        }
    }
}

impl<E, A> Bifunctor<E, A> for These<E, A> {
    type Target<C, D> = These<C, D>;

    fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> These<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        match self {
            Self::Left(left) => These::Left(left_function(left)),
            Self::Right(right) => These::Right(right_function(right)),
            Self::Both(left, right) => These::Both(left_function(left), right_function(right)),
        }
    }
}

/// Combines pairwise by side. A side missing on one operand is taken from
/// the other unchanged; the result is `Both` when both sides end up present.
impl<E: Semigroup, A: Semigroup> Semigroup for These<E, A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Left(x), Self::Left(y)) => Self::Left(x.combine(y)),
            (Self::Left(x), Self::Right(y)) | (Self::Right(y), Self::Left(x)) => Self::Both(x, y),
            (Self::Left(x), Self::Both(y, b)) => Self::Both(x.combine(y), b),
            (Self::Both(x, a), Self::Left(y)) => Self::Both(x.combine(y), a),
            (Self::Right(a), Self::Right(b)) => Self::Right(a.combine(b)),
            (Self::Right(a), Self::Both(y, b)) => Self::Both(y, a.combine(b)),
            (Self::Both(x, a), Self::Right(b)) => Self::Both(x, a.combine(b)),
            (Self::Both(x, a), Self::Both(y, b)) => Self::Both(x.combine(y), a.combine(b)),
        }
    }
}

kind_marker! {
    /// Kind marker for `These<E, _>`.
    pub struct TheseK<E>;
}

impl<E: 'static> TypeConstructor for TheseK<E> {
    type Of<A> = These<E, A>;
}

impl<E: 'static> Functor for TheseK<E> {
    #[inline]
    fn map<A, B, F>(fa: These<E, A>, function: F) -> These<E, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<E: Semigroup + 'static> Apply for TheseK<E> {
    /// Follows `chain`: a `Left` in `fa` discards `fb`.
    fn map2<A, B, C, F>(fa: These<E, A>, fb: These<E, B>, function: F) -> These<E, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        fa.and_then(move |a| fb.map(move |b| function(a, b)))
    }
}

impl<E: Semigroup + 'static> Applicative for TheseK<E> {
    #[inline]
    fn of<A: 'static>(value: A) -> These<E, A> {
        These::Right(value)
    }
}

impl<E: Semigroup + 'static> Chain for TheseK<E> {
    #[inline]
    fn chain<A, B, F>(fa: These<E, A>, function: F) -> These<E, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> These<E, B> + 'static,
    {
        fa.and_then(function)
    }
}

impl<E: 'static> Foldable for TheseK<E> {
    fn reduce<A, B, F>(fa: These<E, A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            These::Right(right) | These::Both(_, right) => function(initial, right),
            These::Left(_) => initial,
        }
    }

    fn reduce_right<A, B, F>(fa: These<E, A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match fa {
            These::Right(right) | These::Both(_, right) => function(right, initial),
            These::Left(_) => initial,
        }
    }
}

impl<E: 'static> Traversable for TheseK<E> {
    fn traverse<F, A, B, V>(_effect: F, ta: These<E, A>, mut visitor: V) -> F::Of<These<E, B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        match ta {
            These::Left(left) => F::of(These::Left(left)),
            These::Right(right) => F::map(visitor(right), These::Right),
            These::Both(left, right) => F::map2(F::of(left), visitor(right), These::Both),
        }
    }
}
