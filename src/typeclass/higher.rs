//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module works around that with *kind markers*: zero-sized types that
//! stand for a constructor and name the applied type through a generic
//! associated type.
//!
//! ```text
//! OptionK::Of<i32>        == Option<i32>
//! ResultK<String>::Of<u8> == Result<u8, String>
//! ```
//!
//! A marker is also the *capability descriptor* for its constructor. The
//! type-class traits (`Functor`, `Applicative`, `Traversable`, ...) are
//! implemented on markers, and generic algorithms that need to be told which
//! effect to use take the marker as an ordinary value argument:
//!
//! ```rust
//! use fp_contexts::typeclass::{OptionK, Traversable, VecK};
//!
//! let halves = VecK::traverse(OptionK, vec![2, 4, 6], |n: i32| {
//!     (n % 2 == 0).then_some(n / 2)
//! });
//! assert_eq!(halves, Some(vec![1, 2, 3]));
//! ```
//!
//! Markers are `Copy`, `Send` and `Sync` whatever their parameters, so a
//! descriptor can be shared freely between call sites.

/// A type constructor, identified by a zero-sized marker type.
///
/// `Of<A>` is the constructor applied to `A`. Implementations must be
/// parametric: `Of<A>` may not inspect `A` beyond storing it.
///
/// # Example
///
/// ```rust
/// use fp_contexts::typeclass::{OptionK, TypeConstructor};
///
/// fn absent<F: TypeConstructor>() -> F::Of<String>
/// where
///     F::Of<String>: Default,
/// {
///     Default::default()
/// }
///
/// assert_eq!(absent::<OptionK>(), None);
/// ```
pub trait TypeConstructor: Copy + 'static {
    /// The constructor applied to `A`.
    type Of<A>;
}

/// Declares a kind marker.
///
/// Markers without parameters derive their traits. Markers with parameters
/// hold `PhantomData<fn() -> (..)>` and get hand-written impls so that
/// `Clone`, `Copy`, `Default` and `Debug` never depend on the parameters.
macro_rules! kind_marker {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// Returns the descriptor value.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis struct $name:ident<$($param:ident),+>;) => {
        $(#[$meta])*
        $vis struct $name<$($param),+>(::core::marker::PhantomData<fn() -> ($($param,)+)>);

        impl<$($param),+> $name<$($param),+> {
            /// Returns the descriptor value.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self(::core::marker::PhantomData)
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> Default for $name<$($param),+> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param),+> ::core::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

pub(crate) use kind_marker;

// =============================================================================
// Standard Library Type Markers
// =============================================================================

kind_marker! {
    /// Kind marker for `Option<_>`.
    pub struct OptionK;
}

kind_marker! {
    /// Kind marker for `Result<_, E>` with short-circuiting semantics.
    pub struct ResultK<E>;
}

kind_marker! {
    /// Kind marker for `Vec<_>`, the array container.
    pub struct VecK;
}

impl TypeConstructor for OptionK {
    type Of<A> = Option<A>;
}

impl<E: 'static> TypeConstructor for ResultK<E> {
    type Of<A> = Result<A, E>;
}

impl TypeConstructor for VecK {
    type Of<A> = Vec<A>;
}
