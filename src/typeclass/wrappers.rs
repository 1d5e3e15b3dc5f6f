//! Newtype wrappers selecting a `Semigroup`/`Monoid` for a plain type.
//!
//! A number can be accumulated by addition, multiplication, maximum or
//! minimum, and any value can keep the first or the last occurrence. Each
//! wrapper picks one of those combines.
//!
//! | Wrapper | `combine` | `empty` |
//! |---|---|---|
//! | [`Sum`] | `+` | `0` |
//! | [`Product`] | `*` | `1` |
//! | [`Max`] | `max` | [`Bounded::MIN_VALUE`] |
//! | [`Min`] | `min` | [`Bounded::MAX_VALUE`] |
//! | [`First`] | left operand | none |
//! | [`Last`] | right operand | none |

macro_rules! combine_wrapper {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $name<A>(pub A);

            impl<A> $name<A> {
                /// Wraps `value`.
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Returns the wrapped value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }
            }

            impl<A> From<A> for $name<A> {
                fn from(value: A) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

combine_wrapper! {
    /// Accumulates by addition.
    ///
    /// ```rust
    /// use fp_contexts::typeclass::{Foldable, Sum, VecK};
    ///
    /// assert_eq!(VecK::fold_map(vec![1, 2, 3], Sum::new), Sum::new(6));
    /// ```
    Sum,
    /// Accumulates by multiplication.
    Product,
    /// Keeps the largest value.
    Max,
    /// Keeps the smallest value.
    Min,
    /// Keeps the leftmost value.
    First,
    /// Keeps the rightmost value.
    Last,
}

/// Types with a least and a greatest value, giving `Max` and `Min` an
/// identity.
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;

    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_consts {
    ($($number:ty),+ $(,)?) => {
        $(
            impl Bounded for $number {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )+
    };
}

bounded_by_consts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wrappers_round_trip_their_value() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(Last::from("x").into_inner(), "x");
    }

    #[rstest]
    #[case(i8::MIN_VALUE == i8::MIN)]
    #[case(u64::MAX_VALUE == u64::MAX)]
    #[case(char::MIN_VALUE == '\0')]
    #[case(bool::MAX_VALUE)]
    fn bounded_constants_match_std(#[case] holds: bool) {
        assert!(holds);
    }
}
