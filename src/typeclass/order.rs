//! Total orders as descriptors.
//!
//! An [`Order`] is a zero-sized marker naming a comparison. Ordered maps
//! store their order in their type, so two maps with different orders can
//! never be mixed up, and sorting helpers take the order as a value.
//!
//! ```rust
//! use fp_contexts::typeclass::{Natural, Order, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural::compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed::<Natural>::compare(&1, &2), Ordering::Greater);
//! ```
//!
//! Orders must be total. A comparator that is not gives unspecified
//! canonical orders.

use std::cmp::Ordering;

use super::higher::kind_marker;

/// A total order over `A`.
pub trait Order<A: ?Sized>: Copy + 'static {
    /// Compares two values.
    fn compare(left: &A, right: &A) -> Ordering;

    /// Returns `true` when the values compare equal.
    fn equals(left: &A, right: &A) -> bool {
        Self::compare(left, right) == Ordering::Equal
    }

    /// Returns the smaller value, `left` on ties.
    fn min<'a>(left: &'a A, right: &'a A) -> &'a A {
        if Self::compare(left, right) == Ordering::Greater {
            right
        } else {
            left
        }
    }

    /// Returns the larger value, `left` on ties.
    fn max<'a>(left: &'a A, right: &'a A) -> &'a A {
        if Self::compare(left, right) == Ordering::Less {
            right
        } else {
            left
        }
    }
}

kind_marker! {
    /// The order given by `Ord`.
    pub struct Natural;
}

kind_marker! {
    /// The opposite of the order `O`.
    pub struct Reversed<O>;
}

impl<A: Ord + ?Sized> Order<A> for Natural {
    #[inline]
    fn compare(left: &A, right: &A) -> Ordering {
        left.cmp(right)
    }
}

impl<A: ?Sized, O: Order<A>> Order<A> for Reversed<O> {
    #[inline]
    fn compare(left: &A, right: &A) -> Ordering {
        O::compare(left, right).reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy)]
    struct ByLength;

    impl Order<str> for ByLength {
        fn compare(left: &str, right: &str) -> Ordering {
            left.len().cmp(&right.len())
        }
    }

    #[rstest]
    #[case("a", "bb", Ordering::Less)]
    #[case("ccc", "bb", Ordering::Greater)]
    #[case("aa", "bb", Ordering::Equal)]
    fn custom_order_compares_by_length(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(ByLength::compare(left, right), expected);
    }

    #[rstest]
    fn min_and_max_prefer_left_on_ties() {
        assert_eq!(ByLength::min("ab", "cd"), "ab");
        assert_eq!(ByLength::max("ab", "cd"), "ab");
        assert_eq!(<Natural as Order<i32>>::max(&3, &7), &7);
    }

    #[rstest]
    fn reversed_twice_is_natural() {
        assert_eq!(
            Reversed::<Reversed<Natural>>::compare(&1, &2),
            Natural::compare(&1, &2)
        );
        assert!(Reversed::<Natural>::equals(&5, &5));
    }
}
