//! Monoid type class - semigroups with an identity element.
//!
//! `fold_map` needs a monoid so that an empty container still has a result,
//! and `ConstK<M>` needs one to be an applicative.
//!
//! # Laws
//!
//! ```text
//! M::empty().combine(a) == a
//! a.combine(M::empty()) == a
//! ```

use std::collections::BTreeMap;
use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use fp_contexts::typeclass::{Monoid, Sum};
///
/// assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
/// assert_eq!(String::combine_all(Vec::new()), "");
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines all values left to right, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($number:ty => $one:expr),+ $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_monoid! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
}

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_laws_hold_for_string() {
        let value = "text".to_string();
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    #[case(vec![], 1)]
    #[case(vec![2, 3, 4], 24)]
    fn product_combine_all(#[case] input: Vec<i64>, #[case] expected: i64) {
        let product = Product::combine_all(input.into_iter().map(Product::new));
        assert_eq!(product, Product::new(expected));
    }

    #[rstest]
    fn bounded_identities() {
        assert_eq!(Max::<i32>::empty(), Max::new(i32::MIN));
        assert_eq!(Min::<u8>::empty(), Min::new(u8::MAX));
        assert_eq!(Max::combine_all(vec![Max::new(3), Max::new(-1)]), Max::new(3));
    }

    #[rstest]
    fn pair_identity_is_componentwise() {
        let empty: (String, Sum<i32>) = Monoid::empty();
        assert_eq!(empty, (String::new(), Sum::new(0)));
    }
}
