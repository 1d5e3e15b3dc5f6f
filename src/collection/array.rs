//! Array operations beyond the type classes.
//!
//! `VecK` gets its `Functor`, `Foldable`, `Traversable`, `Filterable` and
//! `Alt` instances in the type-class modules. This module adds the
//! sequencing helpers and the index-aware family, where every callback
//! also receives the element's position.
//!
//! ```rust
//! use fp_contexts::typeclass::{OptionK, VecK};
//!
//! let numbered = VecK::map_with_index(vec!["a", "b"], |index, s| format!("{index}{s}"));
//! assert_eq!(numbered, vec!["0a", "1b"]);
//!
//! let checked = VecK::traverse_with_index(OptionK, vec![3, 4], |index, n: usize| {
//!     (n > index).then_some(n - index)
//! });
//! assert_eq!(checked, Some(vec![3, 3]));
//! ```

use crate::control::Either;
use crate::typeclass::{Applicative, Monoid, Separated, VecK};

impl VecK {
    /// Maps every element to an array and concatenates the results.
    pub fn flat_map<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        fa.into_iter().flat_map(function).collect()
    }

    /// Concatenates nested arrays.
    pub fn flatten<A>(ffa: Vec<Vec<A>>) -> Vec<A> {
        ffa.into_iter().flatten().collect()
    }

    /// Maps with access to the position.
    pub fn map_with_index<A, B, F>(fa: Vec<A>, mut function: F) -> Vec<B>
    where
        F: FnMut(usize, A) -> B,
    {
        fa.into_iter()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect()
    }

    /// Left fold with access to the position.
    pub fn reduce_with_index<A, B, F>(fa: Vec<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(usize, B, A) -> B,
    {
        fa.into_iter()
            .enumerate()
            .fold(initial, |accumulator, (index, element)| {
                function(index, accumulator, element)
            })
    }

    /// Right fold with access to the position.
    pub fn reduce_right_with_index<A, B, F>(fa: Vec<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(usize, A, B) -> B,
    {
        fa.into_iter()
            .enumerate()
            .rev()
            .fold(initial, |accumulator, (index, element)| {
                function(index, element, accumulator)
            })
    }

    /// `fold_map` with access to the position.
    pub fn fold_map_with_index<A, M, F>(fa: Vec<A>, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(usize, A) -> M,
    {
        Self::reduce_with_index(fa, M::empty(), |index, accumulator, element| {
            accumulator.combine(function(index, element))
        })
    }

    /// `traverse` with access to the position.
    pub fn traverse_with_index<F, A, B, V>(_effect: F, fa: Vec<A>, mut visitor: V) -> F::Of<Vec<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(usize, A) -> F::Of<B>,
    {
        let capacity = fa.len();
        fa.into_iter().enumerate().fold(
            F::of(Vec::with_capacity(capacity)),
            |accumulator, (index, element)| {
                F::map2(accumulator, visitor(index, element), |mut elements: Vec<B>, value: B| {
                    elements.push(value);
                    elements
                })
            },
        )
    }

    /// `filter_map` with access to the position.
    pub fn filter_map_with_index<A, B, F>(fa: Vec<A>, mut function: F) -> Vec<B>
    where
        F: FnMut(usize, A) -> Option<B>,
    {
        fa.into_iter()
            .enumerate()
            .filter_map(|(index, element)| function(index, element))
            .collect()
    }

    /// Keeps the elements whose position and value satisfy `predicate`.
    pub fn filter_with_index<A, P>(fa: Vec<A>, mut predicate: P) -> Vec<A>
    where
        P: FnMut(usize, &A) -> bool,
    {
        Self::filter_map_with_index(fa, |index, element| {
            predicate(index, &element).then_some(element)
        })
    }

    /// `partition_map` with access to the position.
    pub fn partition_map_with_index<A, B, C, F>(fa: Vec<A>, mut function: F) -> Separated<Vec<B>, Vec<C>>
    where
        F: FnMut(usize, A) -> Either<B, C>,
    {
        Self::reduce_with_index(fa, Separated::default(), |index, mut halves: Separated<Vec<B>, Vec<C>>, element| {
            match function(index, element) {
                Either::Left(left) => halves.left.push(left),
                Either::Right(right) => halves.right.push(right),
            }
            halves
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionK, Sum};
    use rstest::rstest;

    #[rstest]
    fn flat_map_concatenates_in_order() {
        let repeated = VecK::flat_map(vec![1, 2, 3], |n: usize| vec![n; n]);
        assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
        assert_eq!(VecK::flatten(vec![vec!['a'], vec![], vec!['b']]), vec!['a', 'b']);
    }

    #[rstest]
    fn right_fold_visits_last_index_first() {
        let visited = VecK::reduce_right_with_index(vec!['a', 'b', 'c'], String::new(), |index, c, mut acc: String| {
            acc.push_str(&format!("{index}{c}"));
            acc
        });
        assert_eq!(visited, "2c1b0a");
    }

    #[rstest]
    fn fold_map_with_index_weights_by_position() {
        let weighted: Sum<usize> = VecK::fold_map_with_index(vec![5, 5, 5], |index, n: usize| Sum::new(index * n));
        assert_eq!(weighted, Sum::new(15));
    }

    #[rstest]
    #[case(vec![1, 2, 3], Some(vec![1, 3, 5]))]
    #[case(vec![1, 0, 3], None)]
    #[case(vec![], Some(vec![]))]
    fn traverse_with_index_fails_on_any_zero(#[case] input: Vec<usize>, #[case] expected: Option<Vec<usize>>) {
        let result = VecK::traverse_with_index(OptionK, input, |index, n: usize| (n != 0).then_some(n + index));
        assert_eq!(result, expected);
    }

    #[rstest]
    fn filter_and_partition_see_positions() {
        assert_eq!(VecK::filter_with_index(vec!['a', 'b', 'c', 'd'], |index, _| index % 2 == 0), vec!['a', 'c']);
        let halves = VecK::partition_map_with_index(vec![10, 20, 30], |index, n: i32| {
            if index == 1 { Either::Left(n) } else { Either::Right(n.to_string()) }
        });
        assert_eq!(halves.left, vec![20]);
        assert_eq!(halves.right, vec!["10".to_string(), "30".to_string()]);
    }
}
