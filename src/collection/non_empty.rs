//! Non-empty sequences.
//!
//! [`NonEmptyVec`] keeps its first element apart from the rest, so the
//! type guarantees at least one element. Operations that can never empty
//! the sequence return a `NonEmptyVec`; operations that might (filtering,
//! building from a `Vec`) or that take an index return an `Option`.
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::collection::{NonEmptyK, NonEmptyVec};
//! use fp_contexts::typeclass::Extend;
//!
//! let numbers = NonEmptyVec::new(1, vec![2, 3, 4]);
//! let suffix_sums = NonEmptyK::extend(numbers, |suffix: &NonEmptyVec<i32>| suffix.iter().sum::<i32>());
//! assert_eq!(suffix_sums.into_vec(), vec![10, 9, 7, 4]);
//!
//! assert!(NonEmptyVec::<i32>::from_vec(Vec::new()).is_none());
//! ```

use crate::control::Either;
use crate::typeclass::{
    Alt, Applicative, Comonad, Extend, Foldable, Functor, Monoid, Order, Semigroup, Separated,
    Traversable, TypeConstructor, VecK, kind_marker,
};

use super::record::Record;

/// A sequence holding at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Builds a sequence from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// A one-element sequence.
    #[inline]
    pub const fn of(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Prepends `head` to a possibly empty `Vec`.
    #[inline]
    pub const fn cons(head: A, tail: Vec<A>) -> Self {
        Self::new(head, tail)
    }

    /// Appends `last` to a possibly empty `Vec`.
    pub fn snoc(init: Vec<A>, last: A) -> Self {
        let mut elements = init.into_iter();
        match elements.next() {
            Some(head) => {
                let mut tail: Vec<A> = elements.collect();
                tail.push(last);
                Self::new(head, tail)
            }
            None => Self::of(last),
        }
    }

    /// Converts a `Vec`, or `None` if it is empty.
    pub fn from_vec(elements: Vec<A>) -> Option<Self> {
        let mut elements = elements.into_iter();
        let head = elements.next()?;
        Some(Self::new(head, elements.collect()))
    }

    /// Rebuilds from a vector that holds at least one element.
    fn from_filled(mut elements: Vec<A>) -> Self {
        let head = elements.remove(0);
        Self::new(head, elements)
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element.
    #[inline]
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Every element before the last, possibly none.
    pub fn init(self) -> Vec<A> {
        let mut elements = self.into_vec();
        elements.pop();
        elements
    }

    /// The number of elements, at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Appends an element.
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    /// Converts into a `Vec`.
    pub fn into_vec(self) -> Vec<A> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }

    /// Appends every element of `other`.
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Reverses the order of the elements.
    pub fn reverse(self) -> Self {
        let mut elements = self.into_vec();
        elements.reverse();
        Self::from_filled(elements)
    }

    /// Sorts stably by `O`.
    pub fn sort<O: Order<A>>(self, _order: O) -> Self {
        let mut elements = self.into_vec();
        elements.sort_by(O::compare);
        Self::from_filled(elements)
    }

    /// The least element by `O`; the earliest one on ties.
    pub fn min<O: Order<A>>(&self, _order: O) -> &A {
        self.tail.iter().fold(&self.head, |least, element| O::min(least, element))
    }

    /// The greatest element by `O`; the earliest one on ties.
    pub fn max<O: Order<A>>(&self, _order: O) -> &A {
        self.tail.iter().fold(&self.head, |greatest, element| O::max(greatest, element))
    }

    /// Maps every element.
    pub fn map<B, F>(self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        let head = function(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Maps with access to the position.
    pub fn map_with_index<B, F>(self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(usize, A) -> B,
    {
        let head = function(0, self.head);
        let tail = self
            .tail
            .into_iter()
            .enumerate()
            .map(|(index, element)| function(index + 1, element))
            .collect();
        NonEmptyVec::new(head, tail)
    }

    /// Left fold with access to the position.
    pub fn reduce_with_index<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(usize, B, A) -> B,
    {
        VecK::reduce_with_index(self.into_vec(), initial, function)
    }

    /// Right fold with access to the position.
    pub fn reduce_right_with_index<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(usize, A, B) -> B,
    {
        VecK::reduce_right_with_index(self.into_vec(), initial, function)
    }

    /// `fold_map` with access to the position.
    pub fn fold_map_with_index<M, F>(self, function: F) -> M
    where
        M: Monoid,
        F: FnMut(usize, A) -> M,
    {
        VecK::fold_map_with_index(self.into_vec(), function)
    }

    /// Maps into a semigroup and combines, without an identity.
    pub fn fold_map_semigroup<S, F>(self, mut function: F) -> S
    where
        S: Semigroup,
        F: FnMut(A) -> S,
    {
        let first = function(self.head);
        self.tail
            .into_iter()
            .fold(first, |accumulator, element| accumulator.combine(function(element)))
    }

    /// `filter_map` with access to the position; `None` if nothing is kept.
    pub fn filter_map_with_index<B, F>(self, function: F) -> Option<NonEmptyVec<B>>
    where
        F: FnMut(usize, A) -> Option<B>,
    {
        NonEmptyVec::from_vec(VecK::filter_map_with_index(self.into_vec(), function))
    }

    /// `partition_map` with access to the position.
    pub fn partition_map_with_index<B, C, F>(self, function: F) -> Separated<Vec<B>, Vec<C>>
    where
        F: FnMut(usize, A) -> Either<B, C>,
    {
        VecK::partition_map_with_index(self.into_vec(), function)
    }

    /// Keeps the elements satisfying `predicate`; `None` if none do.
    pub fn filter<P>(self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&A) -> bool,
    {
        Self::from_vec(self.into_iter().filter(|element| predicate(element)).collect())
    }

    /// Keeps the elements whose position and value satisfy `predicate`.
    pub fn filter_with_index<P>(self, predicate: P) -> Option<Self>
    where
        P: FnMut(usize, &A) -> bool,
    {
        Self::from_vec(VecK::filter_with_index(self.into_vec(), predicate))
    }

    /// Inserts `value` before position `index`; `index == len()` appends.
    pub fn insert_at(self, index: usize, value: A) -> Option<Self> {
        if index > self.len() {
            return None;
        }
        let mut elements = self.into_vec();
        elements.insert(index, value);
        Some(Self::from_filled(elements))
    }

    /// Replaces the element at `index`.
    pub fn update_at(self, index: usize, value: A) -> Option<Self> {
        self.modify_at(index, move |_| value)
    }

    /// Transforms the element at `index`.
    pub fn modify_at<F>(self, index: usize, function: F) -> Option<Self>
    where
        F: FnOnce(A) -> A,
    {
        if index >= self.len() {
            return None;
        }
        let mut function = Some(function);
        Some(self.map_with_index(|position, element| {
            if position == index {
                if let Some(modify) = function.take() {
                    return modify(element);
                }
            }
            element
        }))
    }

    /// Pairs elements by position, stopping at the shorter sequence.
    pub fn zip<B>(self, other: NonEmptyVec<B>) -> NonEmptyVec<(A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines elements by position, stopping at the shorter sequence.
    pub fn zip_with<B, C, F>(self, other: NonEmptyVec<B>, mut function: F) -> NonEmptyVec<C>
    where
        F: FnMut(A, B) -> C,
    {
        let head = function(self.head, other.head);
        let tail = self
            .tail
            .into_iter()
            .zip(other.tail)
            .map(|(a, b)| function(a, b))
            .collect();
        NonEmptyVec::new(head, tail)
    }

    /// Maps every element to a sequence and concatenates the results.
    pub fn flat_map<B, F>(self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> NonEmptyVec<B>,
    {
        let first = function(self.head);
        self.tail
            .into_iter()
            .fold(first, |accumulator, element| accumulator.concat(function(element)))
    }

    /// Applies every function to every value, functions outermost.
    pub fn ap<B, C>(self, values: &NonEmptyVec<B>) -> NonEmptyVec<C>
    where
        A: Fn(B) -> C,
        B: Clone,
    {
        self.flat_map(|function| values.clone().map(|value| function(value)))
    }

    /// Splits runs of equal adjacent elements into groups.
    pub fn group(self) -> NonEmptyVec<NonEmptyVec<A>>
    where
        A: PartialEq,
    {
        self.group_with(|first, element| first == element)
    }

    /// Sorts by `O`, then groups elements equal under `O`.
    pub fn group_sort<O: Order<A>>(self, order: O) -> NonEmptyVec<NonEmptyVec<A>> {
        self.sort(order).group_with(O::equals)
    }

    /// Groups elements by a string key, keeping their relative order.
    pub fn group_by<F>(self, mut key_of: F) -> Record<NonEmptyVec<A>>
    where
        F: FnMut(&A) -> String,
    {
        self.into_iter().fold(Record::new(), |mut groups, element| {
            let key = key_of(&element);
            match groups.get_mut(&key) {
                Some(group) => group.push(element),
                None => {
                    groups.insert(key, NonEmptyVec::of(element));
                }
            }
            groups
        })
    }

    fn group_with<F>(self, mut same: F) -> NonEmptyVec<NonEmptyVec<A>>
    where
        F: FnMut(&A, &A) -> bool,
    {
        let mut finished = Vec::new();
        let mut current = NonEmptyVec::of(self.head);
        for element in self.tail {
            if same(current.head(), &element) {
                current.push(element);
            } else {
                finished.push(std::mem::replace(&mut current, NonEmptyVec::of(element)));
            }
        }
        NonEmptyVec::snoc(finished, current)
    }
}

impl<A, B> NonEmptyVec<(A, B)> {
    /// Splits a sequence of pairs.
    pub fn unzip(self) -> (NonEmptyVec<A>, NonEmptyVec<B>) {
        let (first, second) = self.head;
        let (firsts, seconds) = self.tail.into_iter().unzip();
        (NonEmptyVec::new(first, firsts), NonEmptyVec::new(second, seconds))
    }
}

impl<A> NonEmptyVec<NonEmptyVec<A>> {
    /// Concatenates nested sequences.
    pub fn flatten(self) -> NonEmptyVec<A> {
        self.flat_map(|inner| inner)
    }
}

impl<A: Semigroup> NonEmptyVec<A> {
    /// Combines the elements left to right.
    pub fn fold(self) -> A {
        self.fold_map_semigroup(|element| element)
    }
}

impl<A> Semigroup for NonEmptyVec<A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::iter::Chain<std::iter::Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(elements: NonEmptyVec<A>) -> Self {
        elements.into_vec()
    }
}

kind_marker! {
    /// Kind marker for [`NonEmptyVec`].
    pub struct NonEmptyK;
}

impl TypeConstructor for NonEmptyK {
    type Of<A> = NonEmptyVec<A>;
}

impl NonEmptyK {
    /// `traverse` with access to the position.
    pub fn traverse_with_index<F, A, B, V>(_effect: F, ta: NonEmptyVec<A>, mut visitor: V) -> F::Of<NonEmptyVec<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(usize, A) -> F::Of<B>,
    {
        let NonEmptyVec { head, tail } = ta;
        let capacity = tail.len();
        let first = F::map(visitor(0, head), move |value: B| {
            NonEmptyVec::new(value, Vec::with_capacity(capacity))
        });
        tail.into_iter()
            .enumerate()
            .fold(first, |accumulator, (index, element)| {
                F::map2(accumulator, visitor(index + 1, element), |mut elements: NonEmptyVec<B>, value: B| {
                    elements.push(value);
                    elements
                })
            })
    }
}

impl Functor for NonEmptyK {
    #[inline]
    fn map<A, B, F>(fa: NonEmptyVec<A>, function: F) -> NonEmptyVec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Foldable for NonEmptyK {
    fn reduce<A, B, F>(fa: NonEmptyVec<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn reduce_right<A, B, F>(fa: NonEmptyVec<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.into_vec()
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }
}

impl Traversable for NonEmptyK {
    fn traverse<F, A, B, V>(effect: F, ta: NonEmptyVec<A>, mut visitor: V) -> F::Of<NonEmptyVec<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        Self::traverse_with_index(effect, ta, |_, element| visitor(element))
    }
}

impl Alt for NonEmptyK {
    /// Concatenation: both sides are always kept.
    fn alt<A, F>(fa: NonEmptyVec<A>, that: F) -> NonEmptyVec<A>
    where
        A: 'static,
        F: FnOnce() -> NonEmptyVec<A> + 'static,
    {
        fa.concat(that())
    }
}

impl Extend for NonEmptyK {
    /// Applies `function` to every suffix, longest first.
    fn extend<A, B, F>(wa: NonEmptyVec<A>, function: F) -> NonEmptyVec<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(&NonEmptyVec<A>) -> B + 'static,
    {
        let first = function(&wa);
        let mut remaining: &[A] = &wa.tail;
        let mut rest = Vec::with_capacity(remaining.len());
        while let [head, suffix @ ..] = remaining {
            rest.push(function(&NonEmptyVec::new(head.clone(), suffix.to_vec())));
            remaining = suffix;
        }
        NonEmptyVec::new(first, rest)
    }
}

impl Comonad for NonEmptyK {
    #[inline]
    fn extract<A>(wa: NonEmptyVec<A>) -> A {
        wa.head
    }
}
