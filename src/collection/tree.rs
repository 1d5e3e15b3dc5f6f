//! Rose trees.
//!
//! A [`Tree`] is a value with an owned forest of subtrees. Its canonical
//! order is depth-first pre-order: a node's value comes before the values
//! of its forest, and subtrees are visited left to right.
//!
//! ```rust
//! use fp_contexts::collection::{Tree, TreeK};
//! use fp_contexts::typeclass::Foldable;
//!
//! let tree = Tree::make(1, vec![Tree::make(2, vec![Tree::of(3)]), Tree::of(4)]);
//! assert_eq!(TreeK::to_vec(tree.clone()), vec![1, 2, 3, 4]);
//! assert_eq!(tree.fold_tree(|value, children: Vec<i32>| value + children.iter().sum::<i32>()), 10);
//! ```

use std::fmt::{self, Write as _};

use crate::typeclass::{
    Applicative, Comonad, Extend, Foldable, Functor, Traversable, TypeConstructor, VecK,
    kind_marker,
};

/// A value with a forest of subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree<A> {
    /// The value at this node.
    pub value: A,
    /// The subtrees, left to right.
    pub forest: Vec<Tree<A>>,
}

/// A sequence of trees.
pub type Forest<A> = Vec<Tree<A>>;

impl<A> Tree<A> {
    /// Builds a node.
    #[inline]
    pub const fn make(value: A, forest: Forest<A>) -> Self {
        Self { value, forest }
    }

    /// A leaf.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::make(value, Vec::new())
    }

    /// Grows a tree from `seed`; `grow` returns a node value and the seeds
    /// of its children.
    pub fn unfold_tree<B, F>(seed: B, mut grow: F) -> Self
    where
        F: FnMut(B) -> (A, Vec<B>),
    {
        Self::unfold_with(seed, &mut grow)
    }

    /// Grows one tree per seed.
    pub fn unfold_forest<B, F>(seeds: Vec<B>, mut grow: F) -> Forest<A>
    where
        F: FnMut(B) -> (A, Vec<B>),
    {
        seeds
            .into_iter()
            .map(|seed| Self::unfold_with(seed, &mut grow))
            .collect()
    }

    fn unfold_with<B, F>(seed: B, grow: &mut F) -> Self
    where
        F: FnMut(B) -> (A, Vec<B>),
    {
        let (value, seeds) = grow(seed);
        let forest = seeds
            .into_iter()
            .map(|child| Self::unfold_with(child, grow))
            .collect();
        Self::make(value, forest)
    }

    /// Folds bottom-up: `function` receives a node's value and the results
    /// of its subtrees.
    pub fn fold_tree<B, F>(self, mut function: F) -> B
    where
        F: FnMut(A, Vec<B>) -> B,
    {
        self.fold_with(&mut function)
    }

    fn fold_with<B, F>(self, function: &mut F) -> B
    where
        F: FnMut(A, Vec<B>) -> B,
    {
        let children = self
            .forest
            .into_iter()
            .map(|child| child.fold_with(function))
            .collect();
        function(self.value, children)
    }

    /// Maps every value in pre-order.
    pub fn map<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        self.map_with(&mut function)
    }

    fn map_with<B, F>(self, function: &mut F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        let value = function(self.value);
        let forest = self
            .forest
            .into_iter()
            .map(|child| child.map_with(function))
            .collect();
        Tree::make(value, forest)
    }

    /// Replaces every value by a tree: the new node keeps the produced
    /// forest and then the substituted original subtrees.
    pub fn flat_map<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(A) -> Tree<B>,
    {
        self.flat_map_with(&mut function)
    }

    fn flat_map_with<B, F>(self, function: &mut F) -> Tree<B>
    where
        F: FnMut(A) -> Tree<B>,
    {
        let Tree { value, mut forest } = function(self.value);
        forest.extend(self.forest.into_iter().map(|child| child.flat_map_with(function)));
        Tree::make(value, forest)
    }

    /// Returns `true` if any node holds a value equal to `value`.
    pub fn elem(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.value == *value || self.forest.iter().any(|child| child.elem(value))
    }

    /// The number of nodes.
    pub fn size(&self) -> usize {
        1 + self.forest.iter().map(Self::size).sum::<usize>()
    }

    fn reduce_with<B, F>(self, initial: B, function: &mut F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        let accumulator = function(initial, self.value);
        self.forest
            .into_iter()
            .fold(accumulator, |accumulator, child| child.reduce_with(accumulator, function))
    }

    fn reduce_right_with<B, F>(self, initial: B, function: &mut F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        let accumulator = self
            .forest
            .into_iter()
            .rev()
            .fold(initial, |accumulator, child| child.reduce_right_with(accumulator, function));
        function(self.value, accumulator)
    }

    fn extend_with<B, F>(&self, function: &F) -> Tree<B>
    where
        F: Fn(&Self) -> B,
    {
        Tree::make(
            function(self),
            self.forest.iter().map(|child| child.extend_with(function)).collect(),
        )
    }
}

impl<A: fmt::Display> Tree<A> {
    /// Draws the tree with box-drawing characters, one node per line.
    ///
    /// ```rust
    /// use fp_contexts::collection::Tree;
    ///
    /// let tree = Tree::make("a", vec![Tree::of("b"), Tree::make("c", vec![Tree::of("d")])]);
    /// assert_eq!(tree.draw_tree(), "a\n├─ b\n└─ c\n   └─ d");
    /// ```
    pub fn draw_tree(&self) -> String {
        let mut drawing = self.value.to_string();
        draw_into(&mut drawing, "\n", &self.forest);
        drawing
    }
}

/// Draws every tree of `forest` below an implicit root.
pub fn draw_forest<A: fmt::Display>(forest: &[Tree<A>]) -> String {
    let mut drawing = String::new();
    draw_into(&mut drawing, "\n", forest);
    drawing
}

fn draw_into<A: fmt::Display>(drawing: &mut String, indentation: &str, forest: &[Tree<A>]) {
    let count = forest.len();
    for (index, tree) in forest.iter().enumerate() {
        let is_last = index + 1 == count;
        let branch = if is_last { '└' } else { '├' };
        let _ = write!(drawing, "{indentation}{branch}─ {}", tree.value);
        let rail = if count > 1 && !is_last { "│  " } else { "   " };
        draw_into(drawing, &format!("{indentation}{rail}"), &tree.forest);
    }
}

kind_marker! {
    /// Kind marker for [`Tree`].
    pub struct TreeK;
}

impl TypeConstructor for TreeK {
    type Of<A> = Tree<A>;
}

fn traverse_tree<F, A, B, V>(effect: F, tree: Tree<A>, visitor: &mut V) -> F::Of<Tree<B>>
where
    F: Applicative,
    A: 'static,
    B: 'static,
    V: FnMut(A) -> F::Of<B>,
{
    let value = visitor(tree.value);
    let forest = VecK::traverse(effect, tree.forest, |child: Tree<A>| {
        traverse_tree::<F, A, B, V>(effect, child, visitor)
    });
    F::map2(value, forest, |value: B, forest: Forest<B>| Tree::make(value, forest))
}

impl Functor for TreeK {
    #[inline]
    fn map<A, B, F>(fa: Tree<A>, function: F) -> Tree<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Foldable for TreeK {
    fn reduce<A, B, F>(fa: Tree<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.reduce_with(initial, &mut function)
    }

    fn reduce_right<A, B, F>(fa: Tree<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.reduce_right_with(initial, &mut function)
    }
}

impl Traversable for TreeK {
    fn traverse<F, A, B, V>(effect: F, ta: Tree<A>, mut visitor: V) -> F::Of<Tree<B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        traverse_tree(effect, ta, &mut visitor)
    }
}

impl Extend for TreeK {
    /// Applies `function` to every subtree.
    fn extend<A, B, F>(wa: Tree<A>, function: F) -> Tree<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(&Tree<A>) -> B + 'static,
    {
        wa.extend_with(&function)
    }
}

impl Comonad for TreeK {
    #[inline]
    fn extract<A>(wa: Tree<A>) -> A {
        wa.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionK, Sum};
    use rstest::rstest;

    fn sample() -> Tree<i32> {
        Tree::make(1, vec![Tree::make(2, vec![Tree::of(3)]), Tree::of(4)])
    }

    #[rstest]
    fn draws_nested_forests() {
        let tree = Tree::make(
            "a",
            vec![
                Tree::of("b"),
                Tree::of("c"),
                Tree::make("d", vec![Tree::of("e"), Tree::of("f")]),
            ],
        );
        assert_eq!(tree.draw_tree(), "a\n├─ b\n├─ c\n└─ d\n   ├─ e\n   └─ f");
        let nested = Tree::make("r", vec![Tree::make("x", vec![Tree::of("y")]), Tree::of("z")]);
        assert_eq!(nested.draw_tree(), "r\n├─ x\n│  └─ y\n└─ z");
        assert_eq!(draw_forest(&[Tree::of(1)]), "\n└─ 1");
    }

    #[rstest]
    fn folds_run_in_pre_order() {
        let visited = TreeK::reduce(sample(), Vec::new(), |mut acc: Vec<i32>, n| {
            acc.push(n);
            acc
        });
        assert_eq!(visited, vec![1, 2, 3, 4]);
        let reversed = TreeK::reduce_right(sample(), Vec::new(), |n, mut acc: Vec<i32>| {
            acc.push(n);
            acc
        });
        assert_eq!(reversed, vec![4, 3, 2, 1]);
        assert_eq!(TreeK::fold_map(sample(), Sum::new), Sum::new(10));
    }

    #[rstest]
    fn fold_tree_is_a_catamorphism() {
        let depth = sample().fold_tree(|_, depths: Vec<usize>| 1 + depths.into_iter().max().unwrap_or(0));
        assert_eq!(depth, 3);
        let leaves = sample().fold_tree(|_, counts: Vec<usize>| if counts.is_empty() { 1 } else { counts.iter().sum() });
        assert_eq!(leaves, 2);
    }

    #[rstest]
    fn traversal_visits_values_before_children() {
        let mut order = Vec::new();
        let result = TreeK::traverse(OptionK, sample(), |n: i32| {
            order.push(n);
            Some(n * 10)
        });
        assert_eq!(order, vec![1, 2, 3, 4]);
        assert_eq!(result, Some(sample().map(|n| n * 10)));
        assert_eq!(TreeK::traverse(OptionK, sample(), |n: i32| (n != 3).then_some(n)), None);
    }

    #[rstest]
    fn unfold_builds_from_seeds() {
        let tree = Tree::unfold_tree(1, |n: u32| (n, if n < 4 { vec![2 * n, 2 * n + 1] } else { vec![] }));
        assert_eq!(tree.size(), 7);
        assert!(tree.elem(&7));
        assert!(!tree.elem(&8));
        let forest = Tree::unfold_forest(vec![0, 1], |n: u8| (n, Vec::new()));
        assert_eq!(forest, vec![Tree::of(0), Tree::of(1)]);
    }

    #[rstest]
    fn extend_sees_each_subtree() {
        let sizes = TreeK::extend(sample(), |subtree: &Tree<i32>| subtree.size());
        assert_eq!(sizes, Tree::make(4, vec![Tree::make(2, vec![Tree::of(1)]), Tree::of(1)]));
        assert_eq!(TreeK::extract(sizes), 4);
    }

    #[rstest]
    fn flat_map_puts_new_children_first() {
        let tree = Tree::make(1, vec![Tree::of(2)]);
        let grown = tree.flat_map(|n| Tree::make(n, vec![Tree::of(n * 100)]));
        assert_eq!(
            grown,
            Tree::make(1, vec![Tree::of(100), Tree::make(2, vec![Tree::of(200)])])
        );
    }
}
