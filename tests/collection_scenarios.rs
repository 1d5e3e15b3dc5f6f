#![cfg(feature = "collection")]
//! Scenario tests for the collection kinds.
//!
//! Covers canonical traversal order, short-circuiting traversals, comonadic
//! `extend`, grouping and withering under the identity effect.

use std::cell::RefCell;
use std::rc::Rc;

use fp_contexts::collection::{
    NonEmptyK, NonEmptyVec, OrderedMap, OrderedMapK, Record, RecordK, Store, StoreK, Tree, TreeK,
    TupleK,
};
use fp_contexts::control::{Either, These};
use fp_contexts::typeclass::{
    Comonad, Extend, Foldable, Identity, IdentityK, Natural, OptionK, Reversed, Semigroup,
    Separated, Sum, Traversable, VecK, Witherable,
};
use rstest::rstest;

type Descending = OrderedMapK<i32, Reversed<Natural>>;

fn recorded<A: Clone + 'static>() -> (Rc<RefCell<Vec<A>>>, impl FnMut(A) -> Option<A>) {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&visited);
    (visited, move |value: A| {
        log.borrow_mut().push(value.clone());
        Some(value)
    })
}

// =============================================================================
// Canonical Order
// =============================================================================

#[rstest]
#[case(vec![("b", 2), ("a", 1), ("c", 3)])]
#[case(vec![("c", 3), ("b", 2), ("a", 1)])]
#[case(vec![("a", 1), ("c", 3), ("b", 2)])]
fn record_visits_keys_lexicographically(#[case] entries: Vec<(&str, i32)>) {
    let (visited, visitor) = recorded::<i32>();
    let record = RecordK::from_entries(entries);

    let traversed = RecordK::traverse(OptionK, record.clone(), visitor);

    assert_eq!(traversed, Some(record.clone()));
    assert_eq!(*visited.borrow(), vec![1, 2, 3]);
    assert_eq!(RecordK::to_vec(record.clone()), vec![1, 2, 3]);
    assert_eq!(RecordK::fold_map(record, |n: i32| n.to_string()), "123");
}

#[rstest]
#[case(vec![(1, "one"), (3, "three"), (2, "two")])]
#[case(vec![(3, "three"), (2, "two"), (1, "one")])]
fn ordered_map_visits_keys_by_its_order(#[case] entries: Vec<(i32, &'static str)>) {
    let (visited, visitor) = recorded::<&'static str>();
    let map: OrderedMap<i32, &'static str, Reversed<Natural>> = OrderedMap::from_entries(entries);

    let traversed = Descending::traverse(OptionK, map.clone(), visitor);

    assert_eq!(traversed, Some(map.clone()));
    assert_eq!(*visited.borrow(), vec!["three", "two", "one"]);
    assert_eq!(Descending::reduce_right(map, String::new(), |word, text| text + word), "onetwothree");
}

#[rstest]
fn tree_visits_in_pre_order() {
    let (visited, visitor) = recorded::<char>();
    let tree = Tree::make('a', vec![Tree::make('b', vec![Tree::of('c')]), Tree::of('d')]);

    assert_eq!(TreeK::traverse(OptionK, tree.clone(), visitor), Some(tree.clone()));
    assert_eq!(*visited.borrow(), vec!['a', 'b', 'c', 'd']);
    assert_eq!(tree.draw_tree(), "a\n├─ b\n│  └─ c\n└─ d");
}

// =============================================================================
// Short-Circuiting
// =============================================================================

#[rstest]
fn record_traversal_failing_on_one_key_is_absent() {
    let record: Record<i32> = RecordK::from_entries([("a", 1), ("b", -2), ("c", 3)]);
    let original = record.clone();

    let traversed = RecordK::traverse(OptionK, record, |n: i32| (n > 0).then_some(n * 10));

    assert_eq!(traversed, None);
    assert_eq!(RecordK::lookup(&original, "b"), Some(&-2));
}

#[rstest]
fn non_empty_traversal_keeps_non_emptiness() {
    let values = NonEmptyVec::new(2, vec![4, 6]);
    let halved = NonEmptyK::traverse(OptionK, values, |n: i32| (n % 2 == 0).then_some(n / 2));
    assert_eq!(halved, Some(NonEmptyVec::new(1, vec![2, 3])));
}

// =============================================================================
// Comonads
// =============================================================================

#[rstest]
fn non_empty_extend_gives_running_suffix_sums() {
    let values = NonEmptyVec::new(1, vec![2, 3, 4]);
    let sums = NonEmptyK::extend(values, |suffix: &NonEmptyVec<i32>| suffix.iter().sum::<i32>());
    assert_eq!(sums.into_vec(), vec![10, 9, 7, 4]);
}

#[rstest]
fn tree_extend_sizes_every_subtree() {
    let tree = Tree::make(0, vec![Tree::make(0, vec![Tree::of(0)]), Tree::of(0)]);
    let sizes = TreeK::extend(tree, Tree::size);
    assert_eq!(TreeK::to_vec(sizes.clone()), vec![4, 2, 1, 1]);
    assert_eq!(TreeK::extract(sizes), 4);
}

#[rstest]
fn store_extend_sees_neighbours() {
    let store = Store::new(|position: i32| position * position, 3);
    let differences = StoreK::<i32>::extend(store, |focus: &Store<i32, i32>| {
        focus.peek(focus.position() + 1) - focus.extract_ref()
    });
    assert_eq!(StoreK::<i32>::extract(differences.clone()), 7);
    assert_eq!(StoreK::<i32>::extract(differences.seek(0)), 1);
}

#[rstest]
fn tuple_accumulator_extract_and_fold() {
    let pair = (5, "log");
    assert_eq!(TupleK::<&str>::extract(pair), 5);
    assert_eq!(TupleK::<&str>::reduce(pair, 1, |total, n| total + n), 6);
}

// =============================================================================
// Grouping and Withering
// =============================================================================

#[rstest]
#[case(vec![1, 2, 1, 1], vec![vec![1], vec![2], vec![1, 1]])]
#[case(vec![7], vec![vec![7]])]
#[case(vec![3, 3, 3], vec![vec![3, 3, 3]])]
fn group_splits_consecutive_runs(#[case] input: Vec<i32>, #[case] expected: Vec<Vec<i32>>) {
    let groups = NonEmptyVec::from_vec(input).map(|values| {
        values
            .group()
            .into_iter()
            .map(NonEmptyVec::into_vec)
            .collect::<Vec<_>>()
    });
    assert_eq!(groups, Some(expected));
}

#[rstest]
fn group_sort_collects_equal_elements() {
    let values = NonEmptyVec::new(1, vec![2, 1, 1]);
    let groups = values.group_sort(Natural);
    assert_eq!(
        groups.into_iter().map(NonEmptyVec::into_vec).collect::<Vec<_>>(),
        vec![vec![1, 1, 1], vec![2]]
    );
}

#[rstest]
fn wither_under_identity_filters() {
    let kept = VecK::wither(IdentityK, vec![1, 2, 3], |n: i32| Identity::new((n > 1).then_some(n)));
    assert_eq!(kept, Identity::new(vec![2, 3]));
}

#[rstest]
fn wilt_over_a_record_splits_by_key() {
    let record = RecordK::from_entries([("x", 1), ("y", 2), ("z", 3)]);
    let Separated { left, right } = RecordK::wilt(OptionK, record, |n: i32| {
        Some(if n == 2 { Either::Left(n) } else { Either::Right(n * 100) })
    })
    .unwrap_or_default();
    assert_eq!(RecordK::keys(&left), vec!["y"]);
    assert_eq!(right, RecordK::from_entries([("x", 100), ("z", 300)]));
}

// =============================================================================
// These Semigroup
// =============================================================================

#[rstest]
#[case(These::Left("a".to_string()), These::Right(Sum::new(2)), These::Both("a".to_string(), Sum::new(2)))]
#[case(
    These::Both("a".to_string(), Sum::new(3)),
    These::Both("b".to_string(), Sum::new(2)),
    These::Both("ab".to_string(), Sum::new(5))
)]
#[case(These::Left("a".to_string()), These::Left("b".to_string()), These::Left("ab".to_string()))]
fn these_semigroup_combines_by_side(
    #[case] first: These<String, Sum<i32>>,
    #[case] second: These<String, Sum<i32>>,
    #[case] expected: These<String, Sum<i32>>,
) {
    assert_eq!(first.combine(second), expected);
}
