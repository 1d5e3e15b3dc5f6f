//! `TheseT` - warnings and failures over another effect.
//!
//! `TheseT<M, E>` describes `M<These<E, A>>`. A `Both(e, a)` result is a
//! success that carries a warning `e`; `Left(e)` is a failure. Warnings
//! pile up through `E`'s [`Semigroup`] in both `map2` and `chain`:
//!
//! | first result | `f(a)` result  | `chain(first, f)`          |
//! |---|---|---|
//! | `Left(e)`    | not called     | `Left(e)`                  |
//! | `Right(a)`   | any `t`        | `t`                        |
//! | `Both(e, a)` | `Left(e2)`     | `Left(e ⋄ e2)`             |
//! | `Both(e, a)` | `Right(b)`     | `Both(e, b)`               |
//! | `Both(e, a)` | `Both(e2, b)`  | `Both(e ⋄ e2, b)`          |
//!
//! ```rust
//! use fp_contexts::control::These;
//! use fp_contexts::effect::TheseT;
//! use fp_contexts::typeclass::{Chain, OptionK};
//!
//! type Lenient = TheseT<OptionK, Vec<&'static str>>;
//!
//! let parsed = Lenient::chain(Lenient::both(vec!["trimmed"], " 42 ".trim()), |text| {
//!     Lenient::right(text.len())
//! });
//! assert_eq!(parsed, Some(These::Both(vec!["trimmed"], 2)));
//! ```

use crate::control::{These, TheseK};
use crate::typeclass::{Applicative, Apply, Bifunctor, Chain, Functor, Monad, Semigroup, TypeConstructor, kind_marker};

use super::composition::Compose;

kind_marker! {
    /// Kind marker for `M<These<E, _>>`.
    pub struct TheseT<M, E>;
}

impl<M: TypeConstructor, E: 'static> TypeConstructor for TheseT<M, E> {
    type Of<A> = M::Of<These<E, A>>;
}

// =============================================================================
// Constructors
// =============================================================================

impl<M: TypeConstructor, E: 'static> TheseT<M, E> {
    /// A plain success.
    #[inline]
    pub fn right<A: 'static>(value: A) -> M::Of<These<E, A>>
    where
        M: Applicative,
    {
        M::of(These::Right(value))
    }

    /// A failure.
    #[inline]
    pub fn left<A: 'static>(error: E) -> M::Of<These<E, A>>
    where
        M: Applicative,
    {
        M::of(These::Left(error))
    }

    /// A success with a warning.
    #[inline]
    pub fn both<A: 'static>(warning: E, value: A) -> M::Of<These<E, A>>
    where
        M: Applicative,
    {
        M::of(These::Both(warning, value))
    }

    /// Lifts an `M` computation as a plain success.
    pub fn right_m<A: 'static>(ma: M::Of<A>) -> M::Of<These<E, A>>
    where
        M: Functor,
    {
        M::map(ma, These::Right)
    }

    /// Lifts an `M` computation as a failure.
    pub fn left_m<A: 'static>(me: M::Of<E>) -> M::Of<These<E, A>>
    where
        M: Functor,
    {
        M::map(me, These::Left)
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<M: TypeConstructor, E: 'static> TheseT<M, E> {
    /// Maps both sides.
    pub fn bimap<A, B, E2, L, R>(fa: M::Of<These<E, A>>, on_left: L, on_right: R) -> M::Of<These<E2, B>>
    where
        M: Functor,
        A: 'static,
        B: 'static,
        E2: 'static,
        L: Fn(E) -> E2 + 'static,
        R: Fn(A) -> B + 'static,
    {
        M::map(fa, move |these: These<E, A>| these.bimap(&on_left, &on_right))
    }

    /// Maps the left side.
    pub fn map_left<A, E2, L>(fa: M::Of<These<E, A>>, function: L) -> M::Of<These<E2, A>>
    where
        M: Functor,
        A: 'static,
        E2: 'static,
        L: Fn(E) -> E2 + 'static,
    {
        M::map(fa, move |these: These<E, A>| these.map_left(&function))
    }

    /// Exchanges the sides.
    pub fn swap<A: 'static>(fa: M::Of<These<E, A>>) -> M::Of<These<A, E>>
    where
        M: Functor,
    {
        M::map(fa, These::swap)
    }

    /// Eliminates all three cases into `M`.
    pub fn fold<A, B, L, R, H>(fa: M::Of<These<E, A>>, on_left: L, on_right: R, on_both: H) -> M::Of<B>
    where
        M: Chain,
        A: 'static,
        B: 'static,
        L: FnOnce(E) -> M::Of<B> + 'static,
        R: FnOnce(A) -> M::Of<B> + 'static,
        H: FnOnce(E, A) -> M::Of<B> + 'static,
    {
        M::chain(fa, move |these: These<E, A>| these.fold(on_left, on_right, on_both))
    }

    /// Both sides as a pair, filling a missing side with its default.
    pub fn to_tuple<A: 'static>(fa: M::Of<These<E, A>>, default_left: E, default_right: A) -> M::Of<(E, A)>
    where
        M: Monad,
    {
        M::chain(fa, move |these: These<E, A>| M::of(these.to_tuple(default_left, default_right)))
    }
}

// =============================================================================
// Type-class instances
// =============================================================================

impl<M: Functor, E: 'static> Functor for TheseT<M, E> {
    #[inline]
    fn map<A, B, F>(fa: M::Of<These<E, A>>, function: F) -> M::Of<These<E, B>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Compose::<M, TheseK<E>>::map(fa, function)
    }
}

impl<M: Apply, E: Semigroup + 'static> Apply for TheseT<M, E> {
    #[inline]
    fn map2<A, B, C, F>(fa: M::Of<These<E, A>>, fb: M::Of<These<E, B>>, function: F) -> M::Of<These<E, C>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Compose::<M, TheseK<E>>::map2(fa, fb, function)
    }
}

impl<M: Applicative, E: Semigroup + 'static> Applicative for TheseT<M, E> {
    #[inline]
    fn of<A: 'static>(value: A) -> M::Of<These<E, A>> {
        M::of(These::Right(value))
    }
}

impl<M: Monad, E: Semigroup + 'static> Chain for TheseT<M, E> {
    fn chain<A, B, F>(fa: M::Of<These<E, A>>, function: F) -> M::Of<These<E, B>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> M::Of<These<E, B>> + 'static,
    {
        M::chain(fa, move |these| match these {
            These::Left(error) => M::of(These::Left(error)),
            These::Right(value) => function(value),
            These::Both(warning, value) => M::chain(function(value), move |next: These<E, B>| {
                M::of(These::Both(warning, ()).and_then(move |()| next))
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{State, StateK};
    use crate::typeclass::{OptionK, Traversable, VecK};
    use rstest::rstest;

    type Lenient = TheseT<OptionK, String>;
    type Counted = TheseT<StateK<u32>, String>;

    fn step(these: These<String, i32>) -> State<u32, These<String, i32>> {
        State::new(move |count| (these, count + 1))
    }

    #[rstest]
    #[case(These::Left("a".to_string()), These::Right(1), These::Left("a".to_string()), 1)]
    #[case(These::Right(1), These::Both("b".to_string(), 2), These::Both("b".to_string(), 2), 2)]
    #[case(These::Both("a".to_string(), 1), These::Left("b".to_string()), These::Left("ab".to_string()), 2)]
    #[case(These::Both("a".to_string(), 1), These::Right(2), These::Both("a".to_string(), 2), 2)]
    #[case(These::Both("a".to_string(), 1), These::Both("b".to_string(), 2), These::Both("ab".to_string(), 2), 2)]
    fn chain_follows_the_warning_table(
        #[case] first: These<String, i32>,
        #[case] next: These<String, i32>,
        #[case] expected: These<String, i32>,
        #[case] steps: u32,
    ) {
        let program = Counted::chain(step(first), move |_| step(next));
        assert_eq!(program.run(0), (expected, steps));
    }

    #[rstest]
    fn map2_accumulates_warnings() {
        let combined = Lenient::map2(Lenient::both("x".to_string(), 1), Lenient::both("y".to_string(), 2), |a, b| a + b);
        assert_eq!(combined, Some(These::Both("xy".to_string(), 3)));
    }

    #[rstest]
    fn traverse_keeps_warnings_from_every_element() {
        let checked = VecK::traverse(Lenient::new(), vec![1, 20, 30], |n: i32| {
            if n > 10 { Lenient::both(format!("[{n}]"), 10) } else { Lenient::right(n) }
        });
        assert_eq!(checked, Some(These::Both("[20][30]".to_string(), vec![1, 10, 10])));
    }

    #[rstest]
    fn combinators_reach_the_inner_these() {
        let warned = Lenient::both("w".to_string(), 3);
        assert_eq!(Lenient::swap(warned.clone()), Some(These::Both(3, "w".to_string())));
        assert_eq!(Lenient::to_tuple(Lenient::right(3), "none".to_string(), 0), Some(("none".to_string(), 3)));
        assert_eq!(Lenient::bimap(warned.clone(), |w| w.len(), |n| n * 2), Some(These::Both(1, 6)));
        assert_eq!(Lenient::map_left(warned.clone(), |w| w + "!"), Some(These::Both("w!".to_string(), 3)));
        assert_eq!(
            Lenient::fold(warned, |_| None, |n| Some(n.to_string()), |w, n| Some(format!("{w}{n}"))),
            Some("w3".to_string())
        );
        assert_eq!(Lenient::right_m(Some('c')), Some(These::Right('c')));
        assert_eq!(Lenient::left_m::<char>(Some("e".to_string())), Some(These::Left("e".to_string())));
    }
}
