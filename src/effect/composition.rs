//! Composition of two type constructors.
//!
//! [`Compose<F, G>`] describes the nested shape `F<G<A>>`. Any two
//! applicatives compose into an applicative, even when neither is a monad:
//! `map` goes through both layers, `of` wraps twice, and `map2` lifts
//! `G::map2` through `F::map2`. Two traversables likewise compose into a
//! traversable that visits the inner elements in the outer container's
//! order.
//!
//! # Laws
//!
//! ```text
//! Compose::<F, G>::of(a)          == F::of(G::of(a))
//! Compose::<F, G>::map(fga, f)    == F::map(fga, |ga| G::map(ga, f))
//! Compose::<F, G>::map2(x, y, f)  == F::map2(x, y, |gx, gy| G::map2(gx, gy, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::Compose;
//! use fp_contexts::typeclass::{Apply, OptionK, ResultK};
//!
//! type OptionOfResult = Compose<OptionK, ResultK<String>>;
//!
//! let sum = OptionOfResult::map2(Some(Ok(1)), Some(Ok(2)), |a, b| a + b);
//! assert_eq!(sum, Some(Ok(3)));
//!
//! let failed = OptionOfResult::map2(Some(Ok(1)), Some(Err("bad".to_string())), |a: i32, b: i32| a + b);
//! assert_eq!(failed, Some(Err("bad".to_string())));
//! ```

use std::rc::Rc;

use crate::typeclass::{
    Applicative, Apply, Foldable, Functor, Traversable, TypeConstructor, kind_marker,
};

kind_marker! {
    /// Kind marker for `F<G<_>>`.
    pub struct Compose<F, G>;
}

impl<F: TypeConstructor, G: TypeConstructor> TypeConstructor for Compose<F, G> {
    type Of<A> = F::Of<G::Of<A>>;
}

impl<F: Functor, G: Functor> Functor for Compose<F, G> {
    fn map<A, B, H>(fga: F::Of<G::Of<A>>, function: H) -> F::Of<G::Of<B>>
    where
        A: 'static,
        B: 'static,
        H: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        F::map(fga, move |ga| {
            let function = Rc::clone(&function);
            G::map(ga, move |a| function(a))
        })
    }
}

impl<F: Apply, G: Apply> Apply for Compose<F, G> {
    fn map2<A, B, C, H>(fga: F::Of<G::Of<A>>, fgb: F::Of<G::Of<B>>, function: H) -> F::Of<G::Of<C>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        H: FnOnce(A, B) -> C + 'static,
    {
        F::map2(fga, fgb, move |ga, gb| G::map2(ga, gb, function))
    }
}

impl<F: Applicative, G: Applicative> Applicative for Compose<F, G> {
    #[inline]
    fn of<A: 'static>(value: A) -> F::Of<G::Of<A>> {
        F::of(G::of(value))
    }
}

impl<F: Foldable, G: Foldable> Foldable for Compose<F, G> {
    fn reduce<A, B, H>(fga: F::Of<G::Of<A>>, initial: B, mut function: H) -> B
    where
        H: FnMut(B, A) -> B,
    {
        F::reduce(fga, initial, |accumulator, ga| G::reduce(ga, accumulator, &mut function))
    }

    fn reduce_right<A, B, H>(fga: F::Of<G::Of<A>>, initial: B, mut function: H) -> B
    where
        H: FnMut(A, B) -> B,
    {
        F::reduce_right(fga, initial, |ga, accumulator| {
            G::reduce_right(ga, accumulator, &mut function)
        })
    }
}

impl<F: Traversable, G: Traversable> Traversable for Compose<F, G> {
    fn traverse<E, A, B, V>(effect: E, ta: F::Of<G::Of<A>>, mut visitor: V) -> E::Of<F::Of<G::Of<B>>>
    where
        E: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> E::Of<B>,
    {
        F::traverse(effect, ta, |ga| G::traverse(effect, ga, &mut visitor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionK, ResultK, ValidationK, VecK};
    use rstest::rstest;

    type VecOfOptions = Compose<VecK, OptionK>;
    type Checked = Compose<OptionK, ValidationK<Vec<&'static str>>>;

    #[rstest]
    fn map_reaches_the_inner_layer() {
        let mapped = VecOfOptions::map(vec![Some(1), None, Some(3)], |n: i32| n * 10);
        assert_eq!(mapped, vec![Some(10), None, Some(30)]);
    }

    #[rstest]
    #[case(Some(Err(vec!["a"])), Some(Err(vec!["b"])), Some(Err(vec!["a", "b"])))]
    #[case(Some(Ok(1)), Some(Ok(2)), Some(Ok(3)))]
    #[case(None, Some(Err(vec!["b"])), None)]
    fn map2_uses_the_inner_apply(
        #[case] left: Option<Result<i32, Vec<&'static str>>>,
        #[case] right: Option<Result<i32, Vec<&'static str>>>,
        #[case] expected: Option<Result<i32, Vec<&'static str>>>,
    ) {
        assert_eq!(Checked::map2(left, right, |a, b| a + b), expected);
    }

    #[rstest]
    fn of_wraps_both_layers() {
        assert_eq!(Compose::<OptionK, ResultK<String>>::of(4), Some(Ok(4)));
    }

    #[rstest]
    fn fold_visits_inner_elements_in_outer_order() {
        let nested = vec![Some("a"), None, Some("b")];
        let joined = VecOfOptions::reduce(nested.clone(), String::new(), |text, part| text + part);
        let reversed = VecOfOptions::reduce_right(nested, String::new(), |part, text| text + part);
        assert_eq!((joined.as_str(), reversed.as_str()), ("ab", "ba"));
    }

    #[rstest]
    #[case(vec![Some(1), None, Some(2)], Some(vec![Some(2), None, Some(4)]))]
    #[case(vec![Some(1), Some(-1)], None)]
    fn traverse_runs_through_both_layers(
        #[case] input: Vec<Option<i32>>,
        #[case] expected: Option<Vec<Option<i32>>>,
    ) {
        let result = VecOfOptions::traverse(OptionK, input, |n: i32| (n > 0).then_some(n * 2));
        assert_eq!(result, expected);
    }
}
