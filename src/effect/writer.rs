//! Writer - computation with accumulated output.
//!
//! A `Writer<W, A>` is a value `A` paired with an output `W`. Sequencing
//! writers combines their outputs with `W`'s [`Semigroup`], left first,
//! and [`Applicative::of`] starts from [`Monoid::empty`].
//!
//! Writers are strict: the value and the output are already computed.
//!
//! # Laws
//!
//! ```text
//! chain(tell(w1), |()| tell(w2)) == tell(w1.combine(w2))
//! censor(m, f)                   == pass(map(m, |a| (a, f)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_contexts::effect::{Writer, WriterK};
//! use fp_contexts::typeclass::Chain;
//!
//! fn logged(n: i32) -> Writer<Vec<String>, i32> {
//!     Writer::new(n, vec![format!("got {n}")])
//! }
//!
//! let sum = WriterK::<Vec<String>>::chain(logged(3), |a| {
//!     WriterK::<Vec<String>>::chain(logged(4), move |b| logged(a + b))
//! });
//! assert_eq!(sum.run(), (7, vec!["got 3".into(), "got 4".into(), "got 7".into()]));
//! ```

use crate::typeclass::{
    Applicative, Apply, Chain, Foldable, Functor, Monoid, Semigroup, Traversable, TypeConstructor,
    kind_marker,
};

/// A value together with the output produced while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Writer<W, A> {
    value: A,
    output: W,
}

impl<W, A> Writer<W, A> {
    /// Pairs `value` with `output`.
    #[inline]
    pub const fn new(value: A, output: W) -> Self {
        Self { value, output }
    }

    /// The value and the output.
    #[inline]
    pub fn run(self) -> (A, W) {
        (self.value, self.output)
    }

    /// The value alone.
    #[inline]
    pub fn eval(self) -> A {
        self.value
    }

    /// The output alone.
    #[inline]
    pub fn exec(self) -> W {
        self.output
    }
}

kind_marker! {
    /// Kind marker for `Writer<W, _>`.
    pub struct WriterK<W>;
}

impl<W: 'static> TypeConstructor for WriterK<W> {
    type Of<A> = Writer<W, A>;
}

// =============================================================================
// Output operations
// =============================================================================

impl<W: 'static> WriterK<W> {
    /// Emits `output` with no value.
    #[inline]
    pub const fn tell(output: W) -> Writer<W, ()> {
        Writer::new((), output)
    }

    /// Exposes the output next to the value.
    pub fn listen<A>(fa: Writer<W, A>) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let Writer { value, output } = fa;
        Writer::new((value, output.clone()), output)
    }

    /// Exposes a projection of the output next to the value.
    pub fn listens<A, B, F>(fa: Writer<W, A>, projection: F) -> Writer<W, (A, B)>
    where
        F: FnOnce(&W) -> B,
    {
        let observed = projection(&fa.output);
        Writer::new((fa.value, observed), fa.output)
    }

    /// Applies the function carried in the value to the output.
    pub fn pass<A, F>(fa: Writer<W, (A, F)>) -> Writer<W, A>
    where
        F: FnOnce(W) -> W,
    {
        let Writer {
            value: (value, rewrite),
            output,
        } = fa;
        Writer::new(value, rewrite(output))
    }

    /// Rewrites the output.
    pub fn censor<A, F>(fa: Writer<W, A>, function: F) -> Writer<W, A>
    where
        F: FnOnce(W) -> W,
    {
        Writer::new(fa.value, function(fa.output))
    }
}

// =============================================================================
// Type-class instances
// =============================================================================

impl<W: 'static> Functor for WriterK<W> {
    #[inline]
    fn map<A, B, F>(fa: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Writer::new(function(fa.value), fa.output)
    }
}

impl<W: Semigroup + 'static> Apply for WriterK<W> {
    fn map2<A, B, C, F>(fa: Writer<W, A>, fb: Writer<W, B>, function: F) -> Writer<W, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Writer::new(function(fa.value, fb.value), fa.output.combine(fb.output))
    }
}

impl<W: Monoid + 'static> Applicative for WriterK<W> {
    #[inline]
    fn of<A: 'static>(value: A) -> Writer<W, A> {
        Writer::new(value, W::empty())
    }
}

impl<W: Semigroup + 'static> Chain for WriterK<W> {
    fn chain<A, B, F>(fa: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Writer<W, B> + 'static,
    {
        let Writer { value, output } = fa;
        let next = function(value);
        Writer::new(next.value, output.combine(next.output))
    }
}

impl<W: 'static> Foldable for WriterK<W> {
    fn reduce<A, B, F>(fa: Writer<W, A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.value)
    }

    fn reduce_right<A, B, F>(fa: Writer<W, A>, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(fa.value, initial)
    }
}

impl<W: 'static> Traversable for WriterK<W> {
    fn traverse<F, A, B, V>(_effect: F, ta: Writer<W, A>, mut visitor: V) -> F::Of<Writer<W, B>>
    where
        F: Applicative,
        A: 'static,
        B: 'static,
        V: FnMut(A) -> F::Of<B>,
    {
        let Writer { value, output } = ta;
        F::map2(visitor(value), F::of(output), Writer::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionK, Sum};
    use rstest::rstest;

    type Log = Writer<Vec<&'static str>, i32>;

    #[rstest]
    fn tell_outputs_combine_left_first() {
        let program = WriterK::<Vec<&str>>::chain(WriterK::tell(vec!["one"]), |()| WriterK::tell(vec!["two"]));
        assert_eq!(program.exec(), vec!["one", "two"]);
    }

    #[rstest]
    fn of_starts_from_empty_output() {
        let pure: Log = WriterK::<Vec<&'static str>>::of(4);
        assert_eq!(pure.run(), (4, Vec::new()));
    }

    #[rstest]
    fn listen_and_listens_expose_output() {
        let written: Writer<String, i32> = Writer::new(1, "ab".to_string());
        assert_eq!(WriterK::listen(written.clone()).eval(), (1, "ab".to_string()));
        assert_eq!(WriterK::listens(written, String::len).eval(), (1, 2));
    }

    #[rstest]
    fn censor_matches_pass() {
        let written: Writer<Sum<i32>, char> = Writer::new('x', Sum::new(5));
        let doubled = |total: Sum<i32>| Sum::new(total.into_inner() * 2);
        let censored = WriterK::censor(written.clone(), doubled);
        let passed = WriterK::pass(WriterK::<Sum<i32>>::map(written, move |c| (c, doubled)));
        assert_eq!(censored, passed);
        assert_eq!(censored.exec(), Sum::new(10));
    }

    #[rstest]
    #[case(3, Some((6, vec!["kept"])))]
    #[case(-3, None)]
    fn traverse_keeps_the_output(#[case] value: i32, #[case] expected: Option<(i32, Vec<&'static str>)>) {
        let written: Log = Writer::new(value, vec!["kept"]);
        let traversed = WriterK::<Vec<&'static str>>::traverse(OptionK, written, |n: i32| (n > 0).then_some(n * 2));
        assert_eq!(traversed.map(Writer::run), expected);
    }
}
