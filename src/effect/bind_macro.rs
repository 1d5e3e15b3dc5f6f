//! `bind!` - sequential notation for any [`Chain`](crate::typeclass::Chain).
//!
//! The first token names the kind marker whose `chain` is used; every
//! `pattern <= expression;` step becomes one nested `chain` call and the
//! final expression is the result of the innermost continuation.
//!
//! ```text
//! bind! { K;
//!     x <= mx;            // K::chain(mx, move |x| ...
//!     let y = f(x);       //     { let y = f(x); ...
//!     g(x, y)             //     g(x, y) })
//! }
//! ```
//!
//! Every continuation is a `move` closure, so variables bound by earlier
//! steps are available to later ones.

/// Desugars a sequence of binds into nested `chain` calls on a kind marker.
///
/// # Syntax
///
/// - `pattern <= expression;` binds the value of a computation
/// - `_ <= expression;` runs a computation and discards its value
/// - `let pattern = expression;` binds a plain value
/// - the last expression is the resulting computation
///
/// # Examples
///
/// ```rust
/// use fp_contexts::bind;
/// use fp_contexts::effect::StateK;
///
/// let counter = bind! { StateK<u32>;
///     start <= StateK::get();
///     _ <= StateK::put(start + 10);
///     let doubled = start * 2;
///     end <= StateK::get();
///     StateK::gets(move |_| (doubled, end))
/// };
///
/// assert_eq!(StateK::eval(counter, 1), (2, 11));
/// ```
#[macro_export]
macro_rules! bind {
    ($kind:ty ; $result:expr $(;)?) => {
        $result
    };

    ($kind:ty ; _ <= $computation:expr ; $($rest:tt)+) => {
        <$kind as $crate::typeclass::Chain>::chain($computation, move |_| {
            $crate::bind!($kind ; $($rest)+)
        })
    };

    ($kind:ty ; $pattern:ident <= $computation:expr ; $($rest:tt)+) => {
        <$kind as $crate::typeclass::Chain>::chain($computation, move |$pattern| {
            $crate::bind!($kind ; $($rest)+)
        })
    };

    ($kind:ty ; ($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {
        <$kind as $crate::typeclass::Chain>::chain($computation, move |($($pattern)*)| {
            $crate::bind!($kind ; $($rest)+)
        })
    };

    ($kind:ty ; let $pattern:pat = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::bind!($kind ; $($rest)+)
    }};
}
