//! Task - a lazily polled asynchronous computation.
//!
//! A [`Task<A>`] wraps a boxed future. Nothing runs until the task is
//! awaited or passed to [`Task::run`]; dropping a task drops its future.
//!
//! [`TaskK::map2`](crate::typeclass::Apply::map2) polls both sides
//! concurrently and always combines the results positionally, so
//! traversing a collection under `TaskK` yields results in input order
//! whatever order the futures complete in.
//!
//! ```rust
//! use fp_contexts::effect::{Task, TaskK};
//! use fp_contexts::typeclass::{Chain, Traversable, VecK};
//!
//! let lengths = VecK::traverse(TaskK, vec!["a", "bcd"], |word: &'static str| {
//!     Task::from_future(async move { word.len() })
//! });
//! let total = TaskK::chain(lengths, |lengths| Task::now(lengths.into_iter().sum::<usize>()));
//!
//! assert_eq!(total.run(), 4);
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};

use crate::typeclass::{Applicative, Apply, Chain, Functor, TypeConstructor, kind_marker};

/// An asynchronous computation producing an `A`.
pub struct Task<A> {
    future: LocalBoxFuture<'static, A>,
}

impl<A: 'static> Task<A> {
    /// Wraps a future.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = A> + 'static,
    {
        Self {
            future: future.boxed_local(),
        }
    }

    /// A task that is already complete.
    pub fn now(value: A) -> Self {
        Self::from_future(future::ready(value))
    }

    /// A task that calls `thunk` when first polled.
    pub fn from_thunk<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::from_future(future::lazy(move |_| thunk()))
    }

    /// Drives the task to completion on the current thread.
    pub fn run(self) -> A {
        futures::executor::block_on(self)
    }
}

impl<A> Future for Task<A> {
    type Output = A;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<A> {
        self.get_mut().future.as_mut().poll(context)
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Task(<future>)")
    }
}

kind_marker! {
    /// Kind marker for [`Task`].
    pub struct TaskK;
}

impl TypeConstructor for TaskK {
    type Of<A> = Task<A>;
}

impl Functor for TaskK {
    fn map<A, B, F>(fa: Task<A>, function: F) -> Task<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Task::from_future(fa.map(function))
    }
}

impl Apply for TaskK {
    fn map2<A, B, C, F>(fa: Task<A>, fb: Task<B>, function: F) -> Task<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Task::from_future(future::join(fa, fb).map(move |(a, b)| function(a, b)))
    }
}

impl Applicative for TaskK {
    #[inline]
    fn of<A: 'static>(value: A) -> Task<A> {
        Task::now(value)
    }
}

impl Chain for TaskK {
    fn chain<A, B, F>(fa: Task<A>, function: F) -> Task<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Task<B> + 'static,
    {
        Task::from_future(async move { function(fa.await).await })
    }
}
