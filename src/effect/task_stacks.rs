//! Task-based effect stacks.
//!
//! | Stack | Shape |
//! |---|---|
//! | [`TaskEither<E>`] | `Task<Result<A, E>>` |
//! | [`TaskThese<E>`] | `Task<These<E, A>>` |
//! | [`ReaderTaskEither<R, E>`] | `Reader<R, Task<Result<A, E>>>` |
//! | [`StateReaderTaskEither<S, R, E>`] | `Reader<S, Reader<R, Task<Result<(A, S), E>>>>` |
//!
//! Each stack is an alias over the transformers, so it gets its
//! type-class instances from them. The lifting constructors below fill in
//! what the generic transformers cannot express without knowing the base.
//!
//! ```rust
//! use fp_contexts::effect::{ReaderTaskEither, Task};
//! use fp_contexts::typeclass::Chain;
//!
//! type Fetch = ReaderTaskEither<&'static str, String>;
//!
//! let greeting = Fetch::chain(Fetch::asks(|host: &'static str| host.len()), |length| {
//!     Fetch::right_task(Task::from_future(async move { format!("{length} bytes") }))
//! });
//! assert_eq!(Fetch::run(greeting, "example").run(), Ok("7 bytes".to_string()));
//! ```

use std::future::Future;

use crate::control::These;
use crate::typeclass::{Applicative, Chain, Functor};

use super::either_transformer::EitherT;
use super::reader::Reader;
use super::reader_transformer::ReaderT;
use super::state::State;
use super::state_transformer::StateT;
use super::task::{Task, TaskK};
use super::these_transformer::TheseT;

/// `Task<Result<A, E>>`.
pub type TaskEither<E> = EitherT<TaskK, E>;

/// `Task<These<E, A>>`.
pub type TaskThese<E> = TheseT<TaskK, E>;

/// `Reader<R, Task<Result<A, E>>>`.
pub type ReaderTaskEither<R, E> = ReaderT<TaskEither<E>, R>;

/// `Reader<S, Reader<R, Task<Result<(A, S), E>>>>`.
pub type StateReaderTaskEither<S, R, E> = StateT<ReaderTaskEither<R, E>, S>;

// =============================================================================
// TaskEither
// =============================================================================

impl<E: 'static> EitherT<TaskK, E> {
    /// Lifts a task as a success.
    pub fn right_task<A: 'static>(task: Task<A>) -> Task<Result<A, E>> {
        Self::right_m(task)
    }

    /// Lifts a task as a failure.
    pub fn left_task<A: 'static>(task: Task<E>) -> Task<Result<A, E>> {
        Self::left_m(task)
    }

    /// Wraps a future that already produces a result.
    pub fn from_future<A, F>(future: F) -> Task<Result<A, E>>
    where
        A: 'static,
        F: Future<Output = Result<A, E>> + 'static,
    {
        Task::from_future(future)
    }

    /// Wraps a fallible future, converting its error with `on_rejected`.
    pub fn try_catch<A, X, F, L>(future: F, on_rejected: L) -> Task<Result<A, E>>
    where
        A: 'static,
        F: Future<Output = Result<A, X>> + 'static,
        L: FnOnce(X) -> E + 'static,
    {
        Task::from_future(async move { future.await.map_err(on_rejected) })
    }
}

// =============================================================================
// TaskThese
// =============================================================================

impl<E: 'static> TheseT<TaskK, E> {
    /// Lifts a task as a plain success.
    pub fn right_task<A: 'static>(task: Task<A>) -> Task<These<E, A>> {
        Self::right_m(task)
    }

    /// Lifts a task as a failure.
    pub fn left_task<A: 'static>(task: Task<E>) -> Task<These<E, A>> {
        Self::left_m(task)
    }
}

// =============================================================================
// ReaderTaskEither
// =============================================================================

impl<R: 'static, E: 'static> ReaderT<EitherT<TaskK, E>, R> {
    /// A success that ignores the environment.
    pub fn right<A: 'static>(value: A) -> Reader<R, Task<Result<A, E>>> {
        Self::lift(TaskEither::<E>::right(value))
    }

    /// A failure that ignores the environment.
    pub fn left<A: 'static>(error: E) -> Reader<R, Task<Result<A, E>>> {
        Self::lift(TaskEither::<E>::left(error))
    }

    /// Lifts a task as a success.
    pub fn right_task<A: 'static>(task: Task<A>) -> Reader<R, Task<Result<A, E>>> {
        Self::lift(TaskEither::<E>::right_task(task))
    }

    /// Lifts a task as a failure.
    pub fn left_task<A: 'static>(task: Task<E>) -> Reader<R, Task<Result<A, E>>> {
        Self::lift(TaskEither::<E>::left_task(task))
    }

    /// Lifts a reader as a success.
    pub fn right_reader<A: 'static>(reader: Reader<R, A>) -> Reader<R, Task<Result<A, E>>> {
        Self::from_reader(reader)
    }

    /// Lifts a reader as a failure.
    pub fn left_reader<A: 'static>(reader: Reader<R, E>) -> Reader<R, Task<Result<A, E>>> {
        Reader::new(move |environment| TaskEither::<E>::left(reader.run(environment)))
    }

    /// Lifts a task-either that ignores the environment.
    pub fn from_task_either<A: 'static>(task: Task<Result<A, E>>) -> Reader<R, Task<Result<A, E>>> {
        Self::lift(task)
    }

    /// Lifts a plain result.
    pub fn from_result<A: 'static>(result: Result<A, E>) -> Reader<R, Task<Result<A, E>>> {
        Self::lift(TaskEither::<E>::from_result(result))
    }

    /// Continues with a plain result.
    pub fn chain_result<A, B, F>(fa: Reader<R, Task<Result<A, E>>>, function: F) -> Reader<R, Task<Result<B, E>>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        Reader::new(move |environment| TaskEither::<E>::chain_result(fa.run(environment), function))
    }

    /// Continues with a task-either that does not read the environment.
    pub fn chain_task_either<A, B, F>(
        fa: Reader<R, Task<Result<A, E>>>,
        function: F,
    ) -> Reader<R, Task<Result<B, E>>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Task<Result<B, E>> + 'static,
    {
        Reader::new(move |environment| TaskEither::<E>::chain(fa.run(environment), function))
    }
}

// =============================================================================
// StateReaderTaskEither
// =============================================================================

impl<S: 'static, R: 'static, E: 'static> StateT<ReaderT<EitherT<TaskK, E>, R>, S> {
    /// A success that leaves the state alone.
    pub fn right<A: 'static>(value: A) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |state| ReaderTaskEither::<R, E>::right((value, state)))
    }

    /// A failure.
    pub fn left<A: 'static>(error: E) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |_| ReaderTaskEither::<R, E>::left(error))
    }

    /// Lifts a task as a success.
    pub fn right_task<A: 'static>(task: Task<A>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |state| {
            ReaderTaskEither::<R, E>::from_task_either(Task::from_future(async move { Ok((task.await, state)) }))
        })
    }

    /// Lifts a task as a failure.
    pub fn left_task<A: 'static>(task: Task<E>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |_| ReaderTaskEither::<R, E>::left_task(task))
    }

    /// Lifts a reader as a success.
    pub fn right_reader<A: 'static>(reader: Reader<R, A>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |state| {
            Reader::new(move |environment| TaskEither::<E>::right((reader.run(environment), state)))
        })
    }

    /// Lifts a reader as a failure.
    pub fn left_reader<A: 'static>(reader: Reader<R, E>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |_| ReaderTaskEither::<R, E>::left_reader(reader))
    }

    /// Lifts a state transition as a success.
    pub fn right_state<A: 'static>(state: State<S, A>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |initial| ReaderTaskEither::<R, E>::right(state.run(initial)))
    }

    /// Lifts the value of a state transition as a failure.
    pub fn left_state<A: 'static>(state: State<S, E>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |initial| ReaderTaskEither::<R, E>::left(state.run(initial).0))
    }

    /// Lifts a reader-task-either that leaves the state alone.
    pub fn from_reader_task_either<A: 'static>(
        computation: Reader<R, Task<Result<A, E>>>,
    ) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Reader::new(move |state| {
            Reader::new(move |environment| {
                let task = computation.run(environment);
                Task::from_future(async move { task.await.map(|value| (value, state)) })
            })
        })
    }

    /// Lifts a task-either that leaves the state alone.
    pub fn from_task_either<A: 'static>(task: Task<Result<A, E>>) -> Reader<S, Reader<R, Task<Result<(A, S), E>>>> {
        Self::from_reader_task_either(ReaderTaskEither::<R, E>::from_task_either(task))
    }

    /// Runs from `initial` and keeps the value.
    pub fn eval_state<A: 'static>(
        fa: Reader<S, Reader<R, Task<Result<(A, S), E>>>>,
        initial: S,
    ) -> Reader<R, Task<Result<A, E>>> {
        ReaderTaskEither::<R, E>::map(fa.run(initial), |(value, _): (A, S)| value)
    }

    /// Runs from `initial` and keeps the final state.
    pub fn exec_state<A: 'static>(
        fa: Reader<S, Reader<R, Task<Result<(A, S), E>>>>,
        initial: S,
    ) -> Reader<R, Task<Result<S, E>>> {
        ReaderTaskEither::<R, E>::map(fa.run(initial), |(_, state): (A, S)| state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Alt, Apply, Chain, Traversable, VecK};
    use rstest::rstest;

    type Fetch = TaskEither<String>;
    type Session = StateReaderTaskEither<Vec<&'static str>, u32, String>;

    #[rstest]
    fn task_either_try_catch_converts_the_error() {
        let parsed = Fetch::try_catch(async { "x1".parse::<i32>() }, |error: std::num::ParseIntError| error.to_string());
        assert_eq!(parsed.run(), Err("invalid digit found in string".to_string()));
    }

    #[rstest]
    fn task_either_traversal_stops_at_first_error() {
        let results = VecK::traverse(Fetch::new(), vec![1, 0, 2], |n: i32| {
            if n == 0 { Fetch::left("zero".to_string()) } else { Fetch::right(10 / n) }
        });
        assert_eq!(results.run(), Err("zero".to_string()));
    }

    #[rstest]
    fn task_these_lifts_tasks() {
        let warned = TaskThese::<String>::map2(
            TaskThese::both("slow".to_string(), 1),
            TaskThese::right_task(Task::now(2)),
            |a, b| a + b,
        );
        assert_eq!(warned.run(), These::Both("slow".to_string(), 3));
        assert_eq!(TaskThese::<String>::left_task::<i32>(Task::now("e".to_string())).run(), These::Left("e".to_string()));
    }

    #[rstest]
    fn reader_task_either_lifts() {
        type Service = ReaderTaskEither<u32, String>;
        let doubled = Service::chain_result(Service::asks(|n: u32| n * 2), |n| if n > 5 { Ok(n) } else { Err("small".to_string()) });
        assert_eq!(Service::run(doubled, 4).run(), Ok(8));
        let failed = Service::chain_task_either(Service::right(1_u32), |_| Fetch::left::<u32>("boom".to_string()));
        assert_eq!(Service::run(failed, 0).run(), Err("boom".to_string()));
        let from_reader = Service::left_reader::<u32>(Reader::new(|n: u32| format!("env {n}")));
        assert_eq!(Service::run(from_reader, 3).run(), Err("env 3".to_string()));
    }

    fn visit(page: &'static str) -> Reader<Vec<&'static str>, Reader<u32, Task<Result<((), Vec<&'static str>), String>>>> {
        Session::modify(move |mut trail: Vec<&'static str>| {
            trail.push(page);
            trail
        })
    }

    #[rstest]
    fn state_reader_task_either_threads_state_and_environment() {
        let program = Session::chain(visit("home"), |()| {
            Session::chain(visit("about"), |()| Session::right_reader(Reader::new(|limit: u32| limit)))
        });
        assert_eq!(
            Session::run(program, vec![]).run(3).run(),
            Ok((3, vec!["home", "about"]))
        );
    }

    #[rstest]
    fn state_reader_task_either_eval_exec() {
        let program = || Session::chain(visit("home"), |()| Session::gets(|trail: &Vec<&'static str>| trail.len()));
        assert_eq!(Session::eval_state(program(), vec!["start"]).run(0).run(), Ok(2));
        assert_eq!(Session::exec_state(program(), vec![]).run(0).run(), Ok(vec!["home"]));
    }

    #[rstest]
    fn state_reader_task_either_alt_restores_state() {
        let failing = Session::chain(visit("broken"), |()| Session::left::<usize>("404".to_string()));
        let program = Session::alt(failing, || {
            Session::right_state(State::new(|trail: Vec<&'static str>| (trail.len(), trail)))
        });
        assert_eq!(Session::run(program, vec!["home"]).run(0).run(), Ok((1, vec!["home"])));
    }

    #[rstest]
    fn state_reader_task_either_lifts() {
        assert_eq!(
            Session::run(Session::left_state::<u32>(State::new(|trail: Vec<&'static str>| (format!("{} pages", trail.len()), trail))), vec!["a"])
                .run(0)
                .run(),
            Err("1 pages".to_string())
        );
        assert_eq!(
            Session::run(Session::from_task_either(Fetch::right('k')), vec![]).run(0).run(),
            Ok(('k', vec![]))
        );
        assert_eq!(
            Session::run(Session::right_task(Task::now(5_u8)), vec!["x"]).run(0).run(),
            Ok((5, vec!["x"]))
        );
        assert_eq!(
            Session::run(Session::left_task::<u8>(Task::now("t".to_string())), vec![]).run(0).run(),
            Err("t".to_string())
        );
    }
}
