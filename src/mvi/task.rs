//! Deferred side effects returned by reducers.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

type TaskFuture<I> = Pin<Box<dyn Future<Output = Option<I>> + Send + 'static>>;

/// A deferred unit of asynchronous work that yields zero or one intent.
///
/// Reducers build tasks but never run them. The [`Store`](super::Store)
/// spawns the task after committing the state that produced it and feeds
/// the resulting intent, if any, back into itself.
pub struct Task<I> {
    future: Option<TaskFuture<I>>,
}

impl<I: Send + 'static> Task<I> {
    /// A task that does nothing.
    pub fn none() -> Self {
        Self { future: None }
    }

    /// Run `future` and turn its output into an intent with `map`.
    pub fn perform<F, T, M>(future: F, map: M) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        M: FnOnce(T) -> I + Send + 'static,
    {
        Self {
            future: Some(Box::pin(async move { Some(map(future.await)) })),
        }
    }

    /// Run `future`, which may complete without producing an intent.
    pub fn silent<F>(future: F) -> Self
    where
        F: Future<Output = Option<I>> + Send + 'static,
    {
        Self {
            future: Some(Box::pin(future)),
        }
    }

    /// Returns true if this task has no work to do.
    pub fn is_none(&self) -> bool {
        self.future.is_none()
    }

    /// Run the task to completion on the current task, returning its intent.
    ///
    /// The store spawns tasks instead; this is for callers that want to
    /// drive a task directly.
    pub async fn run(self) -> Option<I> {
        match self.future {
            Some(future) => future.await,
            None => None,
        }
    }

    pub(super) fn into_inner(self) -> Option<TaskFuture<I>> {
        self.future
    }
}

impl<I: Send + 'static> Default for Task<I> {
    fn default() -> Self {
        Self::none()
    }
}

impl<I> fmt::Debug for Task<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.future {
            Some(_) => f.write_str("Task(pending)"),
            None => f.write_str("Task(none)"),
        }
    }
}
