//! Single-owner state container.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;

use super::reducer::Reducer;
use super::task::Task;

type Observer<S> = Box<dyn FnMut(&S) + Send>;

/// Owns the current state and the reducer, and is the only place where
/// state changes.
///
/// All transitions happen on the owner of the store (`send` takes
/// `&mut self`). Tasks returned by the reducer run on the tokio runtime and
/// only enqueue their intent onto the store's update queue; the owner
/// processes that queue with [`process_next`](Self::process_next),
/// [`drain`](Self::drain) or [`settle`](Self::settle). Commits are therefore
/// linearized, and a task's intent is always applied after the state that
/// spawned the task was committed and published.
///
/// Dropping the store aborts every task still in flight.
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    observers: Vec<Observer<R::State>>,
    published: watch::Sender<R::State>,
    queue_tx: mpsc::UnboundedSender<R::Intent>,
    queue_rx: mpsc::UnboundedReceiver<R::Intent>,
    tasks: JoinSet<()>,
}

/// Cloneable handle that enqueues intents onto a store's update queue.
///
/// Intents sent through a handle are applied by the store's owner, in
/// order, the next time it processes its queue.
pub struct StoreHandle<I> {
    queue: mpsc::UnboundedSender<I>,
}

impl<I> Clone for StoreHandle<I> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<I> StoreHandle<I> {
    /// Enqueue an intent. Returns false if the store has been dropped.
    pub fn send(&self, intent: I) -> bool {
        self.queue.send(intent).is_ok()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`. No task runs on construction.
    pub fn new(initial: R::State, reducer: R) -> Self {
        let (published, _) = watch::channel(initial.clone());
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        Self {
            state: initial,
            reducer,
            observers: Vec::new(),
            published,
            queue_tx,
            queue_rx,
            tasks: JoinSet::new(),
        }
    }

    /// The last committed state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Subscribe to committed states. Receivers always see the latest
    /// snapshot; intermediate states may be skipped by slow readers.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.published.subscribe()
    }

    /// Register a callback invoked synchronously with every committed state.
    ///
    /// Observers must return quickly and must not panic.
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Handle for enqueueing intents from other tasks or threads.
    pub fn handle(&self) -> StoreHandle<R::Intent> {
        StoreHandle {
            queue: self.queue_tx.clone(),
        }
    }

    /// Number of spawned tasks that have not been reaped yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Apply an intent: reduce, commit, notify observers, then schedule the
    /// returned task.
    ///
    /// Must be called from within a tokio runtime when the reducer may
    /// return a non-empty task.
    pub fn send(&mut self, intent: R::Intent) {
        let current = std::mem::take(&mut self.state);
        let (next, task) = self.reducer.reduce(current, intent);
        self.state = next;

        for observer in &mut self.observers {
            observer(&self.state);
        }
        self.published.send_replace(self.state.clone());

        self.schedule(task);
    }

    /// Wait for the next queued intent and apply it.
    ///
    /// Cancel safe: if the future is dropped before an intent arrives,
    /// nothing is lost.
    pub async fn process_next(&mut self) {
        self.reap();
        if let Some(intent) = self.queue_rx.recv().await {
            self.send(intent);
        }
    }

    /// Apply every intent already queued without waiting. Returns how many
    /// intents were applied.
    pub fn drain(&mut self) -> usize {
        self.reap();
        let mut applied = 0;
        while let Ok(intent) = self.queue_rx.try_recv() {
            self.send(intent);
            applied += 1;
        }
        applied
    }

    /// Process queued intents and wait on in-flight tasks until both are
    /// exhausted.
    pub async fn settle(&mut self) {
        loop {
            self.drain();
            match self.tasks.join_next().await {
                Some(result) => log_join(result),
                None => {
                    if self.drain() == 0 && self.tasks.is_empty() {
                        break;
                    }
                }
            }
        }
    }

    fn schedule(&mut self, task: Task<R::Intent>) {
        let Some(future) = task.into_inner() else {
            return;
        };
        let queue = self.queue_tx.clone();
        self.tasks.spawn(async move {
            if let Some(intent) = future.await {
                // The receiver lives in the store; a failed send means the
                // store is gone and the intent has nowhere to go.
                let _ = queue.send(intent);
            }
        });
        tracing::trace!(in_flight = self.tasks.len(), "Task scheduled");
    }

    fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            log_join(result);
        }
    }
}

fn log_join(result: Result<(), tokio::task::JoinError>) {
    if let Err(err) = result {
        if err.is_panic() {
            tracing::warn!(error = %err, "Store task panicked");
        }
    }
}
