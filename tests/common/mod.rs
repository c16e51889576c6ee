//! Shared test utilities and mock search collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_github;

use async_trait::async_trait;
use parking_lot::Mutex;
use reposearch::mvi::Store;
use reposearch::search::{Repo, RepoSearch, SearchError};
use reposearch::ui::search::{SearchReducer, SearchState};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;

pub type SearchOutcome = Result<Vec<Repo>, SearchError>;

/// Answers every query with the same result list and records the queries.
pub struct FixedSearch {
    repos: Vec<Repo>,
    queries: Mutex<Vec<String>>,
}

impl FixedSearch {
    pub fn new(repos: Vec<Repo>) -> Arc<Self> {
        Arc::new(Self {
            repos,
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl RepoSearch for FixedSearch {
    async fn search(&self, query: &str) -> Result<Vec<Repo>, SearchError> {
        self.queries.lock().push(query.to_string());
        Ok(self.repos.clone())
    }
}

/// Fails every search as if the network were down.
pub struct FailingSearch;

#[async_trait]
impl RepoSearch for FailingSearch {
    async fn search(&self, _query: &str) -> Result<Vec<Repo>, SearchError> {
        Err(SearchError::Status {
            status: 503,
            message: "simulated network error".to_string(),
        })
    }
}

/// Searches block until the test releases them, keyed by query.
pub struct GatedSearch {
    gates: Mutex<HashMap<String, oneshot::Receiver<SearchOutcome>>>,
}

impl GatedSearch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gates: Mutex::new(HashMap::new()),
        })
    }

    /// Register a gate for `query`; sending on the returned sender completes
    /// the search.
    pub fn gate(&self, query: &str) -> oneshot::Sender<SearchOutcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(query.to_string(), rx);
        tx
    }

    /// True once a search for `query` has picked up its gate.
    pub fn started(&self, query: &str) -> bool {
        !self.gates.lock().contains_key(query)
    }
}

#[async_trait]
impl RepoSearch for GatedSearch {
    async fn search(&self, query: &str) -> Result<Vec<Repo>, SearchError> {
        let gate = self.gates.lock().remove(query);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Ok(Vec::new())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn repo(id: u64, name: &str) -> Repo {
    Repo::new(id, name)
}

pub fn make_store(search: Arc<dyn RepoSearch>, initial: SearchState) -> Store<SearchReducer> {
    Store::new(initial, SearchReducer::new(search))
}

/// Records every state the store publishes, in order.
pub fn record_states(store: &mut Store<SearchReducer>) -> Arc<Mutex<Vec<SearchState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.observe(move |state: &SearchState| sink.lock().push(state.clone()));
    seen
}
