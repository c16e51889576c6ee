use std::sync::Arc;

use crate::mvi::{Reducer, Task};
use crate::search::RepoSearch;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

/// Reducer for the search screen.
///
/// Holds the search collaborator only to hand it to the tasks it returns;
/// `reduce` itself never performs I/O.
pub struct SearchReducer {
    search: Arc<dyn RepoSearch>,
}

impl SearchReducer {
    pub fn new(search: Arc<dyn RepoSearch>) -> Self {
        Self { search }
    }

    fn search_task(&self, query: String) -> Task<SearchIntent> {
        let search = Arc::clone(&self.search);
        let run = async move {
            match search.search(&query).await {
                Ok(repos) => repos,
                Err(err) => {
                    tracing::warn!(query = %query, error = %err, "Search failed, showing no results");
                    Vec::new()
                }
            }
        };
        Task::perform(run, SearchIntent::SearchResultsReceived)
    }
}

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> (Self::State, Task<Self::Intent>) {
        match intent {
            SearchIntent::QueryChanged(query) => (SearchState { query, ..state }, Task::none()),
            SearchIntent::SearchRequested => {
                let task = self.search_task(state.query.clone());
                (state, task)
            }
            SearchIntent::SearchResultsReceived(repos) => {
                (SearchState { repos, ..state }, Task::none())
            }
        }
    }
}
