use crate::mvi::UiState;
use crate::search::Repo;

/// Everything the search screen needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub repos: Vec<Repo>,
}

impl UiState for SearchState {}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_query("Elm")
    }
}

impl SearchState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            repos: Vec::new(),
        }
    }

    /// True until the first non-empty result list arrives.
    pub fn is_loading(&self) -> bool {
        self.repos.is_empty()
    }
}
