use crate::mvi::Intent;
use crate::search::Repo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// The query field was edited; carries the full new text.
    QueryChanged(String),
    /// User submitted the query (or the app started).
    SearchRequested,
    /// A search task finished. Failed searches arrive as an empty list.
    SearchResultsReceived(Vec<Repo>),
}

impl Intent for SearchIntent {}
