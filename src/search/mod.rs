//! Repository search collaborator.
//!
//! The store never talks to the network directly: the search reducer
//! builds a task that calls a [`RepoSearch`] implementation.

mod client;
mod error;
mod repo;

pub use client::{GithubClient, RepoSearch};
pub use error::SearchError;
pub use repo::{Owner, Repo};
