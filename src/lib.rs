//! Repository search on a unidirectional data flow core.
//!
//! [`mvi`] holds the reusable pieces (reducer, task, store), [`search`]
//! talks to the GitHub API, and [`ui`] renders the store in a terminal.

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod search;
pub mod ui;
