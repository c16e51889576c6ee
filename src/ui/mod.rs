//! Terminal view of the search store.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
