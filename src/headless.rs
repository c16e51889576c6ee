//! One-shot search without the terminal UI.

use std::io::{self, Write};

use crate::mvi::Store;
use crate::search::Repo;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};

/// Run a single search through the store and return the committed results.
///
/// Uses the same intents the terminal UI sends, so a failed search yields
/// an empty list here too.
pub async fn search_once(reducer: SearchReducer, query: &str) -> Vec<Repo> {
    let mut store = Store::new(SearchState::default(), reducer);
    let handle = store.handle();
    handle.send(SearchIntent::QueryChanged(query.to_string()));
    handle.send(SearchIntent::SearchRequested);
    store.settle().await;
    store.state().repos.clone()
}

/// Write one `name — description` line per repository.
pub fn write_plain<W: Write>(out: &mut W, repos: &[Repo]) -> io::Result<()> {
    for repo in repos {
        match repo.description.as_deref() {
            Some(description) if !description.is_empty() => {
                writeln!(out, "{} — {}", repo.name, description)?
            }
            _ => writeln!(out, "{}", repo.name)?,
        }
    }
    Ok(())
}

/// Write the repositories as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, repos: &[Repo]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, repos)?;
    writeln!(out)
}
