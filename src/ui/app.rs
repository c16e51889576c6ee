use crate::mvi::Store;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crossterm::event::KeyEvent;

/// The terminal application: the search store plus view-only flags.
pub struct App {
    should_quit: bool,
    store: Store<SearchReducer>,
}

impl App {
    pub fn new(store: Store<SearchReducer>) -> Self {
        Self {
            should_quit: false,
            store,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &SearchState {
        self.store.state()
    }

    /// True while a search task is running.
    pub fn is_searching(&self) -> bool {
        self.store.in_flight() > 0
    }

    pub fn dispatch(&mut self, intent: SearchIntent) {
        tracing::trace!(?intent, "Dispatch");
        self.store.send(intent);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        crate::ui::input::handle_key(self, key);
    }

    pub fn store_mut(&mut self) -> &mut Store<SearchReducer> {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Repo, RepoSearch, SearchError};
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use std::sync::Arc;

    struct FixedSearch;

    #[async_trait]
    impl RepoSearch for FixedSearch {
        async fn search(&self, query: &str) -> Result<Vec<Repo>, SearchError> {
            Ok(vec![Repo::new(7, format!("{query}/repo"))])
        }
    }

    fn make_app() -> App {
        let reducer = SearchReducer::new(Arc::new(FixedSearch));
        App::new(Store::new(SearchState::default(), reducer))
    }

    fn press_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn esc_requests_quit() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn typing_edits_query_through_store() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('!'), KeyModifiers::NONE));
        assert_eq!(app.state().query, "Elm!");
        app.on_key(press_key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.state().query, "Elm");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = make_app();
        let mut key = press_key(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.on_key(key);
        assert_eq!(app.state().query, "Elm");
    }

    #[tokio::test]
    async fn enter_runs_search_and_applies_results() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.is_searching());
        assert!(app.state().repos.is_empty());

        app.store_mut().settle().await;

        assert!(!app.is_searching());
        assert_eq!(app.state().repos, vec![Repo::new(7, "Elm/repo")]);
    }
}
