use crate::ui::app::App;
use crate::ui::search::SearchIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if let Some(intent) = key_intent(&app.state().query, key) {
        app.dispatch(intent);
    }
}

/// Map a key press onto a search intent.
///
/// The query field is never mutated in place: every edit produces a
/// `QueryChanged` carrying the complete new text.
pub fn key_intent(query: &str, key: KeyEvent) -> Option<SearchIntent> {
    match key.code {
        KeyCode::Enter => Some(SearchIntent::SearchRequested),
        KeyCode::Backspace => {
            let mut next = query.to_string();
            next.pop()?;
            Some(SearchIntent::QueryChanged(next))
        }
        _ if is_ctrl_char(key, 'u') => Some(SearchIntent::QueryChanged(String::new())),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut next = query.to_string();
            next.push(ch);
            Some(SearchIntent::QueryChanged(next))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn char_appends_to_query() {
        let intent = key_intent("El", key(KeyCode::Char('m'), KeyModifiers::NONE));
        assert_eq!(intent, Some(SearchIntent::QueryChanged("Elm".to_string())));
    }

    #[test]
    fn shifted_char_is_text() {
        let intent = key_intent("", key(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert_eq!(intent, Some(SearchIntent::QueryChanged("R".to_string())));
    }

    #[test]
    fn backspace_removes_last_char() {
        let intent = key_intent("Rust", key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(intent, Some(SearchIntent::QueryChanged("Rus".to_string())));
    }

    #[test]
    fn backspace_on_empty_query_is_ignored() {
        assert_eq!(key_intent("", key(KeyCode::Backspace, KeyModifiers::NONE)), None);
    }

    #[test]
    fn ctrl_u_clears_query() {
        let intent = key_intent("Rust", key(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(intent, Some(SearchIntent::QueryChanged(String::new())));
    }

    #[test]
    fn enter_requests_search() {
        let intent = key_intent("Rust", key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(intent, Some(SearchIntent::SearchRequested));
    }

    #[test]
    fn other_control_chords_are_ignored() {
        assert_eq!(key_intent("x", key(KeyCode::Char('k'), KeyModifiers::CONTROL)), None);
        assert_eq!(key_intent("x", key(KeyCode::Up, KeyModifiers::NONE)), None);
    }
}
