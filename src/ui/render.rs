use crate::search::Repo;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search::SearchState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

const QUERY_PLACEHOLDER: &str = "Type something";

/// Render one frame from a committed state snapshot.
pub fn draw(frame: &mut Frame<'_>, state: &SearchState, searching: bool) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::widget(searching, state.repos.len()), regions.header);

    let query_block = Block::default()
        .title(Span::styled(" Query ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let query_line = if state.query.is_empty() {
        Line::from(Span::styled(
            QUERY_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            state.query.clone(),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    frame.render_widget(Paragraph::new(query_line).block(query_block), regions.query);

    let inner_width = regions.query.width.saturating_sub(2);
    if inner_width > 0 && regions.query.height > 2 {
        let offset = (state.query.chars().count() as u16).min(inner_width - 1);
        frame.set_cursor_position((regions.query.x + 1 + offset, regions.query.y + 1));
    }

    let results_block = Block::default()
        .title(Span::styled(" Repositories ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if state.is_loading() {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(MUTED_TEXT),
        )))
        .block(results_block);
        frame.render_widget(loading, regions.results);
    } else {
        let items: Vec<ListItem> = state.repos.iter().map(repo_item).collect();
        frame.render_widget(List::new(items).block(results_block), regions.results);
    }

    frame.render_widget(Footer::widget(regions.footer), regions.footer);
}

fn repo_item(repo: &Repo) -> ListItem<'static> {
    let name = Line::from(Span::styled(
        repo.name.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ));
    let description = Line::from(Span::styled(
        repo.description.clone().unwrap_or_default(),
        Style::default().fg(MUTED_TEXT),
    ));
    ListItem::new(vec![name, description])
}
