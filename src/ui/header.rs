use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(searching: bool, result_count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if searching {
            ("● searching", Style::default().fg(STATUS_BUSY))
        } else {
            ("● idle", Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Search",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{result_count} repositories"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
