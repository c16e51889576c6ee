use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub query: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        query: chunks[1],
        results: chunks[2],
        footer: chunks[3],
    }
}
