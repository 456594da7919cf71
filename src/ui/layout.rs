use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub selector: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // View selector
            Constraint::Min(5),    // Active widget
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        selector: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Split a widget body into a form column and a content column.
pub fn split_form(area: Rect, form_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(form_width), Constraint::Min(30)])
        .split(area);
    (chunks[0], chunks[1])
}
