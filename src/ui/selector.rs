use crate::app::state::AppState;
use crate::app::view::View;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" F{} {} ", i + 1, view.title())))
        .collect();
    let selected = View::ALL
        .iter()
        .position(|v| *v == state.view)
        .unwrap_or(0);

    let block = Block::default()
        .title(" statedeck ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::muted()));
    frame.render_widget(tabs, area);
}
