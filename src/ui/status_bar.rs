use crate::app::state::*;
use crate::app::view::View;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let is_error = state.status.as_ref().map(|s| s.is_error).unwrap_or(false);
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        if is_error {
            Theme::status_error()
        } else {
            Theme::status_bar()
        },
    ));

    // Focus indicator
    let focus_name = match state.view {
        View::Todo => match state.todo_focus {
            TodoFocus::Input => "NEW TASK",
            TodoFocus::List => "TASKS",
        },
        View::User => match state.user_focus {
            UserFocus::Name => "NAME",
            UserFocus::Email => "EMAIL",
            UserFocus::Role => "ROLE",
            UserFocus::Table => "USERS",
        },
        View::Product => match state.product_focus {
            ProductFocus::Category => "CATEGORY",
            ProductFocus::InStock => "STOCK",
            ProductFocus::Price => "PRICE",
            ProductFocus::Sort => "SORT",
            ProductFocus::Table => "PRODUCTS",
        },
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
