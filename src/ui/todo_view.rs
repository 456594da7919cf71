use crate::app::state::{AppState, TodoFocus};
use crate::ui::text_field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // New task input
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // Counts
        ])
        .split(area);

    text_field::render(
        frame,
        chunks[0],
        "Add new task",
        &state.tasks.pending,
        state.todo_focus == TodoFocus::Input,
    );
    render_list(frame, chunks[1], state);
    render_counts(frame, chunks[2], state);
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.todo_focus == TodoFocus::List;
    let (border_style, border_type) = Theme::frame(focused);
    let block = Block::default()
        .title(" Tasks ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let tasks = state.tasks.tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(" Nothing to do.", Theme::muted())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (mark, style) = if task.completed {
                ("[x] ", Theme::task_done())
            } else {
                ("[ ] ", Theme::task_open())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(task.text.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    if focused {
        let mut list_state = ListState::default().with_selected(Some(state.task_cursor.index));
        let list = list.highlight_style(Theme::selected_row());
        frame.render_stateful_widget(list, area, &mut list_state);
    } else {
        frame.render_widget(list, area);
    }
}

fn render_counts(frame: &mut Frame, area: Rect, state: &AppState) {
    let counts = state.tasks.counts();
    let block = Block::default()
        .title(" Summary ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let line = Line::from(vec![
        Span::styled(" Total todos: ", Theme::label()),
        Span::raw(counts.total.to_string()),
        Span::styled("   Completed: ", Theme::label()),
        Span::raw(counts.completed.to_string()),
        Span::styled("   Pending: ", Theme::label()),
        Span::raw(counts.pending.to_string()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
