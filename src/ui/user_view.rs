use crate::app::state::{AppState, UserFocus};
use crate::model::directory::{EditMode, Role};
use crate::ui::layout::split_form;
use crate::ui::text_field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (form_area, table_area) = split_form(area, 42);
    render_form(frame, form_area, state);
    render_table(frame, table_area, state);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.directory.is_editing() {
        " Edit User "
    } else {
        " Add New User "
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Role
            Constraint::Min(0),    // Help
        ])
        .split(inner);

    let form = &state.directory.form;
    text_field::render(
        frame,
        chunks[0],
        "Name",
        &form.name,
        state.user_focus == UserFocus::Name,
    );
    text_field::render(
        frame,
        chunks[1],
        "Email",
        &form.email,
        state.user_focus == UserFocus::Email,
    );
    render_role(frame, chunks[2], form.role, state.user_focus == UserFocus::Role);

    let submit = if state.directory.is_editing() {
        "Update User"
    } else {
        "Add User"
    };
    let mut help = vec![Line::from(vec![
        Span::styled(" Enter", Theme::label()),
        Span::styled(format!(" {}", submit), Style::default().fg(Theme::TEXT_SECONDARY)),
    ])];
    if state.directory.is_editing() {
        help.push(Line::from(vec![
            Span::styled(" Esc", Theme::label()),
            Span::styled(" Cancel", Style::default().fg(Theme::TEXT_SECONDARY)),
        ]));
    }
    frame.render_widget(Paragraph::new(help), chunks[3]);
}

fn render_role(frame: &mut Frame, area: Rect, current: Role, focused: bool) {
    let (border_style, border_type) = Theme::frame(focused);
    let block = Block::default()
        .title(" Role ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let mut spans = Vec::new();
    for role in Role::ALL {
        let style = if role == current {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", role), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.user_focus == UserFocus::Table;
    let (border_style, border_type) = Theme::frame(focused);
    let people = state.directory.people();
    let block = Block::default()
        .title(format!(" Users ({}) ", people.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let editing = match state.directory.mode() {
        EditMode::Edit(id) => Some(id),
        EditMode::Create => None,
    };

    let rows: Vec<Row> = people
        .iter()
        .map(|p| {
            let marker = if editing == Some(p.id) { "✎" } else { " " };
            Row::new(vec![
                marker.to_string(),
                p.name.clone(),
                p.email.clone(),
                p.role.to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Percentage(35),
        Constraint::Percentage(45),
        Constraint::Min(6),
    ];
    let header = Row::new(vec!["", "Name", "Email", "Role"]).style(Theme::header());
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::selected_row());

    if focused {
        let mut table_state = TableState::default().with_selected(Some(state.person_cursor.index));
        frame.render_stateful_widget(table, area, &mut table_state);
    } else {
        frame.render_widget(table, area);
    }
}
