mod layout;
mod product_view;
mod selector;
mod status_bar;
mod text_field;
mod theme;
mod todo_view;
mod user_view;

use crate::app::state::AppState;
use crate::app::view::View;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    selector::render(frame, app_layout.selector, state);
    match state.view {
        View::Todo => todo_view::render(frame, app_layout.body, state),
        View::User => user_view::render(frame, app_layout.body, state),
        View::Product => product_view::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::catalog::FilterUpdate;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| render(f, state)).expect("draw frame");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn todo_view_shows_tasks_and_counts() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(screen.contains("F1 Todo List"));
        assert!(screen.contains("[x] Learn React Basics"));
        assert!(screen.contains("[ ] Build Todo App"));
        assert!(screen.contains("Total todos: 3"));
        assert!(screen.contains("Completed: 1"));
        assert!(screen.contains("Pending: 2"));
    }

    #[test]
    fn user_view_title_follows_mode() {
        let mut state = AppState::new(AppConfig::default());
        state.set_view(View::User);
        let screen = draw(&state);
        assert!(screen.contains("Add New User"));
        assert!(screen.contains("Users (3)"));
        assert!(screen.contains("jane@example.com"));

        state.directory.start_edit_by_id(crate::model::ids::RecordId(1));
        let screen = draw(&state);
        assert!(screen.contains("Edit User"));
        assert!(screen.contains("Update User"));
    }

    #[test]
    fn product_view_renders_rows_and_summary() {
        let mut state = AppState::new(AppConfig::default());
        state.set_view(View::Product);
        let screen = draw(&state);
        assert!(screen.contains("Headphones"));
        assert!(screen.contains("$999.99"));
        assert!(screen.contains("Out of Stock"));
        assert!(screen.contains("Showing 6 of 6 products"));
        assert!(screen.contains("Max Price: $1000"));
    }

    #[test]
    fn product_view_empty_state() {
        let mut state = AppState::new(AppConfig::default());
        state.set_view(View::Product);
        state.catalog.set_filter(FilterUpdate {
            price_range: Some(10.0),
            ..Default::default()
        });
        let screen = draw(&state);
        assert!(screen.contains("No products match your filters"));
        assert!(screen.contains("Showing 0 of 6 products"));
    }

    #[test]
    fn error_status_is_shown() {
        let mut state = AppState::new(AppConfig::default());
        state.set_error("Cannot save user: email is required");
        let screen = draw(&state);
        assert!(screen.contains("Cannot save user: email is required"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let state = AppState::new(AppConfig::default());
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| render(f, &state)).expect("draw frame");
    }
}
