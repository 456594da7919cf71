use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::view::View;
use crate::model::catalog::FilterUpdate;
use crate::model::directory::Submitted;
use crate::model::field::TextField;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Right => {
                state.set_view(state.view.next());
                return vec![];
            }
            KeyCode::Left => {
                state.set_view(state.view.prev());
                return vec![];
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::F(n @ 1..=3) => {
            state.set_view(View::ALL[usize::from(n) - 1]);
            return vec![];
        }
        KeyCode::Tab => {
            state.cycle_focus(true);
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus(false);
            return vec![];
        }
        _ => {}
    }

    match state.view {
        View::Todo => handle_todo_key(state, key),
        View::User => handle_user_key(state, key),
        View::Product => handle_product_key(state, key),
    }
}

/// Apply a line-editing key to a text field. Returns false if the key is not
/// an editing key.
fn edit_field(field: &mut TextField, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => field.delete_word_back(),
        KeyCode::Char('a') if ctrl => field.move_home(),
        KeyCode::Char('e') if ctrl => field.move_end(),
        KeyCode::Char(c) if !ctrl => field.insert_char(c),
        KeyCode::Backspace => field.delete_back(),
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => return false,
    }
    true
}

// --- Todo ---

fn handle_todo_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match state.todo_focus {
        TodoFocus::Input => match key.code {
            KeyCode::Enter => {
                if state.tasks.submit_pending().is_some() {
                    state.task_cursor.last(state.tasks.tasks().len());
                }
            }
            KeyCode::Down => state.todo_focus = TodoFocus::List,
            _ => {
                edit_field(&mut state.tasks.pending, key);
            }
        },
        TodoFocus::List => {
            let len = state.tasks.tasks().len();
            match key.code {
                KeyCode::Up => state.task_cursor.move_up(),
                KeyCode::Down => state.task_cursor.move_down(len),
                KeyCode::Home => state.task_cursor.index = 0,
                KeyCode::End => state.task_cursor.last(len),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(id) = state.selected_task_id() {
                        state.tasks.toggle_complete(id);
                    }
                }
                KeyCode::Delete | KeyCode::Char('d') => {
                    if let Some(id) = state.selected_task_id() {
                        state.tasks.remove(id);
                        state.task_cursor.clamp(state.tasks.tasks().len());
                    }
                }
                KeyCode::Esc => state.todo_focus = TodoFocus::Input,
                _ => {}
            }
        }
    }
    vec![]
}

// --- User directory ---

fn handle_user_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Esc {
        state.directory.cancel_edit();
        return vec![];
    }

    match state.user_focus {
        UserFocus::Name | UserFocus::Email => match key.code {
            KeyCode::Enter => return submit_person(state),
            KeyCode::Up => state.user_focus = state.user_focus.prev(),
            KeyCode::Down => state.user_focus = state.user_focus.next(),
            _ => {
                let field = if state.user_focus == UserFocus::Name {
                    &mut state.directory.form.name
                } else {
                    &mut state.directory.form.email
                };
                edit_field(field, key);
            }
        },
        UserFocus::Role => match key.code {
            KeyCode::Enter => return submit_person(state),
            KeyCode::Left => state.directory.form.role = state.directory.form.role.prev(),
            KeyCode::Right | KeyCode::Char(' ') => {
                state.directory.form.role = state.directory.form.role.next()
            }
            KeyCode::Up => state.user_focus = state.user_focus.prev(),
            KeyCode::Down => state.user_focus = state.user_focus.next(),
            _ => {}
        },
        UserFocus::Table => {
            let len = state.directory.people().len();
            match key.code {
                KeyCode::Up => state.person_cursor.move_up(),
                KeyCode::Down => state.person_cursor.move_down(len),
                KeyCode::Home => state.person_cursor.index = 0,
                KeyCode::End => state.person_cursor.last(len),
                KeyCode::Enter | KeyCode::Char('e') => {
                    if let Some(id) = state.selected_person_id() {
                        state.directory.start_edit_by_id(id);
                        state.user_focus = UserFocus::Name;
                    }
                }
                KeyCode::Delete | KeyCode::Char('d') => {
                    if let Some(id) = state.selected_person_id() {
                        state.directory.remove(id);
                        state.person_cursor.clamp(state.directory.people().len());
                    }
                }
                _ => {}
            }
        }
    }
    vec![]
}

fn submit_person(state: &mut AppState) -> Vec<Action> {
    match state.directory.submit() {
        Ok(Submitted::Created(id)) => {
            state.person_cursor.last(state.directory.people().len());
            state.user_focus = UserFocus::Name;
            state.set_status(format!("Added user #{}", id));
            vec![]
        }
        Ok(Submitted::Updated(id)) => {
            state.user_focus = UserFocus::Table;
            state.set_status(format!("Updated user #{}", id));
            vec![]
        }
        Err(e) => {
            debug!(error = %e, "submit rejected");
            state.set_error(format!("Cannot save user: {}", e));
            if state.ui.bell_on_reject {
                vec![Action::Bell]
            } else {
                vec![]
            }
        }
    }
}

// --- Product catalog ---

fn handle_product_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let step = state.ui.price_step;
    match state.product_focus {
        ProductFocus::Category => match key.code {
            KeyCode::Left => state.catalog.cycle_category(false),
            KeyCode::Right | KeyCode::Char(' ') => state.catalog.cycle_category(true),
            _ => {}
        },
        ProductFocus::InStock => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                let in_stock_only = !state.catalog.filter().in_stock_only;
                state.catalog.set_filter(FilterUpdate {
                    in_stock_only: Some(in_stock_only),
                    ..Default::default()
                });
            }
        }
        ProductFocus::Price => match key.code {
            KeyCode::Left => state.catalog.nudge_price(-step),
            KeyCode::Right => state.catalog.nudge_price(step),
            KeyCode::Home => state.catalog.set_filter(FilterUpdate {
                price_range: Some(0.0),
                ..Default::default()
            }),
            KeyCode::End => {
                let max = state.catalog.price_max();
                state.catalog.set_filter(FilterUpdate {
                    price_range: Some(max),
                    ..Default::default()
                });
            }
            _ => {}
        },
        ProductFocus::Sort => match key.code {
            KeyCode::Left => state.catalog.set_sort_key(state.catalog.sort_key().prev()),
            KeyCode::Right | KeyCode::Char(' ') => {
                state.catalog.set_sort_key(state.catalog.sort_key().next())
            }
            _ => {}
        },
        ProductFocus::Table => {
            let len = state.catalog.visible().len();
            match key.code {
                KeyCode::Up => state.product_cursor.move_up(),
                KeyCode::Down => state.product_cursor.move_down(len),
                KeyCode::Home => state.product_cursor.index = 0,
                KeyCode::End => state.product_cursor.last(len),
                _ => {}
            }
        }
    }
    state.product_cursor.clamp(state.catalog.visible().len());
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::catalog::{CategoryFilter, SortKey};
    use crate::model::directory::{EditMode, Role};
    use crate::model::ids::RecordId;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn ctrl(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::CONTROL);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = state();
        assert_eq!(ctrl(&mut state, KeyCode::Char('c')), vec![Action::Quit]);
    }

    #[test]
    fn test_view_switching() {
        let mut state = state();
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.view, View::Product);
        ctrl(&mut state, KeyCode::Right);
        assert_eq!(state.view, View::Todo);
        ctrl(&mut state, KeyCode::Left);
        assert_eq!(state.view, View::Product);
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.view, View::User);
    }

    #[test]
    fn test_typing_and_enter_adds_task() {
        let mut state = state();
        type_text(&mut state, "Walk the dog");
        press(&mut state, KeyCode::Enter);
        let last = state.tasks.tasks().last().unwrap();
        assert_eq!(last.text, "Walk the dog");
        assert_eq!(state.tasks.pending.as_str(), "");
        assert_eq!(state.task_cursor.index, 3);
    }

    #[test]
    fn test_blank_enter_adds_nothing() {
        let mut state = state();
        type_text(&mut state, "   ");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.tasks.tasks().len(), 3);
    }

    #[test]
    fn test_list_toggle_and_delete() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.tasks.get(RecordId(2)).unwrap().completed);

        press(&mut state, KeyCode::End);
        press(&mut state, KeyCode::Char('d'));
        assert!(state.tasks.get(RecordId(3)).is_none());
        assert_eq!(state.task_cursor.index, 1);
    }

    #[test]
    fn test_add_user_through_form() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "Ada Lovelace");
        press(&mut state, KeyCode::Down);
        type_text(&mut state, "ada@example.com");
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Right);
        assert!(press(&mut state, KeyCode::Enter).is_empty());

        let last = state.directory.people().last().unwrap();
        assert_eq!(last.name, "Ada Lovelace");
        assert_eq!(last.email, "ada@example.com");
        assert_eq!(last.role, Role::Editor);
        assert_eq!(state.directory.form.name.as_str(), "");
    }

    #[test]
    fn test_incomplete_user_rings_bell() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "No Email");
        assert_eq!(press(&mut state, KeyCode::Enter), vec![Action::Bell]);
        assert_eq!(state.directory.people().len(), 3);
        assert!(state.status.as_ref().unwrap().is_error);
        assert_eq!(state.directory.form.name.as_str(), "No Email");

        state.ui.bell_on_reject = false;
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn test_edit_user_from_table() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.directory.mode(), EditMode::Edit(RecordId(2)));
        assert_eq!(state.user_focus, UserFocus::Name);

        press(&mut state, KeyCode::End);
        type_text(&mut state, " Jr");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.directory.get(RecordId(2)).unwrap().name, "Jane Smith Jr");
        assert_eq!(state.directory.mode(), EditMode::Create);
    }

    #[test]
    fn test_esc_cancels_edit() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::Enter);
        assert!(state.directory.is_editing());
        press(&mut state, KeyCode::Esc);
        assert!(!state.directory.is_editing());
        assert_eq!(state.directory.form.name.as_str(), "");
    }

    #[test]
    fn test_delete_user_under_edit() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::Delete);
        assert_eq!(state.directory.people().len(), 2);
        assert_eq!(state.directory.mode(), EditMode::Create);
    }

    #[test]
    fn test_product_controls() {
        let mut state = state();
        press(&mut state, KeyCode::F(3));
        press(&mut state, KeyCode::Right);
        assert_eq!(
            state.catalog.filter().category,
            CategoryFilter::Named("Electronics".into())
        );

        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.catalog.filter().in_stock_only);

        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.catalog.filter().price_range, 990.0);
        press(&mut state, KeyCode::Home);
        assert_eq!(state.catalog.filter().price_range, 0.0);
        assert!(state.catalog.visible().is_empty());
        press(&mut state, KeyCode::End);
        assert_eq!(state.catalog.filter().price_range, 1000.0);

        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.catalog.sort_key(), SortKey::PriceLow);

        let names: Vec<_> = state.catalog.visible().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, ["Monitor", "Smartphone", "Laptop"]);
    }

    #[test]
    fn test_product_cursor_follows_shrinking_view() {
        let mut state = state();
        press(&mut state, KeyCode::F(3));
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::End);
        assert_eq!(state.product_cursor.index, 5);

        state.product_focus = ProductFocus::InStock;
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.product_cursor.index, 3);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = state();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(state.tasks.pending.as_str(), "");
    }
}
