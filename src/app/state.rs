use crate::app::view::View;
use crate::config::model::UiConfig;
use crate::config::AppConfig;
use crate::model::catalog::CatalogView;
use crate::model::directory::DirectoryEditor;
use crate::model::ids::{PersonId, TaskId};
use crate::model::tasks::TaskTracker;
use tracing::info;

/// How many ticks a status message stays on screen (50ms per tick).
const STATUS_TICKS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFocus {
    Input,
    List,
}

impl TodoFocus {
    pub fn next(self) -> Self {
        match self {
            TodoFocus::Input => TodoFocus::List,
            TodoFocus::List => TodoFocus::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFocus {
    Name,
    Email,
    Role,
    Table,
}

impl UserFocus {
    pub fn next(self) -> Self {
        match self {
            UserFocus::Name => UserFocus::Email,
            UserFocus::Email => UserFocus::Role,
            UserFocus::Role => UserFocus::Table,
            UserFocus::Table => UserFocus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            UserFocus::Name => UserFocus::Table,
            UserFocus::Email => UserFocus::Name,
            UserFocus::Role => UserFocus::Email,
            UserFocus::Table => UserFocus::Role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFocus {
    Category,
    InStock,
    Price,
    Sort,
    Table,
}

impl ProductFocus {
    pub fn next(self) -> Self {
        match self {
            ProductFocus::Category => ProductFocus::InStock,
            ProductFocus::InStock => ProductFocus::Price,
            ProductFocus::Price => ProductFocus::Sort,
            ProductFocus::Sort => ProductFocus::Table,
            ProductFocus::Table => ProductFocus::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ProductFocus::Category => ProductFocus::Table,
            ProductFocus::InStock => ProductFocus::Category,
            ProductFocus::Price => ProductFocus::InStock,
            ProductFocus::Sort => ProductFocus::Price,
            ProductFocus::Table => ProductFocus::Sort,
        }
    }
}

/// Highlighted row in a list or table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
}

impl Selection {
    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    /// Keep the index inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.last(len);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    ticks_left: u32,
}

pub struct AppState {
    pub ui: UiConfig,
    pub view: View,
    pub tasks: TaskTracker,
    pub directory: DirectoryEditor,
    pub catalog: CatalogView,
    pub todo_focus: TodoFocus,
    pub user_focus: UserFocus,
    pub product_focus: ProductFocus,
    pub task_cursor: Selection,
    pub person_cursor: Selection,
    pub product_cursor: Selection,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let AppConfig { ui, seed, .. } = config;
        Self {
            view: ui.start_view,
            tasks: TaskTracker::new(seed.tasks),
            directory: DirectoryEditor::new(seed.people),
            catalog: CatalogView::new(seed.products, ui.price_max, ui.default_sort),
            ui,
            todo_focus: TodoFocus::Input,
            user_focus: UserFocus::Name,
            product_focus: ProductFocus::Category,
            task_cursor: Selection::default(),
            person_cursor: Selection::default(),
            product_cursor: Selection::default(),
            status: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Switch the active widget. Inactive widgets keep their state.
    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            info!(from = %self.view, to = %view, "view switched");
            self.view = view;
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        match self.view {
            View::Todo => self.todo_focus = self.todo_focus.next(),
            View::User => {
                self.user_focus = if forward {
                    self.user_focus.next()
                } else {
                    self.user_focus.prev()
                }
            }
            View::Product => {
                self.product_focus = if forward {
                    self.product_focus.next()
                } else {
                    self.product_focus.prev()
                }
            }
        }
        self.dirty = true;
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.tasks().get(self.task_cursor.index).map(|t| t.id)
    }

    pub fn selected_person_id(&self) -> Option<PersonId> {
        self.directory
            .people()
            .get(self.person_cursor.index)
            .map(|p| p.id)
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            ticks_left: STATUS_TICKS,
        });
        self.dirty = true;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            ticks_left: STATUS_TICKS,
        });
        self.dirty = true;
    }

    /// Age the status message; it disappears once its time is up.
    pub fn tick(&mut self) {
        if let Some(status) = self.status.as_mut() {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref status) = self.status {
            return status.text.clone();
        }
        match self.view {
            View::Todo => {
                let c = self.tasks.counts();
                format!("Tasks: {} done / {} total", c.completed, c.total)
            }
            View::User => {
                let mode = if self.directory.is_editing() {
                    "editing"
                } else {
                    "adding"
                };
                format!("Users: {} | {}", self.directory.people().len(), mode)
            }
            View::Product => format!(
                "Products: {}/{} shown",
                self.catalog.visible().len(),
                self.catalog.products().len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_after_shrink() {
        let mut sel = Selection { index: 4 };
        sel.clamp(3);
        assert_eq!(sel.index, 2);
        sel.clamp(0);
        assert_eq!(sel.index, 0);
        sel.move_down(1);
        assert_eq!(sel.index, 0);
    }

    #[test]
    fn test_switching_views_keeps_widget_state() {
        let mut state = AppState::new(AppConfig::default());
        state.tasks.add("kept across switches");
        state.set_view(View::Product);
        state.set_view(View::Todo);
        assert_eq!(state.tasks.tasks().len(), 4);
    }

    #[test]
    fn test_status_expires() {
        let mut state = AppState::new(AppConfig::default());
        state.set_error("boom");
        assert_eq!(state.status_line(), "boom");
        for _ in 0..STATUS_TICKS {
            state.tick();
        }
        assert!(state.status.is_none());
        assert_eq!(state.status_line(), "Tasks: 1 done / 3 total");
    }

    #[test]
    fn test_focus_cycles_within_active_view() {
        let mut state = AppState::new(AppConfig::default());
        state.set_view(View::User);
        state.cycle_focus(false);
        assert_eq!(state.user_focus, UserFocus::Table);
        assert_eq!(state.todo_focus, TodoFocus::Input);
    }
}
