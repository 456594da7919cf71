//! Task list widget state.

use super::field::TextField;
use super::ids::{IdGen, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug)]
pub struct TaskTracker {
    tasks: Vec<Task>,
    pub pending: TextField,
    ids: IdGen,
}

impl TaskTracker {
    pub fn new(seed: Vec<Task>) -> Self {
        let ids = IdGen::after(seed.iter().map(|t| t.id));
        Self {
            tasks: seed,
            pending: TextField::new(),
            ids,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task. Blank text is ignored and leaves the pending input as is.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.ids.allocate();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        self.pending.clear();
        debug!(%id, "task added");
        Some(id)
    }

    /// Add whatever is in the pending input.
    pub fn submit_pending(&mut self) -> Option<TaskId> {
        let text = self.pending.as_str().to_string();
        self.add(&text)
    }

    pub fn toggle_complete(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            debug!(%id, completed = task.completed, "task toggled");
        }
    }

    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            debug!(%id, "task removed");
        }
    }

    pub fn counts(&self) -> TaskCounts {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::RecordId;

    fn seeded() -> TaskTracker {
        TaskTracker::new(vec![
            Task {
                id: RecordId(1),
                text: "Learn React Basics".into(),
                completed: true,
            },
            Task {
                id: RecordId(2),
                text: "Practice useState Hook".into(),
                completed: false,
            },
            Task {
                id: RecordId(3),
                text: "Build Todo App".into(),
                completed: false,
            },
        ])
    }

    #[test]
    fn test_counts_add_up() {
        let mut tracker = seeded();
        let c = tracker.counts();
        assert_eq!((c.total, c.completed, c.pending), (3, 1, 2));

        tracker.add("Write tests");
        tracker.toggle_complete(RecordId(2));
        let c = tracker.counts();
        assert_eq!(c.completed + c.pending, c.total);
        assert_eq!((c.total, c.completed), (4, 2));
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let mut tracker = seeded();
        tracker.pending.set("   ");
        assert_eq!(tracker.submit_pending(), None);
        assert_eq!(tracker.add(""), None);
        assert_eq!(tracker.tasks().len(), 3);
        assert_eq!(tracker.pending.as_str(), "   ");
    }

    #[test]
    fn test_add_appends_and_clears_pending() {
        let mut tracker = seeded();
        tracker.pending.set("Ship it");
        let id = tracker.submit_pending().unwrap();
        assert_eq!(id, RecordId(4));
        let last = tracker.tasks().last().unwrap();
        assert_eq!(last.text, "Ship it");
        assert!(!last.completed);
        assert_eq!(tracker.pending.as_str(), "");
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut tracker = TaskTracker::new(Vec::new());
        let ids: Vec<_> = (0..50).filter_map(|i| tracker.add(&format!("t{i}"))).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut tracker = seeded();
        tracker.toggle_complete(RecordId(1));
        assert!(!tracker.get(RecordId(1)).unwrap().completed);
        tracker.toggle_complete(RecordId(1));
        assert!(tracker.get(RecordId(1)).unwrap().completed);
        tracker.toggle_complete(RecordId(99));
        assert_eq!(tracker.tasks().len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut tracker = seeded();
        tracker.remove(RecordId(2));
        assert_eq!(tracker.tasks().len(), 2);
        assert!(tracker.get(RecordId(2)).is_none());

        tracker.remove(RecordId(2));
        assert_eq!(tracker.tasks().len(), 2);
    }

    #[test]
    fn test_removed_id_is_not_reused() {
        let mut tracker = seeded();
        tracker.remove(RecordId(3));
        assert_eq!(tracker.add("again"), Some(RecordId(4)));
    }
}
