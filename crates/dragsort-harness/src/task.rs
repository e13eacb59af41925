//! Task records and the board that owns them.
//!
//! [`TaskBoard`] plays the host role for a [`DragList<Task>`]: it receives
//! haptic pulses, scroll requests and committed orders, and it is the place
//! add / toggle / edit / delete happen before the new task set is pushed
//! back into the list.
//!
//! [`DragList<Task>`]: dragsort_list::DragList

use dragsort_list::{HapticIntensity, Keyed, ListHost, ReorderRejected};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

pub const DEFAULT_CATEGORY: &str = "Personal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A single task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub category: String,
    pub priority: Priority,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_date: Option<String>,
    /// `HH:mm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_time: Option<String>,
    pub completed: bool,
}

impl Keyed for Task {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// Fields supplied when creating a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub deadline_date: Option<String>,
    pub deadline_time: Option<String>,
}

impl TaskDraft {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub deadline_date: Option<String>,
    pub deadline_time: Option<String>,
}

/// Ordered task store acting as the list's host.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: u64,
    reject_reorders: bool,
    pub haptics: Vec<HapticIntensity>,
    pub scrolls: Vec<f32>,
    pub reorders: usize,
    pub rejected_reorders: usize,
}

impl TaskBoard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Board holding `drafts` in the given order, numbered from 1.
    pub fn seeded(drafts: impl IntoIterator<Item = TaskDraft>) -> Result<Self> {
        let mut board = Self::new();
        for draft in drafts {
            let task = board.build(draft)?;
            board.tasks.push(task);
        }
        Ok(board)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.tasks.iter().map(|t| t.id).collect()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Make subsequent reorders fail.
    pub fn set_reject_reorders(&mut self, reject: bool) {
        self.reject_reorders = reject;
    }

    /// Create a task at the top of the board. Returns its id.
    pub fn add(&mut self, draft: TaskDraft) -> Result<u64> {
        let task = self.build(draft)?;
        let id = task.id;
        self.tasks.insert(0, task);
        tracing::debug!(id, "task added");
        Ok(id)
    }

    /// Flip completion. Returns the new state.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn edit(&mut self, id: u64, edit: TaskEdit) -> Result<()> {
        let title = match edit.title {
            Some(title) => Some(clean_title(&title)?),
            None => None,
        };
        let task = self.find_mut(id)?;
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = edit.description {
            task.description = description;
        }
        if let Some(category) = edit.category {
            task.category = category;
        }
        if let Some(priority) = edit.priority {
            task.priority = priority;
        }
        if edit.deadline_date.is_some() {
            task.deadline_date = edit.deadline_date;
        }
        if edit.deadline_time.is_some() {
            task.deadline_time = edit.deadline_time;
        }
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(HarnessError::UnknownTask { id })?;
        tracing::debug!(id, "task deleted");
        Ok(self.tasks.remove(index))
    }

    fn build(&mut self, draft: TaskDraft) -> Result<Task> {
        let title = clean_title(&draft.title)?;
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        Ok(Task {
            id,
            title,
            description: draft.description,
            category: draft
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            priority: draft.priority.unwrap_or_default(),
            deadline_date: draft.deadline_date,
            deadline_time: draft.deadline_time,
            completed: false,
        })
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(HarnessError::UnknownTask { id })
    }
}

fn clean_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(HarnessError::InvalidTask {
            message: "title must not be blank".to_string(),
        });
    }
    Ok(title.to_string())
}

impl ListHost<Task> for TaskBoard {
    fn haptic(&mut self, intensity: HapticIntensity) {
        self.haptics.push(intensity);
    }

    fn scroll_to(&mut self, offset: f32) {
        self.scrolls.push(offset);
    }

    fn on_reorder(&mut self, items: &[Task]) -> std::result::Result<(), ReorderRejected> {
        if self.reject_reorders {
            self.rejected_reorders += 1;
            return Err(ReorderRejected::new("task store unavailable"));
        }
        // Completion flags and edits live on the board; only adopt the order.
        let mut reordered = Vec::with_capacity(self.tasks.len());
        for item in items {
            if let Some(index) = self.tasks.iter().position(|t| t.id == item.id) {
                reordered.push(self.tasks.remove(index));
            }
        }
        reordered.append(&mut self.tasks);
        self.tasks = reordered;
        self.reorders += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(titles: &[&str]) -> TaskBoard {
        TaskBoard::seeded(titles.iter().map(|t| TaskDraft::titled(*t))).expect("seed")
    }

    #[test]
    fn seeded_tasks_keep_order_and_defaults() {
        let board = board(&["a", "b"]);
        assert_eq!(board.ids(), vec![1, 2]);
        let first = board.get(1).expect("task 1");
        assert_eq!(first.category, "Personal");
        assert_eq!(first.priority, Priority::Medium);
        assert!(!first.completed);
    }

    #[test]
    fn add_prepends_with_fresh_id() {
        let mut board = board(&["a", "b"]);
        let id = board
            .add(TaskDraft {
                title: "  urgent  ".to_string(),
                priority: Some(Priority::High),
                category: Some("Work".to_string()),
                ..TaskDraft::default()
            })
            .expect("add");
        assert_eq!(id, 3);
        assert_eq!(board.ids(), vec![3, 1, 2]);
        let task = board.get(3).expect("task 3");
        assert_eq!(task.title, "urgent");
        assert_eq!(task.category, "Work");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut board = TaskBoard::new();
        assert!(matches!(
            board.add(TaskDraft::titled("   ")),
            Err(HarnessError::InvalidTask { .. })
        ));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn toggle_edit_delete() {
        let mut board = board(&["a", "b", "c"]);
        assert!(board.toggle(2).expect("toggle"));
        assert!(!board.toggle(2).expect("toggle"));

        board
            .edit(
                3,
                TaskEdit {
                    title: Some("c2".to_string()),
                    deadline_date: Some("2026-01-31".to_string()),
                    ..TaskEdit::default()
                },
            )
            .expect("edit");
        let task = board.get(3).expect("task 3");
        assert_eq!(task.title, "c2");
        assert_eq!(task.deadline_date.as_deref(), Some("2026-01-31"));

        assert_eq!(board.delete(1).expect("delete").title, "a");
        assert_eq!(board.ids(), vec![2, 3]);
        assert!(matches!(
            board.delete(1),
            Err(HarnessError::UnknownTask { id: 1 })
        ));
    }

    #[test]
    fn reorder_adopts_order_but_keeps_board_state() {
        let mut board = board(&["a", "b", "c"]);
        let mut stale = board.tasks().to_vec();
        board.toggle(1).expect("toggle");
        stale.rotate_left(1);
        board.on_reorder(&stale).expect("reorder");
        assert_eq!(board.ids(), vec![2, 3, 1]);
        assert!(board.get(1).expect("task 1").completed);
        assert_eq!(board.reorders, 1);
    }

    #[test]
    fn rejecting_board_keeps_order() {
        let mut board = board(&["a", "b"]);
        board.set_reject_reorders(true);
        let mut swapped = board.tasks().to_vec();
        swapped.reverse();
        assert!(board.on_reorder(&swapped).is_err());
        assert_eq!(board.ids(), vec![1, 2]);
        assert_eq!(board.rejected_reorders, 1);
    }
}
