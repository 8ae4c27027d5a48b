//! # Task List Model
//!
//! The in-memory source of truth: an ordered list of task texts.
//!
//! A [`Task`] is nothing but its display text; there is no id and no
//! status field. The list's invariant is that memory order, rendered row
//! order, and persisted order are always the same, so a task's index in
//! the list doubles as its row handle everywhere else in the app.
//!
//! Construction is guarded: text is trimmed on the way in and a task that
//! would be empty after trimming cannot exist. `Serialize` is transparent,
//! so a whole list serializes as a bare JSON array of strings.

use serde::Serialize;

/// A single to-do item, represented solely by its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Task {
    text: String,
}

impl Task {
    /// Trim `raw` and build a task from what remains. Returns `None` when
    /// nothing remains; blank tasks are unrepresentable.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered collection of current tasks. Insertion order is display order.
///
/// Tasks need not be unique; removal is therefore by index (the row
/// handle), never by text match.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lift stored strings back into tasks at startup.
    ///
    /// Entries that trim to empty are dropped: they can only come from a
    /// hand-edited store file and have no valid task representation.
    pub fn from_texts(texts: Vec<String>) -> Self {
        let tasks = texts.iter().filter_map(|t| Task::parse(t)).collect();
        Self { tasks }
    }

    /// Append a task parsed from `raw` and return it.
    ///
    /// Returns `None` without mutating anything when `raw` trims to empty;
    /// the caller is responsible for surfacing that to the user.
    pub fn add(&mut self, raw: &str) -> Option<&Task> {
        let task = Task::parse(raw)?;
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Remove and return the task at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Read-only snapshot in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
