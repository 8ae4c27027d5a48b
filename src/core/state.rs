//! # Application State
//!
//! Core business state for tuido. This module contains domain state only -
//! no TUI-specific types. Presentation state (selection, input buffer,
//! input mode) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tasks: TaskList            // the ordered to-do items
//! ├── status_message: String     // transient status line text
//! └── warning: Option<String>    // blocking modal warning, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::task::TaskList;

pub struct App {
    pub tasks: TaskList,
    pub status_message: String,
    /// Pending blocking warning. While this is `Some`, the event loop
    /// routes nothing but the dismissal, mirroring a modal alert.
    pub warning: Option<String>,
}

impl App {
    /// Build the session state around an already-loaded task list.
    ///
    /// Loading happens before the App exists (and never triggers a save),
    /// so the constructor only has to describe what it was given.
    pub fn new(tasks: TaskList) -> Self {
        let status_message = if tasks.is_empty() {
            String::from("Welcome to tuido!")
        } else {
            format!("Restored {} task(s)", tasks.len())
        };
        Self {
            tasks,
            status_message,
            warning: None,
        }
    }
}
