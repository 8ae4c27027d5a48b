//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::core::task::TaskList;

/// Creates a test App with no tasks.
pub fn empty_app() -> App {
    App::new(TaskList::new())
}

/// Creates a test App already holding the given task texts.
pub fn app_with_tasks(texts: &[&str]) -> App {
    let list = TaskList::from_texts(texts.iter().map(|s| s.to_string()).collect());
    App::new(list)
}
