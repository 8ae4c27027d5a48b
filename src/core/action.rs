//! # Actions
//!
//! Everything that can happen in tuido becomes an `Action`.
//! User submits the input field? That's `Action::Submit(text)`.
//! User activates a row's removal control? That's `Action::Remove(index)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the event loop what side effect to run. No I/O happens
//! here.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes the whole task flow testable without a terminal or a
//! filesystem: feed actions, assert on the list and the returned effects.

use crate::core::state::App;

/// Warning text for a submit attempt with nothing in it.
pub const EMPTY_SUBMIT_WARNING: &str = "Please enter a task.";

/// A user-level event, already resolved to its target by the TUI layer
/// (the row index in `Remove` is the row ↔ task association).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw text from the input field, untrimmed. Validation lives here,
    /// not in the input component.
    Submit(String),
    /// Remove the task at this row index.
    Remove(usize),
    /// Close the blocking warning.
    DismissWarning,
    Quit,
}

/// What the event loop must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The task list changed; write the full list through to the store now.
    Save,
    Quit,
}

/// Apply `action` to `app`. Pure state transition; the caller runs the
/// returned effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(raw) => match app.tasks.add(&raw) {
            Some(task) => {
                app.status_message = format!("Added \"{}\"", task.text());
                Effect::Save
            }
            None => {
                // Nothing was mutated, so nothing is persisted and the
                // input field keeps whatever the user typed.
                app.warning = Some(EMPTY_SUBMIT_WARNING.to_string());
                Effect::None
            }
        },
        Action::Remove(index) => match app.tasks.remove(index) {
            Some(task) => {
                app.status_message = format!("Removed \"{}\"", task.text());
                Effect::Save
            }
            None => Effect::None,
        },
        Action::DismissWarning => {
            app.warning = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
