//! # TitleBar Component
//!
//! Top status bar showing the task count and transient status messages.
//!
//! ## Responsibilities
//!
//! - Display the application name and current task count
//! - Display status messages (e.g., "Restored 3 task(s)", "Removed \"Call Sam\"")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state. This makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     task_count: app.tasks.len(),
//!     status_message: app.status_message.clone(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Rather than passing props as render() parameters, we store them as struct
//! fields. This is necessary for trait-based polymorphism since the Component
//! trait requires a fixed render() signature.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component showing task count and status.
///
/// # Props
///
/// All fields are "props" (configuration from parent):
/// - `task_count`: How many tasks are currently in the list
/// - `status_message`: Transient status (e.g., "Added \"Buy milk\"")
pub struct TitleBar {
    /// Number of tasks currently in the list
    pub task_count: usize,
    /// Status message (e.g., "Welcome to tuido!")
    pub status_message: String,
}

impl TitleBar {
    /// Create a new TitleBar with the given props.
    pub fn new(task_count: usize, status_message: String) -> Self {
        Self {
            task_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    ///
    /// The title bar is always a single line (height 1). It shows the
    /// task count, then the status message if one is set. A plain Span
    /// is enough here; a one-line bar needs no borders or padding.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let plural = if self.task_count == 1 { "" } else { "s" };
        let title_text = if self.status_message.is_empty() {
            format!("tuido ({} task{})", self.task_count, plural)
        } else {
            format!(
                "tuido ({} task{}) | {}",
                self.task_count, plural, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
