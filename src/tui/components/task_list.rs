//! # Task List Component
//!
//! Scrollable list of tasks with a selection cursor, used while browsing.
//! Each row shows its 1-based number so the remove key always targets a
//! visible, unambiguous entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TaskListState` lives in `TuiState`
//! - `TaskListView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::task::Task;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent state for the task list pane.
pub struct TaskListState {
    pub selected: usize,
    /// Set after the first remove press while confirmation is required.
    pub confirm_remove: bool,
    pub list_state: ListState,
    require_confirm: bool,
}

impl TaskListState {
    pub fn new(require_confirm: bool) -> Self {
        Self {
            selected: 0,
            confirm_remove: false,
            list_state: ListState::default(),
            require_confirm,
        }
    }

    /// Take the selection cursor when the list pane gains focus.
    ///
    /// `select_last` jumps to the bottom row, which is what Up from the
    /// input box (sitting below the list) should feel like.
    pub fn enter_browse(&mut self, task_count: usize, select_last: bool) {
        if task_count == 0 {
            self.list_state.select(None);
            return;
        }
        if select_last {
            self.selected = task_count - 1;
        } else {
            self.selected = self.selected.min(task_count - 1);
        }
        self.list_state.select(Some(self.selected));
    }

    /// Handle a key event while browsing, returning a TaskListEvent if the
    /// application should act.
    pub fn handle_event(&mut self, event: &TuiEvent, task_count: usize) -> Option<TaskListEvent> {
        // Reset remove confirmation on any non-remove key
        let is_remove_key = matches!(event, TuiEvent::InputChar('d') | TuiEvent::Delete);
        if !is_remove_key {
            self.confirm_remove = false;
        }

        match event {
            TuiEvent::CursorUp => {
                if task_count > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if task_count > 0 {
                    self.selected = (self.selected + 1).min(task_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::InputChar('d') | TuiEvent::Delete => {
                if task_count == 0 {
                    return None;
                }
                if self.require_confirm && !self.confirm_remove {
                    self.confirm_remove = true;
                    None
                } else {
                    self.confirm_remove = false;
                    Some(TaskListEvent::Remove(self.selected))
                }
            }
            TuiEvent::InputChar('q') => Some(TaskListEvent::Quit),
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar('i') => {
                Some(TaskListEvent::StartInput)
            }
            _ => None,
        }
    }

    /// Re-clamp the selection after a task was removed.
    pub fn task_removed(&mut self, task_count: usize) {
        if task_count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(task_count - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListEvent {
    Remove(usize),
    StartInput,
    Quit,
}

/// Transient render wrapper for the task list pane.
pub struct TaskListView<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut TaskListState,
    pub tasks: &'a [Task],
    pub browsing: bool,
}

impl<'a> TaskListView<'a> {
    pub fn new(state: &'a mut TaskListState, tasks: &'a [Task], browsing: bool) -> Self {
        Self {
            state,
            tasks,
            browsing,
        }
    }

    fn help_text(&self) -> &'static str {
        if self.state.confirm_remove {
            " Press d again to confirm remove "
        } else if self.browsing {
            " \u{2191}\u{2193} Move  d Remove  Enter Type  q Quit "
        } else {
            " Enter Add  \u{2191} Browse  Ctrl+C Quit "
        }
    }
}

impl<'a> Component for TaskListView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Tasks ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(self.help_text()).centered())
            .padding(Padding::horizontal(1));

        if self.tasks.is_empty() {
            let empty = Paragraph::new("No tasks yet. Type one below and press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Build list items
        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let number = format!("{:>3}. ", i + 1);

                // Borders + padding, then the number column.
                let inner_width = area.width.saturating_sub(4) as usize;
                let text_width = inner_width.saturating_sub(number.len());
                let text = truncate_str(task.text(), text_width);

                let style = if self.browsing && i == self.state.selected {
                    if self.state.confirm_remove {
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    }
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(number, Style::default().fg(Color::DarkGray)),
                    Span::styled(text, style),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..."
/// if needed. Width-aware so wide (e.g. CJK) characters do not overflow the row.
fn truncate_str(s: &str, max_width: usize) -> String {
    let full_width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if full_width <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
