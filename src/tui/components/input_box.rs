//! # InputBox Component
//!
//! Single-line editor for typing a new task.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Keep the cursor visible by scrolling long text horizontally
//!
//! ## State Management
//!
//! The buffer is internal state. Whether the box is focused is a prop
//! from the application state. Submission validation lives in the core
//! reducer: the box always reports the raw buffer on Enter, and the
//! caller clears it only once the submit was accepted. A rejected
//! (blank) submit therefore leaves the typed text in place.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed Enter; carries the raw buffer, not trimmed or cleared
    Submit(String),
    /// Text content or cursor changed (optional, if parent needs to know)
    ContentChanged,
}

/// Text input component for new tasks.
///
/// # Props
///
/// - `focused`: whether keystrokes currently go to this box (from App state)
///
/// # State
///
/// - `buffer`: current text being typed
/// - `cursor`: byte offset into `buffer`, always on a char boundary
/// - `scroll`: leftmost visible display column
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the box currently has keyboard focus (Prop)
    pub focused: bool,
    cursor: usize,
    scroll: u16,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Reset the box after an accepted submission.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Adjust the scroll window so the cursor column stays visible.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let cursor_col = display_width(&self.buffer[..self.cursor]);
        // One extra column so the cursor can sit past the last char.
        let max_scroll = display_width(&self.buffer)
            .saturating_add(1)
            .saturating_sub(inner_width);
        self.scroll = self.scroll.min(max_scroll);
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if cursor_col >= self.scroll + inner_width {
            self.scroll = cursor_col - inner_width + 1;
        }
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(self.buffer.as_str())
            .block(Block::bordered().title("Add a task"))
            .style(style)
            .scroll((0, self.scroll));

        frame.render_widget(input, area);

        if self.focused {
            let cursor_col = display_width(&self.buffer[..self.cursor]);
            let x = area.x + 1 + cursor_col.saturating_sub(self.scroll);
            let y = area.y + 1;
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line box: flatten pasted line breaks to spaces.
                let text = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

/// Display width of a string, saturated to what a terminal cell count can hold.
fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Find the byte index of the char boundary before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut i = pos.saturating_sub(1);
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Find the byte index of the char boundary after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut i = pos + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}
