//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, GUI, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The loop draws one frame, then blocks on the next terminal event.
//! Nothing animates, so there are no timers and no idle redraws; a
//! resize wakes the read and falls through to the next draw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during bursts of
//! keystrokes.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::TaskStore;
use crate::core::task::TaskList;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TaskListEvent, TaskListState};
use crate::tui::event::TuiEvent;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the input box. Esc or Up switches to Browse.
    Input,
    /// Navigate tasks with arrow keys. Enter switches back to Input.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub input_box: InputBox,
    pub task_list: TaskListState,
    // Modal input mode
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new(confirm_remove: bool) -> Self {
        Self {
            input_box: InputBox::new(),
            task_list: TaskListState::new(confirm_remove),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = TaskStore::new(config.tasks_file.clone());
    // Loading never writes anything back, even when the stored state
    // was unreadable; the first user mutation does.
    let mut app = App::new(TaskList::from_texts(store.load()));
    let mut tui = TuiState::new(config.confirm_remove);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    loop {
        // Sync InputBox props with App/TUI state
        tui.input_box.focused = tui.input_mode == InputMode::Input && app.warning.is_none();

        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        let Some(tui_event) = event::read_event()? else {
            continue;
        };

        // Resize falls through to the draw at the top of the loop
        if matches!(tui_event, TuiEvent::Resize) {
            continue;
        }

        // ForceQuit (Ctrl+C) always quits regardless of mode
        if matches!(tui_event, TuiEvent::ForceQuit) {
            let effect = update(&mut app, Action::Quit);
            if effect == Effect::Quit {
                break;
            }
            continue;
        }

        // An active warning blocks the rest of the UI.
        if app.warning.is_some() {
            if let Some(action) = route_under_warning(&tui_event) {
                update(&mut app, action);
            }
            continue;
        }

        // Modal event dispatch
        match tui.input_mode {
            InputMode::Input => match tui_event {
                // Esc moves focus to the list, keeping the previous selection
                TuiEvent::Escape => {
                    tui.input_mode = InputMode::Browse;
                    tui.task_list.enter_browse(app.tasks.len(), false);
                }
                // Up moves focus to the list, landing on the bottom row
                TuiEvent::CursorUp => {
                    tui.input_mode = InputMode::Browse;
                    tui.task_list.enter_browse(app.tasks.len(), true);
                }
                _ => {
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&tui_event)
                    {
                        let effect = update(&mut app, Action::Submit(text));
                        if effect == Effect::Save {
                            // Accepted: clear the box. A rejected submit
                            // leaves the typed text for the user to fix.
                            tui.input_box.clear();
                            persist(&store, &mut app);
                        }
                    }
                }
            },
            InputMode::Browse => {
                if let Some(list_event) = tui.task_list.handle_event(&tui_event, app.tasks.len()) {
                    match list_event {
                        TaskListEvent::Remove(index) => {
                            let effect = update(&mut app, Action::Remove(index));
                            if effect == Effect::Save {
                                tui.task_list.task_removed(app.tasks.len());
                                persist(&store, &mut app);
                            }
                        }
                        TaskListEvent::StartInput => {
                            tui.input_mode = InputMode::Input;
                        }
                        TaskListEvent::Quit => {
                            let effect = update(&mut app, Action::Quit);
                            if effect == Effect::Quit {
                                break;
                            }
                        }
                    }
                }
            }
        }
    }

    // Every mutation was written through already; quitting saves nothing.
    ratatui::restore();
    Ok(())
}

/// Event routing while the warning modal is up: Enter or Esc dismisses
/// it, everything else is swallowed until the user acknowledges.
///
/// Ctrl+C is handled before this gate, so force-quit keeps working.
fn route_under_warning(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissWarning),
        _ => None,
    }
}

/// Write the current task list through to disk.
///
/// A failed write keeps the session alive: the in-memory list stays
/// authoritative, the failure lands in the status line and the log.
fn persist(store: &TaskStore, app: &mut App) {
    if let Err(e) = store.save(&app.tasks) {
        warn!("Failed to save tasks to {}: {}", store.path().display(), e);
        app.status_message = format!("Save failed: {}", e);
    }
}
