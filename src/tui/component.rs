use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields): `TitleBar` gets the task
///   count and status message, `InputBox` gets `focused`, `TaskListView`
///   gets the task slice and whether the list is being browsed.
/// - They may hold internal state (`InputBox` owns its buffer and cursor)
///   or borrow state that outlives the frame (`TaskListView` wraps the
///   `TaskListState` kept in `TuiState`).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` to allow components to:
/// 1. Update internal caches (`InputBox` re-clamps its horizontal scroll
///    window so the cursor stays visible).
/// 2. Manage presentation state during rendering (`TaskListView` hands its
///    `ListState` to `render_stateful_widget`).
///
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` to allow updating internal presentation state
    /// or caches during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns terminal events into domain events.
///
/// `InputBox` implements this: it absorbs editing keys internally and emits
/// `InputEvent::Submit` carrying the raw buffer. The event loop matches on
/// the emitted event, never on raw key codes. `TaskListState` follows the
/// same shape with an inherent method, since its routing also needs the
/// current task count.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
