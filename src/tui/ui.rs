use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{TaskListView, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Top-level frame composition.
///
/// Layout, top to bottom: one-line title bar, the task list, a
/// three-line input box. The warning modal, when active, is drawn
/// last so it sits above everything else.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, list_area, input_area] = layout.areas(frame.area());

    TitleBar::new(app.tasks.len(), app.status_message.clone()).render(frame, title_area);

    let browsing = tui.input_mode == InputMode::Browse;
    TaskListView::new(&mut tui.task_list, app.tasks.tasks(), browsing).render(frame, list_area);

    tui.input_box.render(frame, input_area);

    if let Some(warning) = &app.warning {
        let full_area = frame.area();
        draw_warning_modal(frame, full_area, warning);
    }
}

/// Centered overlay telling the user why their input was rejected.
/// Blocks everything behind it until dismissed.
fn draw_warning_modal(frame: &mut Frame, area: Rect, warning: &str) {
    let overlay = centered_rect(50, 25, area);

    // Clear underlying content
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Warning ")
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(" Enter/Esc Dismiss ").centered());

    let body = Paragraph::new(warning)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(body, overlay);
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
