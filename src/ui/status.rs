//! Status and balance line rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

use crate::app::{App, StatusKind};
use crate::theme::{ERROR_COLOR, INFO_COLOR, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

/// Render the one-line status message, colored by kind.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.status else {
        return;
    };

    let color = match status.kind {
        StatusKind::Loading => WARNING_COLOR,
        StatusKind::Info => INFO_COLOR,
        StatusKind::Success => SUCCESS_COLOR,
        StatusKind::Error => ERROR_COLOR,
    };

    let line = Paragraph::new(format!(" {}", status.message)).style(Style::default().fg(color));
    frame.render_widget(line, area);
}

/// Render the balance summary line under the status.
pub fn render_balance(frame: &mut Frame, area: Rect, app: &App) {
    let Some(balance) = &app.balance else {
        return;
    };

    let line = Paragraph::new(format!(" {}", balance.summary_line()))
        .style(Style::default().fg(MUTED_COLOR));
    frame.render_widget(line, area);
}

// ============================================================================
// Tests
// ============================================================================
