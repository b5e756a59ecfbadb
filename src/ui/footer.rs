//! Footer rendering module for the lazyord TUI.
//!
//! Shows the keyboard shortcuts for whichever area currently has focus.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = match app.focus {
        Focus::Input => "Enter:Lookup  Tab:Results  Ctrl+u:Clear  Esc:Quit",
        Focus::Results => "j/k:Move  o:Open  y:Copy id  Tab:Address  q:Quit",
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
