//! UI helper functions for creating styled blocks.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block whose styling follows the focus state.
///
/// Focused blocks get a double border and a highlighted title so the active
/// area is obvious at a glance.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    #[test]
    fn test_border_block_renders_title_in_both_states() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                frame.render_widget(
                    create_border_block("Results", false),
                    Rect::new(0, 0, 30, 3),
                );
                frame.render_widget(create_border_block("Results", true), Rect::new(0, 3, 30, 3));
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..30).map(|x| buffer[(x, 0)].symbol()).collect();
        let bottom: String = (0..30).map(|x| buffer[(x, 3)].symbol()).collect();

        assert!(top.contains("Results"));
        assert!(bottom.contains("Results"));
        // Focused border uses the double set.
        assert!(bottom.contains('╔'));
        assert!(top.contains('╭'));
    }
}
