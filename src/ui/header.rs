//! Header rendering for the lazyord TUI.
//!
//! Renders the application header with logo and index endpoint, plus the
//! address input bar.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App, hiro_host: &str) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title_paragraph = Paragraph::new(create_logo())
        .style(Style::default())
        .alignment(Alignment::Left);

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        11.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(title_paragraph, title_area);

    if area.width > 40 {
        render_index_indicator(frame, area, app, hiro_host);
    }
}

/// Create the logo line.
fn create_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".yellow().bold(),
        "ord".magenta().bold(),
        "]".into(),
    ])
}

/// Render the index endpoint indicator on the right side.
fn render_index_indicator(frame: &mut Frame, area: Rect, app: &App, hiro_host: &str) {
    let text = if app.loading {
        "Fetching…".to_string()
    } else {
        format!("Index: {hiro_host}")
    };

    let width = (text.len() as u16).min(area.width.saturating_sub(4));
    let label = Paragraph::new(text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Right);

    let label_area = Rect::new(area.right().saturating_sub(width + 2), area.y + 1, width, 1);
    frame.render_widget(label, label_area);
}

/// Render the address input bar.
pub fn render_address_bar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input;
    let block = create_border_block("Bitcoin address", focused);
    frame.render_widget(block.clone(), area);

    let inner = block.inner(area);
    if inner.height == 0 {
        return;
    }

    let content = if app.input.is_empty() && !focused {
        Line::from("Enter an address and press Enter".fg(MUTED_COLOR))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(format!("{}{cursor}", app.input)).fg(PRIMARY_COLOR)
    };

    frame.render_widget(Paragraph::new(content), inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_row(terminal: &Terminal<TestBackend>, y: u16, width: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_logo_and_index_host() {
        let app = App::new();
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render_header(frame, frame.area(), &app, "api.hiro.so"))
            .unwrap();

        let row = buffer_row(&terminal, 1, 80);
        assert!(row.contains("lazyord"), "row: {row}");
        assert!(row.contains("Index: api.hiro.so"), "row: {row}");
    }

    #[test]
    fn test_header_shows_fetching_while_loading() {
        let mut app = App::new();
        app.loading = true;

        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_header(frame, frame.area(), &app, "api.hiro.so"))
            .unwrap();

        let row = buffer_row(&terminal, 1, 80);
        assert!(row.contains("Fetching…"), "row: {row}");
    }

    #[test]
    fn test_address_bar_placeholder_and_input() {
        let mut app = App::new();
        app.focus = Focus::Results;

        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_address_bar(frame, frame.area(), &app))
            .unwrap();
        let row = buffer_row(&terminal, 1, 60);
        assert!(row.contains("Enter an address"), "row: {row}");

        app.input = "bc1qxyz".to_string();
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_address_bar(frame, frame.area(), &app))
            .unwrap();
        let row = buffer_row(&terminal, 1, 60);
        assert!(row.contains("bc1qxyz"), "row: {row}");
    }
}
