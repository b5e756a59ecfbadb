//! Inscription card list rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::{App, Focus};
use crate::constants::CARD_HEIGHT;
use crate::domain::InscriptionCard;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR};

use super::helpers::create_border_block;

// ============================================================================
// Card Panel
// ============================================================================

/// Renders the inscription results panel.
///
/// Cards are windowed so the selected one is always visible; each card shows
/// its title, content type, chain metadata and detail link.
pub fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Results;
    let title = if app.cards.is_empty() {
        "Inscriptions".to_string()
    } else {
        format!("Inscriptions ({})", app.cards.len())
    };
    let cards_block = create_border_block(&title, focused);

    frame.render_widget(cards_block.clone(), area);
    let inner_area = cards_block.inner(area);
    if inner_area.height == 0 {
        return;
    }

    if app.cards.is_empty() {
        let message = if app.loading {
            "Fetching inscriptions…"
        } else {
            "No inscriptions to display"
        };
        let no_data_message = Paragraph::new(message)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(no_data_message, inner_area);
        return;
    }

    let visible = (inner_area.height / CARD_HEIGHT).max(1) as usize;
    let selected = app.selected.unwrap_or(0);
    let start = window_start(selected, visible, app.cards.len());
    let end = (start + visible).min(app.cards.len());

    let items: Vec<ListItem> = app.cards[start..end]
        .iter()
        .enumerate()
        .map(|(offset, card)| card_list_item(card, app.selected == Some(start + offset)))
        .collect();

    frame.render_widget(List::new(items), inner_area);
}

/// First visible card index keeping `selected` inside a window of `visible`
/// items over a list of `len`.
#[must_use]
fn window_start(selected: usize, visible: usize, len: usize) -> usize {
    if len <= visible || selected < visible {
        0
    } else {
        (selected + 1 - visible).min(len - visible)
    }
}

/// Build the list item for one card.
fn card_list_item(card: &InscriptionCard, is_selected: bool) -> ListItem<'static> {
    let selection_indicator = if is_selected { "▶" } else { " " };

    let title_line = Line::from(vec![
        Span::raw(format!("{selection_indicator} ")),
        Span::styled(
            card.title(),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut type_spans = vec![
        Span::raw("  "),
        Span::styled(
            format!("Type: {}", card.content_type),
            Style::default().fg(MUTED_COLOR),
        ),
    ];
    if card.is_image {
        type_spans.push(Span::raw(" "));
        type_spans.push(Span::styled("[img]", Style::default().fg(SUCCESS_COLOR)));
    }

    let mut meta_spans = vec![Span::raw("  ")];
    if let Some(height) = card.block_height {
        meta_spans.push(Span::styled(
            format!("Block: {height}"),
            Style::default().fg(MUTED_COLOR),
        ));
    }
    if let Some(transfer) = card.transfer_label() {
        if meta_spans.len() > 1 {
            meta_spans.push(Span::raw("    "));
        }
        meta_spans.push(Span::styled(
            format!("Last transfer: {transfer}"),
            Style::default().fg(MUTED_COLOR),
        ));
    }

    let link_line = match card.detail_link() {
        Some(link) => Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("↪ {link}"), Style::default().fg(ACCENT_COLOR)),
        ]),
        None => Line::from(""),
    };

    ListItem::new(vec![
        title_line,
        Line::from(type_spans),
        Line::from(meta_spans),
        link_line,
        Line::from(""),
    ])
    .style(if is_selected {
        SELECTED_STYLE
    } else {
        Style::default()
    })
}

// ============================================================================
// Tests
// ============================================================================
