// Overview rendering module
//
// Renders the summary grid: one card per node, three per row. Card areas are
// recorded in AppState so mouse clicks can select the node under them.

use super::text::{bar_segments, truncate_to_width};
use crate::app::AppState;
use crate::model::Node;
use crate::theme::{
    coherence_color, CLOUD_WHITE, CONSENT_VIOLET, CONTAINMENT_AMBER, DUSK_GRAY, MIST_GRAY,
    RING_FOCUS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Cards per grid row
pub const CARDS_PER_ROW: usize = 3;

/// Card height including borders
pub const CARD_HEIGHT: u16 = 6;

pub fn render_overview(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default()
        .title(Span::styled(
            " Overview ",
            Style::default()
                .fg(CLOUD_WHITE)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DUSK_GRAY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let nodes = app.topology().nodes();
    let total_rows = nodes.len().div_ceil(CARDS_PER_ROW);
    let shown_rows = visible_rows(inner.height, total_rows);
    let mut regions = Vec::with_capacity(nodes.len());

    for (row_idx, row) in nodes.chunks(CARDS_PER_ROW).take(shown_rows).enumerate() {
        let y = inner.y.saturating_add((row_idx as u16).saturating_mul(CARD_HEIGHT));
        let row_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(row_area);

        for (node, &card_area) in row.iter().zip(columns.iter()) {
            let is_selected = app.selection().is_selected(&node.id);
            render_card(f, card_area, node, is_selected);
            regions.push((card_area, node.id.clone()));
        }
    }

    let hidden = nodes.len() - regions.len();
    if hidden > 0 && inner.height > 0 {
        let y = inner.y.saturating_add((shown_rows as u16).saturating_mul(CARD_HEIGHT));
        let line_area = Rect::new(inner.x, y, inner.width, 1);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(
                    " {}",
                    truncate_to_width(&more_label(hidden), usize::from(inner.width).saturating_sub(1))
                ),
                Style::default().fg(MIST_GRAY).add_modifier(Modifier::ITALIC),
            ))),
            line_area,
        );
        tracing::trace!(hidden, "Overview grid clipped");
    }

    app.hit_regions.overview_cards = regions;
}

/// Card rows that fit in `height`, leaving one line for the overflow note
/// when not every row fits
fn visible_rows(height: u16, total_rows: usize) -> usize {
    let fit = usize::from(height / CARD_HEIGHT);
    if fit >= total_rows {
        total_rows
    } else if usize::from(height) > fit * usize::from(CARD_HEIGHT) {
        fit
    } else {
        fit.saturating_sub(1)
    }
}

fn more_label(hidden: usize) -> String {
    let noun = if hidden == 1 { "node" } else { "nodes" };
    format!("+{} more {} (enlarge the terminal or cycle with ←/→)", hidden, noun)
}

fn render_card(f: &mut Frame, area: Rect, node: &Node, selected: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let status_color = coherence_color(node.coherence);
    let (filled, empty) = bar_segments(node.coherence / 100.0, inner_width.saturating_sub(2));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&node.name, inner_width.saturating_sub(1))),
            Style::default()
                .fg(CLOUD_WHITE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" Coherence Index: ", Style::default().fg(MIST_GRAY)),
            Span::styled(
                format!("{:.0}", node.coherence),
                Style::default().fg(status_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Consent ", Style::default().fg(MIST_GRAY)),
            Span::styled(format!("{:.0}%", node.consent), Style::default().fg(CONSENT_VIOLET)),
            Span::styled("  Containment ", Style::default().fg(MIST_GRAY)),
            Span::styled(
                format!("{:.0}%", node.containment),
                Style::default().fg(CONTAINMENT_AMBER),
            ),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(filled, Style::default().fg(status_color)),
            Span::styled(empty, Style::default().fg(DUSK_GRAY)),
        ]),
    ];

    let border_style = if selected {
        Style::default().fg(RING_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DUSK_GRAY)
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style),
    );
    f.render_widget(card, area);
}
