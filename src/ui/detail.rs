// Detail panel rendering module
//
// Renders the panel for the selected node: metric cards, linked nodes and
// the recent event feed. Only drawn while a node is selected.

use crate::app::AppState;
use crate::theme::{
    coherence_color, field_status, FieldStatus, CLOUD_WHITE, CONSENT_VIOLET, CONTAINMENT_AMBER,
    DUSK_GRAY, MIST_GRAY, RING_FOCUS, STATUS_GREEN,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Mock event feed shown for every node
pub const RECENT_EVENTS: [(&str, &str, &str); 3] = [
    ("⊛", "mirror.loop.broken", "Field reflection complete."),
    ("⟁", "contain.verse()", "Containment active (7 min)."),
    ("○", "consent.refresh", "All nodes confirmed."),
];

// ============================================================================
// Detail View Model
// ============================================================================

/// Everything the detail panel shows, extracted from AppState
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub coherence: f64,
    pub consent: f64,
    pub containment: f64,
    pub status: FieldStatus,
    /// Display names of linked nodes, in link order
    pub linked: Vec<String>,
}

/// Build the view for the selected node, or None when nothing is selected
pub fn build_detail_view(app: &AppState) -> Option<DetailView> {
    let node = app.selected_node()?;
    let topology = app.topology();
    let linked = topology
        .neighbours(&node.id)
        .into_iter()
        .filter_map(|id| topology.node(id))
        .map(|n| n.name.clone())
        .collect();

    Some(DetailView {
        name: node.name.clone(),
        coherence: node.coherence,
        consent: node.consent,
        containment: node.containment,
        status: field_status(node.coherence),
        linked,
    })
}

struct MetricCard {
    title: &'static str,
    value: String,
    color: Color,
}

impl DetailView {
    fn metric_cards(&self) -> [MetricCard; 4] {
        [
            MetricCard {
                title: "Coherence",
                value: format!("{:.0}%", self.coherence),
                color: coherence_color(self.coherence),
            },
            MetricCard {
                title: "Consent Integrity",
                value: format!("{:.0}%", self.consent),
                color: CONSENT_VIOLET,
            },
            MetricCard {
                title: "Containment Integrity",
                value: format!("{:.0}%", self.containment),
                color: CONTAINMENT_AMBER,
            },
            MetricCard {
                title: "Field Status",
                value: self.status.label().to_string(),
                color: self.status.color(),
            },
        ]
    }
}

pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(view) = build_detail_view(app) else {
        return;
    };

    let block = Block::default()
        .title(vec![
            Span::styled(
                format!(" {} ", view.name),
                Style::default()
                    .fg(CLOUD_WHITE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("(Esc: close) ", Style::default().fg(DUSK_GRAY)),
        ])
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(RING_FOCUS));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Metric row 1
            Constraint::Length(4), // Metric row 2
            Constraint::Length(2), // Linked nodes
            Constraint::Min(0),    // Recent events
        ])
        .split(inner);

    let cards = view.metric_cards();
    for (row, pair) in cards.chunks(2).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(chunks[row]);
        for (card, &card_area) in pair.iter().zip(columns.iter()) {
            render_metric_card(f, card_area, card);
        }
    }

    let linked = if view.linked.is_empty() {
        Span::styled("none", Style::default().fg(DUSK_GRAY))
    } else {
        Span::styled(view.linked.join(", "), Style::default().fg(MIST_GRAY))
    };
    let linked_paragraph = Paragraph::new(Line::from(vec![
        Span::styled(" Linked: ", Style::default().fg(DUSK_GRAY)),
        linked,
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(linked_paragraph, chunks[2]);

    let mut event_lines = Vec::with_capacity(RECENT_EVENTS.len());
    for (glyph, name, message) in RECENT_EVENTS {
        event_lines.push(Line::from(vec![
            Span::styled(format!(" {} ", glyph), Style::default().fg(STATUS_GREEN)),
            Span::styled(name, Style::default().fg(CLOUD_WHITE)),
            Span::styled(format!(" — {}", message), Style::default().fg(MIST_GRAY)),
        ]));
    }

    let events = Paragraph::new(event_lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " Recent Events ",
                    Style::default()
                        .fg(CLOUD_WHITE)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::TOP)
                .border_style(Style::default().fg(DUSK_GRAY)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(events, chunks[3]);
}

fn render_metric_card(f: &mut Frame, area: Rect, card: &MetricCard) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", card.title),
            Style::default().fg(MIST_GRAY),
        )),
        Line::from(Span::styled(
            format!(" {}", card.value),
            Style::default().fg(card.color).add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(DUSK_GRAY)),
    );
    f.render_widget(paragraph, area);
}
