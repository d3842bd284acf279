// Header rendering module
//
// Renders the title block with the subtitle and the Overview/Atlas tabs.

use crate::app::{AppState, ViewMode};
use crate::theme::{CLOUD_WHITE, COHERENCE_CYAN, DUSK_GRAY, MIST_GRAY, NIGHT_SKY};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "☁ Nimbus";
pub const SUBTITLE: &str = "Symbolic Weather • Verse-ality Lattice Monitor";

pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let title_line = Line::from(vec![
        Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(CLOUD_WHITE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   {}", SUBTITLE), Style::default().fg(MIST_GRAY)),
    ]);

    let mut tab_spans = vec![Span::raw(" ")];
    for mode in [ViewMode::Overview, ViewMode::Atlas] {
        tab_spans.push(tab_span(mode, app.mode() == mode));
        tab_spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(vec![title_line, Line::from(tab_spans)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(COHERENCE_CYAN)),
        )
        .alignment(Alignment::Left);

    f.render_widget(header, area);
}

fn tab_span(mode: ViewMode, active: bool) -> Span<'static> {
    let text = format!(" {} ", mode.label());
    if active {
        Span::styled(
            text,
            Style::default()
                .fg(NIGHT_SKY)
                .bg(COHERENCE_CYAN)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(DUSK_GRAY))
    }
}
