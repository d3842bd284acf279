// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, the drift indicator
// and the footer tagline.

use crate::app::AppState;
use crate::theme::{CLOUD_WHITE, COHERENCE_CYAN, DUSK_GRAY, MIST_GRAY, STATUS_GREEN};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const TAGLINE: &str = "Ethics as geometry • Coherence as currency • Consent as protocol";

struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
}

const HINTS: [Hint; 6] = [
    Hint { priority: 1, key: "Q:", desc: "Quit | " },
    Hint { priority: 1, key: "Tab:", desc: "View | " },
    Hint { priority: 1, key: "←→:", desc: "Node | " },
    Hint { priority: 2, key: "Esc:", desc: "Close | " },
    Hint { priority: 2, key: "P:", desc: "Drift | " },
    Hint { priority: 3, key: "Space:", desc: "Tick | " },
];

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    // Subtract borders
    let available_width = area.width.saturating_sub(2) as usize;

    let indicator = build_drift_indicator(app.drift().is_running());
    let indicator_width: usize = indicator.iter().map(|s| s.content.width()).sum();

    let mut spans = vec![Span::raw(" ")];
    let mut current_length = 1 + indicator_width;

    // Process hints by priority, dropping what does not fit
    for priority in 1..=3 {
        for hint in HINTS.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.width() + hint.desc.width();
            if current_length + hint_length <= available_width {
                spans.push(Span::styled(
                    hint.key,
                    Style::default()
                        .fg(COHERENCE_CYAN)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(hint.desc, Style::default().fg(MIST_GRAY)));
                current_length += hint_length;
            }
        }
    }
    spans.extend(indicator);

    // Tagline only when there is room for all of it
    let tagline_width = TAGLINE.width() + 3;
    if current_length + tagline_width <= available_width {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            TAGLINE,
            Style::default().fg(DUSK_GRAY).add_modifier(Modifier::ITALIC),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(DUSK_GRAY)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// `[D:ON]` / `[D:OFF]` spans; green when drift is running
pub fn build_drift_indicator(running: bool) -> Vec<Span<'static>> {
    let (state, color) = if running {
        ("ON", STATUS_GREEN)
    } else {
        ("OFF", CLOUD_WHITE)
    };
    vec![
        Span::styled("[D:", Style::default().fg(CLOUD_WHITE)),
        Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("]", Style::default().fg(CLOUD_WHITE)),
    ]
}
