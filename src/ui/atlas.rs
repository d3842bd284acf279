// Atlas rendering module
//
// Draws the AtlasScene on a Braille canvas: links as parallel strokes, nodes
// as filled circles with an outer ring, one label per node and a legend.
// Atlas space has y growing downwards; the canvas has y growing upwards, so
// every y is flipped on the way in.

use super::text::truncate_to_width;
use crate::app::{AppState, ATLAS_HEIGHT, ATLAS_WIDTH};
use crate::atlas::{stroke_segments, AtlasScene, LinkEmphasis};
use crate::model::Position;
use crate::theme::{with_opacity, FieldStatus, CLOUD_WHITE, DUSK_GRAY, MIST_GRAY, NIGHT_SKY};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

pub const TITLE: &str = "Verse-ality Atlas — symbolic propagation map";
pub const HINT: &str = "Click a node to focus";
pub const LINK_LEGEND: &str = "Link thickness = symbolic mass";

/// Atlas point to canvas coordinates
pub fn to_canvas(p: Position) -> (f64, f64) {
    (p.x, ATLAS_HEIGHT - p.y)
}

/// Radii of the concentric circles that paint a filled disk
///
/// `step` is the atlas distance covered by one Braille dot; rings closer
/// than that would land on the same dots.
pub fn fill_radii(radius: f64, step: f64) -> Vec<f64> {
    if radius.is_nan() || step.is_nan() || radius <= 0.0 || step <= 0.0 {
        return Vec::new();
    }
    let count = (radius / step).ceil() as usize;
    (0..count).map(|i| radius - i as f64 * step).collect()
}

/// Atlas units per Braille dot for a canvas of this size
fn dot_step(area: Rect) -> f64 {
    let dot_w = ATLAS_WIDTH / (f64::from(area.width.max(1)) * 2.0);
    let dot_h = ATLAS_HEIGHT / (f64::from(area.height.max(1)) * 4.0);
    dot_w.min(dot_h)
}

pub fn render_atlas(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", TITLE),
            Style::default()
                .fg(CLOUD_WHITE)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DUSK_GRAY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Hint
            Constraint::Min(0),    // Canvas
            Constraint::Length(1), // Legend
        ])
        .split(inner);

    let hint = Paragraph::new(Line::from(Span::styled(
        format!(" {}", HINT),
        Style::default().fg(MIST_GRAY).add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(hint, chunks[0]);

    let canvas_area = chunks[1];
    app.hit_regions.atlas_canvas = Some(canvas_area);

    let scene: AtlasScene = app.scene();
    let step = dot_step(canvas_area);
    let width_cols = f64::from(canvas_area.width);

    let canvas = Canvas::default()
        .background_color(NIGHT_SKY)
        .marker(Marker::Braille)
        .x_bounds([0.0, ATLAS_WIDTH])
        .y_bounds([0.0, ATLAS_HEIGHT])
        .paint(move |ctx| {
            // Links beneath nodes, focused ones over the rest
            let (focused, others): (Vec<_>, Vec<_>) = scene
                .links
                .iter()
                .partition(|link| link.emphasis == LinkEmphasis::Focused);
            for link in others.into_iter().chain(focused) {
                let color = with_opacity(link.color, link.opacity, NIGHT_SKY);
                for (from, to) in stroke_segments(link.from, link.to, link.thickness) {
                    let (x1, y1) = to_canvas(from);
                    let (x2, y2) = to_canvas(to);
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
                }
            }
            ctx.layer();

            for node in &scene.nodes {
                let (x, y) = to_canvas(node.center);
                let fill = with_opacity(node.fill, node.fill_opacity, NIGHT_SKY);
                for radius in fill_radii(node.radius, step) {
                    ctx.draw(&Circle { x, y, radius, color: fill });
                }
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: node.ring_radius,
                    color: with_opacity(node.ring_color, node.ring_opacity, NIGHT_SKY),
                });
            }

            for node in &scene.nodes {
                let (lx, ly) = to_canvas(node.label_anchor);
                let columns = ((ATLAS_WIDTH - node.label_anchor.x) / ATLAS_WIDTH * width_cols)
                    .floor()
                    .max(0.0) as usize;
                let label = truncate_to_width(&node.label, columns);
                if label.is_empty() {
                    continue;
                }
                let style = if node.selected {
                    Style::default().fg(CLOUD_WHITE).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(MIST_GRAY)
                };
                ctx.print(lx, ly, Span::styled(label, style));
            }
        });

    f.render_widget(canvas, canvas_area);
    f.render_widget(Paragraph::new(legend_line()), chunks[2]);
}

fn legend_line() -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for status in FieldStatus::ALL {
        spans.push(Span::styled("● ", Style::default().fg(status.color())));
        spans.push(Span::styled(status.legend(), Style::default().fg(MIST_GRAY)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled("━ ", Style::default().fg(DUSK_GRAY)));
    spans.push(Span::styled(LINK_LEGEND, Style::default().fg(MIST_GRAY)));
    Line::from(spans)
}
