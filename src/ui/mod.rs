// UI rendering module
//
// This module contains all UI rendering components for Nimbus.
// The main draw() function orchestrates rendering of all UI panels.

mod atlas;
mod detail;
mod header;
mod overview;
mod status_bar;
mod text;

use crate::app::{AppState, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use atlas::render_atlas;
use detail::render_detail;
use header::render_header;
use overview::render_overview;
use status_bar::render_status_bar;

/// Main UI drawing function
///
/// Takes the state mutably because the views record their click regions.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    // Main layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_header(f, chunks[0], app);

    // Body: active view, plus the detail panel while a node is selected
    let view_area = if app.selected_id().is_some() {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(64), // Active view
                Constraint::Percentage(36), // Detail panel
            ])
            .split(chunks[1]);
        render_detail(f, body_chunks[1], app);
        body_chunks[0]
    } else {
        chunks[1]
    };

    // Regions of the hidden view are stale; drop them so clicks cannot hit them
    app.hit_regions = Default::default();
    match app.mode() {
        ViewMode::Overview => render_overview(f, view_area, app),
        ViewMode::Atlas => render_atlas(f, view_area, app),
    }

    render_status_bar(f, chunks[2], app);
}
