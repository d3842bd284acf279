// Keyboard and mouse event handling
//
// Translates terminal input into Commands for the AppState controller.
// Mouse clicks are routed through the hit regions recorded by the renderer
// on the previous frame.

use super::{AppState, Command, ViewMode, ATLAS_HEIGHT, ATLAS_WIDTH};
use crate::atlas::hit_test;
use crate::model::Position;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q` - Quit the application
/// - `Esc` - Close the detail panel (clear selection)
/// - `o`, `O` - Show Overview
/// - `a`, `A` - Show Atlas
/// - `Tab` - Toggle between the two views
/// - `Right`, `Down`, `j` - Select next node
/// - `Left`, `Up`, `k` - Select previous node
/// - `p`, `P` - Pause/resume drift
/// - `Space` - Apply one drift tick
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    let command = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Esc => Command::Select(None),
        KeyCode::Char('o') | KeyCode::Char('O') => Command::SetMode(ViewMode::Overview),
        KeyCode::Char('a') | KeyCode::Char('A') => Command::SetMode(ViewMode::Atlas),
        KeyCode::Tab => Command::ToggleMode,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::Char('p') | KeyCode::Char('P') => Command::ToggleDrift,
        KeyCode::Char(' ') => Command::Tick,
        _ => return app.running,
    };

    app.dispatch(command);
    app.running
}

/// Handle mouse events; only left clicks act
///
/// In Overview a click on a card selects its node. In Atlas a click on a
/// node selects it and a click on empty canvas leaves the selection alone.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let (column, row) = (mouse.column, mouse.row);
    let target = match app.mode() {
        ViewMode::Overview => app
            .hit_regions
            .overview_cards
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, id)| id.clone()),
        ViewMode::Atlas => app.hit_regions.atlas_canvas.and_then(|area| {
            let point = cell_to_atlas(area, column, row)?;
            let scene = app.scene();
            hit_test(&scene, point, cell_tolerance(area)).cloned()
        }),
    };

    if let Some(id) = target {
        app.dispatch(Command::Select(Some(id)));
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Centre of a terminal cell in atlas space, or None outside the canvas
///
/// Rows grow downwards like atlas y, so no flip is needed here.
fn cell_to_atlas(area: Rect, column: u16, row: u16) -> Option<Position> {
    if area.width == 0 || area.height == 0 || !contains(area, column, row) {
        return None;
    }
    let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    Some(Position::new(fx * ATLAS_WIDTH, fy * ATLAS_HEIGHT))
}

/// Half a cell in atlas units, so a click anywhere on a drawn cell can land
fn cell_tolerance(area: Rect) -> f64 {
    let cell_w = ATLAS_WIDTH / f64::from(area.width.max(1));
    let cell_h = ATLAS_HEIGHT / f64::from(area.height.max(1));
    cell_w.max(cell_h) / 2.0
}
