// Application state management
//
// This module contains the AppState controller, the Command set it consumes,
// and re-exports configuration types from the config submodule.

pub mod config;
pub mod drift;
pub mod event;
pub mod selection;

// Re-export config types for convenience
pub use config::{DriftConfig, RefreshConfig, ViewMode, ATLAS_HEIGHT, ATLAS_WIDTH};
pub use drift::DriftSimulator;
pub use selection::Selection;

use crate::atlas::{build_scene, AtlasScene};
use crate::model::{seed, Node, NodeId, Topology, TopologyError};
use ratatui::layout::Rect;
use std::time::Instant;

/// Everything that can change the dashboard state
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set or clear the selected node
    Select(Option<NodeId>),
    /// Select the next node in topology order
    SelectNext,
    /// Select the previous node in topology order
    SelectPrevious,
    /// Show the given view
    SetMode(ViewMode),
    /// Flip between Overview and Atlas
    ToggleMode,
    /// Apply one drift step immediately
    Tick,
    /// Pause or resume the drift task
    ToggleDrift,
    /// Tear down: stop drift and leave the event loop
    Quit,
}

/// Screen regions recorded while drawing, used to route mouse clicks
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// Overview cards in draw order
    pub overview_cards: Vec<(Rect, NodeId)>,
    /// Inner area of the Atlas canvas (inside its border)
    pub atlas_canvas: Option<Rect>,
}

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Nodes and links; the only source of truth for what is drawn
    topology: Topology,

    /// Currently selected node
    selection: Selection,

    /// Active presentation
    mode: ViewMode,

    /// Position jitter task
    drift: DriftSimulator,

    /// Event loop settings
    pub refresh_config: RefreshConfig,

    /// Click targets from the last frame
    pub hit_regions: HitRegions,
}

impl AppState {
    /// Create the dashboard over the mock seed set with drift running
    pub fn new() -> Result<Self, TopologyError> {
        let topology = seed::seed_topology()?;
        let mut state = Self::with_parts(topology, DriftSimulator::new(DriftConfig::default()));
        state.drift.start(Instant::now());
        Ok(state)
    }

    /// Assemble a state from an already validated topology and a drift task
    ///
    /// The drift is left as given (stopped unless the caller started it).
    pub fn with_parts(topology: Topology, drift: DriftSimulator) -> Self {
        tracing::info!(
            nodes = topology.len(),
            links = topology.links().len(),
            "Dashboard state created"
        );

        Self {
            running: true,
            topology,
            selection: Selection::new(),
            mode: ViewMode::default(),
            drift,
            refresh_config: RefreshConfig::new(),
            hit_regions: HitRegions::default(),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selection.current()
    }

    /// The selected node, resolved against the topology
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection
            .current()
            .and_then(|id| self.topology.node(id))
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn drift(&self) -> &DriftSimulator {
        &self.drift
    }

    /// Scene for the Atlas canvas under the current selection
    pub fn scene(&self) -> AtlasScene {
        build_scene(&self.topology, self.selection.current())
    }

    /// Apply a command using the current time
    pub fn dispatch(&mut self, command: Command) {
        self.dispatch_at(command, Instant::now());
    }

    /// Apply a command; `now` is used to (re)arm the drift timer
    ///
    /// After teardown every command is ignored.
    pub fn dispatch_at(&mut self, command: Command, now: Instant) {
        if !self.running {
            tracing::debug!(?command, "Ignoring command after shutdown");
            return;
        }
        match command {
            Command::Select(id) => self.select(id),
            Command::SelectNext => {
                self.selection.select_next(&self.topology);
                tracing::debug!(selected = ?self.selection.current(), "Selection advanced");
            }
            Command::SelectPrevious => {
                self.selection.select_previous(&self.topology);
                tracing::debug!(selected = ?self.selection.current(), "Selection moved back");
            }
            Command::SetMode(mode) => self.set_mode(mode),
            Command::ToggleMode => self.toggle_mode(),
            Command::Tick => self.drift.tick(&mut self.topology),
            Command::ToggleDrift => {
                if self.drift.is_running() {
                    self.drift.stop();
                } else {
                    self.drift.start(now);
                }
                tracing::info!(running = self.drift.is_running(), "Drift toggled");
            }
            Command::Quit => self.shutdown(),
        }
    }

    /// Set the selection, refusing ids that are not in the topology
    pub fn select(&mut self, id: Option<NodeId>) {
        match id {
            Some(id) if !self.topology.contains(&id) => {
                tracing::warn!(node = %id, "Ignoring selection of unknown node");
            }
            id => {
                tracing::debug!(selected = ?id, "Selection changed");
                self.selection.select(id);
            }
        }
    }

    /// Switch presentation; selection and positions are untouched
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            tracing::info!(from = self.mode.label(), to = mode.label(), "View switched");
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Update state on each event loop iteration
    ///
    /// Returns whether node positions changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        self.drift.poll(now, &mut self.topology)
    }

    /// Stop background activity and leave the event loop
    pub fn shutdown(&mut self) {
        self.drift.stop();
        self.running = false;
        tracing::info!(drift_ticks = self.drift.ticks(), "Dashboard shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use std::time::Duration;

    fn test_app() -> AppState {
        let topology = seed::seed_topology().unwrap();
        AppState::with_parts(
            topology,
            DriftSimulator::with_seed(DriftConfig::default(), 11),
        )
    }

    fn positions(app: &AppState) -> Vec<Position> {
        app.topology().nodes().iter().map(|n| n.position).collect()
    }

    #[test]
    fn test_new_starts_in_atlas_with_drift_running() {
        let app = AppState::new().unwrap();
        assert!(app.running);
        assert_eq!(app.mode(), ViewMode::Atlas);
        assert!(app.drift().is_running());
        assert_eq!(app.selected_id(), None);
    }

    #[test]
    fn test_select_and_clear() {
        let mut app = test_app();
        app.dispatch(Command::Select(Some("evedao".into())));
        assert_eq!(app.selected_node().unwrap().name, "EveDAO");

        app.dispatch(Command::Select(None));
        assert!(app.selected_node().is_none());
    }

    #[test]
    fn test_unknown_selection_is_ignored() {
        let mut app = test_app();
        app.dispatch(Command::Select(Some("haven".into())));
        app.dispatch(Command::Select(Some("atlantis".into())));
        assert_eq!(app.selected_id().unwrap().as_str(), "haven");
    }

    #[test]
    fn test_mode_switch_preserves_selection_and_positions() {
        let mut app = test_app();
        app.dispatch(Command::Tick);
        app.dispatch(Command::Select(Some("eve11".into())));
        let before = positions(&app);

        app.dispatch(Command::SetMode(ViewMode::Overview));
        assert_eq!(app.mode(), ViewMode::Overview);
        app.dispatch(Command::SetMode(ViewMode::Atlas));
        assert_eq!(app.mode(), ViewMode::Atlas);
        app.dispatch(Command::ToggleMode);
        app.dispatch(Command::ToggleMode);

        assert_eq!(app.selected_id().unwrap().as_str(), "eve11");
        assert_eq!(positions(&app), before);
    }

    #[test]
    fn test_tick_command_moves_nodes_within_bounds() {
        let mut app = test_app();
        let before = positions(&app);
        app.dispatch(Command::Tick);
        let after = positions(&app);

        assert_ne!(before, after);
        for (old, new) in before.iter().zip(after.iter()) {
            assert!((new.x - old.x).abs() <= 1.0);
            assert!((new.y - old.y).abs() <= 1.0);
        }
    }

    #[test]
    fn test_on_tick_follows_drift_schedule() {
        let mut app = test_app();
        let t0 = Instant::now();
        assert!(!app.on_tick(t0 + Duration::from_secs(5)), "drift not started");

        app.dispatch_at(Command::ToggleDrift, t0);
        assert!(app.drift().is_running());
        assert!(!app.on_tick(t0 + Duration::from_millis(100)));
        assert!(app.on_tick(t0 + Duration::from_millis(1600)));

        app.dispatch_at(Command::ToggleDrift, t0 + Duration::from_secs(2));
        assert!(!app.drift().is_running());
        assert!(!app.on_tick(t0 + Duration::from_secs(20)));
    }

    #[test]
    fn test_quit_stops_drift_and_freezes_positions() {
        let mut app = test_app();
        let t0 = Instant::now();
        app.dispatch_at(Command::ToggleDrift, t0);

        app.dispatch(Command::Quit);
        assert!(!app.running);
        assert!(!app.drift().is_running());

        let frozen = positions(&app);
        for secs in [2, 30, 3600] {
            assert!(!app.on_tick(t0 + Duration::from_secs(secs)));
        }
        assert_eq!(positions(&app), frozen);
    }

    #[test]
    fn test_commands_after_quit_are_ignored() {
        let mut app = test_app();
        let t0 = Instant::now();
        app.dispatch_at(Command::Quit, t0);
        let frozen = positions(&app);

        app.dispatch_at(Command::Tick, t0);
        assert_eq!(positions(&app), frozen);
        assert_eq!(app.drift().ticks(), 0);

        app.dispatch_at(Command::ToggleDrift, t0);
        assert!(!app.drift().is_running());
        assert!(!app.on_tick(t0 + Duration::from_secs(10)));
        assert_eq!(positions(&app), frozen);

        app.dispatch_at(Command::Select(Some("haven".into())), t0);
        app.dispatch_at(Command::ToggleMode, t0);
        assert_eq!(app.selected_id(), None);
        assert_eq!(app.mode(), ViewMode::Atlas);
        assert!(!app.running);
    }

    #[test]
    fn test_scene_reflects_selection() {
        let mut app = test_app();
        app.dispatch(Command::Select(Some("haven".into())));
        let scene = app.scene();
        let selected: Vec<&str> = scene
            .nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(selected, ["haven"]);
    }

    #[test]
    fn test_keyboard_cycling_commands() {
        let mut app = test_app();
        app.dispatch(Command::SelectNext);
        assert_eq!(app.selected_id().unwrap().as_str(), "haven");
        app.dispatch(Command::SelectPrevious);
        assert_eq!(app.selected_id().unwrap().as_str(), "partnerB");
    }
}
