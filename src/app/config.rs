// Application configuration
//
// Compiled-in constants and small config structs for:
// - Telemetry drift (period, magnitude, clamp window)
// - Atlas coordinate space
// - Event loop cadence

use std::ops::RangeInclusive;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Event loop poll interval (frame cadence) in milliseconds
pub const UI_POLL_MS: u64 = 100;

/// Drift tick period in milliseconds
pub const DRIFT_PERIOD_MS: u64 = 1600;

/// Maximum per-axis jitter applied on each drift tick
pub const DRIFT_MAGNITUDE: f64 = 1.0;

/// Horizontal clamp window for drifting nodes
pub const DRIFT_X_RANGE: RangeInclusive<f64> = 60.0..=820.0;

/// Vertical clamp window for drifting nodes
pub const DRIFT_Y_RANGE: RangeInclusive<f64> = 80.0..=440.0;

/// Atlas coordinate space width
pub const ATLAS_WIDTH: f64 = 880.0;

/// Atlas coordinate space height
pub const ATLAS_HEIGHT: f64 = 520.0;

// ============================================================================
// Enums
// ============================================================================

/// Presentation mode; exactly one is shown at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Summary grid of node cards
    Overview,
    /// Graph view (default)
    #[default]
    Atlas,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Atlas => "Atlas",
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            Self::Overview => Self::Atlas,
            Self::Atlas => Self::Overview,
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Drift simulator settings
#[derive(Debug, Clone, PartialEq)]
pub struct DriftConfig {
    /// Time between ticks
    pub period: Duration,

    /// Per-axis jitter bound; deltas are drawn from [-magnitude, magnitude]
    pub magnitude: f64,

    /// Clamp window for x
    pub x_range: RangeInclusive<f64>,

    /// Clamp window for y
    pub y_range: RangeInclusive<f64>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DRIFT_PERIOD_MS),
            magnitude: DRIFT_MAGNITUDE,
            x_range: DRIFT_X_RANGE,
            y_range: DRIFT_Y_RANGE,
        }
    }
}

/// Event loop settings
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Poll interval in milliseconds
    pub poll_ms: u64,
}

impl RefreshConfig {
    pub fn new() -> Self {
        Self {
            poll_ms: UI_POLL_MS,
        }
    }

    /// Get UI poll interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_mode_is_atlas() {
        assert_eq!(ViewMode::default(), ViewMode::Atlas);
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Atlas.toggled(), ViewMode::Overview);
        assert_eq!(ViewMode::Overview.toggled(), ViewMode::Atlas);
    }

    #[test]
    fn test_drift_defaults() {
        let config = DriftConfig::default();
        assert_eq!(config.period, Duration::from_millis(1600));
        assert_eq!(config.magnitude, 1.0);
        assert_eq!(*config.x_range.start(), 60.0);
        assert_eq!(*config.x_range.end(), 820.0);
        assert_eq!(*config.y_range.start(), 80.0);
        assert_eq!(*config.y_range.end(), 440.0);
    }

    #[test]
    fn test_ui_interval() {
        assert_eq!(RefreshConfig::new().ui_interval(), Duration::from_millis(100));
    }
}
