// Coherence classifier
//
// Maps a coherence index (cx) to a field status and a display colour. Both
// use the same thresholds and are total over f64: out-of-range and negative
// values are classified by the same inequalities, NaN falls through to Storm.

use ratatui::style::Color;

use super::{COHERENCE_CYAN, CONTAINMENT_GOLD, STORM_RED};

/// Lower bound (inclusive) of the Calm bucket
pub const CALM_THRESHOLD: f64 = 85.0;

/// Lower bound (inclusive) of the Variable bucket
pub const VARIABLE_THRESHOLD: f64 = 70.0;

/// Symbolic weather for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStatus {
    /// cx >= 85
    Calm,
    /// 70 <= cx < 85
    Variable,
    /// cx < 70
    Storm,
}

impl FieldStatus {
    /// All statuses in legend order
    pub const ALL: [FieldStatus; 3] = [Self::Calm, Self::Variable, Self::Storm];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Variable => "Variable",
            Self::Storm => "Storm",
        }
    }

    /// Legend entry with the threshold range
    pub fn legend(&self) -> &'static str {
        match self {
            Self::Calm => "Calm (≥85)",
            Self::Variable => "Variable (70–84)",
            Self::Storm => "Storm (<70)",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Calm => COHERENCE_CYAN,
            Self::Variable => CONTAINMENT_GOLD,
            Self::Storm => STORM_RED,
        }
    }
}

/// Classify a coherence index into its field status
pub fn field_status(cx: f64) -> FieldStatus {
    if cx >= CALM_THRESHOLD {
        FieldStatus::Calm
    } else if cx >= VARIABLE_THRESHOLD {
        FieldStatus::Variable
    } else {
        FieldStatus::Storm
    }
}

/// Display colour for a coherence index
pub fn coherence_color(cx: f64) -> Color {
    field_status(cx).color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_belong_to_higher_bucket() {
        assert_eq!(field_status(85.0), FieldStatus::Calm);
        assert_eq!(field_status(70.0), FieldStatus::Variable);
        assert_eq!(field_status(84.999), FieldStatus::Variable);
        assert_eq!(field_status(69.999), FieldStatus::Storm);
    }

    #[test]
    fn test_seed_values() {
        assert_eq!(field_status(82.0), FieldStatus::Variable);
        assert_eq!(field_status(76.0), FieldStatus::Variable);
        assert_eq!(field_status(89.0), FieldStatus::Calm);
        assert_eq!(field_status(71.0), FieldStatus::Variable);
        assert_eq!(field_status(64.0), FieldStatus::Storm);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(field_status(-20.0), FieldStatus::Storm);
        assert_eq!(field_status(250.0), FieldStatus::Calm);
        assert_eq!(field_status(f64::NAN), FieldStatus::Storm);
        assert_eq!(field_status(f64::INFINITY), FieldStatus::Calm);
        assert_eq!(field_status(f64::NEG_INFINITY), FieldStatus::Storm);
    }

    #[test]
    fn test_colors() {
        assert_eq!(coherence_color(90.0), COHERENCE_CYAN);
        assert_eq!(coherence_color(75.0), CONTAINMENT_GOLD);
        assert_eq!(coherence_color(10.0), STORM_RED);
    }

    #[test]
    fn test_labels_and_legend() {
        assert_eq!(FieldStatus::Calm.label(), "Calm");
        assert_eq!(FieldStatus::Variable.legend(), "Variable (70–84)");
        assert_eq!(FieldStatus::ALL.len(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Below 70 is always Storm and red
        #[test]
        fn prop_storm_partition(cx in -1000.0f64..70.0) {
            prop_assert_eq!(field_status(cx), FieldStatus::Storm);
            prop_assert_eq!(coherence_color(cx), STORM_RED);
        }

        /// [70, 85) is always Variable and gold
        #[test]
        fn prop_variable_partition(cx in 70.0f64..85.0) {
            prop_assert_eq!(field_status(cx), FieldStatus::Variable);
            prop_assert_eq!(coherence_color(cx), CONTAINMENT_GOLD);
        }

        /// 85 and above is always Calm and cyan
        #[test]
        fn prop_calm_partition(cx in 85.0f64..1000.0) {
            prop_assert_eq!(field_status(cx), FieldStatus::Calm);
            prop_assert_eq!(coherence_color(cx), COHERENCE_CYAN);
        }

        /// Status and colour never disagree
        #[test]
        fn prop_color_follows_status(cx in proptest::num::f64::ANY) {
            prop_assert_eq!(coherence_color(cx), field_status(cx).color());
        }
    }
}
