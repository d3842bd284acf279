// Theme module - Color constants and theme re-exports
//
// This module provides the colour palette for Nimbus. Status colours come
// from the coherence classifier in `status`; `blend` turns SVG-style
// opacities into solid terminal colours.

pub mod blend;
pub mod status;

use ratatui::style::Color;

/// Calm coherence - cyan, also the selection emphasis colour for links
/// RGB: (54, 208, 196)
pub const COHERENCE_CYAN: Color = Color::Rgb(54, 208, 196);

/// Variable coherence - containment gold
/// RGB: (229, 183, 105)
pub const CONTAINMENT_GOLD: Color = Color::Rgb(229, 183, 105);

/// Storm coherence - soft red
/// RGB: (248, 113, 113)
pub const STORM_RED: Color = Color::Rgb(248, 113, 113);

/// Neutral link stroke
/// RGB: (100, 116, 139)
pub const LINK_SLATE: Color = Color::Rgb(100, 116, 139);

/// Outer ring of the selected node
/// RGB: (34, 211, 238)
pub const RING_FOCUS: Color = Color::Rgb(34, 211, 238);

/// Outer ring of unselected nodes
/// RGB: (148, 163, 184)
pub const RING_IDLE: Color = Color::Rgb(148, 163, 184);

/// Canvas background that opacities blend toward
/// RGB: (15, 23, 42)
pub const NIGHT_SKY: Color = Color::Rgb(15, 23, 42);

/// Primary text
/// RGB: (248, 250, 252)
pub const CLOUD_WHITE: Color = Color::Rgb(248, 250, 252);

/// Secondary text and borders
/// RGB: (203, 213, 225)
pub const MIST_GRAY: Color = Color::Rgb(203, 213, 225);

/// Hints and inactive chrome
/// RGB: (100, 116, 139)
pub const DUSK_GRAY: Color = Color::Rgb(100, 116, 139);

/// Consent metric accent
/// RGB: (167, 139, 250)
pub const CONSENT_VIOLET: Color = Color::Rgb(167, 139, 250);

/// Containment metric accent
/// RGB: (251, 191, 36)
pub const CONTAINMENT_AMBER: Color = Color::Rgb(251, 191, 36);

/// Field status accent
/// RGB: (74, 222, 128)
pub const STATUS_GREEN: Color = Color::Rgb(74, 222, 128);

pub use blend::*;
pub use status::*;
