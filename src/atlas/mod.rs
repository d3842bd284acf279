// Atlas scene builder
//
// Turns a Topology and the current selection into drawing primitives in
// atlas space (880x520, y down). Nothing here touches the terminal; the
// canvas in ui::atlas consumes an AtlasScene and paints it.

use crate::model::{Link, Node, NodeId, Position, Topology};
use crate::theme::{coherence_color, COHERENCE_CYAN, LINK_SLATE, RING_FOCUS, RING_IDLE};
use ratatui::style::Color;

/// Base radius at cx = 50
pub const BASE_RADIUS: f64 = 14.0;

/// Radius gained per coherence point above 50
pub const RADIUS_PER_CX: f64 = 0.25;

/// Gap between the node circle and its outer ring
pub const RING_GAP: f64 = 6.0;

/// Horizontal gap between the outer edge of a node and its label
pub const LABEL_GAP: f64 = 10.0;

/// Vertical label offset (text baseline sits slightly below centre)
pub const LABEL_DROP: f64 = 4.0;

/// Opacity of links touching the selected node
pub const LINK_OPACITY_FOCUS: f64 = 0.9;

/// Opacity of links away from the selected node
pub const LINK_OPACITY_FADED: f64 = 0.25;

/// Opacity of every link when nothing is selected
pub const LINK_OPACITY_NEUTRAL: f64 = 0.55;

/// Fill opacity of the selected node
pub const NODE_OPACITY_SELECTED: f64 = 0.95;

/// Fill opacity of unselected nodes
pub const NODE_OPACITY_IDLE: f64 = 0.8;

/// Ring opacity of the selected node
pub const RING_OPACITY_SELECTED: f64 = 0.9;

/// Ring opacity of unselected nodes
pub const RING_OPACITY_IDLE: f64 = 0.25;

/// Stroke width for a link of the given mass: `1 + 6 * mass`
pub fn link_thickness(mass: f64) -> f64 {
    1.0 + 6.0 * mass
}

/// Circle radius for a node of the given coherence: `14 + 0.25 * (cx - 50)`
pub fn node_radius(cx: f64) -> f64 {
    BASE_RADIUS + RADIUS_PER_CX * (cx - 50.0)
}

/// How a link relates to the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEmphasis {
    /// One endpoint is selected
    Focused,
    /// Something else is selected
    Faded,
    /// Nothing is selected
    Neutral,
}

impl LinkEmphasis {
    pub fn for_link(link: &Link, selected: Option<&NodeId>) -> Self {
        match selected {
            None => Self::Neutral,
            Some(id) if link.touches(id) => Self::Focused,
            Some(_) => Self::Faded,
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Self::Focused => LINK_OPACITY_FOCUS,
            Self::Faded => LINK_OPACITY_FADED,
            Self::Neutral => LINK_OPACITY_NEUTRAL,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Focused => COHERENCE_CYAN,
            Self::Faded | Self::Neutral => LINK_SLATE,
        }
    }
}

/// A link ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPrimitive {
    pub from: Position,
    pub to: Position,
    pub thickness: f64,
    pub color: Color,
    pub opacity: f64,
    pub emphasis: LinkEmphasis,
}

/// A node ready to draw: filled circle, outer ring and label
#[derive(Debug, Clone, PartialEq)]
pub struct NodePrimitive {
    pub id: NodeId,
    pub label: String,
    pub center: Position,
    pub radius: f64,
    pub fill: Color,
    pub fill_opacity: f64,
    pub ring_radius: f64,
    pub ring_color: Color,
    pub ring_opacity: f64,
    pub label_anchor: Position,
    pub selected: bool,
}

impl NodePrimitive {
    fn from_node(node: &Node, selected: Option<&NodeId>) -> Self {
        let radius = node_radius(node.coherence);
        let is_selected = selected == Some(&node.id);
        let center = node.position;

        Self {
            id: node.id.clone(),
            label: node.name.clone(),
            center,
            radius,
            fill: coherence_color(node.coherence),
            fill_opacity: if is_selected {
                NODE_OPACITY_SELECTED
            } else {
                NODE_OPACITY_IDLE
            },
            ring_radius: radius + RING_GAP,
            ring_color: if is_selected { RING_FOCUS } else { RING_IDLE },
            ring_opacity: if is_selected {
                RING_OPACITY_SELECTED
            } else {
                RING_OPACITY_IDLE
            },
            label_anchor: Position::new(center.x + radius + LABEL_GAP, center.y + LABEL_DROP),
            selected: is_selected,
        }
    }
}

/// Everything the Atlas canvas draws for one frame
///
/// Links come first so they render beneath nodes. `links` follows the
/// topology's link order one to one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtlasScene {
    pub links: Vec<LinkPrimitive>,
    pub nodes: Vec<NodePrimitive>,
}

/// Build the scene for the current topology and selection
///
/// Cost is O(nodes + links). Endpoints always resolve because Topology
/// validates link references on construction.
pub fn build_scene(topology: &Topology, selected: Option<&NodeId>) -> AtlasScene {
    let links = topology
        .links()
        .iter()
        .filter_map(|link| {
            let source = topology.node(&link.source)?;
            let target = topology.node(&link.target)?;
            let emphasis = LinkEmphasis::for_link(link, selected);
            Some(LinkPrimitive {
                from: source.position,
                to: target.position,
                thickness: link_thickness(link.mass),
                color: emphasis.color(),
                opacity: emphasis.opacity(),
                emphasis,
            })
        })
        .collect();

    let nodes = topology
        .nodes()
        .iter()
        .map(|node| NodePrimitive::from_node(node, selected))
        .collect();

    AtlasScene { links, nodes }
}

/// Find the node under `point`
///
/// A node is hit when the point falls inside its outer ring grown by
/// `tolerance`. Overlaps resolve to the nearest centre. Link endpoints sit
/// on node centres, so clicking an endpoint hits its node.
pub fn hit_test(scene: &AtlasScene, point: Position, tolerance: f64) -> Option<&NodeId> {
    scene
        .nodes
        .iter()
        .map(|node| (node, node.center.distance_to(point)))
        .filter(|(node, dist)| *dist <= node.ring_radius + tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(node, _)| &node.id)
}

/// Spacing between parallel strokes used to render thickness
pub const STROKE_SPACING: f64 = 2.0;

/// Upper bound on parallel strokes for out-of-range masses
pub const MAX_STROKES: f64 = 16.0;

/// Parallel copies of a segment that together render a thick stroke
///
/// Returns `round(thickness)` segments (between 1 and MAX_STROKES), offset
/// along the segment normal and centred on the original line.
pub fn stroke_segments(from: Position, to: Position, thickness: f64) -> Vec<(Position, Position)> {
    let count = if thickness.is_nan() {
        1
    } else {
        thickness.round().clamp(1.0, MAX_STROKES) as usize
    };
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || !len.is_finite() {
        return vec![(from, to)];
    }

    let (nx, ny) = (-dy / len, dx / len);
    let centre = (count as f64 - 1.0) / 2.0;
    (0..count)
        .map(|i| {
            let offset = (i as f64 - centre) * STROKE_SPACING;
            (
                Position::new(from.x + nx * offset, from.y + ny * offset),
                Position::new(to.x + nx * offset, to.y + ny * offset),
            )
        })
        .collect()
}
