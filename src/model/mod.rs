// Domain model
//
// Nodes, links and the validated Topology that owns them. Everything the
// dashboard draws is derived from a Topology; only node positions change at
// runtime (driven by the drift simulator).

pub mod error;
pub mod seed;

pub use error::TopologyError;

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Unique node identity (e.g. "haven", "eve11")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Position in atlas space (880x520, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A monitored node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identity
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Coherence index (cx), drives status, colour and radius
    pub coherence: f64,
    /// Consent integrity percentage (display only)
    pub consent: f64,
    /// Containment integrity percentage (display only)
    pub containment: f64,
    /// Current position in atlas space
    pub position: Position,
}

impl Node {
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        coherence: f64,
        consent: f64,
        containment: f64,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coherence,
            consent,
            containment,
            position,
        }
    }
}

/// Undirected link between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
    /// Symbolic mass in [0, 1]; drives stroke thickness
    pub mass: f64,
}

impl Link {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, mass: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            mass,
        }
    }

    /// Whether either endpoint is `id`
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }
}

/// Validated node and link set
///
/// Invariants, checked once by [`Topology::new`]:
/// - node identities are unique
/// - every link endpoint names a node in the set
///
/// Node order is preserved as given.
#[derive(Debug, Clone)]
pub struct Topology {
    nodes: Vec<Node>,
    links: Vec<Link>,
    index: HashMap<NodeId, usize>,
}

impl Topology {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self, TopologyError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), idx).is_some() {
                return Err(TopologyError::DuplicateNodeId(node.id.clone()));
            }
        }

        for link in &links {
            for endpoint in [&link.source, &link.target] {
                if !index.contains_key(endpoint) {
                    return Err(TopologyError::InvalidLinkReference {
                        from: link.source.clone(),
                        to: link.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            links = links.len(),
            "Topology validated"
        );

        Ok(Self {
            nodes,
            links,
            index,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Index of `id` in topology order
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Mutable access to node positions only; identities and metrics stay fixed
    pub fn positions_mut(&mut self) -> impl Iterator<Item = &mut Position> {
        self.nodes.iter_mut().map(|node| &mut node.position)
    }

    /// Ids of all nodes linked to `id`
    pub fn neighbours(&self, id: &NodeId) -> Vec<&NodeId> {
        let mut seen = HashSet::new();
        self.links
            .iter()
            .filter_map(|link| {
                if &link.source == id {
                    Some(&link.target)
                } else if &link.target == id {
                    Some(&link.source)
                } else {
                    None
                }
            })
            .filter(|other| seen.insert(*other))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
