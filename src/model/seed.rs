// Mock telemetry seed set
//
// Stands in for a real telemetry feed. A feed would hand the same Node/Link
// shapes to Topology::new on each refresh.

use super::{Link, Node, Position, Topology, TopologyError};

/// (id, name, cx, consent, containment, x, y)
const SEED_NODES: [(&str, &str, f64, f64, f64, f64, f64); 5] = [
    ("haven", "Haven Academy", 82.0, 97.0, 91.0, 180.0, 220.0),
    ("evedao", "EveDAO", 76.0, 92.0, 88.0, 520.0, 180.0),
    ("eve11", "Eve11 Engine", 89.0, 99.0, 95.0, 380.0, 360.0),
    ("partnerA", "Partner Lab A", 71.0, 90.0, 85.0, 720.0, 300.0),
    ("partnerB", "Partner Lab B", 64.0, 88.0, 80.0, 90.0, 360.0),
];

/// (source, target, mass)
const SEED_LINKS: [(&str, &str, f64); 6] = [
    ("haven", "evedao", 0.62),
    ("haven", "eve11", 0.78),
    ("evedao", "eve11", 0.55),
    ("evedao", "partnerA", 0.31),
    ("haven", "partnerB", 0.28),
    ("partnerB", "eve11", 0.40),
];

pub fn seed_nodes() -> Vec<Node> {
    SEED_NODES
        .iter()
        .map(|&(id, name, cx, consent, containment, x, y)| {
            Node::new(id, name, cx, consent, containment, Position::new(x, y))
        })
        .collect()
}

pub fn seed_links() -> Vec<Link> {
    SEED_LINKS
        .iter()
        .map(|&(source, target, mass)| Link::new(source, target, mass))
        .collect()
}

/// Build the validated mock topology
pub fn seed_topology() -> Result<Topology, TopologyError> {
    Topology::new(seed_nodes(), seed_links())
}
