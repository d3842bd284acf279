// Selection coordinator
//
// Holds at most one selected node id. Last write wins; the Atlas renderer
// and the detail panel only read it.

use crate::model::{NodeId, Topology};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection (`None` clears it)
    pub fn select(&mut self, id: Option<NodeId>) {
        self.current = id;
    }

    pub fn current(&self) -> Option<&NodeId> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Select the node after the current one in topology order, wrapping
    ///
    /// From no selection this picks the first node.
    pub fn select_next(&mut self, topology: &Topology) {
        self.step(topology, true);
    }

    /// Select the node before the current one in topology order, wrapping
    ///
    /// From no selection this picks the last node.
    pub fn select_previous(&mut self, topology: &Topology) {
        self.step(topology, false);
    }

    fn step(&mut self, topology: &Topology, forward: bool) {
        if topology.is_empty() {
            self.clear();
            return;
        }
        let len = topology.len();

        let current_idx = self.current.as_ref().and_then(|id| topology.index_of(id));
        let idx = match (current_idx, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(idx), true) => (idx + 1) % len,
            (Some(idx), false) => (idx + len - 1) % len,
        };
        self.current = Some(topology.nodes()[idx].id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::seed_topology;
    use crate::model::Topology;

    #[test]
    fn test_last_write_wins() {
        let mut selection = Selection::new();
        assert_eq!(selection.current(), None);

        selection.select(Some("haven".into()));
        selection.select(Some("eve11".into()));
        assert_eq!(selection.current(), Some(&NodeId::from("eve11")));
        assert!(selection.is_selected(&"eve11".into()));
        assert!(!selection.is_selected(&"haven".into()));

        selection.select(None);
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_cycle_forward_wraps() {
        let topology = seed_topology().unwrap();
        let mut selection = Selection::new();

        selection.select_next(&topology);
        assert_eq!(selection.current().unwrap().as_str(), "haven");

        for _ in 0..4 {
            selection.select_next(&topology);
        }
        assert_eq!(selection.current().unwrap().as_str(), "partnerB");

        selection.select_next(&topology);
        assert_eq!(selection.current().unwrap().as_str(), "haven");
    }

    #[test]
    fn test_cycle_backward_wraps() {
        let topology = seed_topology().unwrap();
        let mut selection = Selection::new();

        selection.select_previous(&topology);
        assert_eq!(selection.current().unwrap().as_str(), "partnerB");

        selection.select(Some("haven".into()));
        selection.select_previous(&topology);
        assert_eq!(selection.current().unwrap().as_str(), "partnerB");
    }

    #[test]
    fn test_cycle_on_empty_topology() {
        let topology = Topology::new(vec![], vec![]).unwrap();
        let mut selection = Selection::new();
        selection.select_next(&topology);
        assert_eq!(selection.current(), None);
        selection.select_previous(&topology);
        assert_eq!(selection.current(), None);
    }
}
