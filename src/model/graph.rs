//! The DSP graph container.

use serde::{Deserialize, Serialize};

use super::{DspConnection, DspNode};

/// A DSP graph: an ordered node list and its connections.
///
/// Node order is semantically meaningful: it is the fallback processing
/// order and the order in which a default chain is auto-wired. Connection
/// order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DspGraph {
    /// All nodes, in their stored (fallback) order.
    #[serde(default)]
    pub nodes: Vec<DspNode>,
    /// All connections between node ports.
    #[serde(default)]
    pub connections: Vec<DspConnection>,
}

impl DspGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from nodes and connections.
    pub fn with_nodes(nodes: Vec<DspNode>, connections: Vec<DspConnection>) -> Self {
        Self { nodes, connections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = DspGraph::new();
        assert!(graph.nodes.is_empty());
        assert!(graph.connections.is_empty());
    }

    #[test]
    fn test_with_nodes() {
        let graph = DspGraph::with_nodes(
            vec![DspNode::new("osc"), DspNode::new("out")],
            Vec::new(),
        );
        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.connections.is_empty());
    }
}
