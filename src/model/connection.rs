//! Directed connections between node ports.

use serde::{Deserialize, Serialize};

/// A directed edge from an output port on one node to an input port
/// on another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DspConnection {
    /// Unique identifier for this connection.
    pub id: String,
    /// Source node ID.
    pub from_node: String,
    /// Output port label on the source node.
    pub from_port: String,
    /// Destination node ID.
    pub to_node: String,
    /// Input port label on the destination node.
    pub to_port: String,
}

impl DspConnection {
    /// Creates a new connection.
    pub fn new(
        id: impl Into<String>,
        from_node: impl Into<String>,
        from_port: impl Into<String>,
        to_node: impl Into<String>,
        to_port: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from_node: from_node.into(),
            from_port: from_port.into(),
            to_node: to_node.into(),
            to_port: to_port.into(),
        }
    }

    /// Returns true if both endpoint node IDs are non-blank.
    ///
    /// Referential integrity against the node list is deliberately not
    /// checked here; blank endpoints are the only thing the enhancer filters.
    pub fn has_valid_endpoints(&self) -> bool {
        !self.from_node.trim().is_empty() && !self.to_node.trim().is_empty()
    }
}
