//! Default-chain synthesis for graphs with no valid wiring.

use crate::idgen::ConnectionIdGen;
use crate::model::{DspConnection, DspNode};

/// Port label used when a source node declares no outputs.
pub const DEFAULT_OUTPUT_PORT: &str = "output";
/// Port label used when a target node declares no inputs.
pub const DEFAULT_INPUT_PORT: &str = "input";

/// Synthesizes a linear chain over the nodes in their given order.
///
/// Produces exactly `max(N-1, 0)` connections, one per consecutive pair,
/// wiring the first declared output port of each node to the first declared
/// input port of the next (falling back to [`DEFAULT_OUTPUT_PORT`] /
/// [`DEFAULT_INPUT_PORT`] when a node declares none).
///
/// Pure function of the node list: existing connections are not consulted;
/// callers decide when a graph needs auto-wiring.
pub fn auto_connect_nodes<G: ConnectionIdGen>(
    nodes: &[DspNode],
    id_gen: &G,
) -> Vec<DspConnection> {
    nodes
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let from_port = from
                .outputs
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_OUTPUT_PORT);
            let to_port = to
                .inputs
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_INPUT_PORT);
            DspConnection::new(id_gen.next_id(), &from.id, from_port, &to.id, to_port)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::{CountingIdGen, SerialIdGen};
    use std::collections::HashSet;

    #[test]
    fn test_chain_links_consecutive_pairs() {
        let nodes = vec![
            DspNode::new("osc").with_ports(Vec::<String>::new(), ["out"]),
            DspNode::new("filter").with_ports(["in"], ["out"]),
            DspNode::new("master").with_ports(["in"], Vec::<String>::new()),
        ];
        let connections = auto_connect_nodes(&nodes, &CountingIdGen::new("c"));

        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].from_node, "osc");
        assert_eq!(connections[0].from_port, "out");
        assert_eq!(connections[0].to_node, "filter");
        assert_eq!(connections[0].to_port, "in");
        assert_eq!(connections[1].from_node, "filter");
        assert_eq!(connections[1].to_node, "master");
    }

    #[test]
    fn test_fallback_port_labels() {
        let nodes = vec![DspNode::new("a"), DspNode::new("b")];
        let connections = auto_connect_nodes(&nodes, &CountingIdGen::new("c"));

        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].from_port, DEFAULT_OUTPUT_PORT);
        assert_eq!(connections[0].to_port, DEFAULT_INPUT_PORT);
    }

    #[test]
    fn test_first_port_is_chosen() {
        let nodes = vec![
            DspNode::new("svf").with_ports(["in"], ["lowpass", "highpass", "bandpass"]),
            DspNode::new("mixer").with_ports(["left", "right"], ["out"]),
        ];
        let connections = auto_connect_nodes(&nodes, &CountingIdGen::new("c"));
        assert_eq!(connections[0].from_port, "lowpass");
        assert_eq!(connections[0].to_port, "left");
    }

    #[test]
    fn test_short_node_lists_yield_no_connections() {
        let id_gen = CountingIdGen::new("c");
        assert!(auto_connect_nodes(&[], &id_gen).is_empty());
        assert!(auto_connect_nodes(&[DspNode::new("solo")], &id_gen).is_empty());
    }

    #[test]
    fn test_connection_ids_are_fresh() {
        let nodes: Vec<DspNode> = (0..10).map(|i| DspNode::new(format!("n{i}"))).collect();
        let connections = auto_connect_nodes(&nodes, &SerialIdGen);

        let ids: HashSet<&str> = connections.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), connections.len());
    }

    #[test]
    fn test_deterministic_with_injected_generator() {
        let nodes = vec![DspNode::new("a"), DspNode::new("b")];
        let connections = auto_connect_nodes(&nodes, &CountingIdGen::new("c"));
        assert_eq!(connections[0].id, "c1");
    }
}
