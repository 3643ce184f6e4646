//! Template project enhancement
//!
//! The pipeline entry point: the external template subsystem builds a bare
//! [`PluginProject`] and this module turns it into one with a usable graph
//! topology and bound UI widgets.

use tracing::debug;

use crate::binding::bind_components_to_parameters;
use crate::graph::auto_connect_nodes;
use crate::idgen::ConnectionIdGen;
use crate::model::{DspGraph, PluginProject};

/// Normalizes a template project's wiring and binds its UI widgets.
///
/// Decision sequence:
/// 1. Drop every connection with a blank endpoint node ID, silently.
/// 2. If no connections remain and the graph has more than one node,
///    synthesize a default chain over the full node list. A single surviving
///    connection suppresses auto-wiring even if it leaves nodes unwired, and
///    a graph with one or zero nodes stays unwired.
/// 3. Bind UI widgets against the node list, which auto-wiring never alters.
///
/// Returns a new project; the input is never mutated. Malformed-but-typed
/// input degrades gracefully and never raises an error.
pub fn enhance_template_project<G: ConnectionIdGen>(
    project: &PluginProject,
    id_gen: &G,
) -> PluginProject {
    let graph = &project.graph;

    let mut connections: Vec<_> = graph
        .connections
        .iter()
        .filter(|connection| connection.has_valid_endpoints())
        .cloned()
        .collect();
    let dropped = graph.connections.len() - connections.len();
    if dropped > 0 {
        debug!("enhance: dropped {dropped} connection(s) with blank endpoints");
    }

    if connections.is_empty() && graph.nodes.len() > 1 {
        connections = auto_connect_nodes(&graph.nodes, id_gen);
        debug!("enhance: auto-wired {} connection(s)", connections.len());
    }

    let ui_components = bind_components_to_parameters(&project.ui_components, &graph.nodes);

    PluginProject {
        id: project.id.clone(),
        name: project.name.clone(),
        graph: DspGraph::with_nodes(graph.nodes.clone(), connections),
        ui_components,
    }
}
