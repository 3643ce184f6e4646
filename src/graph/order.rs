//! Deterministic processing-order resolution via Kahn's algorithm.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;
use tracing::debug;

use crate::model::{DspConnection, DspNode};

/// Error for the strict ordering variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The graph contains a cycle (or edges that starve nodes of a zero
    /// in-degree), so no full topological order exists.
    #[error("dependency cycle: nodes {members:?} could not be ordered")]
    Cycle {
        /// IDs of the nodes left unordered, in original node-list order.
        members: Vec<String>,
    },
}

/// Computes a deterministic, total execution order for the graph.
///
/// Kahn's algorithm with two determinism rules: in-degrees and adjacency are
/// populated per node in node-list order and the zero-in-degree seeds are
/// enumerated in that same explicit order (never a hash map's incidental
/// iteration order), and the work queue is strict FIFO.
///
/// Total and never-erroring: nodes that survive the drain (cycle members,
/// nodes downstream of a cycle, nodes starved by edges from unknown sources)
/// are appended at the end in original node-list order, so the output always
/// contains every input node exactly once. Callers must treat the result as
/// best-effort when cycles exist, not as a dependency-correct schedule.
pub fn processing_order(nodes: &[DspNode], connections: &[DspConnection]) -> Vec<DspNode> {
    let (mut ordered, leftovers) = kahn_order(nodes, connections);
    if !leftovers.is_empty() {
        debug!(
            "processing_order: {} node(s) appended in original order (cycle or starved)",
            leftovers.len()
        );
    }
    ordered.extend(leftovers.into_iter().cloned());
    ordered
}

/// Strict variant: rejects graphs that have no full topological order.
///
/// Same scan as [`processing_order`], but leftover nodes become an
/// [`OrderError::Cycle`] instead of an appended suffix. Exposed as a separate
/// operation so the total, non-erroring default keeps its behavior.
pub fn strict_processing_order(
    nodes: &[DspNode],
    connections: &[DspConnection],
) -> Result<Vec<DspNode>, OrderError> {
    let (ordered, leftovers) = kahn_order(nodes, connections);
    if leftovers.is_empty() {
        Ok(ordered)
    } else {
        Err(OrderError::Cycle {
            members: leftovers.iter().map(|node| node.id.clone()).collect(),
        })
    }
}

/// Runs the Kahn drain. Returns the ordered prefix plus the nodes that never
/// reached in-degree zero, the latter in original node-list order.
fn kahn_order<'a>(
    nodes: &'a [DspNode],
    connections: &[DspConnection],
) -> (Vec<DspNode>, Vec<&'a DspNode>) {
    let mut in_degree: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        in_degree.insert(node.id.as_str(), 0);
        adjacency.insert(node.id.as_str(), Vec::new());
    }

    // Edges touching unknown node IDs are counted where they can be and
    // ignored where they cannot; totality is preserved either way.
    for connection in connections {
        if let Some(targets) = adjacency.get_mut(connection.from_node.as_str()) {
            targets.push(connection.to_node.as_str());
        }
        if let Some(degree) = in_degree.get_mut(connection.to_node.as_str()) {
            *degree += 1;
        }
    }

    let by_id: HashMap<&str, &DspNode> =
        nodes.iter().map(|node| (node.id.as_str(), node)).collect();

    // Seed in node-list order, the order the in-degrees were populated in.
    let mut queue: VecDeque<&str> = nodes
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| in_degree[id] == 0)
        .collect();

    let mut ordered: Vec<DspNode> = Vec::with_capacity(nodes.len());
    let mut emitted: HashSet<&str> = HashSet::with_capacity(nodes.len());

    while let Some(id) = queue.pop_front() {
        // Defensive: an ID with no node object is dropped silently.
        if let Some(node) = by_id.get(id) {
            ordered.push((*node).clone());
        }
        emitted.insert(id);

        if let Some(targets) = adjacency.get(id) {
            for &target in targets {
                if let Some(degree) = in_degree.get_mut(target) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(target);
                    }
                }
            }
        }
    }

    let leftovers: Vec<&DspNode> = nodes
        .iter()
        .filter(|node| !emitted.contains(node.id.as_str()))
        .collect();

    (ordered, leftovers)
}
