use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::graph::{Graph, Node, NodeId};
use crate::traversal::traverse;

/// Shortest known hop count from the source, keyed by node id.
///
/// A missing entry means the node is unreachable (infinite distance).
pub type DistanceMap = BTreeMap<NodeId, u32>;

/// Distance recorded for `node`, `None` if unreachable.
pub fn distance_to(distances: &DistanceMap, node: NodeId) -> Option<u32> {
    distances.get(&node).copied()
}

/// Build the visitor that accumulates distances into `distances`.
///
/// The first node visited is taken as the source and gets distance 0. Every
/// visited node then relaxes its outgoing neighbors to
/// `min(recorded, own + 1)`, with a missing entry counting as infinite.
///
/// Relies on [`traverse`] visiting in non-decreasing distance order: the
/// first value written for a node is already final, and later relaxations
/// can only tie it.
pub fn distance_visitor(distances: &mut DistanceMap) -> impl FnMut(NodeId, &Node) + '_ {
    move |id, node| {
        if distances.is_empty() {
            distances.insert(id, 0);
        }

        // Every visited node was given a distance when it was discovered.
        let Some(own) = distance_to(distances, id) else {
            return;
        };

        // Saturated candidates never beat a recorded value.
        let candidate = own.saturating_add(1);
        for &next in node.neighbors() {
            distances
                .entry(next)
                .and_modify(|d| *d = (*d).min(candidate))
                .or_insert(candidate);
        }
    }
}

/// Unweighted single-source shortest-path distances from `source`.
///
/// The result has an entry for every node reachable from `source` (including
/// `source` itself at 0) and none for unreachable nodes.
#[tracing::instrument(level = "debug", skip(graph), fields(node_count = graph.node_count()))]
pub fn compute_distances(graph: &Graph, source: NodeId) -> Result<DistanceMap, GraphError> {
    let mut distances = DistanceMap::new();
    traverse(graph, source, distance_visitor(&mut distances))?;

    tracing::debug!(
        reachable = distances.len(),
        eccentricity = distances.values().max().copied().unwrap_or(0),
        "distances computed"
    );
    Ok(distances)
}
