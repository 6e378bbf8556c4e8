use std::collections::{HashSet, VecDeque};

use crate::error::GraphError;
use crate::graph::{Graph, Node, NodeId};

/// Breadth-first traversal from `source`, calling `visit` once per reachable node.
///
/// Nodes are visited in non-decreasing distance from `source`. Among nodes at
/// the same distance, order follows discovery: parents in visitation order,
/// then each parent's adjacency list order.
///
/// A node joins the discovered set when it is enqueued, not when it is
/// visited, so a node reachable over several in-flight paths (or a
/// self-loop) is queued only once.
///
/// Fails with [`GraphError::InvalidArgument`] if `source` is not in the
/// graph; `visit` is not called in that case.
#[tracing::instrument(level = "debug", skip(graph, visit), fields(node_count = graph.node_count()))]
pub fn traverse<F>(graph: &Graph, source: NodeId, mut visit: F) -> Result<(), GraphError>
where
    F: FnMut(NodeId, &Node),
{
    if !graph.contains(source) {
        return Err(GraphError::InvalidArgument(source));
    }

    // discovered = visited nodes plus everything still in the queue
    let mut discovered: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    discovered.insert(source);
    queue.push_back(source);

    let mut nodes_visited = 0usize;
    while let Some(current) = queue.pop_front() {
        // Queued ids are the checked source or edge targets, which
        // `add_edge` only accepts for existing nodes.
        let node = graph.node_at(current);

        visit(current, node);
        nodes_visited += 1;

        for &next in node.neighbors() {
            if discovered.insert(next) {
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(nodes_visited, "bfs complete");
    Ok(())
}

/// Node ids in the order [`traverse`] visits them.
pub fn bfs_order(graph: &Graph, source: NodeId) -> Result<Vec<NodeId>, GraphError> {
    let mut order = Vec::new();
    traverse(graph, source, |id, _| order.push(id))?;
    Ok(order)
}
