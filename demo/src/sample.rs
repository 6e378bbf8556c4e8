use std::fmt::Write as _;

use graph_bfs_core::{bfs_order, compute_distances, EdgeOrder, Graph, GraphError, NodeId};
use serde::Serialize;

/// Edges of the sample graph by payload value, in insertion order.
const SAMPLE_EDGES: [(i64, i64); 7] = [(1, 2), (1, 3), (2, 4), (4, 3), (4, 5), (5, 2), (5, 6)];

/// Six nodes valued 1..=6 wired with [`SAMPLE_EDGES`].
pub fn sample_graph(edge_order: EdgeOrder) -> Result<Graph, GraphError> {
    let mut graph = Graph::with_capacity(6, edge_order);
    for value in 1..=6 {
        graph.add_node(value);
    }

    // Node ids are assigned densely from 0, so value v lives at id v - 1.
    graph.load_edges(
        SAMPLE_EDGES
            .iter()
            .map(|&(from, to)| ((from - 1) as NodeId, (to - 1) as NodeId)),
    )?;
    Ok(graph)
}

/// Traversal and distance results, expressed in payload values.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    pub source: i64,
    /// Payload values in visitation order.
    pub order: Vec<i64>,
    /// `(value, distance)` in node-id order. Serialized as a JSON object
    /// whose keys are emitted in that same order.
    #[serde(serialize_with = "as_object")]
    pub distances: Vec<(i64, u32)>,
}

fn as_object<S: serde::Serializer>(pairs: &[(i64, u32)], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(pairs.iter().map(|(v, d)| (v, d)))
}

pub fn run(graph: &Graph, source: NodeId) -> Result<Report, GraphError> {
    let value = |id: NodeId| graph.node(id).map(|n| n.value).unwrap_or_default();

    let order = bfs_order(graph, source)?;
    let distances = compute_distances(graph, source)?;

    Ok(Report {
        source: value(source),
        order: order.into_iter().map(value).collect(),
        distances: distances.into_iter().map(|(id, d)| (value(id), d)).collect(),
    })
}

impl Report {
    /// Two lines: `v ; ` per visited node, then `v : d ; ` per distance entry.
    pub fn render_human(&self) -> String {
        let mut out = String::new();
        for v in &self.order {
            let _ = write!(out, "{} ; ", v);
        }
        out.push('\n');
        for (v, d) in &self.distances {
            let _ = write!(out, "{} : {} ; ", v, d);
        }
        out.push('\n');
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
