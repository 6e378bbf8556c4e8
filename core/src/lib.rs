//! graph-bfs-core: breadth-first traversal over an in-memory graph.
//!
//! A pure Rust library that keeps nodes in an arena with ordered adjacency
//! lists, and provides BFS visitation plus unweighted single-source
//! distances built on top of it.

mod distance;
mod error;
mod graph;
mod traversal;

pub use distance::{compute_distances, distance_to, distance_visitor, DistanceMap};
pub use error::GraphError;
pub use graph::{EdgeOrder, Graph, Node, NodeId};
pub use traversal::{bfs_order, traverse};
