use crate::error::GraphError;

/// Node identifier: index into the graph's node arena.
pub type NodeId = usize;

/// Where `add_edge` places a new edge in the source node's adjacency list.
///
/// The list order is what traversal follows among siblings, so this decides
/// tie-break order between nodes at the same distance. Distances themselves
/// do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeOrder {
    /// List order equals insertion order.
    #[default]
    Append,
    /// Newest edge first: list order is the reverse of insertion order.
    Prepend,
}

/// A node: integer payload plus ordered outgoing edges.
///
/// Edges are ids into the owning [`Graph`], never owning links, so cycles
/// and self-loops are plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i64,
    neighbors: Vec<NodeId>,
}

impl Node {
    /// Outgoing neighbors in traversal order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// In-memory directed graph: an arena of nodes with ordered adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edge_order: EdgeOrder,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_order(edge_order: EdgeOrder) -> Self {
        Self {
            nodes: Vec::new(),
            edge_order,
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize, edge_order: EdgeOrder) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            edge_order,
        }
    }

    pub fn edge_order(&self) -> EdgeOrder {
        self.edge_order
    }

    /// Add a node carrying `value`. Ids are dense and assigned from 0.
    pub fn add_node(&mut self, value: i64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            neighbors: Vec::new(),
        });
        id
    }

    /// Add a directed edge `from -> to`, placed according to the graph's
    /// [`EdgeOrder`]. Duplicate edges and self-loops are accepted.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if !self.contains(to) {
            return Err(GraphError::InvalidArgument(to));
        }
        let edge_order = self.edge_order;
        let node = self
            .nodes
            .get_mut(from)
            .ok_or(GraphError::InvalidArgument(from))?;
        match edge_order {
            EdgeOrder::Append => node.neighbors.push(to),
            EdgeOrder::Prepend => node.neighbors.insert(0, to),
        }
        Ok(())
    }

    /// Bulk load `(from, to)` pairs in order. Stops at the first edge naming
    /// an unknown node; edges before it stay loaded.
    pub fn load_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to)?;
        }
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Node by id, for ids already known to be in the graph.
    ///
    /// Panics if `id` is out of range.
    pub(crate) fn node_at(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Outgoing neighbors of `id`; empty for an unknown node.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(Node::neighbors).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// First node (lowest id) carrying `value`.
    pub fn find_by_value(&self, value: i64) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.value == value)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum()
    }
}
