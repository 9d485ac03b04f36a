use crate::types::NodeId;

/// ordered node sequence of a shortest path, source first
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Path {
        Path { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn middle_node(&self) -> Option<NodeId> {
        self.nodes.get(self.nodes.len() / 2).copied()
    }
}
