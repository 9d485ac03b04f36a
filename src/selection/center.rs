use crate::dijkstra::Dijkstra;
use crate::graph::Graph;
use crate::types::NodeId;

/// chooses a vertex that lies on a shortest path between the two given nodes
pub trait CenterCalculator {
    fn calculate_center(&mut self, from: NodeId, to: NodeId) -> Option<NodeId>;
}

/// picks the middle vertex of one reconstructed shortest path
pub struct MiddleCenterCalculator<'a> {
    path_finder: Dijkstra<'a>,
}

impl<'a> MiddleCenterCalculator<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        MiddleCenterCalculator {
            path_finder: Dijkstra::new(graph),
        }
    }
}

impl<'a> CenterCalculator for MiddleCenterCalculator<'a> {
    fn calculate_center(&mut self, from: NodeId, to: NodeId) -> Option<NodeId> {
        self.path_finder
            .find_route(from, to)
            .and_then(|path| path.middle_node())
    }
}
