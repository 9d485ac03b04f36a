use crate::graph::Graph;
use crate::types::*;
use serde::Serialize;

/// one side of a patch, sorted by ascending node id, every entry carries the
/// distance between the node and the patch center
pub type Patch = Vec<(NodeId, Distance)>;

/// rectangular set of source target pairs that all route over a common center
///
/// for every source u and target v of the patch the shortest path distance
/// decomposes into dist(u, center) + dist(center, v)
#[derive(Clone)]
pub struct NodeSelection {
    source_patch: Patch,
    target_patch: Patch,
    center: NodeId,
}

impl NodeSelection {
    pub fn new(source_patch: Patch, target_patch: Patch, center: NodeId) -> Self {
        NodeSelection {
            source_patch,
            target_patch,
            center,
        }
    }

    pub fn source_patch(&self) -> &Patch {
        &self.source_patch
    }

    pub fn target_patch(&self) -> &Patch {
        &self.target_patch
    }

    pub fn center(&self) -> NodeId {
        self.center
    }

    pub fn weight(&self) -> usize {
        self.source_patch.len() * self.target_patch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_patch.is_empty() && self.target_patch.is_empty()
    }

    pub fn can_answer(&self, from: NodeId, to: NodeId) -> bool {
        self.source_patch
            .binary_search_by_key(&from, |(node, _)| *node)
            .is_ok()
            && self
                .target_patch
                .binary_search_by_key(&to, |(node, _)| *node)
                .is_ok()
    }

    pub fn to_json(&self, graph: &Graph) -> serde_json::Value {
        let dump = SelectionDump {
            sources: self.source_patch.clone(),
            targets: self.target_patch.clone(),
            source_coords: self
                .source_patch
                .iter()
                .map(|&(node, _)| graph.lat_lng(node))
                .collect(),
            target_coords: self
                .target_patch
                .iter()
                .map(|&(node, _)| graph.lat_lng(node))
                .collect(),
            center: self.center,
            center_coords: graph.lat_lng(self.center),
        };

        serde_json::json!(dump)
    }
}

#[derive(Serialize)]
struct SelectionDump {
    sources: Vec<(NodeId, Distance)>,
    targets: Vec<(NodeId, Distance)>,
    source_coords: Vec<(f64, f64)>,
    target_coords: Vec<(f64, f64)>,
    center: NodeId,
    center_coords: (f64, f64),
}
