use crate::types::*;

/// per node label, selection ids in strictly increasing order together with
/// the distance between the node and the selection center
pub type CenterSet = Vec<(usize, Distance)>;

/// two sided label index answering distance queries by intersecting the out
/// label of the source with the in label of the target
pub struct SelectionLookup {
    centers: Vec<NodeId>,
    source_selections: Vec<CenterSet>,
    target_selections: Vec<CenterSet>,
}

impl SelectionLookup {
    pub fn new(
        centers: Vec<NodeId>,
        source_selections: Vec<CenterSet>,
        target_selections: Vec<CenterSet>,
    ) -> Self {
        SelectionLookup {
            centers,
            source_selections,
            target_selections,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.source_selections.len()
    }

    pub fn centers(&self) -> &[NodeId] {
        &self.centers
    }

    pub fn out_label(&self, node: NodeId) -> &CenterSet {
        &self.source_selections[node as usize]
    }

    pub fn in_label(&self, node: NodeId) -> &CenterSet {
        &self.target_selections[node as usize]
    }

    /// shortest recorded distance for the pair, UNREACHABLE when no common
    /// selection exists
    pub fn distance(&self, source: NodeId, target: NodeId) -> Distance {
        match self.selection_answering(source, target) {
            Some((_, distance)) => distance,
            None => UNREACHABLE,
        }
    }

    /// answering center and distance, minimum over all shared selections
    ///
    /// both labels are sorted by selection id, a single two pointer pass finds
    /// every match
    pub fn selection_answering(
        &self,
        source: NodeId,
        target: NodeId,
    ) -> Option<(NodeId, Distance)> {
        let source_entries = &self.source_selections[source as usize];
        let target_entries = &self.target_selections[target as usize];

        let mut best: Option<(NodeId, Distance)> = None;

        let mut source_index = 0;
        let mut target_index = 0;

        while source_index < source_entries.len() && target_index < target_entries.len() {
            let (source_id, source_distance) = source_entries[source_index];
            let (target_id, target_distance) = target_entries[target_index];

            if source_id < target_id {
                source_index += 1;
            } else if target_id < source_id {
                target_index += 1;
            } else {
                let distance = source_distance + target_distance;

                if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                    best = Some((self.centers[source_id], distance));
                }

                source_index += 1;
                target_index += 1;
            }
        }

        best
    }

    pub fn average_selections_per_node(&self) -> f64 {
        let total: usize = self
            .source_selections
            .iter()
            .map(|entries| entries.len())
            .sum::<usize>()
            + self
                .target_selections
                .iter()
                .map(|entries| entries.len())
                .sum::<usize>();

        total as f64 / (2 * self.num_nodes()).max(1) as f64
    }
}
