use crate::oracle::DistanceOracle;
use crate::types::*;
use fixedbitset::FixedBitSet;
use rand::Rng;

/// row sparse record of which source target pairs still need a selection
///
/// a set bit marks a resolved pair, a row that becomes all true is compacted
/// to a zero length bitset and from then on counts as fully resolved
pub struct CoverageMatrix {
    rows: Vec<FixedBitSet>,
    num_nodes: usize,
}

impl CoverageMatrix {
    /// pairs on the diagonal, pairs within the prune distance and unconnected
    /// pairs are resolved up front
    pub fn new(oracle: &impl DistanceOracle, num_nodes: usize, prune_distance: Distance) -> Self {
        let mut rows = Vec::with_capacity(num_nodes);

        for source in 0..num_nodes {
            let mut row = FixedBitSet::with_capacity(num_nodes);
            let mut all_resolved = true;

            for target in 0..num_nodes {
                let distance = oracle.find_distance(source as NodeId, target as NodeId);

                if source == target || distance <= prune_distance || distance == UNREACHABLE {
                    row.insert(target);
                } else {
                    all_resolved = false;
                }
            }

            if all_resolved {
                row = FixedBitSet::default();
            }

            rows.push(row);
        }

        CoverageMatrix { rows, num_nodes }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn is_covered(&self, source: NodeId, target: NodeId) -> bool {
        let row = &self.rows[source as usize];

        row.len() == 0 || row.contains(target as usize)
    }

    pub fn cover(&mut self, source: NodeId, target: NodeId) {
        let row = &mut self.rows[source as usize];

        if row.len() != 0 {
            row.insert(target as usize);
        }
    }

    /// compacts the row to the empty representation once every pair is resolved
    pub fn compact_row_if_done(&mut self, source: NodeId) {
        let row = &mut self.rows[source as usize];

        if row.len() != 0 && row.count_ones(..) == self.num_nodes {
            *row = FixedBitSet::default();
        }
    }

    pub fn is_done(&self) -> bool {
        self.rows.iter().all(|row| row.len() == 0)
    }

    /// picks a source uniformly among rows with open pairs, then a target
    /// uniformly among the open pairs of that row
    pub fn sample_uncovered_pair(&self, rng: &mut impl Rng) -> Option<(NodeId, NodeId)> {
        let open_rows = self.rows.iter().filter(|row| row.len() != 0).count();

        if open_rows == 0 {
            return None;
        }

        let row_choice = rng.gen_range(0..open_rows);
        let source = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != 0)
            .nth(row_choice)
            .map(|(source, _)| source)?;

        let row = &self.rows[source];
        let open_pairs = self.num_nodes - row.count_ones(..);
        let target_choice = rng.gen_range(0..open_pairs);

        let target = (0..self.num_nodes)
            .filter(|&target| !row.contains(target))
            .nth(target_choice)?;

        Some((source as NodeId, target as NodeId))
    }
}
