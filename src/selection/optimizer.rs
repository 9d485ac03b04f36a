use crate::oracle::DistanceOracle;
use crate::selection::lookup::{CenterSet, SelectionLookup};
use crate::selection::node_selection::NodeSelection;
use crate::types::*;
use log::info;
use std::collections::HashSet;

/// reduces the selection membership of every node to a small covering subset
///
/// per node and direction a greedy set cover keeps electing the selection that
/// resolves the most still uncovered opposite patch nodes, selections already
/// elected by other nodes are reused through shared keep lists, selections
/// centered at the node itself are always retained and never count against the
/// cap
pub struct SelectionOptimizer<'a, O: DistanceOracle> {
    num_nodes: usize,
    selections: Vec<NodeSelection>,
    source_selections: Vec<CenterSet>,
    target_selections: Vec<CenterSet>,
    keep_list_out: HashSet<usize>,
    keep_list_in: HashSet<usize>,
    oracle: &'a O,
    prune_distance: Distance,
    max_selections: usize,
}

impl<'a, O: DistanceOracle> SelectionOptimizer<'a, O> {
    pub fn new(
        num_nodes: usize,
        selections: Vec<NodeSelection>,
        oracle: &'a O,
        prune_distance: Distance,
        max_selections: Option<usize>,
    ) -> Self {
        let mut source_selections: Vec<CenterSet> = vec![Vec::new(); num_nodes];
        let mut target_selections: Vec<CenterSet> = vec![Vec::new(); num_nodes];

        // selections are scanned in index order, every per node list ends up
        // sorted by selection id
        for (index, selection) in selections.iter().enumerate() {
            for &(node, distance) in selection.source_patch() {
                source_selections[node as usize].push((index, distance));
            }

            for &(node, distance) in selection.target_patch() {
                target_selections[node as usize].push((index, distance));
            }
        }

        SelectionOptimizer {
            num_nodes,
            selections,
            source_selections,
            target_selections,
            keep_list_out: HashSet::new(),
            keep_list_in: HashSet::new(),
            oracle,
            prune_distance,
            max_selections: max_selections.unwrap_or(usize::MAX),
        }
    }

    pub fn optimize(&mut self) {
        for node in 0..self.num_nodes {
            self.optimize_out(node as NodeId);
            self.optimize_in(node as NodeId);
        }

        info!("label optimization finished for {} nodes", self.num_nodes);
    }

    pub fn into_lookup(self) -> SelectionLookup {
        let centers = self
            .selections
            .iter()
            .map(|selection| selection.center())
            .collect();

        SelectionLookup::new(centers, self.source_selections, self.target_selections)
    }

    fn optimize_out(&mut self, node: NodeId) {
        let node_selections = std::mem::take(&mut self.source_selections[node as usize]);

        if node_selections.is_empty() {
            return;
        }

        // every target the node has to keep reaching through its selections
        let mut required: HashSet<NodeId> = HashSet::new();
        for &(index, _) in &node_selections {
            for &(target, _) in self.selections[index].target_patch() {
                if self.oracle.find_distance(node, target) > self.prune_distance {
                    required.insert(target);
                }
            }
        }

        let mut covered: HashSet<NodeId> = HashSet::new();
        let mut elected: HashSet<usize> = HashSet::new();
        let mut elected_foreign = 0usize;

        // reuse selections that other nodes already elected
        for &(index, _) in &node_selections {
            if !self.keep_list_out.contains(&index) {
                continue;
            }

            if elected_foreign >= self.max_selections {
                break;
            }

            for &(target, _) in self.selections[index].target_patch() {
                covered.insert(target);
            }

            elected.insert(index);

            if self.selections[index].center() != node {
                elected_foreign += 1;
            }
        }

        while !required.is_subset(&covered) && elected_foreign < self.max_selections {
            let (best_index, best_score) =
                self.best_out_selection(node, &node_selections, &covered);

            if best_score == 0 {
                break;
            }

            for &(target, _) in self.selections[best_index].target_patch() {
                covered.insert(target);
            }

            elected.insert(best_index);

            if self.selections[best_index].center() != node {
                elected_foreign += 1;
                self.keep_list_out.insert(best_index);
            }
        }

        self.source_selections[node as usize] = node_selections
            .into_iter()
            .filter(|&(index, _)| {
                elected.contains(&index) || self.selections[index].center() == node
            })
            .collect();
    }

    fn optimize_in(&mut self, node: NodeId) {
        let node_selections = std::mem::take(&mut self.target_selections[node as usize]);

        if node_selections.is_empty() {
            return;
        }

        let mut required: HashSet<NodeId> = HashSet::new();
        for &(index, _) in &node_selections {
            for &(source, _) in self.selections[index].source_patch() {
                if self.oracle.find_distance(source, node) > self.prune_distance {
                    required.insert(source);
                }
            }
        }

        let mut covered: HashSet<NodeId> = HashSet::new();
        let mut elected: HashSet<usize> = HashSet::new();
        let mut elected_foreign = 0usize;

        for &(index, _) in &node_selections {
            if !self.keep_list_in.contains(&index) {
                continue;
            }

            if elected_foreign >= self.max_selections {
                break;
            }

            for &(source, _) in self.selections[index].source_patch() {
                covered.insert(source);
            }

            elected.insert(index);

            if self.selections[index].center() != node {
                elected_foreign += 1;
            }
        }

        while !required.is_subset(&covered) && elected_foreign < self.max_selections {
            let (best_index, best_score) = self.best_in_selection(node, &node_selections, &covered);

            if best_score == 0 {
                break;
            }

            for &(source, _) in self.selections[best_index].source_patch() {
                covered.insert(source);
            }

            elected.insert(best_index);

            if self.selections[best_index].center() != node {
                elected_foreign += 1;
                self.keep_list_in.insert(best_index);
            }
        }

        self.target_selections[node as usize] = node_selections
            .into_iter()
            .filter(|&(index, _)| {
                elected.contains(&index) || self.selections[index].center() == node
            })
            .collect();
    }

    /// selection that resolves the most still uncovered targets of the node
    fn best_out_selection(
        &self,
        node: NodeId,
        candidates: &CenterSet,
        covered: &HashSet<NodeId>,
    ) -> (usize, usize) {
        let mut best_index = candidates[0].0;
        let mut best_score = 0;

        for &(index, _) in candidates {
            let score = self.selections[index]
                .target_patch()
                .iter()
                .filter(|&&(target, _)| {
                    !covered.contains(&target)
                        && target != node
                        && self.oracle.find_distance(node, target) > self.prune_distance
                })
                .count();

            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        (best_index, best_score)
    }

    fn best_in_selection(
        &self,
        node: NodeId,
        candidates: &CenterSet,
        covered: &HashSet<NodeId>,
    ) -> (usize, usize) {
        let mut best_index = candidates[0].0;
        let mut best_score = 0;

        for &(index, _) in candidates {
            let score = self.selections[index]
                .source_patch()
                .iter()
                .filter(|&&(source, _)| {
                    !covered.contains(&source)
                        && source != node
                        && self.oracle.find_distance(source, node) > self.prune_distance
                })
                .count();

            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        (best_index, best_score)
    }
}
