use crate::graph::Graph;
use crate::oracle::DistanceOracle;
use crate::selection::center::CenterCalculator;
use crate::selection::coverage::CoverageMatrix;
use crate::selection::node_selection::{NodeSelection, Patch};
use crate::types::*;

/// grows the maximal patch around the center of a single source target pair
pub struct NodeSelectionCalculator<'a, O: DistanceOracle, C: CenterCalculator> {
    graph: &'a Graph,
    oracle: &'a O,
    center_calculator: C,
}

impl<'a, O: DistanceOracle, C: CenterCalculator> NodeSelectionCalculator<'a, O, C> {
    pub fn new(graph: &'a Graph, oracle: &'a O, center_calculator: C) -> Self {
        NodeSelectionCalculator {
            graph,
            oracle,
            center_calculator,
        }
    }

    /// sweeps the whole node range on both sides of the patch at once, a
    /// candidate joins a side when its distances decompose over the center for
    /// every member of the opposite side
    ///
    /// candidates that would only contribute already resolved pairs are
    /// skipped before the expensive affiliation check
    pub fn calculate_selection(
        &mut self,
        source_start: NodeId,
        target_start: NodeId,
        coverage: &CoverageMatrix,
    ) -> Option<NodeSelection> {
        let center = self
            .center_calculator
            .calculate_center(source_start, target_start)?;

        let mut source_patch: Patch = vec![(
            source_start,
            self.oracle.find_distance(source_start, center),
        )];
        let mut target_patch: Patch = vec![(
            target_start,
            self.oracle.find_distance(center, target_start),
        )];

        let num_nodes = self.graph.num_nodes() as NodeId;
        let mut source_candidate: NodeId = 0;
        let mut target_candidate: NodeId = 0;

        while source_candidate < num_nodes || target_candidate < num_nodes {
            if source_candidate < num_nodes {
                let candidate = source_candidate;
                source_candidate += 1;

                if candidate != center
                    && candidate != source_start
                    && covers_open_pair_as_source(coverage, candidate, &target_patch)
                {
                    if let Some(center_distance) =
                        self.check_source_affiliation(candidate, center, &target_patch)
                    {
                        source_patch.push((candidate, center_distance));
                    }
                }
            }

            if target_candidate < num_nodes {
                let candidate = target_candidate;
                target_candidate += 1;

                if candidate != center
                    && candidate != target_start
                    && covers_open_pair_as_target(coverage, candidate, &source_patch)
                {
                    if let Some(center_distance) =
                        self.check_target_affiliation(candidate, center, &source_patch)
                    {
                        target_patch.push((candidate, center_distance));
                    }
                }
            }
        }

        source_patch.sort_by_key(|(node, _)| *node);
        target_patch.sort_by_key(|(node, _)| *node);

        Some(NodeSelection::new(source_patch, target_patch, center))
    }

    fn check_source_affiliation(
        &self,
        source: NodeId,
        center: NodeId,
        targets: &Patch,
    ) -> Option<Distance> {
        let center_distance = self.oracle.find_distance(source, center);

        if center_distance == UNREACHABLE {
            return None;
        }

        let valid = targets.iter().all(|&(target, center_target_distance)| {
            self.oracle.find_distance(source, target)
                == add_distances(center_distance, center_target_distance)
        });

        if !valid {
            return None;
        }

        Some(center_distance)
    }

    fn check_target_affiliation(
        &self,
        target: NodeId,
        center: NodeId,
        sources: &Patch,
    ) -> Option<Distance> {
        let center_distance = self.oracle.find_distance(center, target);

        if center_distance == UNREACHABLE {
            return None;
        }

        let valid = sources.iter().all(|&(source, source_center_distance)| {
            self.oracle.find_distance(source, target)
                == add_distances(source_center_distance, center_distance)
        });

        if !valid {
            return None;
        }

        Some(center_distance)
    }
}

fn covers_open_pair_as_source(
    coverage: &CoverageMatrix,
    candidate: NodeId,
    targets: &Patch,
) -> bool {
    targets
        .iter()
        .any(|&(target, _)| !coverage.is_covered(candidate, target))
}

fn covers_open_pair_as_target(
    coverage: &CoverageMatrix,
    candidate: NodeId,
    sources: &Patch,
) -> bool {
    sources
        .iter()
        .any(|&(source, _)| !coverage.is_covered(source, candidate))
}
