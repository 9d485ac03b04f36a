use crate::graph::Graph;
use crate::oracle::DistanceOracle;
use crate::selection::calculator::NodeSelectionCalculator;
use crate::selection::center::CenterCalculator;
use crate::selection::coverage::CoverageMatrix;
use crate::selection::node_selection::NodeSelection;
use crate::types::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// repeatedly discovers patches for random still open pairs until the
/// coverage matrix is saturated
pub struct FullSelectionCalculator<'a, O: DistanceOracle, C: CenterCalculator> {
    selection_calculator: NodeSelectionCalculator<'a, O, C>,
    coverage: CoverageMatrix,
    rng: StdRng,
}

impl<'a, O: DistanceOracle, C: CenterCalculator> FullSelectionCalculator<'a, O, C> {
    pub fn new(
        graph: &'a Graph,
        oracle: &'a O,
        center_calculator: C,
        prune_distance: Distance,
        seed: Option<u64>,
    ) -> Self {
        let coverage = CoverageMatrix::new(oracle, graph.num_nodes(), prune_distance);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        FullSelectionCalculator {
            selection_calculator: NodeSelectionCalculator::new(graph, oracle, center_calculator),
            coverage,
            rng,
        }
    }

    /// every iteration resolves at least one pair, either through the
    /// discovered patch or by consuming an unanswerable pair directly
    pub fn calculate_all_selections(&mut self) -> Vec<NodeSelection> {
        let mut selections = Vec::new();

        while !self.coverage.is_done() {
            let (source, target) = match self.coverage.sample_uncovered_pair(&mut self.rng) {
                Some(pair) => pair,
                None => break,
            };

            let selection_opt =
                self.selection_calculator
                    .calculate_selection(source, target, &self.coverage);

            let selection = match selection_opt {
                Some(selection) => selection,
                None => {
                    // no center exists, the pair can never be answered
                    self.coverage.cover(source, target);
                    self.coverage.compact_row_if_done(source);
                    continue;
                }
            };

            if selection.weight() == 0 {
                continue;
            }

            debug!(
                "selection with center {} covers {}x{} pairs",
                selection.center(),
                selection.source_patch().len(),
                selection.target_patch().len()
            );

            self.erase_node_selection(&selection);
            selections.push(selection);
        }

        info!("selection discovery finished, {} patches", selections.len());

        selections
    }

    fn erase_node_selection(&mut self, selection: &NodeSelection) {
        for &(source, _) in selection.source_patch() {
            for &(target, _) in selection.target_patch() {
                self.coverage.cover(source, target);
            }
        }

        for &(source, _) in selection.source_patch() {
            self.coverage.compact_row_if_done(source);
        }
    }
}
