use crate::dijkstra::DijkstraState;
use crate::graph::Graph;
use crate::oracle::DistanceOracle;
use crate::types::*;
use crate::utils::binary_heap::MinBinaryHeap;
use crate::utils::data_structures::Matrix;
use log::info;
use rayon::prelude::*;

/// materialized all pairs distance table
///
/// one full dijkstra search per source fills one row of the table, rows are
/// independent and computed in parallel
pub struct CachingDijkstra {
    distance_cache: Matrix<Distance>,
}

impl CachingDijkstra {
    pub fn new(graph: &Graph) -> Self {
        let num_nodes = graph.num_nodes();
        let mut distance_cache = Matrix::new(num_nodes, num_nodes, UNREACHABLE);

        if num_nodes > 0 {
            distance_cache
                .data
                .par_chunks_mut(num_nodes)
                .enumerate()
                .for_each_init(
                    || MinBinaryHeap::new(num_nodes),
                    |queue, (source, row)| {
                        fill_distance_row(graph, source as NodeId, queue, row);
                    },
                );
        }

        info!("distance cache filled for {} nodes", num_nodes);

        CachingDijkstra { distance_cache }
    }

    /// releases the distance table, afterwards no further queries are allowed
    pub fn destroy(&mut self) {
        self.distance_cache = Matrix::empty();
    }
}

impl DistanceOracle for CachingDijkstra {
    fn find_distance(&self, source: NodeId, target: NodeId) -> Distance {
        self.distance_cache.get(source as usize, target as usize)
    }
}

/// settles every node reachable from the source, the row doubles as the
/// tentative distance array of the search
fn fill_distance_row(
    graph: &Graph,
    source: NodeId,
    queue: &mut MinBinaryHeap<DijkstraState>,
    row: &mut [Distance],
) {
    row[source as usize] = 0;
    queue.insert(DijkstraState {
        distance: 0,
        node_id: source,
    });

    while let Some(DijkstraState { distance, node_id }) = queue.pop() {
        for &(neighbour, weight) in graph.forward_neighbours(node_id) {
            let new_distance = distance + weight;

            if row[neighbour as usize] > new_distance {
                row[neighbour as usize] = new_distance;
                queue.insert_or_decrease(DijkstraState {
                    distance: new_distance,
                    node_id: neighbour,
                });
            }
        }
    }
}
