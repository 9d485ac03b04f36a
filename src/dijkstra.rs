use crate::graph::Graph;
use crate::path::Path;
use crate::types::*;
use crate::utils::binary_heap::{HeapElement, MinBinaryHeap};
use crate::utils::data_structures::{ResettableArray, VersionedFlags};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct DijkstraState {
    pub distance: Distance,
    pub node_id: NodeId,
}

impl HeapElement for DijkstraState {
    fn unique_index(&self) -> usize {
        self.node_id as usize
    }
}

/// single source shortest path search over the forward edges
///
/// the search state of the last source is kept alive between queries, a query
/// for an already settled target is answered from the distance array and a
/// query for a new target resumes the interrupted search instead of starting
/// over
pub struct Dijkstra<'a> {
    graph: &'a Graph,
    distances: ResettableArray<Distance>,
    settled: VersionedFlags,
    before: ResettableArray<NodeId>,
    settle_order: ResettableArray<usize>,
    next_settle_order: usize,
    queue: MinBinaryHeap<DijkstraState>,
    last_source: Option<NodeId>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let num_nodes = graph.num_nodes();

        Dijkstra {
            graph,
            distances: ResettableArray::new(num_nodes, UNREACHABLE),
            settled: VersionedFlags::new(num_nodes),
            before: ResettableArray::new(num_nodes, INVALID_NODE),
            settle_order: ResettableArray::new(num_nodes, usize::MAX),
            next_settle_order: 0,
            queue: MinBinaryHeap::new(num_nodes),
            last_source: None,
        }
    }

    pub fn find_distance(&mut self, source: NodeId, target: NodeId) -> Distance {
        self.compute_distance(source, target)
    }

    pub fn find_route(&mut self, source: NodeId, target: NodeId) -> Option<Path> {
        self.compute_distance(source, target);

        self.extract_shortest_path(source, target)
    }

    /// position at which the target is settled by a search from the source,
    /// None when the target is not reachable
    pub fn dijkstra_rank(&mut self, source: NodeId, target: NodeId) -> Option<usize> {
        if self.compute_distance(source, target) == UNREACHABLE {
            return None;
        }

        Some(self.settle_order[target as usize])
    }

    fn compute_distance(&mut self, source: NodeId, target: NodeId) -> Distance {
        if self.last_source == Some(source) && self.settled.is_set(target as usize) {
            return self.distances[target as usize];
        }

        if self.last_source != Some(source) {
            self.reset();
            self.last_source = Some(source);
            self.distances.set(source as usize, 0);
            self.queue.insert(DijkstraState {
                distance: 0,
                node_id: source,
            });
        }

        while let Some(&DijkstraState { distance, node_id }) = self.queue.get_min() {
            self.settle(node_id);

            if node_id == target {
                // the minimum stays in the queue so that a later resume starts
                // from the exact same state
                return distance;
            }

            self.queue.pop();
            self.relax_neighbours(node_id, distance);
        }

        self.distances[target as usize]
    }

    fn relax_neighbours(&mut self, node: NodeId, distance: Distance) {
        let graph = self.graph;

        for &(neighbour, weight) in graph.forward_neighbours(node) {
            let new_distance = distance + weight;

            if self.distances[neighbour as usize] > new_distance {
                self.distances.set(neighbour as usize, new_distance);
                self.before.set(neighbour as usize, node);
                self.queue.insert_or_decrease(DijkstraState {
                    distance: new_distance,
                    node_id: neighbour,
                });
            }
        }
    }

    fn settle(&mut self, node: NodeId) {
        if !self.settled.is_set(node as usize) {
            self.settled.set(node as usize);
            self.settle_order.set(node as usize, self.next_settle_order);
            self.next_settle_order += 1;
        }
    }

    fn extract_shortest_path(&self, source: NodeId, target: NodeId) -> Option<Path> {
        if self.distances[target as usize] == UNREACHABLE {
            return None;
        }

        let mut nodes = vec![target];
        let mut current = target;

        while current != source {
            current = self.before[current as usize];
            nodes.push(current);
        }

        nodes.reverse();

        Some(Path::new(nodes))
    }

    fn reset(&mut self) {
        self.distances.reset();
        self.settled.reset();
        self.before.reset();
        self.settle_order.reset();
        self.next_settle_order = 0;
        self.queue.clear();
    }
}
