use crate::dijkstra::DijkstraState;
use crate::graph::Graph;
use crate::oracle::DistanceOracle;
use crate::types::*;
use crate::utils::binary_heap::MinBinaryHeap;
use crate::utils::data_structures::ResettableArray;
use log::info;

/// hub label distance oracle over a contraction hierarchy sorted graph
///
/// the label of a node is filled by an upward dijkstra search that only leaves
/// towards higher ranked nodes, with stall on demand pruning over the opposite
/// direction, a query intersects two sorted label arrays
pub struct HubLabels {
    fwd_labels: Vec<Vec<(NodeId, Distance)>>,
    bwd_labels: Vec<Vec<(NodeId, Distance)>>,
}

impl HubLabels {
    pub fn new(graph: &Graph, ranks: &Ranks) -> Self {
        let num_nodes = graph.num_nodes();

        let (fwd_first_edge, fwd_arclist) = upward_adjacency_array(graph, ranks, false);
        let (bwd_first_edge, bwd_arclist) = upward_adjacency_array(graph, ranks, true);

        let mut fwd_labels: Vec<Vec<(NodeId, Distance)>> = vec![Vec::new(); num_nodes];
        let mut bwd_labels: Vec<Vec<(NodeId, Distance)>> = vec![Vec::new(); num_nodes];

        let mut queue = MinBinaryHeap::new(num_nodes);
        let mut distances = ResettableArray::new(num_nodes, UNREACHABLE);

        for node in graph.node_ids() {
            fill_labels(
                node,
                &mut fwd_labels[node as usize],
                &mut queue,
                &mut distances,
                &fwd_first_edge,
                &fwd_arclist,
                &bwd_first_edge,
                &bwd_arclist,
            );
        }

        for node in graph.node_ids() {
            fill_labels(
                node,
                &mut bwd_labels[node as usize],
                &mut queue,
                &mut distances,
                &bwd_first_edge,
                &bwd_arclist,
                &fwd_first_edge,
                &fwd_arclist,
            );
        }

        let labels = HubLabels {
            fwd_labels,
            bwd_labels,
        };

        info!(
            "hub labels built for {} nodes, average label size {:.1}",
            num_nodes,
            labels.average_label_size()
        );

        labels
    }

    pub fn average_label_size(&self) -> f64 {
        let total: usize = self.fwd_labels.iter().map(|hubs| hubs.len()).sum::<usize>()
            + self.bwd_labels.iter().map(|hubs| hubs.len()).sum::<usize>();

        total as f64 / (2 * self.fwd_labels.len()).max(1) as f64
    }
}

impl DistanceOracle for HubLabels {
    fn find_distance(&self, source: NodeId, target: NodeId) -> Distance {
        let fwd_hubs = &self.fwd_labels[source as usize];
        let bwd_hubs = &self.bwd_labels[target as usize];

        let mut shortest_distance = UNREACHABLE;

        let mut fwd_index = 0;
        let mut bwd_index = 0;

        while fwd_index < fwd_hubs.len() && bwd_index < bwd_hubs.len() {
            let (fwd_hub, fwd_distance) = fwd_hubs[fwd_index];
            let (bwd_hub, bwd_distance) = bwd_hubs[bwd_index];

            if fwd_hub == bwd_hub {
                if fwd_distance + bwd_distance < shortest_distance {
                    shortest_distance = fwd_distance + bwd_distance;
                }

                fwd_index += 1;
                bwd_index += 1;
            } else if fwd_hub < bwd_hub {
                fwd_index += 1;
            } else {
                bwd_index += 1;
            }
        }

        shortest_distance
    }
}

/// restricts the edges of the given direction to those leading to higher
/// ranked nodes
fn upward_adjacency_array(
    graph: &Graph,
    ranks: &Ranks,
    backward: bool,
) -> (Vec<EdgeId>, Vec<(NodeId, Distance)>) {
    let num_nodes = graph.num_nodes();

    let mut first_edge: Vec<EdgeId> = vec![0; num_nodes + 1];
    let mut arclist: Vec<(NodeId, Distance)> = Vec::new();

    let mut edge_index = 0;

    for node in graph.node_ids() {
        first_edge[node as usize] = edge_index;

        let neighbours = if backward {
            graph.backward_neighbours(node)
        } else {
            graph.forward_neighbours(node)
        };

        for &(head, weight) in neighbours {
            if ranks[head as usize] > ranks[node as usize] {
                arclist.push((head, weight));
                edge_index += 1;
            }
        }
    }

    first_edge[num_nodes] = edge_index;

    (first_edge, arclist)
}

/// upward dijkstra search from the start node, every settled node that
/// survives the stall on demand check becomes a label entry
fn fill_labels(
    start_node: NodeId,
    label: &mut Vec<(NodeId, Distance)>,
    queue: &mut MinBinaryHeap<DijkstraState>,
    distances: &mut ResettableArray<Distance>,
    first_edge: &[EdgeId],
    arclist: &[(NodeId, Distance)],
    prune_first_edge: &[EdgeId],
    prune_arclist: &[(NodeId, Distance)],
) {
    distances.reset();
    distances.set(start_node as usize, 0);

    queue.insert(DijkstraState {
        distance: 0,
        node_id: start_node,
    });

    while let Some(DijkstraState {
        distance: current_distance,
        node_id: current_node,
    }) = queue.pop()
    {
        let prune_start = prune_first_edge[current_node as usize] as usize;
        let prune_end = prune_first_edge[current_node as usize + 1] as usize;

        // a shorter path over an already reached higher ranked node stalls the
        // current node
        let prune = prune_arclist[prune_start..prune_end]
            .iter()
            .any(|&(prune_node, prune_distance)| {
                add_distances(distances[prune_node as usize], prune_distance) < current_distance
            });

        if prune {
            continue;
        }

        label.push((current_node, current_distance));

        let start = first_edge[current_node as usize] as usize;
        let end = first_edge[current_node as usize + 1] as usize;

        for &(target_node, arc_distance) in &arclist[start..end] {
            let new_distance = current_distance + arc_distance;

            if new_distance < distances[target_node as usize] {
                distances.set(target_node as usize, new_distance);
                queue.insert_or_decrease(DijkstraState {
                    distance: new_distance,
                    node_id: target_node,
                });
            }
        }
    }

    label.sort_by_key(|(hub, _)| *hub);
}
