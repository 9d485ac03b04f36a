use crate::types::*;
use std::ops::Range;

/// immutable directed graph stored as forward and backward adjacency arrays
///
/// neighbour lists are sorted by ascending target id so that edge existence
/// can be answered with a binary search
pub struct Graph {
    fwd_first_edge: Vec<EdgeId>,
    fwd_arclist: Vec<(NodeId, Distance)>,
    bwd_first_edge: Vec<EdgeId>,
    bwd_arclist: Vec<(NodeId, Distance)>,
    lats: Vec<f64>,
    lngs: Vec<f64>,
}

impl Graph {
    pub fn new(
        mut adj_list: Vec<Vec<(NodeId, Distance)>>,
        lats: Vec<f64>,
        lngs: Vec<f64>,
    ) -> Graph {
        let num_nodes = adj_list.len();

        for neighbours in &mut adj_list {
            neighbours.sort_by_key(|(target, _)| *target);
        }

        let (fwd_first_edge, fwd_arclist) = convert_to_adjacency_array(&adj_list);
        let (bwd_first_edge, bwd_arclist) =
            invert_adjacency_array(num_nodes, &fwd_first_edge, &fwd_arclist);

        Graph {
            fwd_first_edge,
            fwd_arclist,
            bwd_first_edge,
            bwd_arclist,
            lats,
            lngs,
        }
    }

    /// builds a graph without coordinates, mostly useful for tests
    pub fn from_adjacency(adj_list: Vec<Vec<(NodeId, Distance)>>) -> Graph {
        let num_nodes = adj_list.len();

        Graph::new(adj_list, vec![0.0; num_nodes], vec![0.0; num_nodes])
    }

    pub fn num_nodes(&self) -> usize {
        self.fwd_first_edge.len() - 1
    }

    pub fn node_ids(&self) -> Range<NodeId> {
        0..(self.num_nodes() as NodeId)
    }

    pub fn forward_neighbours(&self, node: NodeId) -> &Arclist {
        let start = self.fwd_first_edge[node as usize] as usize;
        let end = self.fwd_first_edge[node as usize + 1] as usize;

        &self.fwd_arclist[start..end]
    }

    pub fn backward_neighbours(&self, node: NodeId) -> &Arclist {
        let start = self.bwd_first_edge[node as usize] as usize;
        let end = self.bwd_first_edge[node as usize + 1] as usize;

        &self.bwd_arclist[start..end]
    }

    pub fn forward_edge_exists(&self, from: NodeId, to: NodeId) -> bool {
        self.forward_neighbours(from)
            .binary_search_by_key(&to, |(target, _)| *target)
            .is_ok()
    }

    pub fn backward_edge_exists(&self, from: NodeId, to: NodeId) -> bool {
        self.backward_neighbours(from)
            .binary_search_by_key(&to, |(source, _)| *source)
            .is_ok()
    }

    pub fn lat_lng(&self, node: NodeId) -> (f64, f64) {
        (self.lats[node as usize], self.lngs[node as usize])
    }
}

fn convert_to_adjacency_array(
    adj_list: &[Vec<(NodeId, Distance)>],
) -> (Vec<EdgeId>, Vec<(NodeId, Distance)>) {
    let mut first_edge: Vec<EdgeId> = vec![0; adj_list.len() + 1];
    let mut arclist: Vec<(NodeId, Distance)> = Vec::new();

    let mut edge_index = 0;

    for (node_index, neighbours) in adj_list.iter().enumerate() {
        first_edge[node_index] = edge_index;

        for &(target, weight) in neighbours {
            arclist.push((target, weight));
            edge_index += 1;
        }
    }

    first_edge[adj_list.len()] = edge_index;

    (first_edge, arclist)
}

/// builds the reversed adjacency array by counting in degrees, prefix summing
/// them into offsets and scattering every edge into its bucket
fn invert_adjacency_array(
    num_nodes: usize,
    first_edge: &[EdgeId],
    arclist: &[(NodeId, Distance)],
) -> (Vec<EdgeId>, Vec<(NodeId, Distance)>) {
    let mut bwd_first_edge: Vec<EdgeId> = vec![0; num_nodes + 1];

    for &(target, _) in arclist {
        bwd_first_edge[target as usize + 1] += 1;
    }

    for node_index in 0..num_nodes {
        bwd_first_edge[node_index + 1] += bwd_first_edge[node_index];
    }

    let mut next_slot: Vec<EdgeId> = bwd_first_edge[..num_nodes].to_vec();
    let mut bwd_arclist: Vec<(NodeId, Distance)> = vec![(0, 0); arclist.len()];

    // sources are scanned in ascending order, every backward list ends up sorted
    for source in 0..num_nodes {
        let start = first_edge[source] as usize;
        let end = first_edge[source + 1] as usize;

        for &(target, weight) in &arclist[start..end] {
            bwd_arclist[next_slot[target as usize] as usize] = (source as NodeId, weight);
            next_slot[target as usize] += 1;
        }
    }

    (bwd_first_edge, bwd_arclist)
}
