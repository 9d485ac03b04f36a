pub type NodeId = u32;
pub type EdgeId = u32;
pub type Distance = u64;
pub type Rank = usize;

/// sentinel distance for unconnected pairs, larger than any real shortest path distance
pub const UNREACHABLE: Distance = std::u64::MAX / 2;

/// sentinel node id used for unset predecessor entries
pub const INVALID_NODE: NodeId = std::u32::MAX;

pub type Ranks = Vec<Rank>;
pub type Arclist = [(NodeId, Distance)];

/// adds two distances, UNREACHABLE is absorbing
pub fn add_distances(first: Distance, second: Distance) -> Distance {
    if first >= UNREACHABLE || second >= UNREACHABLE {
        return UNREACHABLE;
    }

    first + second
}
