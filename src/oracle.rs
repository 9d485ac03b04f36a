use crate::types::{Distance, NodeId};

/// common contract for every structure that answers shortest path distance queries
///
/// implementations return UNREACHABLE when no path exists and never block
pub trait DistanceOracle {
    fn find_distance(&self, source: NodeId, target: NodeId) -> Distance;
}
