pub mod types;

pub mod graph;
pub mod path;

pub mod oracle;
pub mod dijkstra;
pub mod caching_dijkstra;
pub mod hub_labels;

pub mod selection;

pub mod utils;
