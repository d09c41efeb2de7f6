pub mod adjacency;
pub mod analysis;
pub mod bond;
pub mod edge_kind;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use adjacency::Adjacency;
pub use analysis::{graph_count_components, graph_has_path, graph_is_bipartite, graph_shortest_path};
pub use bond::Bond;
pub use edge_kind::EdgeKind;
pub use error::GraphError;
pub use graph::Graph;
pub use search::{BfsIterator, DfsIterator};
