pub use crate::adjacency::Adjacency;
pub use crate::analysis::{
    graph_count_components, graph_has_path, graph_is_bipartite, graph_shortest_path,
};
pub use crate::bond::Bond;
pub use crate::edge_kind::EdgeKind;
pub use crate::error::GraphError;
pub use crate::graph::Graph;
pub use crate::search::{BfsIterator, DfsIterator};
