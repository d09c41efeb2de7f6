use thiserror::Error;

/// Errors reported by the strict accessors of [`crate::Graph`] and by parsing
/// of [`crate::EdgeKind`] symbols.
///
/// The traversal and analysis queries never produce these; an absent node
/// there simply yields an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node not found in graph")]
    NodeNotFound,
    #[error("unknown edge kind: {0:?}")]
    UnknownEdgeKind(String),
}
