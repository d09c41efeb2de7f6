use std::{fmt, str::FromStr};

use crate::error::GraphError;

/// The kind of a bond between two nodes.  The kind decides whether inserting
/// the bond makes the source reachable from the target as well as the target
/// from the source.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    /// An undirected bond, written `-`.
    Single,
    /// A "strong" bond, written `=`.  For adjacency purposes it behaves
    /// exactly like [`EdgeKind::Bidirectional`].
    Double,
    /// A directed bond, written `->`.
    Arrow,
    /// A bond traversable both ways, written `<->`.
    Bidirectional,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::Single,
        EdgeKind::Double,
        EdgeKind::Arrow,
        EdgeKind::Bidirectional,
    ];

    /// Returns true if a bond of this kind also records the source as a
    /// neighbor of the target.  Only [`EdgeKind::Arrow`] does not.
    pub fn creates_reverse(self) -> bool {
        match self {
            EdgeKind::Single | EdgeKind::Double | EdgeKind::Bidirectional => true,
            EdgeKind::Arrow => false,
        }
    }

    pub fn is_directed(self) -> bool {
        !self.creates_reverse()
    }

    /// The bond notation for this kind.
    pub fn symbol(self) -> &'static str {
        match self {
            EdgeKind::Single => "-",
            EdgeKind::Double => "=",
            EdgeKind::Arrow => "->",
            EdgeKind::Bidirectional => "<->",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EdgeKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeKind::ALL
            .into_iter()
            .find(|kind| kind.symbol() == s.trim())
            .ok_or_else(|| GraphError::UnknownEdgeKind(s.to_string()))
    }
}
