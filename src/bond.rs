use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;

use crate::edge_kind::EdgeKind;

/// An edge of a [`crate::Graph`]: an ordered pair of nodes labeled with an
/// [`EdgeKind`].  Two bonds are the same bond only if all three parts match.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug"),
    Hash(bound = "T: Hash"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq")
)]
pub struct Bond<T> {
    pub from: T,
    pub to: T,
    pub kind: EdgeKind,
}

impl<T> Bond<T> {
    pub fn new(from: T, to: T, kind: EdgeKind) -> Self {
        Self { from, to, kind }
    }

    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.from == self.to
    }

    pub fn into_parts(self) -> (T, T, EdgeKind) {
        (self.from, self.to, self.kind)
    }
}

impl<T> From<(T, T, EdgeKind)> for Bond<T> {
    fn from((from, to, kind): (T, T, EdgeKind)) -> Self {
        Self::new(from, to, kind)
    }
}
