//! The adjacency primitive shared by every traversal and analysis routine.
//!
//! Both a [`crate::Graph`] and a bare node-to-neighbors mapping expose their
//! structure through the [`Adjacency`] trait, so the same BFS and DFS code
//! runs over either representation.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Read-only access to a mapping from nodes to ordered successor lists.
pub trait Adjacency {
    type Node: Eq + Hash + Clone;

    /// Returns true if `node` is a key of the mapping.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Gets the successors of `node` in insertion order.  A node that is not
    /// a key has no successors.
    fn successors(&self, node: &Self::Node) -> &[Self::Node];

    /// Iterates over the keys of the mapping in an unspecified order.
    fn keys(&self) -> impl Iterator<Item = &Self::Node>;

    fn num_keys(&self) -> usize {
        self.keys().count()
    }
}

impl<T, S> Adjacency for HashMap<T, Vec<T>, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Node = T;

    fn contains(&self, node: &T) -> bool {
        self.contains_key(node)
    }

    fn successors(&self, node: &T) -> &[T] {
        self.get(node).map_or(&[], Vec::as_slice)
    }

    fn keys(&self) -> impl Iterator<Item = &T> {
        HashMap::keys(self)
    }

    fn num_keys(&self) -> usize {
        self.len()
    }
}

impl<T> Adjacency for BTreeMap<T, Vec<T>>
where
    T: Eq + Hash + Clone + Ord,
{
    type Node = T;

    fn contains(&self, node: &T) -> bool {
        self.contains_key(node)
    }

    fn successors(&self, node: &T) -> &[T] {
        self.get(node).map_or(&[], Vec::as_slice)
    }

    fn keys(&self) -> impl Iterator<Item = &T> {
        BTreeMap::keys(self)
    }

    fn num_keys(&self) -> usize {
        self.len()
    }
}
