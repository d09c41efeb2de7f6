//! [`Graph`] owns a set of nodes, an ordered list of typed [`Bond`]s, and the
//! adjacency mapping derived from them.
//!
//! Queries never fail: asking about a node that is not in the graph gives an
//! empty sequence or `false`.  This is deliberately more permissive than
//! fail-fast container access.  Callers that want an error for an absent node
//! can use [`Graph::check_node`] and [`Graph::try_neighbors`].
//!
//! Every query returns an owned snapshot, so nothing handed out by a graph
//! aliases its internal state.

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use derivative::Derivative;

use crate::{
    adjacency::Adjacency,
    bond::Bond,
    edge_kind::EdgeKind,
    error::GraphError,
    search::{BfsIterator, DfsIterator, reaches},
    tracing_support::{debug, info_span, trace},
};

/// A graph over nodes of type `T` with [`EdgeKind`]-labeled edges.
///
/// Nodes are identified by value.  Adding a node or edge that already
/// exists does nothing, and there is no way to remove a single node or
/// edge; [`Graph::clear`] empties the whole graph.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug"),
    Default(bound = "")
)]
pub struct Graph<T> {
    nodes: HashSet<T>,
    edges: Vec<Bond<T>>,
    #[derivative(Debug = "ignore")]
    edge_index: HashSet<Bond<T>>,
    adjacency: HashMap<T, Vec<T>>,
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // Mutation

    /// Adds a node if it is not already present.  Returns true if the node
    /// was added.
    pub fn add_node(&mut self, node: T) -> bool {
        if self.nodes.contains(&node) {
            return false;
        }
        self.adjacency.entry(node.clone()).or_default();
        self.nodes.insert(node);
        true
    }

    /// Adds an edge of the given kind, adding either end as a node if
    /// needed.  An edge with the same ends and kind as an existing edge is
    /// ignored.  Returns true if the edge was added.
    ///
    /// `to` always becomes a neighbor of `from`.  Unless `kind` is
    /// [`EdgeKind::Arrow`], `from` also becomes a neighbor of `to`.
    pub fn add_edge(&mut self, from: T, to: T, kind: EdgeKind) -> bool {
        self.add_node(from.clone());
        self.add_node(to.clone());

        let bond = Bond::new(from, to, kind);
        if self.edge_index.contains(&bond) {
            trace!(kind = %kind, "ignoring duplicate bond");
            return false;
        }
        self.edge_index.insert(bond.clone());

        self.adjacency
            .entry(bond.from.clone())
            .or_default()
            .push(bond.to.clone());
        if kind.creates_reverse() {
            self.adjacency
                .entry(bond.to.clone())
                .or_default()
                .push(bond.from.clone());
        }
        self.edges.push(bond);
        true
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.edge_index.clear();
        self.adjacency.clear();
    }

    // Queries

    /// Gets a copy of the neighbors of `node` in the order their edges were
    /// added.  A node may appear more than once if edges of several kinds
    /// connect the pair.  Empty if `node` is not in the graph.
    pub fn neighbors(&self, node: &T) -> Vec<T> {
        self.successors(node).to_vec()
    }

    /// Like [`Self::neighbors`], but fails if `node` is not in the graph.
    pub fn try_neighbors(&self, node: &T) -> Result<Vec<T>, GraphError> {
        self.check_node(node)?;
        Ok(self.neighbors(node))
    }

    /// Checks that `node` is in the graph.
    pub fn check_node(&self, node: &T) -> Result<(), GraphError> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound)
        }
    }

    pub fn has_node(&self, node: &T) -> bool {
        self.nodes.contains(node)
    }

    /// Checks for an edge with exactly these ends and this kind.
    pub fn has_edge(&self, from: &T, to: &T, kind: EdgeKind) -> bool {
        self.edge_index
            .contains(&Bond::new(from.clone(), to.clone(), kind))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Gets a copy of the node set, in an unspecified order.
    pub fn nodes(&self) -> Vec<T> {
        self.nodes.iter().cloned().collect()
    }

    /// Gets a copy of the edge list, in insertion order.
    pub fn edges(&self) -> Vec<Bond<T>> {
        self.edges.clone()
    }

    // Traversal

    /// Returns the nodes reachable from `start` in breadth-first order.
    /// Empty if `start` is not in the graph.
    pub fn bfs(&self, start: &T) -> Vec<T> {
        let _span = info_span!("bfs").entered();
        if !self.has_node(start) {
            return Vec::new();
        }
        BfsIterator::new(self, vec![start.clone()]).collect()
    }

    /// Returns the nodes reachable from `start` in depth-first order.
    /// Empty if `start` is not in the graph.
    pub fn dfs(&self, start: &T) -> Vec<T> {
        let _span = info_span!("dfs").entered();
        if !self.has_node(start) {
            return Vec::new();
        }
        DfsIterator::new(self, vec![start.clone()]).collect()
    }

    /// Checks whether `to` can be reached from `from` by following
    /// adjacency.  False if either node is absent.
    pub fn has_path(&self, from: &T, to: &T) -> bool {
        let _span = info_span!("has_path").entered();
        self.has_node(from) && self.has_node(to) && reaches(self, from, to)
    }

    // Analysis

    /// Checks whether every node is reachable from an arbitrary node of the
    /// graph.  An empty graph is connected.
    pub fn is_connected(&self) -> bool {
        let _span = info_span!("is_connected").entered();
        let Some(start) = self.nodes.iter().next() else {
            return true;
        };
        BfsIterator::new(self, vec![start.clone()]).count() == self.node_count()
    }

    /// Detects a cycle, treating adjacency as undirected: reaching an
    /// already visited node other than the one we came from closes a cycle.
    /// Any self-loop counts as a cycle.
    pub fn has_cycle(&self) -> bool {
        let _span = info_span!("has_cycle").entered();
        if self.edges.iter().any(Bond::is_self_loop) {
            debug!("self-loop closes a cycle");
            return true;
        }
        let mut visited = HashSet::with_capacity(self.nodes.len());
        for root in &self.nodes {
            if !visited.contains(root) && self.has_cycle_from(root, &mut visited) {
                return true;
            }
        }
        false
    }

    fn has_cycle_from<'g>(&'g self, root: &'g T, visited: &mut HashSet<&'g T>) -> bool {
        // Frames are (node, parent, index of the next neighbor to examine).
        let mut stack: Vec<(&T, Option<&T>, usize)> = vec![(root, None, 0)];
        visited.insert(root);
        while let Some(frame) = stack.last_mut() {
            let (node, parent, next) = *frame;
            let Some(neighbor) = self.successors(node).get(next) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;
            if visited.insert(neighbor) {
                stack.push((neighbor, Some(node), 0));
            } else if Some(neighbor) != parent {
                debug!(depth = stack.len(), "back edge closes a cycle");
                return true;
            }
        }
        false
    }

    /// Partitions the nodes into connected components, ignoring edge
    /// direction.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<HashSet<T>> {
        let _span = info_span!("connected_components").entered();
        pathfinding::prelude::connected_components(&self.nodes(), |node| self.neighbors(node))
    }
}

impl<T> Adjacency for Graph<T>
where
    T: Eq + Hash + Clone,
{
    type Node = T;

    fn contains(&self, node: &T) -> bool {
        self.has_node(node)
    }

    fn successors(&self, node: &T) -> &[T] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    fn keys(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter()
    }

    fn num_keys(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Extend<Bond<T>> for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = Bond<T>>>(&mut self, iter: I) {
        for bond in iter {
            let (from, to, kind) = bond.into_parts();
            self.add_edge(from, to, kind);
        }
    }
}

impl<T> FromIterator<Bond<T>> for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = Bond<T>>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
