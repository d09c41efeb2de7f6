use std::collections::{HashMap, HashSet, VecDeque};

use crate::adjacency::Adjacency;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Where and how deep a node was first discovered by a [`BfsIterator`].
#[derive(Clone, Debug)]
struct Discovery<N> {
    parent: Option<N>,
    depth: usize,
}

/// Breadth-first traversal over an [`Adjacency`].
///
/// Nodes are yielded in visitation order.  A node is marked as discovered
/// when it is first enqueued, and the iterator remembers the parent and
/// depth of every discovered node, so callers can reconstruct shortest
/// paths or two-color the traversal tree while iterating.
pub struct BfsIterator<'a, A: Adjacency + ?Sized> {
    adjacency: &'a A,
    discovered: HashMap<A::Node, Discovery<A::Node>>,
    queue: VecDeque<A::Node>,
}

impl<'a, A> BfsIterator<'a, A>
where
    A: Adjacency + ?Sized,
{
    pub fn new(adjacency: &'a A, start: Vec<A::Node>) -> Self {
        let mut bfs = Self {
            adjacency,
            discovered: HashMap::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: VecDeque::new(),
        };
        for node in start {
            bfs.restart(node);
        }
        bfs
    }

    /// Enqueues `start` as the root of a new traversal tree if it has not
    /// been discovered yet.  Returns true if it was enqueued.  Nodes
    /// discovered by earlier trees are not visited again.
    pub fn restart(&mut self, start: A::Node) -> bool {
        if self.discovered.contains_key(&start) {
            return false;
        }
        self.discovered.insert(
            start.clone(),
            Discovery {
                parent: None,
                depth: 0,
            },
        );
        self.queue.push_back(start);
        true
    }

    pub fn is_discovered(&self, node: &A::Node) -> bool {
        self.discovered.contains_key(node)
    }

    /// The node from which `node` was discovered, or `None` for roots and
    /// undiscovered nodes.
    pub fn parent(&self, node: &A::Node) -> Option<&A::Node> {
        self.discovered.get(node)?.parent.as_ref()
    }

    /// Distance of `node` from the root of its traversal tree.
    pub fn depth(&self, node: &A::Node) -> Option<usize> {
        self.discovered.get(node).map(|d| d.depth)
    }

    /// Follows parent links from `node` back to its root and returns the
    /// path from the root to `node`.  Empty if `node` is undiscovered.
    pub fn path_to(&self, node: &A::Node) -> Vec<A::Node> {
        if !self.is_discovered(node) {
            return Vec::new();
        }
        let mut path = vec![node.clone()];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

impl<'a, A> Iterator for BfsIterator<'a, A>
where
    A: Adjacency + ?Sized,
{
    type Item = A::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let nid = self.queue.pop_front()?;
        let adjacency = self.adjacency;
        let depth = self.depth(&nid).unwrap_or_default() + 1;
        for neighbor in adjacency.successors(&nid) {
            if !self.discovered.contains_key(neighbor) {
                self.discovered.insert(
                    neighbor.clone(),
                    Discovery {
                        parent: Some(nid.clone()),
                        depth,
                    },
                );
                self.queue.push_back(neighbor.clone());
            }
        }
        Some(nid)
    }
}

/// Depth-first traversal over an [`Adjacency`] using an explicit stack.
///
/// Successors are pushed in reverse and the visited check happens on pop,
/// which yields the same preorder as a recursive traversal that visits
/// neighbors in adjacency order.
pub struct DfsIterator<'a, A: Adjacency + ?Sized> {
    adjacency: &'a A,
    visited: HashSet<A::Node>,
    stack: Vec<A::Node>,
}

impl<'a, A> DfsIterator<'a, A>
where
    A: Adjacency + ?Sized,
{
    pub fn new(adjacency: &'a A, start: Vec<A::Node>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            adjacency,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }
}

impl<'a, A> Iterator for DfsIterator<'a, A>
where
    A: Adjacency + ?Sized,
{
    type Item = A::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let adjacency = self.adjacency;
        while let Some(nid) = self.stack.pop() {
            if self.visited.insert(nid.clone()) {
                let successors = adjacency.successors(&nid);
                self.stack.extend(
                    successors
                        .iter()
                        .rev()
                        .filter(|n| !self.visited.contains(*n))
                        .cloned(),
                );
                return Some(nid);
            }
        }
        None
    }
}

/// Returns true if `to` is reachable from `from`.  The search stops as soon
/// as `to` is discovered.  A node always reaches itself.
pub fn reaches<A>(adjacency: &A, from: &A::Node, to: &A::Node) -> bool
where
    A: Adjacency + ?Sized,
{
    if from == to {
        return true;
    }
    let mut bfs = BfsIterator::new(adjacency, vec![from.clone()]);
    loop {
        if bfs.is_discovered(to) {
            return true;
        }
        if bfs.next().is_none() {
            return false;
        }
    }
}
