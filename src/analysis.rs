//! Unweighted, BFS-based analysis over a bare adjacency mapping.
//!
//! These functions accept anything implementing [`Adjacency`]: typically a
//! `HashMap<T, Vec<T>>` whose keys are the nodes and whose values list the
//! directly reachable nodes, but a [`crate::Graph`] works too.  Nodes that
//! only ever appear as targets are not keys.
//!
//! None of these fail.  An absent start node gives `false` or an empty path.

use crate::{
    adjacency::Adjacency,
    search::{BfsIterator, reaches},
    tracing_support::{debug, info_span},
};

/// Checks whether `end` is reachable from `start`.  False if `start` is not a
/// key; `end` only needs to appear somewhere in the mapping.
pub fn graph_has_path<A>(map: &A, start: &A::Node, end: &A::Node) -> bool
where
    A: Adjacency + ?Sized,
{
    let _span = info_span!("has_path").entered();
    map.contains(start) && reaches(map, start, end)
}

/// Finds a path with the fewest edges from `start` to `end`, including both
/// ends.  Returns `[start]` when `start == end`, and an empty path when
/// `start` is not a key or `end` is unreachable.
pub fn graph_shortest_path<A>(map: &A, start: &A::Node, end: &A::Node) -> Vec<A::Node>
where
    A: Adjacency + ?Sized,
{
    let _span = info_span!("shortest_path").entered();
    if !map.contains(start) {
        return Vec::new();
    }
    let mut bfs = BfsIterator::new(map, vec![start.clone()]);
    while !bfs.is_discovered(end) {
        if bfs.next().is_none() {
            return Vec::new();
        }
    }
    bfs.path_to(end)
}

/// Counts components by starting a BFS from every key not yet reached by an
/// earlier one.
///
/// Only keys start a new component.  For a directed mapping the count
/// depends on the order in which keys are visited: a key that reaches an
/// earlier component without being reached by it still counts separately.
pub fn graph_count_components<A>(map: &A) -> usize
where
    A: Adjacency + ?Sized,
{
    let _span = info_span!("count_components").entered();
    let mut bfs = BfsIterator::new(map, Vec::new());
    let mut count = 0;
    for key in map.keys() {
        if bfs.restart(key.clone()) {
            count += 1;
            bfs.by_ref().for_each(drop);
        }
    }
    count
}

/// Checks whether the mapping can be two-colored so that no node lists a
/// neighbor of its own color.
///
/// Each BFS tree is colored by depth parity.  Once a node has been visited
/// all of its successors have been discovered, so every edge can be checked
/// right away.
pub fn graph_is_bipartite<A>(map: &A) -> bool
where
    A: Adjacency + ?Sized,
{
    let _span = info_span!("is_bipartite").entered();
    let mut bfs = BfsIterator::new(map, Vec::new());
    for key in map.keys() {
        if !bfs.restart(key.clone()) {
            continue;
        }
        while let Some(node) = bfs.next() {
            let color = bfs.depth(&node).map(|d| d % 2);
            for neighbor in map.successors(&node) {
                if bfs.depth(neighbor).map(|d| d % 2) == color {
                    debug!("edge joins two nodes of the same color");
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn diamond() -> HashMap<&'static str, Vec<&'static str>> {
        HashMap::from([
            ("A", vec!["B", "C"]),
            ("B", vec!["D"]),
            ("C", vec!["D"]),
            ("D", vec![]),
        ])
    }

    fn undirected(edges: &[(u32, u32)]) -> HashMap<u32, Vec<u32>> {
        let mut map: HashMap<u32, Vec<u32>> = HashMap::new();
        for &(a, b) in edges {
            map.entry(a).or_default().push(b);
            map.entry(b).or_default().push(a);
        }
        map
    }

    #[test]
    fn test_has_path() {
        let map = diamond();
        assert!(graph_has_path(&map, &"A", &"D"));
        assert!(graph_has_path(&map, &"B", &"B"));
        assert!(!graph_has_path(&map, &"D", &"A"));
        assert!(!graph_has_path(&map, &"Z", &"Z"));
    }

    #[test]
    fn test_has_path_to_target_only_node() {
        let map = HashMap::from([("A", vec!["B"])]);
        assert!(graph_has_path(&map, &"A", &"B"));
        assert!(!graph_has_path(&map, &"B", &"A"));
    }

    #[test]
    fn test_shortest_path_through_diamond() {
        let path = graph_shortest_path(&diamond(), &"A", &"D");
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&"A"));
        assert_eq!(path.last(), Some(&"D"));
        assert!(path[1] == "B" || path[1] == "C");
    }

    #[test]
    fn test_shortest_path_edge_cases() {
        let map = diamond();
        assert_eq!(graph_shortest_path(&map, &"A", &"A"), vec!["A"]);
        assert!(graph_shortest_path(&map, &"Z", &"A").is_empty());
        assert!(graph_shortest_path(&map, &"D", &"A").is_empty());
    }

    #[test]
    fn test_shortest_path_prefers_fewer_edges() {
        let map = undirected(&[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]);
        assert_eq!(graph_shortest_path(&map, &0, &4), vec![0, 4]);
        assert_eq!(graph_shortest_path(&map, &0, &3), vec![0, 4, 3]);
    }

    #[test]
    fn test_count_components() {
        let map = undirected(&[(1, 2), (3, 4)]);
        assert_eq!(graph_count_components(&map), 2);
        assert_eq!(graph_count_components(&HashMap::<u32, Vec<u32>>::new()), 0);
    }

    #[test]
    fn test_count_components_ignores_target_only_nodes() {
        let map = HashMap::from([(1, vec![2, 3]), (4, vec![5])]);
        assert_eq!(graph_count_components(&map), 2);
    }

    #[test]
    fn test_bipartite_cycles() {
        let triangle = undirected(&[(0, 1), (1, 2), (2, 0)]);
        let square = undirected(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(!graph_is_bipartite(&triangle));
        assert!(graph_is_bipartite(&square));
    }

    #[test]
    fn test_bipartite_self_loop() {
        let map = HashMap::from([(0, vec![0])]);
        assert!(!graph_is_bipartite(&map));
    }

    #[test]
    fn test_bipartite_keeps_colors_of_earlier_trees() {
        use std::collections::BTreeMap;

        // 3 roots a new tree after 1 and 2 are colored, so 3 -> 1 joins two
        // roots of the same color while 3 -> 2 does not.
        let map = BTreeMap::from([(1, vec![2]), (2, vec![]), (3, vec![1])]);
        assert!(!graph_is_bipartite(&map));
        let map = BTreeMap::from([(1, vec![2]), (2, vec![]), (3, vec![2])]);
        assert!(graph_is_bipartite(&map));
        let map = BTreeMap::from([(1, vec![2]), (2, vec![]), (3, vec![4]), (4, vec![2])]);
        assert!(!graph_is_bipartite(&map));
    }

    #[test]
    fn test_bipartite_checks_every_component() {
        let map = undirected(&[(0, 1), (10, 11), (11, 12), (12, 10)]);
        assert!(!graph_is_bipartite(&map));
        assert!(graph_is_bipartite(&HashMap::<u32, Vec<u32>>::new()));
    }

    #[test]
    fn test_bipartite_directed_same_level_edge() {
        // 1 and 2 are both one step from 0, so 1 -> 2 joins equal colors.
        let map = HashMap::from([(0, vec![1, 2]), (1, vec![2]), (2, vec![])]);
        assert!(!graph_is_bipartite(&map));
    }
}
