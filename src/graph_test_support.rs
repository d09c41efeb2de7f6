use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

impl Arbitrary for EdgeKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&EdgeKind::ALL).expect("EdgeKind::ALL is not empty")
    }
}

/// A randomly generated graph over small integer nodes, so that random
/// edges frequently collide with existing nodes and edges.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph<u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = Graph::new();
        let nodes: Vec<u8> = (0..num_nodes).map(|_| u8::arbitrary(g) % 32).collect();
        for &node in &nodes {
            graph.add_node(node);
        }

        for i in 0..num_edges {
            if nodes.len() < 2 {
                break;
            }
            let source = nodes[usize::arbitrary(g) % nodes.len()];
            let target = nodes[usize::arbitrary(g) % nodes.len()];
            if source != target || i < num_extra_self_loops {
                graph.add_edge(source, target, EdgeKind::arbitrary(g));
            }
        }

        ArbGraph { graph }
    }
}

/// Generates a graph of roughly 400 nodes made of a dense cluster, a sparse
/// cluster, a hub and a directed tail, cycling through all edge kinds.
pub fn generate_large_graph() -> Graph<usize> {
    let mut graph = Graph::new();
    let mut edge_counter = 0;
    let mut next_kind = || {
        edge_counter += 1;
        EdgeKind::ALL[edge_counter % EdgeKind::ALL.len()]
    };

    // Dense cluster with ~60% density.
    for i in 0..50 {
        for j in (i + 1)..50 {
            if (i * 7 + j * 11) % 10 < 6 {
                graph.add_edge(i, j, next_kind());
            }
        }
    }

    // Sparse cluster with ~8% density.
    for i in 50..200 {
        for j in (i + 1)..200 {
            if (i * 19 + j * 23) % 100 < 8 {
                graph.add_edge(i, j, next_kind());
            }
        }
    }

    // Hub connected to every tenth node.
    for i in (0..200).step_by(10) {
        graph.add_edge(1000, i, next_kind());
    }

    // Directed tail hanging off the hub.
    for i in 1000..1200 {
        graph.add_edge(i, i + 1, EdgeKind::Arrow);
    }

    graph
}

/// Checks the invariants relating nodes, edges and adjacency.
pub fn check_graph_consistency<T>(graph: &Graph<T>)
where
    T: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    let nodes: HashSet<T> = graph.nodes().into_iter().collect();
    assert_eq!(nodes.len(), graph.node_count());
    assert_eq!(graph.edges().len(), graph.edge_count());

    let mut unique_edges = HashSet::new();
    for bond in graph.edges() {
        assert!(nodes.contains(&bond.from), "{bond:?}");
        assert!(nodes.contains(&bond.to), "{bond:?}");
        assert!(graph.has_edge(&bond.from, &bond.to, bond.kind), "{bond:?}");
        assert!(unique_edges.insert(bond.clone()), "duplicate {bond:?}");
        assert!(graph.neighbors(&bond.from).contains(&bond.to), "{bond:?}");
        if bond.kind.creates_reverse() {
            assert!(graph.neighbors(&bond.to).contains(&bond.from), "{bond:?}");
        }
    }

    for node in &nodes {
        for neighbor in graph.neighbors(node) {
            assert!(nodes.contains(&neighbor), "{node:?} -> {neighbor:?}");
        }
    }
}
