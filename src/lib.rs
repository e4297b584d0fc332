//! Clique enumeration for simple undirected graphs: maximal cliques via
//! Bron–Kerbosch with pivoting (with or without a degeneracy-ordered outer
//! loop) and the full k-clique size distribution via Chiba–Nishizeki.

pub mod arboricity;
pub mod bron_kerbosch;
pub mod degeneracy;
pub mod graph;
pub mod io;
pub mod sink;

mod util;

pub use graph::{Graph, Node};
pub use sink::{CliqueReport, CliqueStats};

pub mod examples {
    use crate::graph::Graph;

    /// A small graph with a known clique structure: maximal cliques
    /// {0,1,2}, {0,2,5,6}, {1,2,3} and the isolated vertex {4}.
    pub fn gengraph() -> Graph {
        Graph::from_edges(
            7,
            &[
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 1],
                [0, 2],
                [0, 5],
                [0, 6],
                [2, 5],
                [2, 6],
                [5, 6],
            ],
        )
    }

    /// The simplest non-trivial clique: a triangle.
    pub fn gengraph2() -> Graph {
        Graph::from_edges(3, &[[0, 1], [0, 2], [1, 2]])
    }
}
