//! Maximal clique enumeration: Bron–Kerbosch with pivoting, either driven by
//! a degeneracy ordering (Eppstein, Löffler, Strash 2010) or invoked once
//! over the whole vertex set (Tomita, Tanaka, Takahashi 2006).

use crate::degeneracy::degeneracy_ordering;
use crate::graph::{Graph, Node};
use crate::util::{insert_sorted, intersect_count, intersect_sorted, remove_sorted};

/// Enumerates all maximal cliques in degeneracy order.
///
/// For the i-th vertex v of the peeling order, the candidate set is v's
/// later neighbors and the exclude set its earlier neighbors; the pivoted
/// recursion then extends `{v}` within that neighborhood. Each maximal
/// clique is reported exactly once.
pub fn enumerate_degeneracy<F: FnMut(&[Node])>(g: &Graph, report: &mut F) {
    let ord = degeneracy_ordering(g);
    for (i, &v) in ord.ordering.iter().enumerate() {
        let mut p = vec![];
        let mut x = vec![];
        for &u in g.neighbors(v) {
            if ord.pos[u as usize] > i {
                p.push(u);
            } else {
                x.push(u);
            }
        }
        let mut r = vec![v];
        expand(g, p, &mut r, x, report);
    }
}

/// Enumerates all maximal cliques with a single top-level call: P is the
/// whole vertex set, R and X start empty. Same recursion and pivot rule as
/// the degeneracy-ordered variant.
pub fn enumerate_pivot<F: FnMut(&[Node])>(g: &Graph, report: &mut F) {
    let p = g.iter_nodes().collect();
    let mut r = vec![];
    expand(g, p, &mut r, vec![], report);
}

/// Collects every maximal clique into a vector.
pub fn maximal_cliques(g: &Graph) -> Vec<Vec<Node>> {
    let mut res = vec![];
    enumerate_pivot(g, &mut |clique: &[Node]| res.push(clique.to_vec()));
    return res;
}

/// The pivot u in P ∪ X maximizing |P ∩ adj(u)|. Ties go to the earliest
/// vertex in the P-then-X scan, so the choice is deterministic.
fn choose_pivot(g: &Graph, p: &[Node], x: &[Node]) -> Option<Node> {
    let mut pivot = None;
    let mut best = 0;
    for &u in p.iter().chain(x.iter()) {
        let connections = intersect_count(p, g.neighbors(u));
        if pivot.is_none() || connections > best {
            pivot = Some(u);
            best = connections;
        }
    }
    return pivot;
}

/// One frame of the pivoted recursion. P and X arrive sorted; R is the
/// partial clique shared down the branch and restored on return.
fn expand<F: FnMut(&[Node])>(g: &Graph, mut p: Vec<Node>, r: &mut Vec<Node>, mut x: Vec<Node>, report: &mut F) {
    if p.is_empty() && x.is_empty() {
        report(r);
        return;
    }

    // branch only on candidates outside the pivot's neighborhood
    let branch: Vec<Node> = match choose_pivot(g, &p, &x) {
        Some(u) => p.iter().copied().filter(|&v| !g.is_neighbor(u, v)).collect(),
        None => p.clone(),
    };

    for v in branch {
        let newp = intersect_sorted(&p, g.neighbors(v));
        let newx = intersect_sorted(&x, g.neighbors(v));
        r.push(v);
        expand(g, newp, r, newx, report);
        r.pop();
        remove_sorted(&mut p, &v);
        insert_sorted(&mut x, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sorted-vertex form of each clique, whole list sorted, for comparison.
    fn normalized(mut cliques: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
        for c in &mut cliques {
            c.sort_unstable();
        }
        cliques.sort();
        cliques
    }

    fn els_cliques(g: &Graph) -> Vec<Vec<Node>> {
        let mut res = vec![];
        enumerate_degeneracy(g, &mut |c: &[Node]| res.push(c.to_vec()));
        res
    }

    fn assert_both_engines(g: &Graph, expected: &[&[Node]]) {
        let expected: Vec<Vec<Node>> = expected.iter().map(|c| c.to_vec()).collect();
        assert_eq!(normalized(els_cliques(g)), expected);
        assert_eq!(normalized(maximal_cliques(g)), expected);
    }

    #[test]
    fn triangle() {
        let g = Graph::from_edges(3, &[[0, 1], [1, 2], [0, 2]]);
        assert_both_engines(&g, &[&[0, 1, 2]]);
    }

    #[test]
    fn path_p4() {
        let g = Graph::from_edges(4, &[[0, 1], [1, 2], [2, 3]]);
        assert_both_engines(&g, &[&[0, 1], &[1, 2], &[2, 3]]);
    }

    #[test]
    fn k4() {
        let g = Graph::from_edges(4, &[[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
        assert_both_engines(&g, &[&[0, 1, 2, 3]]);
    }

    #[test]
    fn two_disjoint_triangles() {
        let g = Graph::from_edges(6, &[[0, 1], [1, 2], [0, 2], [3, 4], [4, 5], [3, 5]]);
        assert_both_engines(&g, &[&[0, 1, 2], &[3, 4, 5]]);
    }

    #[test]
    fn star() {
        let g = Graph::from_edges(5, &[[0, 1], [0, 2], [0, 3], [0, 4]]);
        assert_both_engines(&g, &[&[0, 1], &[0, 2], &[0, 3], &[0, 4]]);
    }

    #[test]
    fn isolated_vertex_is_a_maximal_clique() {
        let g = Graph::from_edges(3, &[[0, 1]]);
        assert_both_engines(&g, &[&[0, 1], &[2]]);
    }

    #[test]
    fn known_graph() {
        let g = crate::examples::gengraph();
        assert_both_engines(&g, &[&[0, 1, 2], &[0, 2, 5, 6], &[1, 2, 3], &[4]]);
    }

    #[test]
    fn every_reported_clique_is_maximal_and_unique() {
        let g = crate::examples::gengraph();
        let cliques = normalized(els_cliques(&g));
        for c in &cliques {
            for i in 0..c.len() {
                for j in (i + 1)..c.len() {
                    assert!(g.is_neighbor(c[i], c[j]), "{:?} is not a clique", c);
                }
            }
            // no vertex outside c is adjacent to all of c
            for u in g.iter_nodes() {
                if c.contains(&u) {
                    continue;
                }
                assert!(
                    c.iter().any(|&v| !g.is_neighbor(u, v)),
                    "{:?} is extendable by {}",
                    c,
                    u
                );
            }
        }
        let mut deduped = cliques.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), cliques.len(), "duplicate cliques reported");
    }

    #[test]
    fn deterministic_report_order() {
        let g = crate::examples::gengraph();
        assert_eq!(els_cliques(&g), els_cliques(&g));
        assert_eq!(maximal_cliques(&g), maximal_cliques(&g));
    }
}
