//! k-clique counting after Chiba and Nishizeki, "Arboricity and subgraph
//! listing algorithms" (1985).
//!
//! The graph lives in a CSR layout whose neighbor array is repartitioned in
//! place as the recursion descends: at level l, the first `d[l][v]` entries
//! of v's slot are exactly v's neighbors in the level-l subgraph. Swaps never
//! move an entry out of its slot, so the multiset of entries per slot is
//! preserved across a full count.

use crate::graph::{Graph, Node};
use crate::sink::CliqueStats;

/// CSR projection of a graph with one subgraph level per clique size
/// currently under construction.
pub struct LevelGraph {
    k: usize,
    /// cumulative degrees; slot of v is `adj[cd[v]..cd[v+1]]`
    cd: Vec<usize>,
    /// concatenated neighbor lists, repartitioned in place per level
    adj: Vec<Node>,
    /// highest level at which a vertex is alive; 0 for isolated vertices
    lab: Vec<u32>,
    /// `d[l][v]`: live-prefix length of v's slot at level l (levels 2..=k)
    d: Vec<Vec<usize>>,
    /// `sub[l]`: roster of vertices alive at level l
    sub: Vec<Vec<Node>>,
}

impl LevelGraph {
    /// Builds the level structure for counting k-cliques, k >= 2. Level k
    /// starts with every non-isolated vertex alive at its full degree.
    pub fn new(g: &Graph, k: usize) -> Self {
        assert!(k >= 2);
        let n = g.n();
        let mut cd = vec![0usize; n + 1];
        for v in 0..n {
            cd[v + 1] = cd[v] + g.degree(v as Node);
        }

        let mut adj = Vec::with_capacity(2 * g.edge_count());
        for v in g.iter_nodes() {
            adj.extend_from_slice(g.neighbors(v));
        }

        let mut lab = vec![0u32; n];
        let mut roster = vec![];
        let mut full_degree = vec![0usize; n];
        let mut max_degree = 0;
        for v in 0..n {
            let deg = g.degree(v as Node);
            if deg > 0 {
                lab[v] = k as u32;
                roster.push(v as Node);
                full_degree[v] = deg;
                max_degree = max_degree.max(deg);
            }
        }

        let mut d = vec![vec![]; k + 1];
        let mut sub = vec![vec![]; k + 1];
        for l in 2..k {
            d[l] = vec![0usize; n];
            sub[l] = Vec::with_capacity(max_degree);
        }
        d[k] = full_degree;
        sub[k] = roster;

        LevelGraph { k, cd, adj, lab, d, sub }
    }

    /// Counts the k-cliques this structure was built for.
    pub fn count(&mut self) -> u64 {
        let mut counter = 0;
        self.kclique(self.k, &mut counter);
        return counter;
    }

    fn kclique(&mut self, l: usize, counter: &mut u64) {
        if l == 2 {
            // each live edge once, from its larger endpoint
            for i in 0..self.sub[2].len() {
                let u = self.sub[2][i];
                let start = self.cd[u as usize];
                for j in start..start + self.d[2][u as usize] {
                    if self.adj[j] < u {
                        *counter += 1;
                    }
                }
            }
            return;
        }

        let mut roster = std::mem::take(&mut self.sub[l]);
        self.sort_by_degree(l, &mut roster);

        for &u in &roster {
            let uu = u as usize;

            // project u's live neighborhood down to level l-1
            self.sub[l - 1].clear();
            let start = self.cd[uu];
            for j in start..start + self.d[l][uu] {
                let v = self.adj[j] as usize;
                if self.lab[v] == l as u32 {
                    self.lab[v] = (l - 1) as u32;
                    self.sub[l - 1].push(v as Node);
                    self.d[l - 1][v] = 0;
                }
            }

            // repartition each member's slot: live prefix = level-(l-1)
            // neighbors, everything else swapped behind it
            for i in 0..self.sub[l - 1].len() {
                let v = self.sub[l - 1][i] as usize;
                let start = self.cd[v];
                let mut end = start + self.d[l][v];
                let mut j = start;
                while j < end {
                    let w = self.adj[j] as usize;
                    if self.lab[w] == (l - 1) as u32 {
                        self.d[l - 1][w] += 1;
                        j += 1;
                    } else {
                        end -= 1;
                        self.adj[j] = self.adj[end];
                        self.adj[end] = w as Node;
                    }
                }
            }

            self.kclique(l - 1, counter);

            // restore labels; if u is inside a member's live prefix, move it
            // to the prefix tail so later siblings see consistent slots
            for i in 0..self.sub[l - 1].len() {
                let v = self.sub[l - 1][i] as usize;
                self.lab[v] = l as u32;
                let start = self.cd[v];
                let prefix = start + self.d[l - 1][v];
                if let Some(off) = self.adj[start..prefix].iter().position(|&w| w == u) {
                    self.adj.swap(start + off, prefix - 1);
                    self.d[l - 1][v] -= 1;
                }
            }
            self.lab[uu] = (l + 1) as u32;
        }

        self.sub[l] = roster;
    }

    /// Counting sort of a roster by current degree, ascending. Stable, so
    /// the iteration order is deterministic.
    fn sort_by_degree(&self, l: usize, roster: &mut Vec<Node>) {
        let max_degree = roster
            .iter()
            .map(|&u| self.d[l][u as usize])
            .max()
            .unwrap_or(0);
        let mut offsets = vec![0usize; max_degree + 1];
        for &u in roster.iter() {
            offsets[self.d[l][u as usize]] += 1;
        }
        let mut total = 0;
        for c in offsets.iter_mut() {
            let here = *c;
            *c = total;
            total += here;
        }
        let mut sorted = vec![0 as Node; roster.len()];
        for &u in roster.iter() {
            let deg = self.d[l][u as usize];
            sorted[offsets[deg]] = u;
            offsets[deg] += 1;
        }
        *roster = sorted;
    }
}

/// Number of k-cliques in the graph for a single k >= 2.
pub fn count_k_cliques(g: &Graph, k: usize) -> u64 {
    LevelGraph::new(g, k).count()
}

/// The full clique size distribution: counts k-cliques for k = 2, 3, …
/// until the count reaches zero, recording each non-zero count (and N_1,
/// the non-isolated vertex count) in the sink. The largest recorded k is
/// the clique number.
pub fn clique_size_census(g: &Graph, stats: &mut CliqueStats) {
    stats.record_k_count(1, g.non_isolated_count() as u64);
    for k in 2.. {
        let count = count_k_cliques(g, k);
        if count == 0 {
            break;
        }
        stats.record_k_count(k, count);
    }
}
