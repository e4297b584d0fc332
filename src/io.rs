use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use thiserror::Error;

use crate::graph::{Graph, Node};

/// Original vertex identifier as written in the edge-list file. Identifiers
/// need not be contiguous or small; they only reappear in reports.
pub type NodeId = u64;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read edge list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: expected two integers, got {text:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

/// A graph with contiguous internal indices plus the mapping back to the
/// identifiers used in the input file.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    /// `ids[v]` is the file identifier of internal vertex v.
    pub ids: Vec<NodeId>,
}

impl LoadedGraph {
    /// Translates internal indices back to file identifiers.
    pub fn original_ids(&self, vertices: &[Node]) -> Vec<NodeId> {
        vertices.iter().map(|&v| self.ids[v as usize]).collect()
    }
}

/// Reads a whitespace-separated edge list.
///
/// Lines starting with `#` are comments; a comment of the form `# Nodes: N`
/// is taken as a capacity hint and nothing more. Blank lines are skipped.
/// Every other line must start with two non-negative integers (any further
/// fields on the line are ignored); a line that does not is a fatal
/// [`LoadError::Parse`]. Identifiers get internal indices in order of first
/// appearance. Duplicate edges collapse and self-loops are dropped.
pub fn read_edge_list(path: &Path) -> Result<LoadedGraph, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut ids: IndexSet<NodeId> = IndexSet::new();
    let mut edges: Vec<[Node; 2]> = vec![];

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if let Some(comment) = text.strip_prefix('#') {
            if let Some(hint) = parse_node_hint(comment) {
                ids.reserve(hint.saturating_sub(ids.len()));
                edges.reserve(hint.saturating_sub(edges.len()));
            }
            continue;
        }

        let mut fields = text.split_whitespace();
        let edge = match (
            fields.next().and_then(|s| s.parse::<NodeId>().ok()),
            fields.next().and_then(|s| s.parse::<NodeId>().ok()),
        ) {
            (Some(u), Some(v)) => [u, v],
            _ => {
                return Err(LoadError::Parse {
                    path: path.to_path_buf(),
                    line: lineno + 1,
                    text: text.to_string(),
                })
            }
        };

        let (ui, _) = ids.insert_full(edge[0]);
        let (vi, _) = ids.insert_full(edge[1]);
        edges.push([ui as Node, vi as Node]);
    }

    let graph = Graph::from_edges(ids.len(), &edges);
    let ids = ids.into_iter().collect();
    Ok(LoadedGraph { graph, ids })
}

/// Extracts N from a comment containing `Nodes: N`. The hint is advisory;
/// the loader always uses the real distinct-identifier count.
fn parse_node_hint(comment: &str) -> Option<usize> {
    let rest = comment.split("Nodes:").nth(1)?;
    rest.split_whitespace().next()?.parse().ok()
}

/// Run summary as written next to the Tomita driver's stdout report.
pub struct RunSummary<'a> {
    pub graph_path: &'a Path,
    pub vertex_count: usize,
    pub total_cliques: u64,
    pub max_clique_size: usize,
    pub seconds: f64,
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> std::io::Result<()> {
    let mut content = String::new();
    content += &format!("Graph: {}\n", summary.graph_path.display());
    content += &format!("Vertices: {}\n", summary.vertex_count);
    content += &format!("Total maximal cliques found: {}\n", summary.total_cliques);
    content += &format!("Size of largest clique: {}\n", summary.max_clique_size);
    content += &format!("Processing time: {:.3} seconds\n", summary.seconds);
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(name: &str, contents: &str) -> Result<LoadedGraph, LoadError> {
        let path = std::env::temp_dir().join(format!("clique_census_{}.txt", name));
        std::fs::write(&path, contents).unwrap();
        let res = read_edge_list(&path);
        std::fs::remove_file(&path).ok();
        res
    }

    #[test]
    fn basic_edge_list() {
        let loaded = load_str(
            "basic",
            "# a triangle\n# Nodes: 3 Edges: 3\n1 2\n2 3\n1 3\n",
        )
        .unwrap();
        assert_eq!(loaded.graph.n(), 3);
        assert_eq!(loaded.graph.edge_count(), 3);
        assert_eq!(loaded.ids, vec![1, 2, 3]);
    }

    #[test]
    fn blank_lines_duplicates_and_extra_fields() {
        let loaded = load_str(
            "messy",
            "1 2 17 99\n\n2 1\n   \n2 3 0.5\n3 3\n",
        )
        .unwrap();
        // {1,2} collapses with {2,1}; the self-loop (3,3) is dropped
        assert_eq!(loaded.graph.n(), 3);
        assert_eq!(loaded.graph.edge_count(), 2);
    }

    #[test]
    fn first_appearance_indexing() {
        let loaded = load_str("order", "42 7\n7 13\n").unwrap();
        assert_eq!(loaded.ids, vec![42, 7, 13]);
        assert_eq!(loaded.original_ids(&[2, 0]), vec![13, 42]);
    }

    #[test]
    fn non_contiguous_identifiers() {
        let loaded = load_str(
            "sparse_ids",
            "100 200\n200 300\n100 300\n400 500\n",
        )
        .unwrap();
        assert_eq!(loaded.graph.n(), 5);
        assert_eq!(loaded.graph.edge_count(), 4);
        let cliques = crate::bron_kerbosch::maximal_cliques(&loaded.graph);
        let mut ids: Vec<Vec<NodeId>> = cliques
            .iter()
            .map(|c| {
                let mut ids = loaded.original_ids(c);
                ids.sort_unstable();
                ids
            })
            .collect();
        ids.sort();
        assert_eq!(ids, vec![vec![100, 200, 300], vec![400, 500]]);
    }

    #[test]
    fn malformed_line_is_fatal() {
        let err = load_str("bad", "1 2\nnot an edge\n").unwrap_err();
        match err {
            LoadError::Parse { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "not an edge");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn one_integer_is_fatal() {
        assert!(matches!(
            load_str("short", "17\n").unwrap_err(),
            LoadError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_edge_list(Path::new("/nonexistent/edges.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn node_hint() {
        assert_eq!(parse_node_hint(" Nodes: 7115 Edges: 103689"), Some(7115));
        assert_eq!(parse_node_hint(" just a comment"), None);
    }

    #[test]
    fn summary_contents() {
        let path = std::env::temp_dir().join("clique_census_summary.txt");
        write_summary(
            &path,
            &RunSummary {
                graph_path: Path::new("wiki-Vote.txt"),
                vertex_count: 7115,
                total_cliques: 459002,
                max_clique_size: 17,
                seconds: 1.25,
            },
        )
        .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(text.contains("Graph: wiki-Vote.txt"));
        assert!(text.contains("Vertices: 7115"));
        assert!(text.contains("Total maximal cliques found: 459002"));
        assert!(text.contains("Size of largest clique: 17"));
        assert!(text.contains("Processing time: 1.250 seconds"));
    }
}
