use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};

/// Undirected simple graph over vertices `0..n`, stored as a flat `n × n`
/// adjacency matrix.
///
/// Construction validates the vertex count and every edge: endpoints outside
/// `0..n`, self-loops, and duplicates are dropped with a warning rather than
/// failing the whole instance. The edge count reflects the edges actually
/// stored, and the adjacency relation is kept symmetric.
///
/// # Example
/// ```
/// use hampath::Graph;
///
/// // A 4-cycle: edges (0-1, 1-2, 2-3, 3-0).
/// let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// assert_eq!(g.order(), 4);
/// assert_eq!(g.edge_count(), 4);
/// assert!(g.has_edge(2, 1));
/// assert!(!g.has_edge(0, 2));
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    m: usize,
    adj: Vec<bool>,
}

impl Graph {
    /// Creates a graph with `n` isolated vertices.
    ///
    /// Fails with [`Error::InvalidInput`] when `n == 0`; an empty instance
    /// must never reach a search strategy.
    pub fn with_vertices(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_input("vertex count must be positive"));
        }
        Ok(Graph {
            n,
            m: 0,
            adj: vec![false; n * n],
        })
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Returns whether the edge was stored. Out-of-range endpoints,
    /// self-loops, and edges already present leave the graph unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u >= self.n || v >= self.n || u == v || self.adj[u * self.n + v] {
            return false;
        }
        self.adj[u * self.n + v] = true;
        self.adj[v * self.n + u] = true;
        self.m += 1;
        true
    }

    /// Builds a graph from explicit edge pairs, warning on each rejected one.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Graph::with_vertices(n)?;
        for &(u, v) in edges {
            if !g.add_edge(u, v) {
                warn!("edge ({u},{v}) out of range or duplicate, ignored");
            }
        }
        Ok(g)
    }

    /// Parses an instance from a reader.
    ///
    /// Format: first line `n m`, then `m` lines `u v` with 0-indexed
    /// endpoints. Malformed or out-of-range edge lines are skipped with a
    /// warning, as are trailing lines past the declared `m`; a file that
    /// ends early only warns. A missing or unusable header is fatal.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = lines
            .next()
            .ok_or_else(|| Error::invalid_input("empty instance file"))??;
        let mut fields = header.split_whitespace();
        let n: i64 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| Error::invalid_input(format!("malformed header {header:?}")))?;
        let m: i64 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| Error::invalid_input(format!("malformed header {header:?}")))?;
        if n <= 0 || m < 0 {
            return Err(Error::invalid_input(format!("unusable header n={n} m={m}")));
        }

        let mut g = Graph::with_vertices(n as usize)?;
        let mut seen = 0i64;
        for line in lines {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if seen == m {
                warn!("trailing line {line:?} ignored");
                continue;
            }
            seen += 1;
            match parse_edge(line) {
                Some((u, v)) => {
                    if !g.add_edge(u, v) {
                        warn!("edge ({u},{v}) out of range or duplicate, ignored");
                    }
                }
                None => warn!("malformed edge line {line:?} ignored"),
            }
        }
        if seen < m {
            warn!("instance declared {m} edges but only {seen} were present");
        }
        Ok(g)
    }

    /// Loads an instance file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Graph::from_reader(BufReader::new(file))
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Number of stored edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.m
    }

    /// Whether the undirected edge `{u, v}` is present.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u * self.n + v]
    }

    /// Neighbors of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&u| self.adj[v * self.n + u])
    }

    /// Edge density relative to the complete graph on the same vertices.
    pub fn density(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        (2.0 * self.m as f64) / ((self.n * (self.n - 1)) as f64)
    }
}

fn parse_edge(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let u = fields.next()?.parse().ok()?;
    let v = fields.next()?.parse().ok()?;
    Some((u, v))
}
