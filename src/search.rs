use std::fmt;

use crate::graph::Graph;
use crate::metrics::{Instrument, Outcome, ResultRecord};

pub mod backtracking;
pub mod bitmask;
pub mod ordered;
pub mod state;

pub use bitmask::MAX_DP_VERTICES;
pub use state::SearchState;

/// The three decision strategies.
///
/// The set is closed: results are only ever compared across these three, so
/// dispatch is a plain enum rather than an open trait object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Plain depth-first backtracking from every starting vertex.
    Backtracking,
    /// Backtracking with most-constrained-first candidate ordering.
    OrderedBacktracking,
    /// Exact subset dynamic programming, bounded to small graphs.
    BitmaskDp,
}

impl Method {
    /// All methods, in the order runs are invoked and reported.
    pub const ALL: [Method; 3] = [
        Method::Backtracking,
        Method::OrderedBacktracking,
        Method::BitmaskDp,
    ];

    /// Identifier used in structured output records.
    pub fn label(self) -> &'static str {
        match self {
            Method::Backtracking => "Backtracking",
            Method::OrderedBacktracking => "Backtracking+Poda",
            Method::BitmaskDp => "Prog_Dinamica",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runs one strategy on `g` and returns its instrumented record.
///
/// Strategies own fresh scratch state per call and run to completion; no
/// timeout is imposed here, so bounding runtime on adversarial instances is
/// the caller's job. [`Method::BitmaskDp`] is only attempted up to
/// [`MAX_DP_VERTICES`] vertices; past that it yields the skipped record
/// (zero time, zero steps) without starting a measurement.
///
/// # Example
/// ```
/// use hampath::{solve, Graph, Method, Outcome};
///
/// let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let record = solve(Method::BitmaskDp, &g);
/// assert_eq!(record.outcome, Outcome::Found);
/// assert_eq!(record.steps, 15);
/// ```
pub fn solve(method: Method, g: &Graph) -> ResultRecord {
    if method == Method::BitmaskDp && g.order() > MAX_DP_VERTICES {
        return ResultRecord::skipped(method);
    }

    let run = Instrument::start();
    let (exists, steps) = match method {
        Method::Backtracking => backtracking::search(g),
        Method::OrderedBacktracking => ordered::search(g),
        Method::BitmaskDp => bitmask::search(g),
    };
    let outcome = if exists { Outcome::Found } else { Outcome::Absent };
    run.finish(method, outcome, steps)
}
