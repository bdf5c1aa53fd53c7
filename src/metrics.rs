use std::fmt;
use std::time::Instant;

use crate::search::Method;

pub mod memory;

/// Header line matching [`ResultRecord::csv_line`].
pub const CSV_HEADER: &str = "metodo,resultado,tempo_ms,iteracoes,memoria_kb";

/// What a strategy run concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A Hamiltonian path exists.
    Found,
    /// No Hamiltonian path exists.
    Absent,
    /// The strategy was not attempted (graph above its size limit).
    ///
    /// Distinct from [`Outcome::Absent`]: nothing was computed.
    Skipped,
}

impl Outcome {
    /// Wire spelling used in structured records.
    pub fn as_record_str(self) -> &'static str {
        match self {
            Outcome::Found => "SIM",
            Outcome::Absent | Outcome::Skipped => "NAO",
        }
    }
}

/// One strategy run: the verdict plus the measurements that make runs
/// comparable across strategies and instances.
///
/// Records are immutable once produced. A run that was skipped carries
/// [`Outcome::Skipped`] with zeroed measurements and serializes as a `NAO`
/// row, so every invocation emits exactly one record per method.
///
/// # Example
/// ```
/// use hampath::{solve, Graph, Method};
///
/// let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let line = solve(Method::Backtracking, &g).csv_line();
/// assert!(line.starts_with("Backtracking,SIM,"));
/// ```
#[derive(Clone, Debug)]
pub struct ResultRecord {
    /// Strategy that produced this record.
    pub method: Method,
    /// The verdict.
    pub outcome: Outcome,
    /// Wall-clock duration in fractional milliseconds.
    pub elapsed_ms: f64,
    /// Strategy-defined work unit: recursive calls, or DP masks processed.
    pub steps: u64,
    /// Best-effort resident-set growth in KB; zero when unmeasurable.
    pub memory_delta_kb: u64,
}

impl ResultRecord {
    /// The record for a strategy that was not attempted.
    pub fn skipped(method: Method) -> Self {
        ResultRecord {
            method,
            outcome: Outcome::Skipped,
            elapsed_ms: 0.0,
            steps: 0,
            memory_delta_kb: 0,
        }
    }

    /// Whether a path was found. `false` covers both absent and skipped.
    pub fn exists(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Serializes as `metodo,resultado,tempo_ms,iteracoes,memoria_kb`, with
    /// the time fixed to three decimal places.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{:.3},{},{}",
            self.method.label(),
            self.outcome.as_record_str(),
            self.elapsed_ms,
            self.steps,
            self.memory_delta_kb,
        )
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.outcome {
            Outcome::Found => "path found",
            Outcome::Absent => "no path",
            Outcome::Skipped => "not attempted",
        };
        writeln!(f, "  Method: {}", self.method.label())?;
        writeln!(f, "  Result: {verdict}")?;
        writeln!(f, "  Time: {:.3} ms", self.elapsed_ms)?;
        writeln!(f, "  Steps: {}", self.steps)?;
        write!(f, "  Memory: {} KB", self.memory_delta_kb)
    }
}

/// Measurement scope around one strategy execution.
///
/// Constructed per call and consumed by [`finish`](Instrument::finish);
/// nothing is shared or global, so sequential runs cannot contaminate each
/// other. The memory figure is best-effort only; see
/// [`memory::sample_rss_kb`].
#[derive(Debug)]
pub struct Instrument {
    baseline_rss_kb: u64,
    started: Instant,
}

impl Instrument {
    /// Starts measuring: an RSS baseline sample, then the clock.
    pub fn start() -> Self {
        Instrument {
            baseline_rss_kb: memory::sample_rss_kb(),
            started: Instant::now(),
        }
    }

    /// Stops measuring and assembles the record for a completed run.
    ///
    /// The memory delta saturates at zero: a platform whose sampler returns
    /// a constant 0 must not underflow the subtraction.
    pub fn finish(self, method: Method, outcome: Outcome, steps: u64) -> ResultRecord {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1_000.0;
        let rss_kb = memory::sample_rss_kb();
        ResultRecord {
            method,
            outcome,
            elapsed_ms,
            steps,
            memory_delta_kb: rss_kb.saturating_sub(self.baseline_rss_kb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_line_formatting() {
        let record = ResultRecord {
            method: Method::OrderedBacktracking,
            outcome: Outcome::Found,
            elapsed_ms: 12.5,
            steps: 42,
            memory_delta_kb: 7,
        };
        assert_eq!(record.csv_line(), "Backtracking+Poda,SIM,12.500,42,7");
    }

    #[test]
    fn test_csv_time_has_three_decimals() {
        let record = ResultRecord {
            method: Method::Backtracking,
            outcome: Outcome::Absent,
            elapsed_ms: 0.0,
            steps: 0,
            memory_delta_kb: 0,
        };
        assert_eq!(record.csv_line(), "Backtracking,NAO,0.000,0,0");
    }

    #[test]
    fn test_skipped_record_is_zeroed() {
        let record = ResultRecord::skipped(Method::BitmaskDp);
        assert!(!record.exists());
        assert_eq!(record.csv_line(), "Prog_Dinamica,NAO,0.000,0,0");
    }

    #[test]
    fn test_instrument_produces_plausible_record() {
        let run = Instrument::start();
        let record = run.finish(Method::Backtracking, Outcome::Found, 3);
        assert!(record.exists());
        assert_eq!(record.steps, 3);
        assert!(record.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_outcome_record_strings() {
        assert_eq!(Outcome::Found.as_record_str(), "SIM");
        assert_eq!(Outcome::Absent.as_record_str(), "NAO");
        assert_eq!(Outcome::Skipped.as_record_str(), "NAO");
    }
}
