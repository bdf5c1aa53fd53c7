pub mod error;
pub mod graph;
pub mod metrics;
pub mod search;

pub use error::{Error, Result};
pub use graph::Graph;
pub use metrics::{Instrument, Outcome, ResultRecord, CSV_HEADER};
pub use search::{solve, Method, SearchState, MAX_DP_VERTICES};
