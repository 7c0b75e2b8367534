//! Service layer orchestrating data sources and the scoring pipeline.
//!
//! Services implement the query interface the chart UI calls: per-condition
//! performance series, Likert distributions, and the last-request-wins
//! guard for re-triggered loads. Every call recomputes from its inputs;
//! nothing is cached between queries.

pub mod latest;
pub mod likert;
pub mod performance;

pub use latest::{RequestGuard, Ticket};
pub use likert::get_likert_data;
pub use performance::{get_condition_series, get_performance_data, PerformanceQuery};
