//! Score aggregation and analytics.
//!
//! This module turns filtered survey rows into the derived series the
//! charts consume.
//!
//! # Components
//!
//! - [`scoring`]: group rows by stimulus value and compute clarity/comfort
//!   scores
//! - [`peaks`]: per-condition peak points and cross-condition peak ranges
//! - [`likert`]: per-hue 1-5 rating distributions and means

pub mod likert;
pub mod peaks;
pub mod scoring;

pub use likert::{process_likert_records, sorted_hues, LikertSort, LikertSummary};
pub use peaks::{find_peaks, peak_point, ConditionPeaks, PeakRange, PeakReport};
pub use scoring::{aggregate_rows, compute_scores};
