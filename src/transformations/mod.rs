//! Row filtering for experimental conditions.
//!
//! # Example
//!
//! ```
//! use archroma::core::domain::{Stimulus, SurveyRow};
//! use archroma::transformations::filter_for_analysis;
//!
//! # fn example(rows: &[SurveyRow]) {
//! // Saturation analysis selects the trials where brightness was fixed.
//! let series = filter_for_analysis(rows, "Xreal", "indoor", Stimulus::Saturation);
//! # let _ = series;
//! # }
//! ```

pub mod filtering;

pub use filtering::{filter_condition, filter_for_analysis};
