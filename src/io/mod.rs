//! High-level survey data loading utilities.
//!
//! This module combines a [`crate::datasource::DataSource`] with resource
//! naming and typed-row conversion, producing ready-to-filter survey rows.
//!
//! # Example
//!
//! ```no_run
//! use archroma::datasource::SampleSource;
//! use archroma::io::loaders::SurveyLoader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let source = SampleSource::builtin();
//! let result = SurveyLoader::load_hue(&source, 30).await?;
//! println!("loaded {} rows", result.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod loaders;


pub use loaders::{hue_resource_name, likert_resource_name, SurveyLoadResult, SurveyLoader};
