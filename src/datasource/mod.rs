//! Data sources for survey resources.
//!
//! The scoring pipeline is written once against the [`DataSource`] trait;
//! the static-asset backend and the embedded sample backend both implement
//! it, so the real-CSV and sample-data paths share one aggregation
//! implementation instead of drifting apart.

use async_trait::async_trait;
use serde_json::Value;

pub mod assets;
pub mod fallback;
pub mod sample;

pub use assets::AssetSource;
pub use fallback::FallbackGenerator;
pub use sample::SampleSource;

/// Result type for data source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type for data source operations
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource {0} is not CSV")]
    NotCsv(String),

    #[error("Failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Whether this error means "no data for that resource" rather than a
    /// broken environment. Both degrade to the synthetic-data path.
    pub fn is_no_data(&self) -> bool {
        matches!(self, SourceError::NotFound(_) | SourceError::NotCsv(_))
    }
}

/// Capability to fetch parsed survey records by resource name.
///
/// Fetching is the pipeline's only suspension point; implementations hold
/// no mutable state across calls.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch and parse the named CSV resource into header-keyed records.
    ///
    /// A missing resource is [`SourceError::NotFound`]; an HTML payload
    /// from a misconfigured static server is [`SourceError::NotCsv`].
    /// Both are "no data", not failures of the pipeline.
    async fn fetch_rows(&self, name: &str) -> SourceResult<Vec<Value>>;
}
