use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::AppConfig;
use crate::parsing::csv_parser;

use super::{DataSource, SourceError, SourceResult};

/// Serves survey CSV resources from a static asset directory.
///
/// This mirrors the demo's deployment: exports are plain files under the
/// site's asset root, fetched by relative name.
#[derive(Debug, Clone)]
pub struct AssetSource {
    root: PathBuf,
}

impl AssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.assets.root.clone())
    }
}

#[async_trait]
impl DataSource for AssetSource {
    async fn fetch_rows(&self, name: &str) -> SourceResult<Vec<Value>> {
        let path = self.root.join(name);

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(name.to_string()));
            }
            Err(err) => {
                return Err(SourceError::Io {
                    name: name.to_string(),
                    source: err,
                });
            }
        };

        // A misconfigured static server answers missing files with the
        // index page instead of a 404.
        let head = text.trim_start();
        if head.starts_with("<!DOCTYPE html") || head.starts_with("<html") {
            log::warn!("received HTML content instead of CSV for {}", name);
            return Err(SourceError::NotCsv(name.to_string()));
        }

        Ok(csv_parser::parse_csv(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_asset(dir: &TempDir, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_parses_csv_asset() {
        let dir = TempDir::new().unwrap();
        write_asset(&dir, "Hue30_data_final_cb.csv", "device,room\nXreal,indoor\n");

        let source = AssetSource::new(dir.path());
        let records = source.fetch_rows("Hue30_data_final_cb.csv").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["device"].as_str(), Some("Xreal"));
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = AssetSource::new(dir.path());

        let err = source.fetch_rows("Hue60_data_final_cb.csv").await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(err.is_no_data());
    }

    #[tokio::test]
    async fn test_html_payload_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_asset(
            &dir,
            "Hue30_data_final_cb.csv",
            "<!DOCTYPE html>\n<html><body>404</body></html>",
        );

        let source = AssetSource::new(dir.path());
        let err = source.fetch_rows("Hue30_data_final_cb.csv").await.unwrap_err();
        assert!(matches!(err, SourceError::NotCsv(_)));
        assert!(err.is_no_data());
    }
}
