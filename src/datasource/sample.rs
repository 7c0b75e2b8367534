use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::io::loaders::hue_resource_name;

use super::{DataSource, SourceError, SourceResult};

/// In-memory data source serving embedded sample survey rows.
///
/// Used for demos and tests without the CSV exports on disk. The built-in
/// rows are the hue-30 Xreal/indoor sample from the study, in the same
/// record shape the CSV parser produces, so the whole pipeline downstream
/// of [`DataSource`] behaves identically on sample and real data.
#[derive(Debug, Clone, Default)]
pub struct SampleSource {
    resources: HashMap<String, Vec<Value>>,
}

impl SampleSource {
    /// An empty source; useful as a building block in tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// A source preloaded with the built-in hue-30 sample rows.
    pub fn builtin() -> Self {
        let mut source = Self::new();
        source.insert(hue_resource_name(30), sample_hue30_rows());
        source
    }

    /// Register records under a resource name, replacing any previous set.
    pub fn insert(&mut self, name: impl Into<String>, records: Vec<Value>) {
        self.resources.insert(name.into(), records);
    }
}

#[async_trait]
impl DataSource for SampleSource {
    async fn fetch_rows(&self, name: &str) -> SourceResult<Vec<Value>> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }
}

/// Hue-30 sample rows: one saturation-variation sweep (brightness fixed at
/// 100) and one brightness-variation sweep (saturation fixed at 100), both
/// Xreal indoor.
fn sample_hue30_rows() -> Vec<Value> {
    fn row(
        saturation: i64,
        brightness: i64,
        fixation: &str,
        counters: [Value; 6],
    ) -> Value {
        let [clearest, second_clear, most_comfortable, second_comfortable, least_clear, least_comfortable] =
            counters;
        json!({
            "hue": 30,
            "saturation": saturation,
            "brightness": brightness,
            "fixation": fixation,
            "room": "indoor",
            "background": "control",
            "device": "Xreal",
            "clearest": clearest,
            "second clear": second_clear,
            "most comfortable": most_comfortable,
            "second comfortable": second_comfortable,
            "least clear": least_clear,
            "least comfortable": least_comfortable,
        })
    }

    let blank = || json!("");

    vec![
        // Saturation variation, brightness fixed at 100.
        row(20, 100, "brightness", [blank(), blank(), blank(), blank(), json!(3), json!(17)]),
        row(30, 100, "brightness", [blank(), blank(), blank(), blank(), json!(9), json!(2)]),
        row(40, 100, "brightness", [blank(), blank(), blank(), blank(), json!(7), blank()]),
        row(50, 100, "brightness", [blank(), blank(), json!(3), json!(8), json!(2), blank()]),
        row(60, 100, "brightness", [blank(), blank(), json!(12), blank(), blank(), blank()]),
        row(70, 100, "brightness", [json!(6), json!(12), json!(16), json!(5), blank(), blank()]),
        row(80, 100, "brightness", [json!(8), json!(6), json!(8), json!(4), blank(), blank()]),
        row(90, 100, "brightness", [json!(8), json!(6), blank(), json!(1), blank(), blank()]),
        row(100, 100, "brightness", [json!(8), json!(2), blank(), blank(), json!(9), json!(11)]),
        // Brightness variation, saturation fixed at 100.
        row(100, 20, "saturation", [blank(), blank(), blank(), blank(), json!(30), json!(17)]),
        row(100, 30, "saturation", [blank(), blank(), blank(), blank(), blank(), blank()]),
        row(100, 40, "saturation", [blank(), blank(), blank(), blank(), blank(), blank()]),
        row(100, 50, "saturation", [blank(), blank(), blank(), blank(), blank(), blank()]),
        row(100, 60, "saturation", [blank(), blank(), blank(), blank(), blank(), blank()]),
        row(100, 70, "saturation", [blank(), blank(), json!(6), json!(4), blank(), blank()]),
        row(100, 80, "saturation", [json!(4), json!(8), json!(16), json!(12), blank(), blank()]),
        row(100, 90, "saturation", [json!(8), json!(16), json!(8), json!(14), blank(), blank()]),
        row(100, 100, "saturation", [json!(18), json!(6), blank(), blank(), blank(), json!(13)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::SurveyRow;

    #[tokio::test]
    async fn test_builtin_rows_convert_to_survey_rows() {
        let source = SampleSource::builtin();
        let records = source
            .fetch_rows(&hue_resource_name(30))
            .await
            .unwrap();

        assert_eq!(records.len(), 18);
        let typed: Vec<SurveyRow> = records
            .iter()
            .filter_map(SurveyRow::from_record)
            .collect();
        assert_eq!(typed.len(), 18);
    }

    #[tokio::test]
    async fn test_unknown_resource_is_not_found() {
        let source = SampleSource::builtin();
        let err = source
            .fetch_rows(&hue_resource_name(60))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_inserted_resource_replaces_previous() {
        let mut source = SampleSource::new();
        source.insert("extra.csv", vec![json!({"device": "Xreal"})]);
        source.insert("extra.csv", Vec::new());

        let records = source.fetch_rows("extra.csv").await.unwrap();
        assert!(records.is_empty());
    }
}
