use serde_json::{Map, Number, Value};

/// Parse CSV text into header-keyed records.
///
/// The first line is the header; each header cell is trimmed and stripped
/// of quote characters. Every following line is split field-by-field with
/// [`split_fields`] and becomes one record object mapping header to value.
///
/// Tolerances, matching the survey exports:
/// - A data line whose field count differs from the header count is
///   dropped and logged, not reported as an error.
/// - A field that parses fully as a number becomes a JSON number;
///   anything else stays a string. An empty cell stays an empty string,
///   never zero.
/// - Input with no data rows yields an empty sequence, not an error.
pub fn parse_csv(text: &str) -> Vec<Value> {
    let mut lines = text.trim().lines();

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => header_line
            .split(',')
            .map(|h| h.trim().replace('"', ""))
            .collect(),
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for line in lines {
        let fields = split_fields(line);
        if fields.len() != headers.len() {
            log::debug!(
                "dropping CSV line with {} fields, expected {}",
                fields.len(),
                headers.len()
            );
            continue;
        }

        let mut record = Map::with_capacity(headers.len());
        for (header, field) in headers.iter().zip(fields) {
            record.insert(header.clone(), coerce(field));
        }
        records.push(Value::Object(record));
    }

    records
}

/// Split one line on commas, honoring quoted segments.
///
/// A quote character toggles quote mode and is not emitted; inside quotes,
/// commas are literal. The exports carry no escaped-quote form, so a
/// single-pass toggle is exact.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Numeric cells become JSON numbers; everything else stays a string.
fn coerce(field: String) -> Value {
    if !field.is_empty() {
        if let Ok(parsed) = field.parse::<f64>() {
            if let Some(number) = Number::from_f64(parsed) {
                return Value::Number(number);
            }
        }
    }
    Value::String(field)
}
