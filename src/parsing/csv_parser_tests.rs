#[cfg(test)]
mod tests {
    use crate::parsing::csv_parser::parse_csv;
    use serde_json::Value;

    fn field<'a>(record: &'a Value, name: &str) -> &'a Value {
        record.get(name).unwrap_or_else(|| panic!("missing field {name}"))
    }

    /// Quoted commas stay literal; unquoted numeric cells become numbers.
    #[test]
    fn test_parse_quoted_comma_round_trip() {
        let records = parse_csv("a,b\n\"1,2\",3");

        assert_eq!(records.len(), 1);
        assert_eq!(field(&records[0], "a"), &Value::String("1,2".to_string()));
        assert_eq!(field(&records[0], "b").as_f64(), Some(3.0));
    }

    #[test]
    fn test_parse_header_quotes_stripped() {
        let records = parse_csv("\"user id\",\"hue 30\"\nP1,4");

        assert_eq!(records.len(), 1);
        assert_eq!(field(&records[0], "user id").as_str(), Some("P1"));
        assert_eq!(field(&records[0], "hue 30").as_f64(), Some(4.0));
    }

    /// Lines with a mismatched field count are dropped, not errors.
    #[test]
    fn test_parse_drops_short_and_long_lines() {
        let records = parse_csv("a,b,c\n1,2,3\n1,2\n1,2,3,4\n4,5,6");

        assert_eq!(records.len(), 2);
        assert_eq!(field(&records[0], "a").as_f64(), Some(1.0));
        assert_eq!(field(&records[1], "c").as_f64(), Some(6.0));
    }

    /// Empty cells stay empty strings, never zero.
    #[test]
    fn test_parse_preserves_empty_cells() {
        let records = parse_csv("clearest,least clear\n,7");

        assert_eq!(
            field(&records[0], "clearest"),
            &Value::String(String::new())
        );
        assert_eq!(field(&records[0], "least clear").as_f64(), Some(7.0));
    }

    #[test]
    fn test_parse_trims_whitespace_around_fields() {
        let records = parse_csv("device,room\n  Xreal , indoor ");

        assert_eq!(field(&records[0], "device").as_str(), Some("Xreal"));
        assert_eq!(field(&records[0], "room").as_str(), Some("indoor"));
    }

    #[test]
    fn test_parse_non_numeric_stays_string() {
        let records = parse_csv("v\n12abc");

        assert_eq!(field(&records[0], "v").as_str(), Some("12abc"));
    }

    /// Header-only or empty input yields an empty sequence, not an error.
    #[test]
    fn test_parse_without_data_rows_is_empty() {
        assert!(parse_csv("a,b").is_empty());
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("   \n").is_empty());
    }

    #[test]
    fn test_parse_negative_and_fractional_numbers() {
        let records = parse_csv("x,y\n-3.5,0.25");

        assert_eq!(field(&records[0], "x").as_f64(), Some(-3.5));
        assert_eq!(field(&records[0], "y").as_f64(), Some(0.25));
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let records = parse_csv("a,b\r\n1,2\r\n");

        assert_eq!(records.len(), 1);
        assert_eq!(field(&records[0], "b").as_f64(), Some(2.0));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Every record carries exactly the header's keys.
            #[test]
            fn records_match_header_arity(
                cells in proptest::collection::vec("[a-z0-9]{1,6}", 1..6),
                rows in 1usize..5,
            ) {
                let header: Vec<String> =
                    (0..cells.len()).map(|i| format!("c{i}")).collect();
                let line = cells.join(",");
                let mut text = header.join(",");
                for _ in 0..rows {
                    text.push('\n');
                    text.push_str(&line);
                }

                let records = parse_csv(&text);
                prop_assert_eq!(records.len(), rows);
                for record in &records {
                    let object = record.as_object().unwrap();
                    prop_assert_eq!(object.len(), header.len());
                }
            }

            /// Parsing is deterministic: same text, same records.
            #[test]
            fn parsing_is_idempotent(text in "[a-z0-9,\n\"]{0,120}") {
                prop_assert_eq!(parse_csv(&text), parse_csv(&text));
            }
        }
    }
}
