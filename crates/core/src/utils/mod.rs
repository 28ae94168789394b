//! Small shared helpers for decoding remote records.

pub(crate) mod formats;

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes raw collection records, skipping rows that do not match the
/// expected shape. One malformed row never sinks the whole page.
pub(crate) fn parse_records<T: DeserializeOwned>(records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping malformed record: {}", err);
                None
            }
        })
        .collect()
}

/// Identifier assigned by the store on insert, when the response carries one.
pub(crate) fn inserted_id(response: &Value) -> String {
    response
        .get("insertedId")
        .or_else(|| response.get("_id"))
        .or_else(|| response.get("id"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_parse_records_skips_malformed_rows() {
        let records = vec![json!({"id": "a"}), json!({"id": 7}), json!({"id": "b"})];
        let rows: Vec<Row> = parse_records(records);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_records_empty_input() {
        let rows: Vec<Row> = parse_records(Vec::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_inserted_id_variants() {
        assert_eq!(inserted_id(&json!({"insertedId": "x1"})), "x1");
        assert_eq!(inserted_id(&json!({"_id": "x2"})), "x2");
        assert_eq!(inserted_id(&json!({"id": "x3"})), "x3");
        assert_eq!(inserted_id(&json!({"acknowledged": true})), "");
    }
}
