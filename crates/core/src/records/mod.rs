//! Record shapes loaded by the dashboard views.
//!
//! The pagination engine treats records as opaque; these types only matter to
//! loaders (deserialization) and renderers (cards).

mod card;
mod event;
mod file;
mod result;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use card::{Card, ToCard};
pub use event::{CalendarEvent, DEFAULT_EVENT_CATEGORY, Participant};
pub use file::FileRecord;
pub use result::ResultRecord;

/// First non-blank value, trimmed.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Record ids as text: strings are kept, numbers keep their JSON spelling and
/// `null` is no id. Other shapes are kept as their JSON text.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    })
}

/// Byte counts written as integers, floats or numeric strings.
///
/// Negative, non-finite or non-numeric values read as unknown.
pub(crate) fn lenient_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_bytes)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| s.parse::<f64>().ok().and_then(whole_bytes))
        },
        _ => None,
    };
    Ok(bytes)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "range checked")]
fn whole_bytes(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_in_any_json_shape() {
        let records: Vec<ResultRecord> = serde_json::from_value(json!([
            {"id": 1, "title": "a"},
            {"id": "r-2", "title": "b"},
            {"id": 3.5, "title": "c"},
            {"id": null, "title": "d"},
            {"title": "e"}
        ]))
        .unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("1"), Some("r-2"), Some("3.5"), None, None]);

        let file: FileRecord = serde_json::from_value(json!({"id": "f-9", "filename": "a.txt"}))
            .unwrap();
        assert_eq!(file.id.as_deref(), Some("f-9"));
    }

    #[test]
    fn test_file_size_tolerates_floats_and_strings() {
        let sizes: Vec<FileRecord> = serde_json::from_value(json!([
            {"filename": "a", "size": 1024},
            {"filename": "b", "size": 1536.4},
            {"filename": "c", "size": "2048"},
            {"filename": "d", "size": -5},
            {"filename": "e", "size": "big"},
            {"filename": "f", "size": null}
        ]))
        .unwrap();
        let sizes: Vec<_> = sizes.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![Some(1024), Some(1536), Some(2048), None, None, None]);
    }
}
