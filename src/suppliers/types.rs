//! Shared building blocks for supplier DTOs.
//!
//! Supplier payloads are loosely typed: fields go missing, switch between
//! numbers and strings, or arrive as `null`. The deserializers here never
//! reject a record; a field that cannot be read falls back to its default.

use crate::models::{DestinationId, TagSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// Decode one raw record into a supplier DTO.
///
/// Only a record that is not a JSON object at all is unusable; it decodes to
/// the all-default DTO.
pub fn decode_dto<T>(supplier: &str, raw: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !raw.is_object() {
        warn!("{} sent a non-object hotel record, using defaults", supplier);
        return T::default();
    }
    serde_json::from_value(raw).unwrap_or_else(|err| {
        warn!("{} hotel record could not be decoded: {}", supplier, err);
        T::default()
    })
}

/// Deserialize `T`, substituting `T::default()` for `null` or a mistyped value.
///
/// Use together with `#[serde(default)]` so absent fields also default.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            debug!("Discarding malformed supplier field: {}", err);
            Ok(T::default())
        }
    }
}

/// Identifier that may be sent as a string or a number; anything else is `""`.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// String list that keeps its readable elements.
///
/// Strings are kept, numbers are stringified, anything else is dropped. A
/// value that is not an array at all gives an empty list.
pub fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!("Discarding non-array supplier list: {}", other);
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

/// List of `T` that skips the elements which fail to decode
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                debug!("Discarding malformed supplier list element: {}", err);
                None
            }
        })
        .collect())
}

/// Destination sent as a number or a string.
///
/// Integral numbers (including `5.0`) keep the numeric form; other numbers
/// become their string form. Strings are trimmed and blank means absent.
pub fn lenient_destination<'de, D>(deserializer: D) -> Result<Option<DestinationId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_destination(&value))
}

pub fn parse_destination(value: &Value) -> Option<DestinationId> {
    match value {
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                return Some(DestinationId::Number(int));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Some(DestinationId::Number(f as i64))
                }
                _ => Some(DestinationId::Text(n.to_string())),
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| DestinationId::Text(trimmed.to_string()))
        }
        _ => None,
    }
}

/// Latitude/longitude from a number or numeric string, `None` otherwise
pub fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_coordinate(&value))
}

pub fn parse_coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Image descriptor; suppliers call the link either `url` or `link`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default, alias = "url", deserialize_with = "lenient")]
    pub link: String,
    #[serde(default, alias = "caption", deserialize_with = "lenient")]
    pub description: String,
}

/// Trimmed text, `""` when absent
pub fn clean_text(raw: Option<String>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Trimmed text, `None` when absent or blank
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Collect trimmed, non-blank values into an ordered set
pub fn tag_set<I>(values: I) -> TagSet
where
    I: IntoIterator<Item = String>,
{
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Reduce image descriptors to their links
pub fn image_links(images: Vec<ImageRef>) -> TagSet {
    tag_set(images.into_iter().map(|image| image.link))
}
