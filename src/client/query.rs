//! Flattening of typed payloads into query-string pairs.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Flatten a payload into `(key, value)` query pairs.
///
/// The payload must serialize to a JSON object (or to `null`, which yields
/// no pairs). Each field contributes one pair under its serialized name:
/// strings verbatim, numbers in their shortest decimal form, booleans as
/// `true`/`false`. `null` fields are skipped entirely. Nested arrays and
/// objects have no query form and are rejected; use
/// [`Multi`](crate::models::Multi) or [`Enum`](crate::models::Enum) for
/// multi-value filters.
pub(crate) fn to_query_pairs<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(payload).map_err(Error::encoding)?;

    let fields = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(fields) => fields,
        other => {
            return Err(Error::encoding(format!(
                "query payload must be a struct or map, got {}",
                kind_of(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::encoding(format!(
                    "query field `{key}` is {}; wrap lists in Multi or Enum",
                    kind_of(&other)
                )))
            }
        };
        pairs.push((key, value));
    }

    Ok(pairs)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
