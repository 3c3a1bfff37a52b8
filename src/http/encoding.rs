//! Body encoding strategies
//!
//! The profile service accepts JSON bodies on most routes and
//! form-urlencoded bodies on the profile create route. The two form
//! strategies are distinct, named variants and are never inferred from
//! payload shape.

use crate::Result;
use serde_json::Value;

/// Fixed form field used by the envelope encoding
pub const PROFILE_DATA_KEY: &str = "profileData";

/// On-wire body representation, chosen by the caller at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    /// Payload serialized as-is
    #[default]
    Json,
    /// Nested objects recursively flattened into bracketed key paths
    /// (`parent[child]=value`), percent-encoded; null leaves are skipped
    FormFlatten,
    /// Entire payload JSON-serialized as a single string value under the
    /// `profileData` key, then percent-encoded
    FormEnvelope,
}

impl BodyEncoding {
    /// Content type the encoding produces on the wire
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyEncoding::Json => "application/json",
            BodyEncoding::FormFlatten | BodyEncoding::FormEnvelope => {
                "application/x-www-form-urlencoded"
            }
        }
    }
}

/// Recursively flatten a JSON payload into `key[path]` / value pairs.
///
/// Null leaves are skipped; array elements are indexed (`key[0]`).
/// Date-like values arrive here already rendered as ISO-8601 strings by
/// serde, so leaves are only strings, numbers and booleans.
pub fn flatten_pairs(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    collect_pairs(None, value, &mut pairs);
    pairs
}

fn collect_pairs(prefix: Option<&str>, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        // Null leaves produce no pair
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                let path = match prefix {
                    Some(p) => format!("{}[{}]", p, key),
                    None => key.clone(),
                };
                collect_pairs(Some(&path), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let path = match prefix {
                    Some(p) => format!("{}[{}]", p, index),
                    None => index.to_string(),
                };
                collect_pairs(Some(&path), child, out);
            }
        }
        Value::String(s) => push_leaf(prefix, s.clone(), out),
        Value::Bool(b) => push_leaf(prefix, b.to_string(), out),
        Value::Number(n) => push_leaf(prefix, n.to_string(), out),
    }
}

fn push_leaf(prefix: Option<&str>, rendered: String, out: &mut Vec<(String, String)>) {
    // A bare scalar payload has no key path to flatten under
    if let Some(key) = prefix {
        out.push((key.to_string(), rendered));
    }
}

/// Encode a payload with the flatten strategy into a query-string body
pub fn encode_form_flatten(value: &Value) -> String {
    flatten_pairs(value)
        .iter()
        .map(|(key, val)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(val)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode a payload with the envelope strategy: one `profileData` field
/// holding the JSON serialization of the whole payload
pub fn encode_form_envelope(value: &Value) -> Result<String> {
    let serialized = serde_json::to_string(value)?;
    Ok(format!(
        "{}={}",
        PROFILE_DATA_KEY,
        urlencoding::encode(&serialized)
    ))
}
