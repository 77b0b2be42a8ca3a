//! Issue list decoding
//!
//! Decoding happens in two steps: the body must first be valid JSON whose
//! top-level value is an array, then every element is extracted strictly.
//! A single bad element fails the whole list.

use serde_json::Value;
use thiserror::Error;

use crate::domain::issue::IssueRecord;

/// Errors that can occur while decoding an issue list
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not valid JSON
    #[error("{0}")]
    Malformed(#[source] serde_json::Error),

    /// Body is valid JSON but not an array
    #[error("expected a JSON array of issues, found {found}")]
    NotAnArray { found: &'static str },

    /// An element is missing a required field or has a mistyped one
    #[error("issue at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a response body into issue records, preserving source order
pub fn decode_issues(body: &str) -> Result<Vec<IssueRecord>, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(DecodeError::Malformed)?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(DecodeError::NotAnArray {
                found: kind_of(&other),
            });
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value(element)
                .map_err(|source| DecodeError::InvalidRecord { index, source })
        })
        .collect()
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
