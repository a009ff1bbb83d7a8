//! Standardized API response envelope.
//!
//! Every endpoint answers with `{"status": ..., "data"?: ...}`. The envelope
//! is built from the HTTP status code the handler picked, so the body shape is
//! the same for every resource. Records pass through an allow-list on the way
//! out: keys that are not listed never reach the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status word carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "Not found")]
    NotFound,
}

/// Uniform `{status, data?}` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Raised when an envelope is requested for a status code it does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Logical error: status {0} not managed")]
pub struct UnsupportedStatus(pub u16);

impl Envelope {
    pub fn ok() -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            data: None,
        }
    }

    pub fn ok_with(data: Value) -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            data: Some(data),
        }
    }

    pub fn error() -> Self {
        Self {
            status: EnvelopeStatus::Error,
            data: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: EnvelopeStatus::NotFound,
            data: None,
        }
    }

    /// Build the envelope for `status_code`, keeping only `fields` in `data`.
    ///
    /// Only 200, 201, 400 and 404 are managed. `data` is dropped for 400 and
    /// 404 so that nothing from a failed operation leaks out.
    pub fn try_shape(
        status_code: u16,
        data: Option<Value>,
        fields: &[&str],
    ) -> Result<Self, UnsupportedStatus> {
        match status_code {
            200 | 201 => Ok(match data {
                Some(data) => Self::ok_with(filter_fields(data, fields)),
                None => Self::ok(),
            }),
            404 => Ok(Self::not_found()),
            400 => Ok(Self::error()),
            other => Err(UnsupportedStatus(other)),
        }
    }

    /// Same as [`Envelope::try_shape`], but an unmanaged status code panics.
    ///
    /// Handlers only ever pass managed codes; anything else is a bug in the
    /// handler and must not be turned into a response.
    pub fn shape(status_code: u16, data: Option<Value>, fields: &[&str]) -> Self {
        match Self::try_shape(status_code, data, fields) {
            Ok(envelope) => envelope,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Keep only allow-listed keys of a record, or of every record in an array.
///
/// Array order is preserved. Values that are neither objects nor arrays are
/// returned unchanged.
pub fn filter_fields(data: Value, fields: &[&str]) -> Value {
    match data {
        Value::Object(record) => Value::Object(filter_record(record, fields)),
        Value::Array(records) => Value::Array(
            records
                .into_iter()
                .map(|entry| match entry {
                    Value::Object(record) => Value::Object(filter_record(record, fields)),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

fn filter_record(record: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    record
        .into_iter()
        .filter(|(key, _)| fields.contains(&key.as_str()))
        .collect()
}
