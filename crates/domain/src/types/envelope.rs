//! Response envelope
//!
//! Every endpoint under the API's control wraps its payload in
//! `{ code, message, data, timestamp }`. Transport success (HTTP status) and
//! business success (`code`) are independent.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{SUCCESS_CODE_HTTP, SUCCESS_CODE_RPC};

/// Fixed wrapper around every API payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub data: T,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: i64,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope fields other than `data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeMeta {
    pub code: i64,
    pub message: String,
    pub timestamp: i64,
}

impl<T> Envelope<T> {
    /// Both `0` and `200` denote business success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        is_success_code(self.code)
    }

    /// Split the payload from its metadata.
    #[must_use]
    pub fn into_parts(self) -> (EnvelopeMeta, T) {
        let meta =
            EnvelopeMeta { code: self.code, message: self.message, timestamp: self.timestamp };
        (meta, self.data)
    }
}

impl EnvelopeMeta {
    /// Wrap a payload with this metadata.
    #[must_use]
    pub fn wrap<T>(self, data: T) -> Envelope<T> {
        Envelope { code: self.code, message: self.message, data, timestamp: self.timestamp }
    }
}

/// Returns `true` for the RPC-style (`0`) and HTTP-style (`200`) success codes.
#[must_use]
pub fn is_success_code(code: i64) -> bool {
    code == SUCCESS_CODE_RPC || code == SUCCESS_CODE_HTTP
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}
