//! Per-call request options

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Per-call configuration. All flags default to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Do not attach the bearer credential.
    pub skip_auth: bool,
    /// Suppress failure notifications. The call still rejects, and a 401
    /// still resets the session.
    pub skip_error_handler: bool,
    /// Drive the loading indicator for the duration of the call.
    pub show_loading: bool,
    /// Query string pairs appended to the URL
    pub query: Vec<(String, String)>,
    /// Extra request headers
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    #[must_use]
    pub fn skip_error_handler(mut self) -> Self {
        self.skip_error_handler = true;
        self
    }

    #[must_use]
    pub fn show_loading(mut self) -> Self {
        self.show_loading = true;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query_pair(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Flatten a serializable struct into query pairs.
    ///
    /// Only top-level fields are used; `null` fields are skipped and nested
    /// values are sent as JSON text.
    #[must_use]
    pub fn with_query<T: Serialize>(mut self, params: &T) -> Self {
        match serde_json::to_value(params) {
            Ok(Value::Object(map)) => {
                for (name, value) in map {
                    let value = match value {
                        Value::Null => continue,
                        Value::String(text) => text,
                        other => other.to_string(),
                    };
                    self.query.push((name, value));
                }
            }
            Ok(other) => warn!(kind = ?other, "query parameters must serialize to an object"),
            Err(err) => warn!(error = %err, "failed to serialize query parameters"),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        page: u32,
        page_size: Option<u32>,
        keyword: Option<String>,
        archived: bool,
    }

    #[test]
    fn flags_default_to_false() {
        let options = RequestOptions::default();
        assert!(!options.skip_auth);
        assert!(!options.skip_error_handler);
        assert!(!options.show_loading);
        assert!(options.query.is_empty());
    }

    #[test]
    fn query_skips_nulls_and_unquotes_strings() {
        let mut query = RequestOptions::new()
            .with_query(&Params {
                page: 2,
                page_size: None,
                keyword: Some("asset".into()),
                archived: false,
            })
            .query;
        query.sort();
        assert_eq!(
            query,
            vec![
                ("archived".to_string(), "false".to_string()),
                ("keyword".to_string(), "asset".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn non_object_query_is_ignored() {
        let options = RequestOptions::new().with_query(&42);
        assert!(options.query.is_empty());
    }
}
