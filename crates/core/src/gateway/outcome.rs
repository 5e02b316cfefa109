//! Inbound classification
//!
//! Maps a completed exchange to either the unwrapped envelope payload or a
//! [`ClassifiedError`]. Pure: side effects are left to the failure stages of
//! the pipeline.

use labelprint_domain::Envelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{BoxError, ClassifiedError, ErrorKind};
use super::messages::MessageCatalog;

/// What the transport produced for one request
#[derive(Debug)]
pub enum TransportOutcome {
    /// A response arrived, whatever its status
    Response { status: u16, body: Vec<u8> },
    /// No response before the client timeout
    TimedOut(BoxError),
    /// No response: connection refused, DNS failure, broken body, ...
    Unreachable(BoxError),
}

/// Classify a transport outcome and unwrap the envelope payload.
///
/// # Errors
///
/// Returns the classified failure for every outcome other than a 2xx
/// response carrying a success envelope whose `data` fits `T`.
pub fn resolve<T: DeserializeOwned>(
    outcome: TransportOutcome,
    messages: &MessageCatalog,
) -> Result<T, ClassifiedError> {
    match outcome {
        TransportOutcome::Response { status, body } if (200..300).contains(&status) => {
            unwrap_envelope(&body, messages)
        }
        TransportOutcome::Response { status, body } => {
            Err(classify_status(status, &body, messages))
        }
        TransportOutcome::TimedOut(cause) => {
            Err(ClassifiedError::new(ErrorKind::Timeout, messages.timeout).with_cause(cause))
        }
        TransportOutcome::Unreachable(cause) => {
            Err(ClassifiedError::new(ErrorKind::Network, messages.network_error).with_cause(cause))
        }
    }
}

/// Unwrap a 2xx body.
///
/// # Errors
///
/// `Business` for a non-success `code`, `MalformedResponse` when the body is
/// not an envelope or `data` cannot be read as `T`.
pub fn unwrap_envelope<T: DeserializeOwned>(
    body: &[u8],
    messages: &MessageCatalog,
) -> Result<T, ClassifiedError> {
    let envelope: Envelope<Value> =
        serde_json::from_slice(body).map_err(|err| malformed(messages, err))?;

    if !envelope.is_success() {
        let code = envelope.code;
        let message = non_empty(envelope.message)
            .unwrap_or_else(|| messages.request_failed.to_string());
        return Err(ClassifiedError::new(ErrorKind::Business, message).with_code(code));
    }

    let (_, data) = envelope.into_parts();
    serde_json::from_value(data).map_err(|err| malformed(messages, err))
}

/// Classify a non-2xx response by status code.
#[must_use]
pub fn classify_status(status: u16, body: &[u8], messages: &MessageCatalog) -> ClassifiedError {
    let server_or_generic =
        || server_message(body).unwrap_or_else(|| messages.request_failed.to_string());

    let (kind, message) = match status {
        401 => (ErrorKind::Unauthorized, server_or_generic()),
        403 => (ErrorKind::Forbidden, messages.access_denied.to_string()),
        404 => (ErrorKind::NotFound, messages.not_found.to_string()),
        500 => (ErrorKind::Server, messages.server_error.to_string()),
        501..=599 => (ErrorKind::Server, server_or_generic()),
        _ => (ErrorKind::OtherHttp, server_or_generic()),
    };

    ClassifiedError::new(kind, message).with_status(status)
}

/// Message carried in an error body: `message`, else a string `detail`.
fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "detail"]
        .iter()
        .filter_map(|field| value.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .find(|text| !text.is_empty())
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

fn malformed(messages: &MessageCatalog, err: serde_json::Error) -> ClassifiedError {
    ClassifiedError::new(ErrorKind::MalformedResponse, messages.request_failed).with_cause(err)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    const MESSAGES: MessageCatalog = MessageCatalog::ENGLISH;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Job {
        id: String,
    }

    fn response(status: u16, body: Value) -> TransportOutcome {
        TransportOutcome::Response { status, body: serde_json::to_vec(&body).unwrap() }
    }

    fn failure(outcome: TransportOutcome) -> ClassifiedError {
        resolve::<Value>(outcome, &MESSAGES).unwrap_err()
    }

    #[test]
    fn success_envelope_yields_data_exactly() {
        for code in [0, 200] {
            let body =
                json!({ "code": code, "message": "", "data": { "id": "j-1" }, "timestamp": 1 });
            let job: Job = resolve(response(200, body), &MESSAGES).unwrap();
            assert_eq!(job, Job { id: "j-1".into() });
        }
    }

    #[test]
    fn null_data_resolves_to_unit() {
        resolve::<()>(response(200, json!({ "code": 0, "data": null })), &MESSAGES).unwrap();
    }

    #[test]
    fn business_failure_carries_server_message() {
        let err = failure(response(200, json!({ "code": 4001, "message": "Template in use" })));
        assert_eq!(err.kind(), ErrorKind::Business);
        assert_eq!(err.message(), "Template in use");
        assert_eq!(err.code(), Some(4001));
    }

    #[test]
    fn null_message_on_success_still_unwraps() {
        let body =
            json!({ "code": 0, "message": null, "data": { "id": "j-2" }, "timestamp": null });
        let job: Job = resolve(response(200, body), &MESSAGES).unwrap();
        assert_eq!(job, Job { id: "j-2".into() });
    }

    #[test]
    fn null_message_on_business_failure_uses_fallback() {
        let err = failure(response(200, json!({ "code": 5002, "message": null, "data": null })));
        assert_eq!(err.kind(), ErrorKind::Business);
        assert_eq!(err.message(), MESSAGES.request_failed);
        assert_eq!(err.code(), Some(5002));
    }

    #[test]
    fn business_failure_without_message_uses_fallback() {
        let err = failure(response(200, json!({ "code": 1, "message": "" })));
        assert_eq!(err.message(), MESSAGES.request_failed);
    }

    #[test]
    fn non_envelope_body_is_malformed() {
        let err = failure(TransportOutcome::Response { status: 200, body: b"<html>".to_vec() });
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.message(), MESSAGES.request_failed);

        let err = failure(response(200, json!({ "data": {} })));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn data_of_wrong_shape_is_malformed() {
        let err = resolve::<Job>(response(200, json!({ "code": 0, "data": [1, 2] })), &MESSAGES)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn fixed_status_messages() {
        let cases = [
            (403, ErrorKind::Forbidden, MESSAGES.access_denied),
            (404, ErrorKind::NotFound, MESSAGES.not_found),
            (500, ErrorKind::Server, MESSAGES.server_error),
        ];
        for (status, kind, message) in cases {
            let err = failure(response(status, json!({ "message": "ignored" })));
            assert_eq!(err.kind(), kind);
            assert_eq!(err.message(), message);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn other_statuses_prefer_server_message() {
        let err = failure(response(422, json!({ "message": "copies must be positive" })));
        assert_eq!(err.kind(), ErrorKind::OtherHttp);
        assert_eq!(err.message(), "copies must be positive");

        let err = failure(response(400, json!({ "detail": "打印失败: template missing" })));
        assert_eq!(err.message(), "打印失败: template missing");

        let err = failure(TransportOutcome::Response { status: 418, body: Vec::new() });
        assert_eq!(err.message(), MESSAGES.request_failed);
    }

    #[test]
    fn unauthorized_and_gateway_errors() {
        let err = failure(response(401, json!({ "message": "token expired" })));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.message(), "token expired");

        let err = failure(response(503, json!({})));
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.message(), MESSAGES.request_failed);
    }

    #[test]
    fn transport_failures_use_fixed_messages() {
        let err = failure(TransportOutcome::TimedOut("deadline elapsed".into()));
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_eq!(err.message(), MESSAGES.timeout);

        let err = failure(TransportOutcome::Unreachable("connection refused".into()));
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.message(), MESSAGES.network_error);
    }

    #[test]
    fn localized_catalog_is_used() {
        let chinese = MessageCatalog::SIMPLIFIED_CHINESE;
        let err = resolve::<Value>(response(403, json!({})), &chinese).unwrap_err();
        assert_eq!(err.message(), "无权限访问");
    }
}
