use std::time::Duration;

use labelprint_core::TransportOutcome;
use labelprint_domain::constants::REQUEST_TIMEOUT_MS;
use labelprint_domain::LabelPrintError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with a fixed per-request timeout.
///
/// Every request is attempted exactly once. Failed attempts are reported as a
/// [`TransportOutcome`] rather than an error so the gateway can classify them.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, LabelPrintError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    #[must_use]
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute the request once and buffer the response body.
    ///
    /// The timeout covers the whole exchange, including reading the body.
    pub async fn send(&self, builder: RequestBuilder) -> TransportOutcome {
        let request = match builder.build() {
            Ok(request) => request,
            Err(err) => return outcome_from_error(err),
        };

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                return outcome_from_error(err);
            }
        };

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        match response.bytes().await {
            Ok(body) => TransportOutcome::Response { status: status.as_u16(), body: body.to_vec() },
            Err(err) => {
                debug!(%method, %url, error = %err, "failed to read response body");
                outcome_from_error(err)
            }
        }
    }
}

/// Map a reqwest failure onto the transport outcome it represents.
///
/// Only timeouts are distinguished; every other failure means no usable
/// response was received.
#[must_use]
pub fn outcome_from_error(err: reqwest::Error) -> TransportOutcome {
    if err.is_timeout() {
        TransportOutcome::TimedOut(Box::new(err))
    } else {
        TransportOutcome::Unreachable(Box::new(err))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_millis(REQUEST_TIMEOUT_MS) }
    }
}

impl HttpClientBuilder {
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpClient, LabelPrintError> {
        let client =
            ReqwestClient::builder().timeout(self.timeout).no_proxy().build().map_err(|err| {
                let infra: InfraError = err.into();
                LabelPrintError::from(infra)
            })?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn buffers_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        match client.send(client.request(Method::GET, server.uri())).await {
            TransportOutcome::Response { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, b"ok");
            }
            other => panic!("expected response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn server_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let outcome = client.send(client.request(Method::GET, server.uri())).await;

        assert!(matches!(outcome, TransportOutcome::Response { status: 503, .. }));
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            HttpClient::builder().timeout(Duration::from_millis(50)).build().expect("http client");
        let outcome = client.send(client.request(Method::GET, server.uri())).await;

        assert!(matches!(outcome, TransportOutcome::TimedOut(_)), "got {:?}", outcome);
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED

        let client = HttpClient::new().expect("http client");
        let outcome = client.send(client.request(Method::GET, format!("http://{}", addr))).await;

        assert!(matches!(outcome, TransportOutcome::Unreachable(_)), "got {:?}", outcome);
    }
}
