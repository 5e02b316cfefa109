//! API gateway client
//!
//! Single entry point for every backend call. Applies the request pipeline,
//! unwraps the response envelope and classifies failures before running the
//! failure stages.

use std::sync::Arc;
use std::time::Duration;

use labelprint_core::{
    resolve, ClassifiedError, ErrorKind, LoadingSink, MessageCatalog, NavigationSink,
    NotificationSink, OutboundRequest, Pipeline, ProgressCallback, RequestOptions,
    SessionContext, TransportOutcome,
};
use labelprint_domain::constants::{HEALTH_CHECK_TIMEOUT_MS, HEALTH_PATH, REQUEST_TIMEOUT_MS};
use labelprint_domain::{ApiConfig, LabelPrintError, Locale};
use reqwest::multipart::Form;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::upload::UploadFile;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base endpoint, absolute or relative to `origin` (e.g. "/api")
    pub base_url: String,
    /// Scheme and authority of the backend (e.g. "http://localhost:8000")
    pub origin: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Timeout for the health probe
    pub health_timeout: Duration,
    pub locale: Locale,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from_api_config(&ApiConfig::default())
    }
}

impl ApiClientConfig {
    #[must_use]
    pub fn from_api_config(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            origin: api.origin.clone(),
            timeout: Duration::from_millis(api.timeout_ms),
            health_timeout: Duration::from_millis(HEALTH_CHECK_TIMEOUT_MS),
            locale: api.locale,
        }
    }

    /// Absolute base endpoint.
    ///
    /// # Errors
    /// Returns a config error when neither `base_url` nor `origin + base_url`
    /// forms a valid URL.
    pub fn endpoint(&self) -> Result<Url, LabelPrintError> {
        if let Ok(url) = Url::parse(&self.base_url) {
            return Ok(url);
        }
        let origin = Url::parse(&self.origin).map_err(InfraError::from)?;
        Ok(origin.join(&self.base_url).map_err(InfraError::from)?)
    }

    /// Health probe URL, `<origin>/health`.
    ///
    /// # Errors
    /// Returns a config error when `origin` is not a valid URL.
    pub fn health_url(&self) -> Result<Url, LabelPrintError> {
        let origin = Url::parse(&self.origin).map_err(InfraError::from)?;
        Ok(origin.join(HEALTH_PATH).map_err(InfraError::from)?)
    }
}

/// Gateway client shared by every domain API
///
/// Base endpoint, timeout and pipeline are fixed at construction.
pub struct ApiClient {
    http: HttpClient,
    probe: HttpClient,
    endpoint: String,
    health_url: String,
    pipeline: Pipeline,
    messages: MessageCatalog,
    loading: Option<Arc<dyn LoadingSink>>,
}

enum Payload<'a, B: ?Sized> {
    Empty,
    Json(&'a B),
    Multipart(Form),
}

impl ApiClient {
    /// Create a builder for fluent configuration
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Absolute base endpoint, without trailing slash
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    #[must_use]
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Execute a GET request and unwrap the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after the failure stages have run.
    #[instrument(skip(self, options), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError> {
        self.dispatch(Method::GET, path, Payload::<()>::Empty, options).await
    }

    /// Execute a POST request with a JSON body.
    ///
    /// A body that fails to serialize is reported as a network failure
    /// because the request never leaves the client.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after the failure stages have run.
    #[instrument(skip(self, body, options), fields(path = %path))]
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(Method::POST, path, Payload::Json(body), options).await
    }

    /// Execute a POST request without a body.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after the failure stages have run.
    #[instrument(skip(self, options), fields(path = %path))]
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError> {
        self.dispatch(Method::POST, path, Payload::<()>::Empty, options).await
    }

    /// Execute a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after the failure stages have run.
    #[instrument(skip(self, body, options), fields(path = %path))]
    pub async fn put<B, T>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(Method::PUT, path, Payload::Json(body), options).await
    }

    /// Execute a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after the failure stages have run.
    #[instrument(skip(self, options), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError> {
        self.dispatch(Method::DELETE, path, Payload::<()>::Empty, options).await
    }

    /// POST `file` as multipart form data under the `file` field.
    ///
    /// `on_progress` receives whole percentages while the body is handed to
    /// the transport, and only when the file length is known. Any caller
    /// supplied `Content-Type` header is dropped in favour of the multipart
    /// boundary header.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after the failure stages have run.
    #[instrument(
        skip(self, file, on_progress, options),
        fields(path = %path, file = %file.file_name())
    )]
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError> {
        let form = match file.into_form(on_progress) {
            Ok(form) => form,
            Err(err) => {
                // Unusable part metadata: nothing is sent.
                let failure =
                    ClassifiedError::new(ErrorKind::Network, self.messages.network_error)
                        .with_cause(err);
                return Err(self.reject(failure, options));
            }
        };
        self.dispatch(Method::POST, path, Payload::<()>::Multipart(form), options).await
    }

    /// Probe `<origin>/health`. No envelope handling, no pipeline.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> bool {
        let outcome = self.probe.send(self.probe.request(Method::GET, &self.health_url)).await;
        match outcome {
            TransportOutcome::Response { status, .. } => {
                let healthy = (200..300).contains(&status);
                debug!(status, healthy, "health check completed");
                healthy
            }
            other => {
                warn!(outcome = ?other, "health check failed");
                false
            }
        }
    }

    async fn dispatch<B, T>(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_, B>,
        options: &RequestOptions,
    ) -> Result<T, ClassifiedError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _loading = LoadingGuard::start(self.loading.as_ref().filter(|_| options.show_loading));

        let multipart = matches!(payload, Payload::Multipart(_));
        let mut outbound = OutboundRequest::new(method.as_str(), path);
        if !multipart {
            outbound.set_header("content-type", "application/json");
        }
        for (name, value) in &options.headers {
            outbound.set_header(name, value.clone());
        }
        self.pipeline.prepare(&mut outbound, options);
        if multipart && outbound.remove_header("content-type").is_some() {
            debug!("dropped caller content type for multipart upload");
        }

        let url = self.url_for(path);
        debug!(%method, url = %url, "dispatching request");

        let mut builder = self.http.request(method, &url);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        for (name, value) in outbound.headers() {
            builder = builder.header(name, value);
        }
        builder = match payload {
            Payload::Empty => builder,
            Payload::Json(body) => builder.json(body),
            Payload::Multipart(form) => builder.multipart(form),
        };

        match resolve::<T>(self.http.send(builder).await, &self.messages) {
            Ok(data) => {
                info!(path = %path, "request successful");
                Ok(data)
            }
            Err(err) => Err(self.reject(err, options)),
        }
    }

    fn reject(&self, err: ClassifiedError, options: &RequestOptions) -> ClassifiedError {
        warn!(
            kind = err.kind().label(),
            status = ?err.status(),
            code = ?err.code(),
            error = %err,
            "request failed"
        );
        self.pipeline.fail(&err, options);
        err
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.endpoint, path)
        } else {
            format!("{}/{}", self.endpoint, path)
        }
    }
}

/// Signals the loading sink for as long as it is alive
struct LoadingGuard(Option<Arc<dyn LoadingSink>>);

impl LoadingGuard {
    fn start(sink: Option<&Arc<dyn LoadingSink>>) -> Self {
        let sink = sink.cloned();
        if let Some(sink) = &sink {
            sink.begin();
        }
        Self(sink)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(sink) = self.0.take() {
            sink.end();
        }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    session: Option<SessionContext>,
    notifier: Option<Arc<dyn NotificationSink>>,
    navigator: Option<Arc<dyn NavigationSink>>,
    loading: Option<Arc<dyn LoadingSink>>,
    pipeline: Option<Pipeline>,
    messages: Option<MessageCatalog>,
}

impl ApiClientBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.get_or_insert_with(ApiClientConfig::default).base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn NavigationSink>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: Arc<dyn LoadingSink>) -> Self {
        self.loading = Some(loading);
        self
    }

    /// Replace the standard pipeline. Session, notifier and navigator are
    /// then not required.
    #[must_use]
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Override the catalog otherwise chosen from the configured locale.
    #[must_use]
    pub fn messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = Some(messages);
        self
    }

    /// # Errors
    ///
    /// Returns a config error for an invalid endpoint, a missing pipeline
    /// collaborator or an HTTP client that cannot be built.
    pub fn build(self) -> Result<ApiClient, LabelPrintError> {
        let config = self.config.unwrap_or_default();
        let endpoint = config.endpoint()?.as_str().trim_end_matches('/').to_string();
        let health_url = config.health_url()?.to_string();

        let pipeline = match self.pipeline {
            Some(pipeline) => pipeline,
            None => match (self.session, self.notifier, self.navigator) {
                (Some(session), Some(notifier), Some(navigator)) => {
                    Pipeline::standard(session, notifier, navigator)
                }
                _ => {
                    return Err(LabelPrintError::Config(
                        "ApiClient needs a session plus notification and navigation sinks".into(),
                    ))
                }
            },
        };

        let timeout = if config.timeout.is_zero() {
            Duration::from_millis(REQUEST_TIMEOUT_MS)
        } else {
            config.timeout
        };
        let http = HttpClient::builder().timeout(timeout).build()?;
        let probe = HttpClient::builder().timeout(config.health_timeout).build()?;

        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        info!(endpoint = %endpoint, timeout_ms, "API client ready");

        Ok(ApiClient {
            http,
            probe,
            endpoint,
            health_url,
            pipeline,
            messages: self.messages.unwrap_or_else(|| MessageCatalog::for_locale(config.locale)),
            loading: self.loading,
        })
    }
}
