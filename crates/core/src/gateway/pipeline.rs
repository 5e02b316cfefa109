//! Request/failure pipeline
//!
//! An explicit, ordered replacement for interceptor callbacks. Request stages
//! decorate the outgoing request; failure stages run side effects once a call
//! has been classified as failed. Both lists are fixed at construction.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use labelprint_domain::constants::LOGIN_PATH;
use tracing::{debug, warn};

use super::error::{ClassifiedError, ErrorKind};
use super::options::RequestOptions;
use super::ports::{NavigationSink, NotificationSink, Severity};
use crate::session::SessionContext;

/// Header view of an outgoing request handed to request stages
///
/// Header names are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundRequest {
    method: String,
    path: String,
    headers: BTreeMap<String, String>,
}

impl OutboundRequest {
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into(), headers: BTreeMap::new() }
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        self.headers.remove(&name.to_ascii_lowercase())
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Transforms an outgoing request. Must not fail the request.
pub trait RequestStage: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, request: &mut OutboundRequest, options: &RequestOptions);
}

/// Side effect run after a call was classified as failed.
///
/// Stages observe the error; they never change what the caller receives.
pub trait FailureStage: Send + Sync {
    fn name(&self) -> &'static str;
    fn on_failure(&self, error: &ClassifiedError, options: &RequestOptions);
}

/// Ordered request and failure stages
#[derive(Clone, Default)]
pub struct Pipeline {
    request_stages: Vec<Arc<dyn RequestStage>>,
    failure_stages: Vec<Arc<dyn FailureStage>>,
}

impl Pipeline {
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Bearer auth on the way out; on failure, session reset (401) followed
    /// by notification.
    #[must_use]
    pub fn standard(
        session: SessionContext,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn NavigationSink>,
    ) -> Self {
        Self::builder()
            .request_stage(Arc::new(BearerAuth::new(session.clone())))
            .failure_stage(Arc::new(CredentialReset::new(session, navigator)))
            .failure_stage(Arc::new(Notify::new(notifier)))
            .build()
    }

    /// Run every request stage in order.
    pub fn prepare(&self, request: &mut OutboundRequest, options: &RequestOptions) {
        for stage in &self.request_stages {
            stage.apply(request, options);
        }
    }

    /// Run every failure stage in order.
    pub fn fail(&self, error: &ClassifiedError, options: &RequestOptions) {
        for stage in &self.failure_stages {
            stage.on_failure(error, options);
        }
    }

    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.request_stages
            .iter()
            .map(|stage| stage.name())
            .chain(self.failure_stages.iter().map(|stage| stage.name()))
            .collect()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("stages", &self.stage_names()).finish()
    }
}

/// Builder for [`Pipeline`]
#[derive(Default)]
pub struct PipelineBuilder {
    request_stages: Vec<Arc<dyn RequestStage>>,
    failure_stages: Vec<Arc<dyn FailureStage>>,
}

impl PipelineBuilder {
    #[must_use]
    pub fn request_stage(mut self, stage: Arc<dyn RequestStage>) -> Self {
        self.request_stages.push(stage);
        self
    }

    #[must_use]
    pub fn failure_stage(mut self, stage: Arc<dyn FailureStage>) -> Self {
        self.failure_stages.push(stage);
        self
    }

    #[must_use]
    pub fn build(self) -> Pipeline {
        Pipeline { request_stages: self.request_stages, failure_stages: self.failure_stages }
    }
}

/// Injects `Authorization: Bearer <token>` unless `skip_auth` is set or no
/// credential is stored.
pub struct BearerAuth {
    session: SessionContext,
}

impl BearerAuth {
    #[must_use]
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl RequestStage for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer_auth"
    }

    fn apply(&self, request: &mut OutboundRequest, options: &RequestOptions) {
        if options.skip_auth {
            return;
        }
        if let Some(token) = self.session.token() {
            request.set_header("authorization", format!("Bearer {token}"));
        }
    }
}

/// On 401: drop the stored credential and send the UI to the login page.
///
/// Runs regardless of `skip_error_handler`.
pub struct CredentialReset {
    session: SessionContext,
    navigator: Arc<dyn NavigationSink>,
}

impl CredentialReset {
    #[must_use]
    pub fn new(session: SessionContext, navigator: Arc<dyn NavigationSink>) -> Self {
        Self { session, navigator }
    }
}

impl FailureStage for CredentialReset {
    fn name(&self) -> &'static str {
        "credential_reset"
    }

    fn on_failure(&self, error: &ClassifiedError, _options: &RequestOptions) {
        if error.kind() != ErrorKind::Unauthorized {
            return;
        }
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "failed to clear stored credential after 401");
        }
        debug!(path = LOGIN_PATH, "redirecting to login after 401");
        self.navigator.navigate(LOGIN_PATH);
    }
}

/// Emits an error notification carrying the rejection message.
///
/// Skipped for `skip_error_handler` calls and for 401, which navigates
/// instead.
pub struct Notify {
    sink: Arc<dyn NotificationSink>,
}

impl Notify {
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }
}

impl FailureStage for Notify {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn on_failure(&self, error: &ClassifiedError, options: &RequestOptions) {
        if options.skip_error_handler || error.kind() == ErrorKind::Unauthorized {
            return;
        }
        self.sink.notify(Severity::Error, error.message());
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::session::test_support::MemoryStore;

    #[derive(Default)]
    struct Recorder {
        notifications: Mutex<Vec<(Severity, String)>>,
        paths: Mutex<Vec<String>>,
    }

    impl NotificationSink for Recorder {
        fn notify(&self, severity: Severity, message: &str) {
            self.notifications.lock().push((severity, message.to_string()));
        }
    }

    impl NavigationSink for Recorder {
        fn navigate(&self, path: &str) {
            self.paths.lock().push(path.to_string());
        }
    }

    fn setup(token: Option<&str>) -> (Pipeline, SessionContext, Arc<Recorder>) {
        let session = SessionContext::new(Arc::new(MemoryStore::default()));
        if let Some(token) = token {
            session.set_token(token).unwrap();
        }
        let recorder = Arc::new(Recorder::default());
        let pipeline = Pipeline::standard(session.clone(), recorder.clone(), recorder.clone());
        (pipeline, session, recorder)
    }

    #[test]
    fn bearer_header_when_credential_present() {
        let (pipeline, _, _) = setup(Some("abc123"));
        let mut request = OutboundRequest::new("GET", "/printers");
        pipeline.prepare(&mut request, &RequestOptions::default());
        assert_eq!(request.header("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn skip_auth_leaves_request_untouched() {
        let (pipeline, _, _) = setup(Some("abc123"));
        let mut request = OutboundRequest::new("POST", "/auth/login");
        pipeline.prepare(&mut request, &RequestOptions::new().skip_auth());
        assert_eq!(request.header("authorization"), None);
    }

    #[test]
    fn no_credential_no_header() {
        let (pipeline, _, _) = setup(None);
        let mut request = OutboundRequest::new("GET", "/printers");
        pipeline.prepare(&mut request, &RequestOptions::default());
        assert_eq!(request.headers().count(), 0);
    }

    #[test]
    fn unauthorized_resets_session_even_when_suppressed() {
        let (pipeline, session, recorder) = setup(Some("stale"));
        let error = ClassifiedError::new(ErrorKind::Unauthorized, "token expired").with_status(401);

        pipeline.fail(&error, &RequestOptions::new().skip_error_handler());

        assert_eq!(session.token(), None);
        assert_eq!(*recorder.paths.lock(), vec!["/login".to_string()]);
        assert!(recorder.notifications.lock().is_empty());
    }

    #[test]
    fn failures_notify_with_rejection_message() {
        let (pipeline, session, recorder) = setup(Some("valid"));
        let error = ClassifiedError::new(ErrorKind::Forbidden, "Access denied").with_status(403);

        pipeline.fail(&error, &RequestOptions::default());

        assert_eq!(
            *recorder.notifications.lock(),
            vec![(Severity::Error, "Access denied".to_string())]
        );
        assert_eq!(session.token().as_deref(), Some("valid"));
        assert!(recorder.paths.lock().is_empty());
    }

    #[test]
    fn skip_error_handler_suppresses_notification() {
        let (pipeline, _, recorder) = setup(None);
        let error = ClassifiedError::new(ErrorKind::Timeout, "Request timed out");
        pipeline.fail(&error, &RequestOptions::new().skip_error_handler());
        assert!(recorder.notifications.lock().is_empty());
    }

    #[test]
    fn stages_run_in_declared_order() {
        let (pipeline, _, _) = setup(None);
        assert_eq!(pipeline.stage_names(), vec!["bearer_auth", "credential_reset", "notify"]);
    }
}
