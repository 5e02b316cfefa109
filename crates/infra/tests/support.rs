#![allow(dead_code)]

use std::sync::Arc;

use labelprint_core::{LoadingSink, NavigationSink, NotificationSink, SessionContext, Severity};
use labelprint_infra::{ApiClient, ApiClientConfig, MemoryStore};
use parking_lot::Mutex;
use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

/// Records every UI side effect and loading transition.
#[derive(Default)]
pub struct Recorder {
    pub notifications: Mutex<Vec<(Severity, String)>>,
    pub paths: Mutex<Vec<String>>,
    pub loading: Mutex<Vec<bool>>,
}

impl Recorder {
    pub fn messages(&self) -> Vec<String> {
        self.notifications.lock().iter().map(|(_, message)| message.clone()).collect()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }

    /// Outstanding loading calls after replaying every transition
    pub fn loading_depth(&self) -> i64 {
        self.loading.lock().iter().map(|begin| if *begin { 1 } else { -1 }).sum()
    }
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

impl LoadingSink for Recorder {
    fn begin(&self) {
        self.loading.lock().push(true);
    }

    fn end(&self) {
        self.loading.lock().push(false);
    }
}

/// Gateway client wired against a mock server with in-memory storage.
pub struct Harness {
    pub client: Arc<ApiClient>,
    pub session: SessionContext,
    pub recorder: Arc<Recorder>,
}

impl Harness {
    pub fn new(server: &MockServer) -> Self {
        Self::with_config(config_for(server))
    }

    pub fn with_config(config: ApiClientConfig) -> Self {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        let recorder = Arc::new(Recorder::default());
        let client = ApiClient::builder()
            .config(config)
            .session(session.clone())
            .notifier(recorder.clone())
            .navigator(recorder.clone())
            .loading(recorder.clone())
            .build()
            .expect("api client should build");
        Self { client: Arc::new(client), session, recorder }
    }

    pub fn with_token(self, token: &str) -> Self {
        self.session.set_token(token).expect("token should be stored");
        self
    }
}

/// Config pointing both the API base and the origin at the mock server.
pub fn config_for(server: &MockServer) -> ApiClientConfig {
    ApiClientConfig {
        base_url: format!("{}/api", server.uri()),
        origin: server.uri(),
        ..ApiClientConfig::default()
    }
}

pub fn envelope(data: Value) -> Value {
    json!({ "code": 0, "message": "success", "data": data, "timestamp": 1_700_000_000_000_i64 })
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(envelope(data))
}
