//! # LabelPrint Core
//!
//! Pure client logic - no transport or storage code.
//!
//! This crate contains:
//! - Request options, failure classification and the message catalog
//! - The request/failure pipeline that replaces ad-hoc interceptors
//! - Port interfaces (traits) for storage, notification, navigation
//! - Session and application settings services
//!
//! ## Architecture Principles
//! - Only depends on `labelprint-domain`
//! - No HTTP, file system or UI code
//! - All external effects via traits
//! - Pure, testable logic

pub mod gateway;
pub mod session;
pub mod settings;

// Re-export specific items to avoid ambiguity
pub use gateway::error::{BoxError, ClassifiedError, ErrorKind};
pub use gateway::messages::MessageCatalog;
pub use gateway::options::RequestOptions;
pub use gateway::outcome::{resolve, TransportOutcome};
pub use gateway::pipeline::{
    BearerAuth, CredentialReset, FailureStage, Notify, OutboundRequest, Pipeline, RequestStage,
};
pub use gateway::ports::{LoadingSink, NavigationSink, NotificationSink, Severity};
pub use gateway::progress::{percent_complete, ProgressCallback, UploadProgress};
pub use session::ports::{AuthGateway, KeyValueStore};
pub use session::{SessionContext, SessionError, SessionService};
pub use settings::AppSettingsService;
