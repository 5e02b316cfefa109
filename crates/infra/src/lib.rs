//! # LabelPrint Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest transport and the API gateway client
//! - Typed endpoints for templates, print jobs, printers and login
//! - Key-value storage (JSON file, memory)
//! - The UI event bus, config loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `labelprint-core`
//! - Contains all "impure" code (network, file system)

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientBuilder, ApiClientConfig, AuthApi, LabelTemplateApi, PrintJobApi,
    PrinterApi, UploadFile,
};
pub use context::ClientContext;
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::init_tracing;
pub use storage::{open_store, FileStore, MemoryStore};
pub use ui::{UiEvent, UiEvents};
