//! Backend API access
//!
//! [`ApiClient`] is the gateway every call goes through. The resource modules
//! wrap it with typed endpoints.

pub mod auth;
pub mod client;
pub mod labels;
pub mod print_jobs;
pub mod printers;
pub mod upload;

pub use auth::AuthApi;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use labels::LabelTemplateApi;
pub use print_jobs::PrintJobApi;
pub use printers::PrinterApi;
pub use upload::UploadFile;
