//! Domain types and models
//!
//! Payload shapes carried in the `data` field of the response envelope.

pub mod envelope;
pub mod label;
pub mod print_job;
pub mod printer;
pub mod settings;
pub mod timestamp;
pub mod user;

pub use envelope::{Envelope, PaginatedResponse};
pub use label::{
    LabelTemplate, LabelTemplatePatch, NewLabelTemplate, PreviewImage, PreviewRequest,
    TemplateQuery,
};
pub use print_job::{JobQuery, NewPrintJob, PrintJob, PrintJobStatus};
pub use printer::{PrinterDevice, PrinterStatus, PrinterStatusUpdate, PrinterTestResult};
pub use settings::Theme;
pub use user::{LoginRequest, LoginResponse, User};
