//! Client-wide application settings

pub mod service;

pub use service::AppSettingsService;
