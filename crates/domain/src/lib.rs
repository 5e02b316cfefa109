//! # LabelPrint Domain
//!
//! Business domain types and models for the LabelPrint client.
//!
//! This crate contains:
//! - The response envelope every API call is wrapped in
//! - Label, print job, printer and user payload types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other LabelPrint crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
