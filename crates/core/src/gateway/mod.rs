//! API gateway logic
//!
//! Everything the HTTP client needs that does not touch the network:
//! which headers go out, how a completed exchange is classified, and which
//! side effects a failure triggers.

pub mod error;
pub mod messages;
pub mod options;
pub mod outcome;
pub mod pipeline;
pub mod ports;
pub mod progress;
