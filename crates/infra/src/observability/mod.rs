//! Observability setup
//!
//! Structured logging via `tracing`. Library code only emits events; the
//! embedding application installs the subscriber once with
//! [`init_tracing`].

pub mod logging;

pub use logging::{build_filter, init_tracing};
