//! Thin reqwest wrapper shared by every gateway call

pub mod client;

pub use client::{outcome_from_error, HttpClient, HttpClientBuilder};
