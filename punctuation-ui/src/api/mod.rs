//! Analysis Service API

pub mod client;

pub use client::{get_endpoint, FetchBackend};
