//! HTTP client layer — `EdenHttp`, one method per API endpoint.

pub mod client;

pub use client::EdenHttp;
