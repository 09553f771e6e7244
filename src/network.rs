//! Network URL constants for the Eden SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.eden.art";
