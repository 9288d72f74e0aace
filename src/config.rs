//! Backend API base URL configuration.
//!
//! The base is baked in at compile time from the `BACKEND_URL` environment
//! variable. An empty base is valid and means "same origin": endpoints are
//! requested as relative paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// The configured API base, or `""` when unset (same-origin requests).
pub fn api_base() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

/// Join the API base with a resource path.
///
/// `path` is expected to start with `/`; with an empty base the result is
/// the bare relative path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}
