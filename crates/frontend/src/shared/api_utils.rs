//! URL helpers for talking to the backend
//!
//! The backend serves both the JSON API and the static map assets on port 3000.

/// Get the base URL for backend requests
///
/// Constructs the base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - Base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full backend URL from an absolute path
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/map/indonesia.svg");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Resolve an asset reference from the dataset.
///
/// Absolute URLs pass through, rooted paths are served by the backend.
pub fn resource_url(reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        api_url(reference)
    }
}
