use thiserror::Error;

/// Failures of the region map. All of them are local to the map component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Network/IO error or non-success status while loading the vector document
    #[error("{0}")]
    ResourceFetch(String),

    /// Fetched content is not a usable vector document
    #[error("{0}")]
    DocumentParse(String),

    /// Zero regions could be bound. Terminal for the component instance.
    #[error(
        "No province paths could be identified in the SVG. \
         Please check SVG IDs against the region dataset."
    )]
    NoRegionsMatched,
}

impl MapError {
    /// Error for a non-success HTTP response.
    pub fn from_status(status: u16, status_text: &str) -> Self {
        MapError::ResourceFetch(format!(
            "Failed to load SVG: {} ({})",
            status_text, status
        ))
    }

    /// Error for a failed request; empty messages fall back to a generic one.
    pub fn fetch(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            MapError::ResourceFetch("Could not load map.".to_string())
        } else {
            MapError::ResourceFetch(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = MapError::from_status(404, "Not Found");
        assert_eq!(err.to_string(), "Failed to load SVG: Not Found (404)");
    }

    #[test]
    fn test_empty_fetch_message_falls_back() {
        assert_eq!(MapError::fetch("  ").to_string(), "Could not load map.");
        assert_eq!(MapError::fetch("timeout").to_string(), "timeout");
    }
}
