//! Observable states of the vector map resource load.

use super::error::MapError;

/// Fixed path of the vector map resource, relative to the static root.
pub const MAP_RESOURCE_PATH: &str = "/map/indonesia.svg";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(String),
    Failed(String),
}

impl LoadState {
    pub fn from_result(result: Result<String, MapError>) -> Self {
        match result {
            Ok(text) => LoadState::Loaded(text),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            LoadState::Loaded(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert_eq!(
            LoadState::from_result(Ok("<svg/>".into())).text(),
            Some("<svg/>")
        );
        let failed = LoadState::from_result(Err(MapError::from_status(500, "Internal Server Error")));
        assert_eq!(
            failed.error(),
            Some("Failed to load SVG: Internal Server Error (500)")
        );
        assert!(LoadState::default().is_loading());
    }
}
