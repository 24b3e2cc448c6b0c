use contracts::domain::a001_region::{dataset, CategoryKind, Region, RegionId};
use contracts::shared::region_map::{InteractionSink, InteractionState, ReselectPolicy};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Selection mirrored into the page's query string
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct MapQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

/// Reactive interaction controller shared by the map and the info panel.
#[derive(Clone, Copy)]
pub struct MapInteraction {
    pub state: RwSignal<InteractionState>,
    policy: ReselectPolicy,
}

impl MapInteraction {
    pub fn new(policy: ReselectPolicy) -> Self {
        Self {
            state: RwSignal::new(InteractionState::default()),
            policy,
        }
    }

    pub fn select_category(&self, kind: CategoryKind) {
        self.state.update(|s| {
            s.select_category(kind);
        });
    }

    pub fn back_to_overview(&self) {
        self.state.update(|s| s.back_to_overview());
    }

    pub fn deselect(&self) {
        self.state.update(|s| s.deselect());
    }

    /// Restore `?region=..&category=..` on load and keep the query string in
    /// sync with the selection afterwards.
    pub fn init_query_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: MapQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        if let Some(region) = params.region.as_deref().and_then(dataset::find) {
            let category = params.category.as_deref().and_then(CategoryKind::from_key);
            let policy = self.policy;
            self.state.update(|s| {
                s.select(*region, policy);
                if let Some(kind) = category {
                    s.select_category(kind);
                }
            });
        }

        let this = *self;
        Effect::new(move |_| {
            let (region, category) = this
                .state
                .with(|s| (s.selected_id(), s.selected_category));
            let new_url = query_for(region, category);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let target = if new_url.is_empty() {
                            w.location().pathname().unwrap_or_else(|_| "/".to_string())
                        } else {
                            new_url
                        };
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&target),
                        );
                    }
                }
            }
        });
    }
}

fn query_for(region: Option<RegionId>, category: Option<CategoryKind>) -> String {
    let Some(region) = region else {
        return String::new();
    };
    let params = MapQuery {
        region: Some(region.to_string()),
        category: category.map(|kind| kind.key().to_string()),
    };
    let query = serde_qs::to_string(&params).unwrap_or_default();
    format!("?{}", query)
}

impl InteractionSink for MapInteraction {
    fn set_hovered(&self, id: Option<RegionId>) {
        // Skip no-op writes so leaving and re-entering doesn't wake subscribers
        if self.state.with_untracked(|s| s.hovered) != id {
            self.state.update(|s| s.set_hovered(id));
        }
    }

    fn select(&self, region: Region) {
        let policy = self.policy;
        self.state.update(|s| s.select(region, policy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_selection_is_empty() {
        assert_eq!(query_for(None, None), "");
        assert_eq!(query_for(None, Some(CategoryKind::Tourism)), "");
    }

    #[test]
    fn test_query_for_selection() {
        assert_eq!(query_for(Some("IDBA"), None), "?region=IDBA");
        assert_eq!(
            query_for(Some("IDBA"), Some(CategoryKind::Culinary)),
            "?region=IDBA&category=culinary"
        );
    }

    #[test]
    fn test_query_parses_back() {
        let query = query_for(Some("IDJK"), Some(CategoryKind::ArtCulture));
        let parsed: MapQuery = serde_qs::from_str(query.trim_start_matches('?')).unwrap();
        assert_eq!(parsed.region.as_deref(), Some("IDJK"));
        assert_eq!(
            parsed.category.as_deref().and_then(CategoryKind::from_key),
            Some(CategoryKind::ArtCulture)
        );

        let empty: MapQuery = serde_qs::from_str("").unwrap();
        assert_eq!(empty, MapQuery::default());
    }
}
