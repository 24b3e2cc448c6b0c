//! Info Panel state machine: idle prompt, category overview, category detail.

use super::interaction::InteractionState;
use crate::domain::a001_region::{CategoryDetail, CategoryKind, Region};

pub const IDLE_TITLE: &str = "Explore the Archipelago";
pub const IDLE_PROMPT: &str =
    "Select a province on the map to uncover its unique stories, sights, and flavors.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    /// No region selected
    Idle,
    Overview { region: Region },
    Detail { region: Region, category: CategoryKind },
}

impl PanelView {
    pub fn from_state(state: &InteractionState) -> Self {
        match (state.selected, state.selected_category) {
            (None, _) => PanelView::Idle,
            (Some(region), None) => PanelView::Overview { region },
            (Some(region), Some(category)) => PanelView::Detail { region, category },
        }
    }

    pub fn region(&self) -> Option<&Region> {
        match self {
            PanelView::Idle => None,
            PanelView::Overview { region } | PanelView::Detail { region, .. } => Some(region),
        }
    }

    pub fn heading(&self) -> String {
        match self {
            PanelView::Idle => IDLE_TITLE.to_string(),
            PanelView::Overview { region } => format!("Discover {}", region.name),
            PanelView::Detail { region, category } => {
                format!("{} in {}", category.title(), region.name)
            }
        }
    }

    /// Entries listed in the overview, in display order
    pub fn categories(&self) -> Vec<&CategoryDetail> {
        match self {
            PanelView::Overview { region } => region.categories.iter().collect(),
            _ => Vec::new(),
        }
    }

    pub fn detail(&self) -> Option<&CategoryDetail> {
        match self {
            PanelView::Detail { region, category } => Some(region.category(*category)),
            _ => None,
        }
    }

    /// Label of the back action in detail view
    pub fn back_label(&self) -> Option<String> {
        match self {
            PanelView::Detail { region, .. } => Some(format!("Back to {}", region.name)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::dataset;
    use crate::shared::region_map::interaction::ReselectPolicy;

    #[test]
    fn test_idle_without_selection() {
        let mut state = InteractionState::default();
        assert_eq!(PanelView::from_state(&state), PanelView::Idle);
        assert_eq!(PanelView::from_state(&state).heading(), IDLE_TITLE);

        // Category without a region is still idle
        state.select_category(CategoryKind::Tourism);
        assert_eq!(PanelView::from_state(&state), PanelView::Idle);
    }

    #[test]
    fn test_overview_detail_back() {
        let bali = *dataset::find("IDBA").unwrap();
        let mut state = InteractionState::default();

        state.select(bali, ReselectPolicy::Reconfirm);
        let overview = PanelView::from_state(&state);
        assert_eq!(overview.heading(), "Discover Bali");
        let titles: Vec<_> = overview.categories().iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Tourism", "Art & Culture", "Culinary"]);
        assert!(overview.detail().is_none());

        state.select_category(CategoryKind::Culinary);
        let detail = PanelView::from_state(&state);
        assert_eq!(detail.heading(), "Culinary in Bali");
        assert_eq!(detail.back_label().as_deref(), Some("Back to Bali"));
        let content = detail.detail().unwrap();
        assert_eq!(content.kind, CategoryKind::Culinary);
        assert!(!content.items.is_empty());
        assert!(detail.categories().is_empty());

        state.back_to_overview();
        assert_eq!(PanelView::from_state(&state), PanelView::Overview { region: bali });
    }

    #[test]
    fn test_new_region_returns_to_overview() {
        let bali = *dataset::find("IDBA").unwrap();
        let jakarta = *dataset::find("IDJK").unwrap();
        let mut state = InteractionState::default();

        state.select(bali, ReselectPolicy::Reconfirm);
        state.select_category(CategoryKind::ArtCulture);
        state.select(jakarta, ReselectPolicy::Reconfirm);

        assert_eq!(
            PanelView::from_state(&state),
            PanelView::Overview { region: jakarta }
        );
    }
}
