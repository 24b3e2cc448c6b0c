//! Interaction State Controller.
//!
//! `InteractionState` holds hovered / selected / drilled-in category and the
//! transitions between them. Hosts own the state and expose it to the binder
//! through [`InteractionSink`], so handler closures never capture ambient
//! state of their own.

use crate::domain::a001_region::{CategoryKind, Region, RegionId};
use std::cell::RefCell;
use std::rc::Rc;

/// What clicking the already-selected region does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReselectPolicy {
    /// Selection is re-confirmed, drill-down is reset
    #[default]
    Reconfirm,
    /// Selection is cleared
    Toggle,
}

/// Visual preset a drawable should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Base,
    Hovered,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hovered: Option<RegionId>,
    pub selected: Option<Region>,
    pub selected_category: Option<CategoryKind>,
}

impl InteractionState {
    pub fn set_hovered(&mut self, id: Option<RegionId>) {
        self.hovered = id;
    }

    pub fn clear_hovered(&mut self) {
        self.set_hovered(None);
    }

    /// Select `region`; any category drill-down is always reset.
    pub fn select(&mut self, region: Region, policy: ReselectPolicy) {
        let same = self.selected_id() == Some(region.id);
        self.selected_category = None;
        if same && policy == ReselectPolicy::Toggle {
            self.selected = None;
        } else {
            self.selected = Some(region);
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.selected_category = None;
    }

    /// Drill into a category. Ignored while nothing is selected.
    pub fn select_category(&mut self, kind: CategoryKind) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.selected_category = Some(kind);
        true
    }

    pub fn back_to_overview(&mut self) {
        self.selected_category = None;
    }

    pub fn selected_id(&self) -> Option<RegionId> {
        self.selected.map(|region| region.id)
    }

    /// Selected takes precedence over hovered.
    pub fn emphasis(&self, id: &str) -> Emphasis {
        if self.selected_id() == Some(id) {
            Emphasis::Selected
        } else if self.hovered == Some(id) {
            Emphasis::Hovered
        } else {
            Emphasis::Base
        }
    }
}

/// Receiver of the interactions the binder's handlers report.
pub trait InteractionSink {
    fn set_hovered(&self, id: Option<RegionId>);

    fn select(&self, region: Region);

    fn clear_hovered(&self) {
        self.set_hovered(None);
    }
}

/// Shared, non-reactive controller for single-threaded hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct SharedInteraction {
    state: Rc<RefCell<InteractionState>>,
    policy: ReselectPolicy,
}

impl SharedInteraction {
    pub fn new(policy: ReselectPolicy) -> Self {
        Self {
            state: Rc::new(RefCell::new(InteractionState::default())),
            policy,
        }
    }

    pub fn snapshot(&self) -> InteractionState {
        *self.state.borrow()
    }

    pub fn update(&self, f: impl FnOnce(&mut InteractionState)) {
        f(&mut self.state.borrow_mut());
    }
}

impl InteractionSink for SharedInteraction {
    fn set_hovered(&self, id: Option<RegionId>) {
        self.state.borrow_mut().set_hovered(id);
    }

    fn select(&self, region: Region) {
        self.state.borrow_mut().select(region, self.policy);
    }
}

/// Discards every interaction; used for headless coverage checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl InteractionSink for NoopSink {
    fn set_hovered(&self, _id: Option<RegionId>) {}

    fn select(&self, _region: Region) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::dataset::bare_region;

    const BALI: Region = bare_region("BA", "Bali");
    const JAKARTA: Region = bare_region("JK", "Jakarta");

    #[test]
    fn test_select_resets_category() {
        let mut state = InteractionState::default();
        state.select(BALI, ReselectPolicy::Reconfirm);
        assert!(state.select_category(CategoryKind::Culinary));
        state.select(JAKARTA, ReselectPolicy::Reconfirm);
        assert_eq!(state.selected, Some(JAKARTA));
        assert_eq!(state.selected_category, None);
    }

    #[test]
    fn test_reselect_reconfirms() {
        let mut state = InteractionState::default();
        state.select(BALI, ReselectPolicy::Reconfirm);
        state.select_category(CategoryKind::Tourism);
        state.select(BALI, ReselectPolicy::Reconfirm);
        assert_eq!(state.selected, Some(BALI));
        assert_eq!(state.selected_category, None);
    }

    #[test]
    fn test_reselect_toggles() {
        let mut state = InteractionState::default();
        state.select(BALI, ReselectPolicy::Toggle);
        state.select(BALI, ReselectPolicy::Toggle);
        assert_eq!(state.selected, None);
        state.select(BALI, ReselectPolicy::Toggle);
        state.select(JAKARTA, ReselectPolicy::Toggle);
        assert_eq!(state.selected, Some(JAKARTA));
    }

    #[test]
    fn test_category_needs_selection() {
        let mut state = InteractionState::default();
        assert!(!state.select_category(CategoryKind::Tourism));
        assert_eq!(state.selected_category, None);
    }

    #[test]
    fn test_emphasis_precedence() {
        let mut state = InteractionState::default();
        state.select(BALI, ReselectPolicy::Reconfirm);
        state.set_hovered(Some("BA"));
        assert_eq!(state.emphasis("BA"), Emphasis::Selected);

        state.set_hovered(Some("JK"));
        assert_eq!(state.emphasis("JK"), Emphasis::Hovered);
        assert_eq!(state.emphasis("XX"), Emphasis::Base);
    }

    #[test]
    fn test_shared_interaction_sink() {
        let shared = SharedInteraction::new(ReselectPolicy::Reconfirm);
        let sink = shared.clone();
        sink.set_hovered(Some("BA"));
        sink.select(BALI);
        sink.clear_hovered();

        let state = shared.snapshot();
        assert_eq!(state.hovered, None);
        assert_eq!(state.selected_id(), Some("BA"));
    }
}
