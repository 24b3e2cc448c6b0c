//! Retained-mode visual tree the map is drawn into.
//!
//! The binder and the style reconciler only ever touch the loaded vector
//! document through this trait. The arena document in [`super::document`]
//! implements it for tests and headless hosts; the web client implements it
//! over the live DOM.

use std::rc::Rc;

/// Pointer interactions a drawable can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Enter,
    Leave,
    Click,
}

impl PointerKind {
    pub fn all() -> [PointerKind; 3] {
        [PointerKind::Enter, PointerKind::Leave, PointerKind::Click]
    }

    /// DOM event name
    pub fn event_name(&self) -> &'static str {
        match self {
            PointerKind::Enter => "mouseenter",
            PointerKind::Leave => "mouseleave",
            PointerKind::Click => "click",
        }
    }
}

pub type Handler = Rc<dyn Fn()>;

pub trait DrawableSurface {
    /// Handle on an element of the tree
    type Element: Clone;
    /// Token returned by `attach`, consumed by `detach`
    type Listener;

    fn find_by_id(&self, id: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// First direct child with the given tag name
    fn child_by_tag(&self, element: &Self::Element, tag: &str) -> Option<Self::Element>;

    fn append_child(&mut self, element: &Self::Element, tag: &str) -> Option<Self::Element>;

    fn set_text(&mut self, element: &Self::Element, text: &str);

    fn attach(
        &mut self,
        element: &Self::Element,
        kind: PointerKind,
        handler: Handler,
    ) -> Option<Self::Listener>;

    fn detach(&mut self, element: &Self::Element, listener: Self::Listener);
}
