//! [`DrawableSurface`] over the live DOM.
//!
//! The loaded markup is injected into a container and every lookup is scoped
//! to the resulting `<svg>` root, so other ids on the page are never touched.

use contracts::shared::region_map::surface::Handler;
use contracts::shared::region_map::{DrawableSurface, MapError, PointerKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, SvgElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct DomListener {
    kind: PointerKind,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct DomSurface {
    root: Element,
}

impl DomSurface {
    /// Replace the container's content with `markup` and wrap the injected `<svg>`.
    pub fn inject(container: &Element, markup: &str) -> Result<Self, MapError> {
        container.set_inner_html(markup);
        let root = container
            .query_selector("svg")
            .ok()
            .flatten()
            .ok_or_else(|| {
                MapError::DocumentParse("SVG element not found after injection.".to_string())
            })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn id_selector(id: &str) -> String {
    format!(
        "[id=\"{}\"]",
        id.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

impl DrawableSurface for DomSurface {
    type Element = Element;
    type Listener = DomListener;

    fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.root.id() == id {
            return Some(self.root.clone());
        }
        self.root.query_selector(&id_selector(id)).ok().flatten()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        if let Err(e) = element.set_attribute(name, value) {
            log::warn!("Failed to set {} on map element: {:?}", name, e);
        }
    }

    fn set_style(&mut self, element: &Element, property: &str, value: &str) {
        let style = if let Some(svg) = element.dyn_ref::<SvgElement>() {
            svg.style()
        } else if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style()
        } else {
            return;
        };
        let _ = style.set_property(property, value);
    }

    fn child_by_tag(&self, element: &Element, tag: &str) -> Option<Element> {
        element
            .query_selector(&format!(":scope > {}", tag))
            .ok()
            .flatten()
    }

    fn append_child(&mut self, element: &Element, tag: &str) -> Option<Element> {
        let document = element.owner_document()?;
        let child = document.create_element_ns(Some(SVG_NS), tag).ok()?;
        element.append_child(&child).ok()?;
        Some(child)
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn attach(&mut self, element: &Element, kind: PointerKind, handler: Handler) -> Option<DomListener> {
        let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        match element.add_event_listener_with_callback(kind.event_name(), closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(DomListener { kind, closure }),
            Err(e) => {
                log::warn!("Failed to attach {} listener: {:?}", kind.event_name(), e);
                None
            }
        }
    }

    fn detach(&mut self, element: &Element, listener: DomListener) {
        let _ = element.remove_event_listener_with_callback(
            listener.kind.event_name(),
            listener.closure.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_selector() {
        assert_eq!(id_selector("IDBA"), r#"[id="IDBA"]"#);
        assert_eq!(id_selector(r#"a"b"#), r#"[id="a\"b"]"#);
        assert_eq!(id_selector(r"a\b"), r#"[id="a\\b"]"#);
        assert_eq!(id_selector(r#"\""#), r#"[id="\\\""]"#);
    }
}
