//! Arena-backed vector document.
//!
//! The markup is parsed once with `roxmltree` and copied into a flat arena of
//! nodes addressed by [`NodeId`]. Bindings are plain indices into this arena,
//! so the document can be mutated attribute-by-attribute without shared
//! ownership of individual nodes.

use super::error::MapError;
use super::surface::{DrawableSurface, Handler, PointerKind};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            styles: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }
}

struct Registered {
    id: ListenerId,
    kind: PointerKind,
    handler: Handler,
}

pub struct SvgDocument {
    nodes: Vec<Node>,
    ids: HashMap<String, NodeId>,
    listeners: HashMap<NodeId, Vec<Registered>>,
    next_listener: u64,
}

impl fmt::Debug for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgDocument")
            .field("nodes", &self.nodes.len())
            .field("ids", &self.ids.len())
            .field("listeners", &self.listener_total())
            .finish()
    }
}

impl SvgDocument {
    /// Parse vector markup. The root element must be `<svg>`.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        if text.trim().is_empty() {
            return Err(MapError::DocumentParse("SVG document is empty.".to_string()));
        }

        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = true;
        let parsed = roxmltree::Document::parse_with_options(text, options)
            .map_err(|e| MapError::DocumentParse(format!("Invalid SVG document: {}", e)))?;

        let root = parsed.root_element();
        if root.tag_name().name() != "svg" {
            return Err(MapError::DocumentParse(format!(
                "SVG element not found: root element is <{}>.",
                root.tag_name().name()
            )));
        }

        let mut document = SvgDocument {
            nodes: Vec::new(),
            ids: HashMap::new(),
            listeners: HashMap::new(),
            next_listener: 0,
        };
        document.copy_subtree(root);
        Ok(document)
    }

    fn copy_subtree(&mut self, source: roxmltree::Node<'_, '_>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(source.tag_name().name());
        for attribute in source.attributes() {
            node.attributes
                .push((attribute.name().to_string(), attribute.value().to_string()));
        }

        let text: String = source
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect();
        if !text.trim().is_empty() {
            node.text = Some(text);
        }
        self.nodes.push(node);

        // getElementById semantics: first element in document order wins
        if let Some(element_id) = source.attribute("id") {
            self.ids.entry(element_id.to_string()).or_insert(id);
        }

        for child in source.children().filter(|child| child.is_element()) {
            let child_id = self.copy_subtree(child);
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag.as_str())
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| n.text.as_deref())
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| {
            n.styles
                .iter()
                .find(|(name, _)| name == property)
                .map(|(_, value)| value.as_str())
        })
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Every `id` attribute present in the document, in no particular order.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, Vec::len)
    }

    pub fn listener_total(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Fire every handler of `kind` attached to `node`. Returns how many ran.
    pub fn dispatch(&self, node: NodeId, kind: PointerKind) -> usize {
        let handlers: Vec<Handler> = self
            .listeners
            .get(&node)
            .map(|registered| {
                registered
                    .iter()
                    .filter(|r| r.kind == kind)
                    .map(|r| r.handler.clone())
                    .collect()
            })
            .unwrap_or_default();

        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn dispatch_by_id(&self, element_id: &str, kind: PointerKind) -> usize {
        match self.ids.get(element_id) {
            Some(node) => self.dispatch(*node, kind),
            None => 0,
        }
    }
}

impl DrawableSurface for SvgDocument {
    type Element = NodeId;
    type Listener = ListenerId;

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.get(element.0).and_then(|n| {
            n.attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        })
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        match node.styles.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.styles.push((property.to_string(), value.to_string())),
        }
    }

    fn child_by_tag(&self, element: &NodeId, tag: &str) -> Option<NodeId> {
        self.children(*element)
            .iter()
            .copied()
            .find(|child| self.tag(*child) == Some(tag))
    }

    fn append_child(&mut self, element: &NodeId, tag: &str) -> Option<NodeId> {
        if element.0 >= self.nodes.len() {
            return None;
        }
        let child = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        self.nodes[element.0].children.push(child);
        Some(child)
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.text = Some(text.to_string());
        }
    }

    fn attach(&mut self, element: &NodeId, kind: PointerKind, handler: Handler) -> Option<ListenerId> {
        if element.0 >= self.nodes.len() {
            return None;
        }
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners
            .entry(*element)
            .or_default()
            .push(Registered { id, kind, handler });
        Some(id)
    }

    fn detach(&mut self, element: &NodeId, listener: ListenerId) {
        if let Some(registered) = self.listeners.get_mut(element) {
            registered.retain(|r| r.id != listener);
            if registered.is_empty() {
                self.listeners.remove(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">
  <g id="provinces">
    <path id="BA" d="M0 0L10 10Z"><title>Old</title></path>
    <path id="XX" d="M20 0L30 10Z"/>
    <path id="BA" d="M40 0L50 10Z"/>
  </g>
</svg>"#;

    #[test]
    fn test_parse_indexes_ids() {
        let doc = SvgDocument::parse(MAP).unwrap();
        let ba = doc.find_by_id("BA").unwrap();
        assert_eq!(doc.tag(ba), Some("path"));
        assert_eq!(doc.attribute(&ba, "d").as_deref(), Some("M0 0L10 10Z"));
        assert!(doc.find_by_id("JK").is_none());

        let mut ids: Vec<_> = doc.element_ids().collect();
        ids.sort();
        assert_eq!(ids, vec!["BA", "XX", "provinces"]);
    }

    #[test]
    fn test_title_text_is_kept() {
        let doc = SvgDocument::parse(MAP).unwrap();
        let ba = doc.find_by_id("BA").unwrap();
        let title = doc.child_by_tag(&ba, "title").unwrap();
        assert_eq!(doc.text(title), Some("Old"));
    }

    #[test]
    fn test_rejects_non_svg_root() {
        let err = SvgDocument::parse("<html><body/></html>").unwrap_err();
        assert!(matches!(err, MapError::DocumentParse(_)));
    }

    #[test]
    fn test_rejects_malformed_and_empty() {
        assert!(matches!(
            SvgDocument::parse("<svg><path></svg>"),
            Err(MapError::DocumentParse(_))
        ));
        assert!(matches!(
            SvgDocument::parse("   "),
            Err(MapError::DocumentParse(_))
        ));
    }

    #[test]
    fn test_attach_dispatch_detach() {
        let mut doc = SvgDocument::parse(MAP).unwrap();
        let ba = doc.find_by_id("BA").unwrap();
        let clicks = Rc::new(Cell::new(0));

        let counter = clicks.clone();
        let listener = doc
            .attach(&ba, PointerKind::Click, Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        assert_eq!(doc.dispatch(ba, PointerKind::Enter), 0);
        assert_eq!(doc.dispatch_by_id("BA", PointerKind::Click), 1);
        assert_eq!(clicks.get(), 1);

        doc.detach(&ba, listener);
        assert_eq!(doc.listener_count(ba), 0);
        assert_eq!(doc.dispatch(ba, PointerKind::Click), 0);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_set_attribute_and_append_child() {
        let mut doc = SvgDocument::parse(MAP).unwrap();
        let xx = doc.find_by_id("XX").unwrap();
        doc.set_attribute(&xx, "fill", "red");
        doc.set_attribute(&xx, "fill", "blue");
        assert_eq!(doc.attribute(&xx, "fill").as_deref(), Some("blue"));

        let title = doc.append_child(&xx, "title").unwrap();
        doc.set_text(&title, "Unknown");
        assert_eq!(doc.child_by_tag(&xx, "title"), Some(title));
        assert_eq!(doc.text(title), Some("Unknown"));
    }
}
