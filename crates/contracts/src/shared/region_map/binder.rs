//! Map Binder: ties dataset regions to drawables of a loaded vector document.
//!
//! Each bind pass first detaches every handler the previous pass attached,
//! then looks every region up by identifier, attaches enter / leave / click
//! handlers that report to the injected [`InteractionSink`], sets the hover
//! hints and writes the region name into a `<title>` tooltip. Attach and
//! detach are paired per drawable, never via marker flags on the element.

use super::error::MapError;
use super::interaction::{InteractionSink, InteractionState};
use super::style::{self, MapPalette};
use super::surface::{DrawableSurface, Handler, PointerKind};
use crate::domain::a001_region::{Region, RegionId};
use std::collections::HashSet;
use std::rc::Rc;

/// Runtime association of a region with its drawable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<E> {
    pub region: Region,
    pub element: E,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BindStatus {
    #[default]
    Unbound,
    /// Every region matched a drawable
    Ready,
    /// Matched regions are interactive, the listed ones are not
    Partial { missing: Vec<RegionId> },
    /// Nothing could be bound; the map is unusable
    NoRegionsMatched,
}

impl BindStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, BindStatus::Ready)
    }

    /// User-facing warning for a degraded map.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            BindStatus::Partial { .. } => Some(
                "Some province paths could not be found. Interactions may be incomplete. \
                 Check console warnings for missing IDs.",
            ),
            _ => None,
        }
    }

    pub fn missing(&self) -> &[RegionId] {
        match self {
            BindStatus::Partial { missing } => missing,
            _ => &[],
        }
    }
}

struct Attached<S: DrawableSurface> {
    element: S::Element,
    listeners: Vec<S::Listener>,
}

/// Sole writer of the bound document: owns the surface, the live
/// identifier-to-drawable index and the attached listeners.
pub struct MapBinder<S: DrawableSurface> {
    surface: S,
    palette: MapPalette,
    bindings: Vec<Binding<S::Element>>,
    attached: Vec<Attached<S>>,
    status: BindStatus,
}

impl<S: DrawableSurface> MapBinder<S> {
    pub fn new(surface: S) -> Self {
        Self::with_palette(surface, MapPalette::default())
    }

    pub fn with_palette(surface: S, palette: MapPalette) -> Self {
        Self {
            surface,
            palette,
            bindings: Vec::new(),
            attached: Vec::new(),
            status: BindStatus::Unbound,
        }
    }

    /// Bind `dataset` against the document. Partial matches are `Ok` with a
    /// [`BindStatus::Partial`]; zero matches is [`MapError::NoRegionsMatched`].
    pub fn bind<I>(&mut self, dataset: &[Region], sink: I) -> Result<BindStatus, MapError>
    where
        I: InteractionSink + Clone + 'static,
    {
        self.unbind();

        let mut seen: HashSet<RegionId> = HashSet::new();
        let mut missing = Vec::new();

        for region in dataset {
            if !seen.insert(region.id) {
                log::warn!("Duplicate region id in dataset ignored: {}", region.id);
                continue;
            }

            let Some(element) = self.surface.find_by_id(region.id) else {
                log::warn!(
                    "Path element not found for province ID in SVG: {} ({})",
                    region.id,
                    region.name
                );
                missing.push(region.id);
                continue;
            };

            let listeners = self.attach_handlers(&element, region, &sink);
            self.surface
                .set_style(&element, "transition", self.palette.transition);
            self.surface.set_style(&element, "cursor", "pointer");
            self.set_tooltip(&element, region.name);

            self.attached.push(Attached {
                element: element.clone(),
                listeners,
            });
            self.bindings.push(Binding {
                region: *region,
                element,
            });
        }

        self.status = if self.bindings.is_empty() {
            BindStatus::NoRegionsMatched
        } else if missing.is_empty() {
            BindStatus::Ready
        } else {
            BindStatus::Partial { missing }
        };

        match &self.status {
            BindStatus::NoRegionsMatched => {
                log::error!(
                    "No regions matched the vector document ({} in dataset)",
                    dataset.len()
                );
                Err(MapError::NoRegionsMatched)
            }
            BindStatus::Partial { missing } => {
                log::warn!(
                    "Bound {} of {} regions; unmatched: {}",
                    self.bindings.len(),
                    self.bindings.len() + missing.len(),
                    missing.join(", ")
                );
                Ok(self.status.clone())
            }
            _ => {
                log::debug!("Bound all {} regions", self.bindings.len());
                Ok(self.status.clone())
            }
        }
    }

    fn attach_handlers<I>(&mut self, element: &S::Element, region: &Region, sink: &I) -> Vec<S::Listener>
    where
        I: InteractionSink + Clone + 'static,
    {
        let enter: Handler = {
            let sink = sink.clone();
            let id = region.id;
            Rc::new(move || sink.set_hovered(Some(id)))
        };
        let leave: Handler = {
            let sink = sink.clone();
            Rc::new(move || sink.clear_hovered())
        };
        let click: Handler = {
            let sink = sink.clone();
            let region = *region;
            Rc::new(move || sink.select(region))
        };

        [
            (PointerKind::Enter, enter),
            (PointerKind::Leave, leave),
            (PointerKind::Click, click),
        ]
        .into_iter()
        .filter_map(|(kind, handler)| self.surface.attach(element, kind, handler))
        .collect()
    }

    fn set_tooltip(&mut self, element: &S::Element, name: &str) {
        let title = match self.surface.child_by_tag(element, "title") {
            Some(title) => Some(title),
            None => self.surface.append_child(element, "title"),
        };
        if let Some(title) = title {
            self.surface.set_text(&title, name);
        }
    }

    /// Detach every handler from the drawables it was attached to and drop
    /// the live index.
    pub fn unbind(&mut self) {
        for attached in self.attached.drain(..) {
            for listener in attached.listeners {
                self.surface.detach(&attached.element, listener);
            }
        }
        self.bindings.clear();
        self.status = BindStatus::Unbound;
    }

    /// Repaint all bound drawables. Does nothing until something is bound.
    pub fn reconcile(&mut self, state: &InteractionState) -> usize {
        if self.bindings.is_empty() {
            return 0;
        }
        style::reconcile(&mut self.surface, &self.bindings, state, &self.palette)
    }

    pub fn status(&self) -> &BindStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    /// True when at least one region is bound, even if others are missing.
    pub fn is_interactive(&self) -> bool {
        !self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[Binding<S::Element>] {
        &self.bindings
    }

    pub fn element(&self, id: &str) -> Option<&S::Element> {
        self.bindings
            .iter()
            .find(|binding| binding.region.id == id)
            .map(|binding| &binding.element)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn palette(&self) -> &MapPalette {
        &self.palette
    }
}

impl<S: DrawableSurface> Drop for MapBinder<S> {
    fn drop(&mut self) {
        self.unbind();
    }
}
