//! Style Reconciler: paints every bound drawable from the interaction state.

use super::binder::Binding;
use super::interaction::{Emphasis, InteractionState};
use super::surface::DrawableSurface;

/// Fill / stroke / stroke-width triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapPalette {
    pub base: StylePreset,
    pub hovered: StylePreset,
    pub selected: StylePreset,
    /// CSS transition applied to every drawable at bind time
    pub transition: &'static str,
}

impl Default for MapPalette {
    fn default() -> Self {
        Self {
            base: StylePreset {
                fill: "hsl(151, 35.80%, 84.10%)",
                stroke: "hsl(35, 20%, 70%)",
                stroke_width: "0.3px",
            },
            hovered: StylePreset {
                fill: "hsl(130, 35%, 80%)",
                stroke: "hsl(130, 25%, 55%)",
                stroke_width: "0.45px",
            },
            selected: StylePreset {
                fill: "hsl(147, 56%, 46%)",
                stroke: "hsl(147, 50%, 30%)",
                stroke_width: "0.6px",
            },
            transition: "fill 150ms ease-out, stroke 150ms ease-out, stroke-width 150ms ease-out",
        }
    }
}

impl MapPalette {
    pub fn preset(&self, emphasis: Emphasis) -> &StylePreset {
        match emphasis {
            Emphasis::Base => &self.base,
            Emphasis::Hovered => &self.hovered,
            Emphasis::Selected => &self.selected,
        }
    }
}

/// Apply the preset for each binding. Attributes already holding the target
/// value are left untouched; returns the number of attribute writes.
pub fn reconcile<S: DrawableSurface>(
    surface: &mut S,
    bindings: &[Binding<S::Element>],
    state: &InteractionState,
    palette: &MapPalette,
) -> usize {
    let mut writes = 0;
    for binding in bindings {
        let preset = palette.preset(state.emphasis(binding.region.id));
        for (name, value) in [
            ("fill", preset.fill),
            ("stroke", preset.stroke),
            ("stroke-width", preset.stroke_width),
        ] {
            if surface.attribute(&binding.element, name).as_deref() != Some(value) {
                surface.set_attribute(&binding.element, name, value);
                writes += 1;
            }
        }
    }
    writes
}
