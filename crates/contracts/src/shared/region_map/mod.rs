//! Interactive region map core.
//!
//! Data flow: dataset + loaded markup -> [`binder::MapBinder`] builds the live
//! identifier-to-drawable index -> pointer handlers report to an
//! [`interaction::InteractionSink`] -> the host re-runs
//! [`binder::MapBinder::reconcile`] and re-renders the info panel from
//! [`info_panel::PanelView`].

pub mod binder;
pub mod coverage;
pub mod document;
pub mod error;
pub mod info_panel;
pub mod interaction;
pub mod loader;
pub mod style;
pub mod surface;
pub mod viewport;

pub use binder::{BindStatus, Binding, MapBinder};
pub use error::MapError;
pub use interaction::{InteractionSink, InteractionState, ReselectPolicy};
pub use surface::{DrawableSurface, PointerKind};
