pub mod info_panel;
pub mod interaction;
pub mod map;
pub mod section;

pub use section::InteractiveMapSection;
