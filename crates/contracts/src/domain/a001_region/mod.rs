pub mod aggregate;
pub mod dataset;

pub use aggregate::{
    CategoryDetail, CategoryItem, CategoryKind, CategoryTheme, Region, RegionCategories,
    RegionId, RegionSummary,
};
