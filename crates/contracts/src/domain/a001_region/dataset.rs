use super::aggregate::{
    CategoryDetail, CategoryItem, CategoryKind, Region, RegionCategories, RegionId,
};
use std::collections::HashSet;

include!(concat!(env!("OUT_DIR"), "/regions_gen.rs"));

/// The compiled-in province table.
pub fn all() -> &'static [Region] {
    REGIONS
}

pub fn find(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.id == id)
}

/// Returns the first identifier that appears more than once, if any.
pub fn first_duplicate(dataset: &[Region]) -> Option<RegionId> {
    let mut seen = HashSet::new();
    dataset
        .iter()
        .find(|region| !seen.insert(region.id))
        .map(|region| region.id)
}

/// Region with empty categories, for hosts that only need id and name.
pub const fn bare_region(id: &'static str, name: &'static str) -> Region {
    const fn empty(kind: CategoryKind, title: &'static str) -> CategoryDetail {
        CategoryDetail {
            kind,
            title,
            description: "",
            introduction: "",
            items: &[] as &[CategoryItem],
        }
    }

    Region {
        id,
        name,
        categories: RegionCategories {
            tourism: empty(CategoryKind::Tourism, "Tourism"),
            art_culture: empty(CategoryKind::ArtCulture, "Art & Culture"),
            culinary: empty(CategoryKind::Culinary, "Culinary"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_has_all_provinces() {
        assert_eq!(all().len(), 34);
        assert!(first_duplicate(all()).is_none());
    }

    #[test]
    fn test_dataset_is_ordered_by_name() {
        let names: Vec<_> = all().iter().map(|r| r.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_find_by_id() {
        let bali = find("IDBA").expect("Bali is in the dataset");
        assert_eq!(bali.name, "Bali");
        assert_eq!(bali.categories.tourism.kind, CategoryKind::Tourism);
        assert!(!bali.categories.tourism.items.is_empty());
        assert!(find("XX").is_none());
    }

    #[test]
    fn test_placeholder_content_for_uncurated_province() {
        let riau_islands = find("IDKR").unwrap();
        let culinary = riau_islands.category(CategoryKind::Culinary);
        assert_eq!(culinary.title, "Culinary");
        assert_eq!(
            culinary.description,
            "Taste the local flavors of Kepulauan Riau."
        );
        assert_eq!(culinary.items.len(), 2);
        assert_eq!(culinary.items[0].name, "Iconic Culinary Spot in Kepulauan Riau");
        assert_eq!(
            riau_islands.category(CategoryKind::ArtCulture).items[0].image,
            "/map-images/placeholder-art-&-culture.jpeg"
        );
    }

    #[test]
    fn test_every_category_has_items() {
        for region in all() {
            for category in region.categories.iter() {
                assert!(!category.items.is_empty(), "{} / {}", region.id, category.title);
            }
        }
    }

    #[test]
    fn test_first_duplicate() {
        let dataset = [
            bare_region("BA", "Bali"),
            bare_region("JK", "Jakarta"),
            bare_region("BA", "Bali again"),
        ];
        assert_eq!(first_duplicate(&dataset), Some("BA"));
        assert_eq!(first_duplicate(&dataset[..2]), None);
    }
}
