use serde::Serialize;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a province. Must match the `id` attribute of its drawable in
/// the vector map exactly.
pub type RegionId = &'static str;

// ============================================================================
// Category kinds
// ============================================================================

/// The three content categories every province carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Tourism,
    ArtCulture,
    Culinary,
}

impl CategoryKind {
    pub fn all() -> [CategoryKind; 3] {
        [
            CategoryKind::Tourism,
            CategoryKind::ArtCulture,
            CategoryKind::Culinary,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            CategoryKind::Tourism => "Tourism",
            CategoryKind::ArtCulture => "Art & Culture",
            CategoryKind::Culinary => "Culinary",
        }
    }

    /// Key used in query strings and element ids.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryKind::Tourism => "tourism",
            CategoryKind::ArtCulture => "art_culture",
            CategoryKind::Culinary => "culinary",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.key() == key)
    }

    pub fn theme(&self) -> CategoryTheme {
        match self {
            CategoryKind::Tourism => CategoryTheme {
                accent: "sky",
                icon: "camera",
            },
            CategoryKind::ArtCulture => CategoryTheme {
                accent: "purple",
                icon: "palette",
            },
            CategoryKind::Culinary => CategoryTheme {
                accent: "orange",
                icon: "utensils",
            },
        }
    }
}

/// Presentation tokens for a category: accent colour family and icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTheme {
    pub accent: &'static str,
    pub icon: &'static str,
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryItem {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// Content of one category for one province
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDetail {
    pub kind: CategoryKind,
    pub title: &'static str,
    /// One-liner shown in the overview list
    pub description: &'static str,
    pub introduction: &'static str,
    pub items: &'static [CategoryItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionCategories {
    pub tourism: CategoryDetail,
    pub art_culture: CategoryDetail,
    pub culinary: CategoryDetail,
}

impl RegionCategories {
    pub fn get(&self, kind: CategoryKind) -> &CategoryDetail {
        match kind {
            CategoryKind::Tourism => &self.tourism,
            CategoryKind::ArtCulture => &self.art_culture,
            CategoryKind::Culinary => &self.culinary,
        }
    }

    /// Categories in display order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDetail> {
        [&self.tourism, &self.art_culture, &self.culinary].into_iter()
    }
}

/// A province on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub name: &'static str,
    pub categories: RegionCategories,
}

impl Region {
    pub fn category(&self, kind: CategoryKind) -> &CategoryDetail {
        self.categories.get(kind)
    }

    pub fn summary(&self) -> RegionSummary {
        RegionSummary {
            id: self.id,
            name: self.name,
        }
    }
}

/// Lightweight list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub id: RegionId,
    pub name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key_round_trip() {
        for kind in CategoryKind::all() {
            assert_eq!(CategoryKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(CategoryKind::from_key("shopping"), None);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&CategoryKind::ArtCulture).unwrap();
        assert_eq!(json, "\"art_culture\"");
    }
}
