//! Build script for generating the static region table from regions.json
//!
//! Reads `src/domain/a001_region/regions.json`, validates it and writes
//! `regions_gen.rs` into `OUT_DIR` as a `&'static [Region]` constant.
//! Provinces without curated content get generated placeholder categories.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const REGIONS_JSON: &str = "src/domain/a001_region/regions.json";

fn main() {
    println!("cargo:rerun-if-changed={}", REGIONS_JSON);

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is not set");
    let output_rs = Path::new(&out_dir).join("regions_gen.rs");

    if let Err(e) = generate_regions(Path::new(REGIONS_JSON), &output_rs) {
        panic!("Failed to generate region table from {}: {}", REGIONS_JSON, e);
    }
}

// ============================================================================
// JSON Schema Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct DatasetJson {
    regions: Vec<RegionJson>,
}

#[derive(Debug, Deserialize)]
struct RegionJson {
    id: String,
    name: String,
    categories: Option<CategoriesJson>,
}

#[derive(Debug, Deserialize)]
struct CategoriesJson {
    tourism: CategoryJson,
    art_culture: CategoryJson,
    culinary: CategoryJson,
}

#[derive(Debug, Clone, Deserialize)]
struct CategoryJson {
    description: String,
    introduction: String,
    items: Vec<ItemJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ItemJson {
    name: String,
    image: String,
    description: String,
}

/// Category kinds in display order: (enum variant, title).
const KINDS: [(&str, &str); 3] = [
    ("Tourism", "Tourism"),
    ("ArtCulture", "Art & Culture"),
    ("Culinary", "Culinary"),
];

// ============================================================================
// Validation
// ============================================================================

fn validate(dataset: &DatasetJson) -> Result<(), String> {
    let mut seen = HashSet::new();
    for region in &dataset.regions {
        if region.id.trim().is_empty() {
            return Err(format!("region `{}` has an empty id", region.name));
        }
        if region.name.trim().is_empty() {
            return Err(format!("region `{}` has an empty name", region.id));
        }
        if !seen.insert(region.id.as_str()) {
            return Err(format!("duplicate region id `{}`", region.id));
        }
    }
    Ok(())
}

// ============================================================================
// Placeholder content
// ============================================================================

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn placeholder(province: &str, kind_index: usize) -> CategoryJson {
    let title = KINDS[kind_index].1;
    let lower = title.to_lowercase();
    let description = match kind_index {
        0 => format!("Explore exciting destinations in {}.", province),
        1 => format!("Discover the unique culture of {}.", province),
        _ => format!("Taste the local flavors of {}.", province),
    };

    CategoryJson {
        description,
        introduction: format!(
            "Discover the rich {} of {}. We are continuously curating the best experiences. \
             Detailed information for this section is coming very soon!",
            lower, province
        ),
        items: vec![
            ItemJson {
                name: format!("Iconic {} Spot in {}", title, province),
                image: format!("/map-images/placeholder-{}.jpeg", slug(title)),
                description: format!(
                    "Explore the renowned {} attractions that {} has to offer. \
                     Full details will be updated shortly.",
                    lower, province
                ),
            },
            ItemJson {
                name: format!("Hidden Gem for {} in {}", title, province),
                image: "/map-images/placeholder-general-2.jpeg".to_string(),
                description: format!(
                    "Uncover unique {} experiences in {}. \
                     We are working on bringing you more information.",
                    lower, province
                ),
            },
        ],
    }
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_regions(
    json_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let dataset: DatasetJson = serde_json::from_str(&json_content)?;
    validate(&dataset)?;

    fs::write(output_path, generate_rust_code(&dataset))?;
    Ok(())
}

fn generate_rust_code(dataset: &DatasetJson) -> String {
    let mut code = String::new();

    code.push_str(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM regions.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str("/// Every province on the map, ordered by display name.\n");
    code.push_str("pub static REGIONS: &[Region] = &[\n");
    for region in &dataset.regions {
        code.push_str(&generate_region(region));
    }
    code.push_str("];\n");

    code
}

fn generate_region(region: &RegionJson) -> String {
    let categories: Vec<CategoryJson> = match &region.categories {
        Some(c) => vec![
            c.tourism.clone(),
            c.art_culture.clone(),
            c.culinary.clone(),
        ],
        None => (0..KINDS.len())
            .map(|i| placeholder(&region.name, i))
            .collect(),
    };

    let fields = ["tourism", "art_culture", "culinary"];
    let mut body = String::new();
    for (i, category) in categories.iter().enumerate() {
        body.push_str(&format!(
            "            {}: {},\n",
            fields[i],
            generate_category(i, category)
        ));
    }

    format!(
        "    Region {{\n\
         \x20       id: {:?},\n\
         \x20       name: {:?},\n\
         \x20       categories: RegionCategories {{\n\
         {}\
         \x20       }},\n\
         \x20   }},\n",
        region.id, region.name, body
    )
}

fn generate_category(kind_index: usize, category: &CategoryJson) -> String {
    let (variant, title) = KINDS[kind_index];
    let items = category
        .items
        .iter()
        .map(|item| {
            format!(
                "CategoryItem {{ name: {:?}, image: {:?}, description: {:?} }}",
                item.name, item.image, item.description
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "CategoryDetail {{ kind: CategoryKind::{}, title: {:?}, description: {:?}, \
         introduction: {:?}, items: &[{}] }}",
        variant, title, category.description, category.introduction, items
    )
}
