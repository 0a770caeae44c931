/// Catalog builder
///
/// Turns discovered asset maps into display records, sorts them into
/// keyword groups and assembles the showcase items shown in the Designs
/// grid. Built once at startup; nothing here can fail, missing assets
/// degrade to the hand-authored samples.

use super::data::{AssetRecord, ShowcaseItem, WorkGroup};
use super::discovery::{self, AssetMap, AssetSource};
use super::samples;

/// Category whose items are kept out of the Designs grid
pub const HIDDEN_CATEGORY: &str = "UI/UX";

/// Keyword in a brand asset's title or path that marks the preferred cover
pub const COVER_MARKER: &str = "whitelogo";

/// Case-insensitive "any of these keywords" matcher
#[derive(Debug, Clone, Copy)]
pub struct KeywordPattern(pub &'static [&'static str]);

impl KeywordPattern {
    pub fn is_match(&self, haystack: &str) -> bool {
        let haystack = haystack.to_lowercase();
        self.0
            .iter()
            .any(|keyword| haystack.contains(&keyword.to_lowercase()))
    }
}

/// A named group and the pattern its members' paths must match
#[derive(Debug, Clone, Copy)]
pub struct GroupRule {
    pub name: &'static str,
    pub pattern: KeywordPattern,
}

pub const CLOTH_DESIGNS: GroupRule = GroupRule {
    name: "Cloth Designs",
    pattern: KeywordPattern(&["cloth", "clothes", "apparel", "garment", "shirt", "tee"]),
};

pub const POSTERS: GroupRule = GroupRule {
    name: "Posters",
    pattern: KeywordPattern(&["poster", "posters", "print", "artboard", "flyer"]),
};

pub const FREELANCE: GroupRule = GroupRule {
    name: "Freelance",
    pattern: KeywordPattern(&["/freelance/"]),
};

pub const PERSONAL: GroupRule = GroupRule {
    name: "Personal",
    pattern: KeywordPattern(&["/personal/"]),
};

/// Derive a display title from an asset path
///
/// Takes the base name, drops the last extension, turns each run of `-`/`_`
/// into one space and capitalizes every whitespace-delimited word.
/// `fallback` stands in for a base name that leaves nothing to show.
pub fn derive_title(path: &str, fallback: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or("");
    let stem = strip_extension(base);

    let mut spaced = String::with_capacity(stem.len());
    let mut in_separator = false;
    for ch in stem.chars() {
        if ch == '-' || ch == '_' {
            if !in_separator {
                spaced.push(' ');
            }
            in_separator = true;
        } else {
            spaced.push(ch);
            in_separator = false;
        }
    }

    if spaced.trim().is_empty() {
        spaced = fallback.to_string();
    }

    capitalize_words(&spaced)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && !ch.is_whitespace() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

/// Convert every discovered asset into a record, in key order
pub fn records_from(assets: &AssetMap, fallback: &str) -> Vec<AssetRecord> {
    assets
        .iter()
        .map(|(path, image)| AssetRecord {
            title: derive_title(path, fallback),
            image: image.clone(),
            path: path.clone(),
            description: None,
            details: None,
        })
        .collect()
}

/// Records whose source path matches the rule, in catalog order
pub fn group(records: &[AssetRecord], rule: &GroupRule) -> WorkGroup {
    WorkGroup {
        name: rule.name,
        works: records
            .iter()
            .filter(|record| rule.pattern.is_match(&record.path))
            .cloned()
            .collect(),
    }
}

/// Pick a cover: marked record, else first record, else the placeholder
pub fn cover_image(records: &[AssetRecord], marker: &str, placeholder: &str) -> String {
    let marker = marker.to_lowercase();
    records
        .iter()
        .find(|record| {
            record.title.to_lowercase().contains(&marker)
                || record.path.to_lowercase().contains(&marker)
        })
        .or_else(|| records.first())
        .map(|record| record.image.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

fn non_empty_sections(records: &[AssetRecord], rules: &[GroupRule]) -> Vec<WorkGroup> {
    rules
        .iter()
        .map(|rule| group(records, rule))
        .filter(|group| !group.is_empty())
        .collect()
}

/// The immutable catalog shared by every view
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Discovered brand records (may be empty)
    pub brand: Vec<AssetRecord>,
    /// Discovered freelance/personal records (may be empty)
    pub freelance: Vec<AssetRecord>,
    pub items: Vec<ShowcaseItem>,
}

impl Catalog {
    /// Discover assets through `source` and build the catalog
    pub fn build<S: AssetSource + ?Sized>(
        source: &S,
        brand_dirs: &[String],
        freelance_dirs: &[String],
    ) -> Self {
        let brand = discovery::collect(source, brand_dirs);
        let freelance = discovery::collect(source, freelance_dirs);
        Self::from_maps(&brand, &freelance)
    }

    /// Build the catalog from already-discovered asset maps
    pub fn from_maps(brand_assets: &AssetMap, freelance_assets: &AssetMap) -> Self {
        let brand: Vec<AssetRecord> = records_from(brand_assets, "project")
            .into_iter()
            .map(|record| AssetRecord {
                description: Some(samples::BRAND_DESCRIPTION.to_string()),
                details: Some(samples::BRAND_DETAILS.to_string()),
                ..record
            })
            .collect();
        let freelance = records_from(freelance_assets, "image");

        let brand_item = ShowcaseItem {
            id: 1,
            title: "Brand Designs",
            category: "The WOL Collective",
            cover_image: cover_image(&brand, COVER_MARKER, samples::BRAND_PLACEHOLDER),
            description: "Complete brand identity package including logo, color palette, and \
                          brand guidelines.",
            show_count: false,
            past_works: if brand.is_empty() {
                samples::brand_samples()
            } else {
                brand.clone()
            },
            sections: non_empty_sections(&brand, &[CLOTH_DESIGNS, POSTERS]),
        };

        let freelance_item = ShowcaseItem {
            id: 2,
            title: "Digital Illustrations",
            category: "Freelance/Personal Projects",
            cover_image: freelance
                .first()
                .map(|record| record.image.clone())
                .unwrap_or_else(|| samples::FREELANCE_PLACEHOLDER.to_string()),
            description: "Custom digital illustrations for web and mobile applications.",
            show_count: false,
            past_works: freelance.clone(),
            sections: non_empty_sections(&freelance, &[FREELANCE, PERSONAL]),
        };

        let ui_ux_item = ShowcaseItem {
            id: 3,
            title: "UI/UX Design System",
            category: HIDDEN_CATEGORY,
            cover_image: samples::UI_UX_COVER.to_string(),
            description: "Comprehensive design system with reusable components and patterns.",
            show_count: true,
            past_works: samples::ui_ux_samples(),
            sections: Vec::new(),
        };

        log::info!(
            "Catalog built: {} brand assets, {} freelance assets",
            brand.len(),
            freelance.len()
        );
        for item in [&brand_item, &freelance_item] {
            for section in &item.sections {
                log::info!("  {} / {}: {} works", item.title, section.name, section.len());
            }
        }

        Catalog {
            brand,
            freelance,
            items: vec![brand_item, freelance_item, ui_ux_item],
        }
    }

    /// Items shown in the Designs grid
    pub fn listed_items(&self) -> impl Iterator<Item = &ShowcaseItem> {
        self.items
            .iter()
            .filter(|item| item.category != HIDDEN_CATEGORY)
    }

    pub fn item(&self, id: u32) -> Option<&ShowcaseItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
