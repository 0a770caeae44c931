/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog builder and the UI layer. Every record is built once
/// at startup and never mutated afterwards.

/// A single discovered (or hand-authored) piece of work
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    /// Display title derived from the file name (e.g., "My Cool Logo")
    pub title: String,
    /// Local file path or remote URL of the image
    pub image: String,
    /// Key the discovery step produced for this asset (empty for samples)
    pub path: String,
    /// Short caption shown under the image
    pub description: Option<String>,
    /// Longer project write-up
    pub details: Option<String>,
}

impl AssetRecord {
    /// Build a hand-authored sample record (no source path)
    pub fn sample(title: &str, image: &str, description: &str, details: &str) -> Self {
        Self {
            title: title.to_string(),
            image: image.to_string(),
            path: String::new(),
            description: Some(description.to_string()),
            details: Some(details.to_string()),
        }
    }
}

/// A named category of records selected by a keyword pattern
#[derive(Debug, Clone, PartialEq)]
pub struct WorkGroup {
    pub name: &'static str,
    pub works: Vec<AssetRecord>,
}

impl WorkGroup {
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }
}

/// A top-level entry of the Designs grid
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseItem {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    /// Image used for the grid card
    pub cover_image: String,
    pub description: &'static str,
    /// Whether the card advertises how many past works it holds
    pub show_count: bool,
    /// Every work of this item, in display order
    pub past_works: Vec<AssetRecord>,
    /// Non-empty groups to show instead of the flat grid
    pub sections: Vec<WorkGroup>,
}

impl ShowcaseItem {
    /// Caption shown under the category badge, if any
    pub fn card_title(&self) -> Option<&'static str> {
        if self.id != 1 && self.id != 2 && !self.title.is_empty() {
            Some(self.title)
        } else {
            None
        }
    }

    /// Hover hint with the number of past works, if enabled
    pub fn count_hint(&self) -> Option<String> {
        if self.show_count && self.id != 2 {
            Some(format!("Click to view {} past works", self.past_works.len()))
        } else {
            None
        }
    }
}

/// Rotation angles for the 3D hover effect, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    /// Rotation around the horizontal (X) axis
    pub rotate_x: f32,
    /// Rotation around the vertical (Y) axis
    pub rotate_y: f32,
    /// Swing around the depth (Z) axis
    pub swing: f32,
}

impl TiltState {
    pub const NEUTRAL: TiltState = TiltState {
        rotate_x: 0.0,
        rotate_y: 0.0,
        swing: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, show_count: bool) -> ShowcaseItem {
        ShowcaseItem {
            id,
            title: "UI/UX Design System",
            category: "UI/UX",
            cover_image: String::new(),
            description: "",
            show_count,
            past_works: vec![AssetRecord::sample("A", "a.png", "", ""); 4],
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_card_title_hidden_for_catalog_items() {
        assert_eq!(item(1, false).card_title(), None);
        assert_eq!(item(2, false).card_title(), None);
        assert_eq!(item(3, true).card_title(), Some("UI/UX Design System"));
    }

    #[test]
    fn test_count_hint() {
        assert_eq!(
            item(3, true).count_hint().as_deref(),
            Some("Click to view 4 past works")
        );
        assert_eq!(item(1, false).count_hint(), None);
        assert_eq!(item(2, true).count_hint(), None);
    }
}
