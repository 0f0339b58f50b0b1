//! Selected-tag state, partitioned by category
//!
//! Holds the tags the user has activated, one ordered list per category.
//! Values are stored normalized and deduplicated; the engine decides what a
//! duplicate add or an absent remove means for notification.

use std::fmt;

/// The closed set of filterable attribute categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Matches against the ingredient names of a record
    Ingredient,
    /// Matches against the single appliance of a record
    Appliance,
    /// Matches against the utensil list of a record
    Utensil,
}

impl TagKind {
    /// Every category, in display order
    pub const ALL: [Self; 3] = [Self::Ingredient, Self::Appliance, Self::Utensil];

    /// Lower-case label used in CLI output and config
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Appliance => "appliance",
            Self::Utensil => "utensil",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A selectable (category, value) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Category the value belongs to
    pub kind: TagKind,
    /// Normalized tag value
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new<S: Into<String>>(kind: TagKind, value: S) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Shorthand for an ingredient tag
    #[must_use]
    pub fn ingredient<S: Into<String>>(value: S) -> Self {
        Self::new(TagKind::Ingredient, value)
    }

    /// Shorthand for an appliance tag
    #[must_use]
    pub fn appliance<S: Into<String>>(value: S) -> Self {
        Self::new(TagKind::Appliance, value)
    }

    /// Shorthand for a utensil tag
    #[must_use]
    pub fn utensil<S: Into<String>>(value: S) -> Self {
        Self::new(TagKind::Utensil, value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.label(), self.value)
    }
}

/// Ordered per-category tag selections
///
/// Each category keeps its own list in selection order. A (category, value)
/// pair appears at most once; the same value may be selected in two
/// different categories independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    ingredients: Vec<String>,
    appliances: Vec<String>,
    utensils: Vec<String>,
}

impl TagSelection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            appliances: Vec::new(),
            utensils: Vec::new(),
        }
    }

    /// Appends `tag` to its category list
    ///
    /// Returns `false` and leaves the selection untouched when the pair is
    /// already selected.
    pub fn add(&mut self, tag: &Tag) -> bool {
        let values = self.values_mut(tag.kind);
        if values.iter().any(|v| v == &tag.value) {
            return false;
        }
        values.push(tag.value.clone());
        true
    }

    /// Removes `tag` from its category list
    ///
    /// Returns whether the pair was present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        let values = self.values_mut(tag.kind);
        let before = values.len();
        values.retain(|v| v != &tag.value);
        values.len() != before
    }

    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.values(tag.kind).iter().any(|v| v == &tag.value)
    }

    /// Values selected in one category, in selection order
    #[must_use]
    pub fn values(&self, kind: TagKind) -> &[String] {
        match kind {
            TagKind::Ingredient => &self.ingredients,
            TagKind::Appliance => &self.appliances,
            TagKind::Utensil => &self.utensils,
        }
    }

    /// Total number of selected tags across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.appliances.len() + self.utensils.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.appliances.is_empty() && self.utensils.is_empty()
    }

    /// Iterates all selections in category order, each in selection order
    pub fn iter(&self) -> impl Iterator<Item = (TagKind, &str)> {
        TagKind::ALL.into_iter().flat_map(move |kind| {
            self.values(kind).iter().map(move |value| (kind, value.as_str()))
        })
    }

    fn values_mut(&mut self, kind: TagKind) -> &mut Vec<String> {
        match kind {
            TagKind::Ingredient => &mut self.ingredients,
            TagKind::Appliance => &mut self.appliances,
            TagKind::Utensil => &mut self.utensils,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_contains() {
        let mut selection = TagSelection::new();
        assert!(selection.add(&Tag::ingredient("coco")));
        assert!(selection.contains(&Tag::ingredient("coco")));
        assert!(!selection.contains(&Tag::utensil("coco")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut selection = TagSelection::new();
        assert!(selection.add(&Tag::appliance("four")));
        assert!(!selection.add(&Tag::appliance("four")));
        assert_eq!(selection.values(TagKind::Appliance), ["four"]);
    }

    #[test]
    fn test_same_value_in_two_categories() {
        let mut selection = TagSelection::new();
        assert!(selection.add(&Tag::ingredient("citron")));
        assert!(selection.add(&Tag::utensil("citron")));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut selection = TagSelection::new();
        selection.add(&Tag::ingredient("coco"));
        assert!(selection.remove(&Tag::ingredient("coco")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut selection = TagSelection::new();
        selection.add(&Tag::ingredient("coco"));
        assert!(!selection.remove(&Tag::ingredient("citron")));
        assert!(!selection.remove(&Tag::appliance("coco")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_iter_preserves_selection_order() {
        let mut selection = TagSelection::new();
        selection.add(&Tag::utensil("saladier"));
        selection.add(&Tag::ingredient("citron"));
        selection.add(&Tag::ingredient("coco"));
        selection.add(&Tag::appliance("four"));

        let collected: Vec<(TagKind, &str)> = selection.iter().collect();
        assert_eq!(
            collected,
            [
                (TagKind::Ingredient, "citron"),
                (TagKind::Ingredient, "coco"),
                (TagKind::Appliance, "four"),
                (TagKind::Utensil, "saladier"),
            ]
        );
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::appliance("four").to_string(), "appliance:four");
        assert_eq!(TagKind::Utensil.to_string(), "utensil");
    }
}
