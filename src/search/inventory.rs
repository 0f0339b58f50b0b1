//! Available-tag derivation
//!
//! After every filtering pass the tag inventory is rebuilt from the records
//! still visible, so the tag pickers only ever offer values that can still
//! narrow the results. The inventory is always recomputed from scratch,
//! never patched incrementally.

use crate::catalog::Recipe;

use super::pattern::normalize;
use super::selection::{Tag, TagKind};

/// The distinct tag values present in a record subset
///
/// Values are normalized and deduplicated per category, kept in order of
/// first appearance across the subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableTags {
    /// Distinct ingredient names
    pub ingredients: Vec<String>,
    /// Distinct appliances
    pub appliances: Vec<String>,
    /// Distinct utensils
    pub utensils: Vec<String>,
}

impl AvailableTags {
    /// Collects the inventory over `records`
    ///
    /// All three categories run through the same normalize-then-dedup step,
    /// so two records spelling "Four" and "four" contribute one entry.
    #[must_use]
    pub fn collect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut tags = Self::default();
        for recipe in records {
            for item in &recipe.ingredients {
                push_unique(&mut tags.ingredients, normalize(&item.ingredient));
            }
            push_unique(&mut tags.appliances, normalize(&recipe.appliance));
            for utensil in &recipe.utensils {
                push_unique(&mut tags.utensils, normalize(utensil));
            }
        }
        tags
    }

    /// Values available in one category
    #[must_use]
    pub fn values(&self, kind: TagKind) -> &[String] {
        match kind {
            TagKind::Ingredient => &self.ingredients,
            TagKind::Appliance => &self.appliances,
            TagKind::Utensil => &self.utensils,
        }
    }

    /// Whether `tag` can still narrow the current results
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.values(tag.kind).iter().any(|v| v == &tag.value)
    }

    /// Total number of values across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.appliances.len() + self.utensils.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.appliances.is_empty() && self.utensils.is_empty()
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.iter().any(|v| v == &value) {
        values.push(value);
    }
}
