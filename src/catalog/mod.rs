//! Recipe catalog module for recette
//!
//! Loads the recipe dataset from JSON and wraps each record in a card that
//! carries a visibility flag. The dataset itself is immutable after loading;
//! the search engine only ever flips visibility flags.
//!
//! # Types
//!
//! - **`Recipe`**: One catalog record as stored in the JSON dataset
//! - **`Ingredient`**: A single ingredient line on a recipe
//! - **`RecipeCard`**: A recipe paired with its render handle and visibility
//! - **`Catalog`**: The loaded, immutable record set
//!
//! # Examples
//!
//! ```no_run
//! use recette::catalog::Catalog;
//!
//! let catalog = Catalog::load("recipes.json").unwrap();
//! println!("{} recipes loaded", catalog.len());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CatalogError;

/// A single ingredient line on a recipe
///
/// Only the `ingredient` name takes part in searching and tag derivation.
/// Quantity and unit are display data and are never inspected by filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Name of the ingredient, e.g. "Farine"
    pub ingredient: String,

    /// Amount used by the recipe, when the dataset provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Measurement unit for the quantity, e.g. "grammes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    /// Creates an ingredient with no quantity or unit
    #[must_use]
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            ingredient: name.into(),
            quantity: None,
            unit: None,
        }
    }
}

/// One catalog record, mirroring the JSON dataset layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier from the dataset
    pub id: u32,

    /// Display name of the recipe
    pub name: String,

    /// Number of servings the recipe yields
    #[serde(default)]
    pub servings: u32,

    /// Ingredient lines, searched by name
    pub ingredients: Vec<Ingredient>,

    /// Preparation time in minutes
    pub time: u32,

    /// Free-text preparation instructions
    pub description: String,

    /// The single appliance the recipe calls for
    pub appliance: String,

    /// Utensils the recipe calls for
    #[serde(default)]
    pub utensils: Vec<String>,
}

/// Opaque handle tying a catalog record to whatever a frontend renders for it
///
/// Handles are assigned in catalog order and stay stable for the lifetime of
/// the engine, so a frontend can build its representation once and afterwards
/// only show or hide entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(usize);

impl CardId {
    /// Position of the card in catalog order
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Whether a card is part of the current result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// The card survived the last filtering pass (or no pass ran yet)
    #[default]
    Shown,
    /// The card was excluded by the last filtering pass
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// A recipe paired with its render handle and current visibility
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    /// Render handle, stable for the engine's lifetime
    pub id: CardId,
    /// The underlying catalog record
    pub recipe: Recipe,
    /// Flag flipped by filtering passes
    pub visibility: Visibility,
}

/// The immutable recipe dataset
///
/// A catalog is loaded once and handed to the search engine, which wraps
/// every record in a [`RecipeCard`]. The catalog itself never changes while
/// filtering runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog from records already in memory
    #[must_use]
    pub fn from_records(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Loads a catalog from a JSON file
    ///
    /// The file must contain a JSON array of recipe records.
    ///
    /// # Arguments
    /// * `path` - Path to the catalog JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file does not exist, cannot be read, or
    /// does not parse as a recipe array.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the string does not parse as a recipe array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Ok(Self { recipes })
    }

    /// Number of records in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All records, in dataset order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Wraps every record in a card, all visible, handles in catalog order
    #[must_use]
    pub fn into_cards(self) -> Vec<RecipeCard> {
        self.recipes
            .into_iter()
            .enumerate()
            .map(|(index, recipe)| RecipeCard {
                id: CardId(index),
                recipe,
                visibility: Visibility::Shown,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {
            "id": 1,
            "name": "Limonade de coco",
            "servings": 1,
            "ingredients": [
                { "ingredient": "Lait de coco", "quantity": 400, "unit": "ml" },
                { "ingredient": "Citron vert", "quantity": 2 },
                { "ingredient": "Sucre" }
            ],
            "time": 10,
            "description": "Mettre les glacons, le lait, le jus de citron et le sucre dans un blender.",
            "appliance": "Blender",
            "utensils": ["cuillere", "verres"]
        },
        {
            "id": 2,
            "name": "Poisson Cru",
            "servings": 2,
            "ingredients": [
                { "ingredient": "Thon Rouge", "quantity": 200, "unit": "grammes" },
                { "ingredient": "Citron vert", "quantity": 2 }
            ],
            "time": 60,
            "description": "Decouper le thon en des et recouvrir de jus de citron vert.",
            "appliance": "Presse citron",
            "utensils": ["saladier", "presse citron"]
        }
    ]"#;

    #[test]
    fn test_from_json_parses_records() {
        let catalog = Catalog::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.recipes()[0].name, "Limonade de coco");
        assert_eq!(catalog.recipes()[1].appliance, "Presse citron");
    }

    #[test]
    fn test_from_json_optional_ingredient_fields() {
        let catalog = Catalog::from_json(SAMPLE_JSON).unwrap();
        let sugar = &catalog.recipes()[0].ingredients[2];
        assert_eq!(sugar.ingredient, "Sucre");
        assert!(sugar.quantity.is_none());
        assert!(sugar.unit.is_none());
    }

    #[test]
    fn test_from_json_rejects_invalid_payload() {
        let result = Catalog::from_json("{ \"not\": \"an array\" }");
        assert!(matches!(result, Err(CatalogError::DecodeError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/recipes.json");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, SAMPLE_JSON).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_into_cards_assigns_handles_in_order() {
        let catalog = Catalog::from_json(SAMPLE_JSON).unwrap();
        let cards = catalog.into_cards();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id.index(), 0);
        assert_eq!(cards[1].id.index(), 1);
        assert!(cards.iter().all(|card| card.visibility.is_shown()));
    }
}
