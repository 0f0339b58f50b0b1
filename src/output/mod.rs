//! Output formatting for CLI display
//!
//! This module provides utilities for formatting recipes and tag values in
//! the CLI. Quiet mode strips decoration down to bare values so output can
//! be piped into other tools.

use colored::Colorize;

use crate::catalog::Recipe;
use crate::search::TagKind;

/// Format a recipe as a one-line list entry
#[must_use]
pub fn recipe_line(recipe: &Recipe, quiet: bool) -> String {
    if quiet {
        recipe.name.clone()
    } else {
        format!(
            "  {} ({} min, serves {})",
            recipe.name.bold(),
            recipe.time,
            recipe.servings
        )
    }
}

/// Format a recipe with its ingredient names
#[must_use]
pub fn recipe_with_ingredients(recipe: &Recipe, quiet: bool) -> String {
    if quiet {
        return recipe.name.clone();
    }

    let ingredients: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|item| item.ingredient.as_str())
        .collect();

    if ingredients.is_empty() {
        format!("  {} (no ingredients)", recipe.name.bold())
    } else {
        format!("  {} [{}]", recipe.name.bold(), ingredients.join(", "))
    }
}

/// Format a recipe as a multi-line block with its full description
#[must_use]
pub fn recipe_block(recipe: &Recipe) -> String {
    let mut lines = vec![format!(
        "{} ({} min, serves {}, appliance: {})",
        recipe.name.bold(),
        recipe.time,
        recipe.servings,
        recipe.appliance
    )];
    for item in &recipe.ingredients {
        let quantity = match (item.quantity, item.unit.as_deref()) {
            (Some(quantity), Some(unit)) => format!(" ({quantity} {unit})"),
            (Some(quantity), None) => format!(" ({quantity})"),
            _ => String::new(),
        };
        lines.push(format!("  - {}{quantity}", item.ingredient));
    }
    lines.push(format!("  {}", recipe.description.dimmed()));
    lines.join("\n")
}

/// Format a tag value with the number of visible recipes carrying it
#[must_use]
pub fn tag_with_count(value: &str, count: usize, quiet: bool) -> String {
    if quiet {
        value.to_string()
    } else {
        format!("  {value} (in {count} recipe(s))")
    }
}

/// Format a category header for tag listings
#[must_use]
pub fn kind_header(kind: TagKind) -> String {
    let header = match kind {
        TagKind::Ingredient => "Ingredients:",
        TagKind::Appliance => "Appliances:",
        TagKind::Utensil => "Utensils:",
    };
    header.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_recipe_line_quiet_is_bare() {
        let records = testing::sample_records();
        assert_eq!(recipe_line(&records[0], true), "Tarte aux pommes");
    }

    #[test]
    fn test_recipe_line_shows_time_and_servings() {
        let records = testing::sample_records();
        let line = recipe_line(&records[0], false);
        assert!(line.contains("30 min"));
        assert!(line.contains("serves 4"));
    }

    #[test]
    fn test_recipe_with_ingredients_joins_names() {
        let records = testing::sample_records();
        let line = recipe_with_ingredients(&records[0], false);
        assert!(line.contains("Pommes"));
        assert!(line.contains("Beurre"));
        assert_eq!(recipe_with_ingredients(&records[0], true), "Tarte aux pommes");
    }

    #[test]
    fn test_recipe_block_includes_quantities() {
        let mut records = testing::sample_records();
        records[0].ingredients[0].quantity = Some(3.0);
        records[0].ingredients[0].unit = Some("pommes".to_string());

        let block = recipe_block(&records[0]);
        assert!(block.contains("(3 pommes)"));
        assert!(block.contains("Étaler la pâte"));
    }

    #[test]
    fn test_tag_with_count() {
        assert_eq!(tag_with_count("four", 2, true), "four");
        assert_eq!(tag_with_count("four", 2, false), "  four (in 2 recipe(s))");
    }
}
