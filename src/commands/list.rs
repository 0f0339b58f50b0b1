//! List command - list every recipe in the catalog

use crate::{catalog::Catalog, output, RecetteError};

type Result<T> = std::result::Result<T, RecetteError>;

/// Execute the list command
pub fn execute(catalog: &Catalog, quiet: bool) -> Result<()> {
    if catalog.is_empty() {
        if !quiet {
            println!("The catalog contains no recipes.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Recipes in catalog ({}):", catalog.len());
    }
    for recipe in catalog.recipes() {
        println!("{}", output::recipe_line(recipe, quiet));
    }
    Ok(())
}
