//! Recette CLI application entry point
//!
//! This is the main executable for the recette recipe search engine. It
//! loads a recipe catalog once, narrows it by free-text queries and
//! categorical tags, and keeps the offered tag values consistent with the
//! visible results.
//!
//! # Features
//!
//! - **Search**: Combine a free-text query with ingredient, appliance and
//!   utensil tags; every criterion must hold for a recipe to be shown
//! - **Tags**: Inspect which tag values can still narrow the current results
//! - **List**: Print the whole catalog
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # List the catalog (default command)
//! recette --catalog recipes.json
//! recette --catalog recipes.json list
//!
//! # Search by text
//! recette --catalog recipes.json search tarte
//!
//! # Search by text and tags
//! recette --catalog recipes.json search coco -i "lait de coco" -a blender
//!
//! # Show the tags still available after narrowing
//! recette --catalog recipes.json tags coco
//! recette --catalog recipes.json tags -a four -m "pom"
//!
//! # Quiet mode (only output results)
//! recette -q --catalog recipes.json search tarte
//! ```
//!
//! # Configuration
//!
//! A default catalog path, the minimum query length and quiet mode can be
//! stored in the user's config directory (`~/.config/recette/config.toml`
//! on Linux); command-line flags override the stored values.

use recette::{
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::AppConfig,
    RecetteError,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, RecetteError>;

/// Main entry point for the recette application
///
/// Loads configuration, parses command-line arguments, loads the catalog
/// and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `RecetteError` if configuration loading fails, the catalog
/// cannot be loaded, or any command handler returns an error.
fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let catalog_path: PathBuf = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            RecetteError::InvalidInput(
                "No catalog configured. Pass --catalog <PATH> or set 'catalog' in the config file."
                    .into(),
            )
        })?;

    let catalog = Catalog::load(&catalog_path)?;

    match cli.get_command() {
        Commands::Search {
            query,
            selection,
            long,
        } => {
            commands::search(
                catalog,
                query.as_deref(),
                &selection,
                config.min_query_len,
                long,
                quiet,
            )?;
        }
        Commands::Tags {
            query,
            selection,
            matching,
        } => {
            commands::tags(
                catalog,
                query.as_deref(),
                &selection,
                config.min_query_len,
                matching.as_deref(),
                quiet,
            )?;
        }
        Commands::List => {
            commands::list(&catalog, quiet)?;
        }
    }

    Ok(())
}
