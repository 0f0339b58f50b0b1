//! Search command - narrow the catalog by text and tags

use crate::{
    catalog::Catalog,
    cli::SelectionArgs,
    output,
    search::{normalize, SearchEngine},
    RecetteError,
};

use super::drive_engine;

type Result<T> = std::result::Result<T, RecetteError>;

/// Execute the search command
///
/// # Arguments
/// * `query` - Optional free-text query
/// * `selection` - Tags requested on the command line
/// * `min_query_len` - Minimum normalized query length from config
/// * `long` - Print full recipe blocks instead of one-liners
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, a requested tag value
/// matches nothing, or a pattern fails to compile
pub fn execute(
    catalog: Catalog,
    query: Option<&str>,
    selection: &SelectionArgs,
    min_query_len: usize,
    long: bool,
    quiet: bool,
) -> Result<()> {
    if query.is_none() && selection.is_empty() {
        return Err(RecetteError::InvalidInput(
            "No search criteria provided. Pass a query, or -i/-a/-u for tags.".into(),
        ));
    }

    let mut engine = SearchEngine::with_min_query_len(catalog, min_query_len);

    if let Some(query) = query
        && !quiet
        && normalize(query).chars().count() < engine.min_query_len()
    {
        println!(
            "Query '{}' is shorter than {} characters and was ignored.",
            query.trim(),
            engine.min_query_len()
        );
    }

    drive_engine(&mut engine, query, selection)?;

    if engine.result_count() == 0 {
        if !quiet {
            println!("No recipes match the given criteria.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} recipe(s):", engine.result_count());
    }

    for card in engine.visible() {
        if long {
            println!("{}", output::recipe_block(&card.recipe));
        } else {
            println!("{}", output::recipe_with_ingredients(&card.recipe, quiet));
        }
    }

    Ok(())
}
