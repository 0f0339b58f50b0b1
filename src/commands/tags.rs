//! Tags command - show the tag values available for further narrowing

use crate::{
    catalog::Catalog,
    cli::SelectionArgs,
    output,
    search::{filter_candidates, tag_matches, MatchPattern, SearchEngine, TagKind},
    RecetteError,
};

use super::drive_engine;

type Result<T> = std::result::Result<T, RecetteError>;

/// Execute the tags command
///
/// Narrows the catalog exactly like `search`, then prints the tag inventory
/// of the visible records per category. With `--matching`, only labels that
/// match the given text are printed, the way a tag picker narrows its list
/// while the user types.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, a requested tag value
/// matches nothing, or a pattern fails to compile
pub fn execute(
    catalog: Catalog,
    query: Option<&str>,
    selection: &SelectionArgs,
    min_query_len: usize,
    matching: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let mut engine = SearchEngine::with_min_query_len(catalog, min_query_len);
    drive_engine(&mut engine, query, selection)?;

    if !quiet {
        println!(
            "Tags available across {} visible recipe(s):",
            engine.result_count()
        );
    }

    for kind in TagKind::ALL {
        let values = engine.available_tags().values(kind);
        let shown: Vec<&str> = match matching {
            Some(text) => filter_candidates(text, values)?,
            None => values.iter().map(String::as_str).collect(),
        };

        if shown.is_empty() {
            continue;
        }

        if quiet {
            for value in shown {
                println!("{}:{value}", kind.label());
            }
        } else {
            println!("{}", output::kind_header(kind));
            for value in shown {
                let count = count_visible_with(&engine, kind, value)?;
                println!("{}", output::tag_with_count(value, count, quiet));
            }
        }
    }

    Ok(())
}

/// Count the visible records carrying `value` in the attribute `kind` names
fn count_visible_with(engine: &SearchEngine, kind: TagKind, value: &str) -> Result<usize> {
    let pattern = MatchPattern::new(value)?;
    Ok(engine
        .visible()
        .filter(|card| tag_matches(&card.recipe, kind, &pattern))
        .count())
}
