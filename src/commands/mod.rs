//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args, builds a filter engine over the loaded catalog and prints results.

use crate::cli::SelectionArgs;
use crate::search::{normalize, SearchEngine, Tag};
use crate::RecetteError;

pub mod list;
pub mod search;
pub mod tags;

// Re-export execute functions for convenience
pub use list::execute as list;
pub use search::execute as search;
pub use tags::execute as tags;

/// Drive an engine through the query and tag selections a command received
///
/// The text query is applied first, then each requested tag in category
/// order. Tag values are normalized and checked against the inventory of
/// the narrowed results, so a selection that can no longer match anything
/// is reported instead of silently emptying the result set.
///
/// # Errors
///
/// Returns `RecetteError::InvalidInput` for a tag value not offered by the
/// current results, or a `SearchError` if a pattern fails to compile.
pub(crate) fn drive_engine(
    engine: &mut SearchEngine,
    query: Option<&str>,
    selection: &SelectionArgs,
) -> Result<(), RecetteError> {
    if let Some(query) = query {
        engine.apply_text_query(query)?;
    }

    for tag in selection.tags() {
        let tag = Tag::new(tag.kind, normalize(&tag.value));
        if !engine.available_tags().contains(&tag) {
            return Err(RecetteError::InvalidInput(format!(
                "{} '{}' does not match any of the current results",
                tag.kind, tag.value
            )));
        }
        engine.select_tag(&tag)?;
    }

    Ok(())
}
