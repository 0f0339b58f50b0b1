//! The filter engine
//!
//! Combines free-text query state and tag-selection state into visibility
//! decisions over the catalog. Every operation that changes filter state
//! re-derives visibility from the full record set in a single pass; no
//! intermediate subset is ever cached, so the visibility flags are the one
//! source of truth for what the user sees.
//!
//! A pass ends by rebuilding the available-tag inventory over the visible
//! records and notifying every subscribed observer. Operations that decline
//! to run a pass (duplicate tag selection, too-short query on an unfiltered
//! view, deselection of an absent tag) return `None` and notify nobody.

use crate::catalog::{Catalog, CardId, Recipe, RecipeCard, Visibility};

use super::error::SearchError;
use super::inventory::AvailableTags;
use super::observer::{FilterObserver, FilterUpdate};
use super::pattern::{normalize, MatchPattern};
use super::selection::{Tag, TagKind, TagSelection};

/// Minimum normalized query length before text filtering engages
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Which filters are currently in force
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    last_query: Option<String>,
    text_filtered: bool,
    tag_filtered: bool,
}

impl FilterState {
    /// The retained normalized query, when text filtering is in force
    #[must_use]
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    #[must_use]
    pub const fn is_text_filtered(&self) -> bool {
        self.text_filtered
    }

    #[must_use]
    pub const fn is_tag_filtered(&self) -> bool {
        self.tag_filtered
    }
}

/// Incremental filter engine over a loaded catalog
///
/// Owns the record cards, the tag selection and the filter state. Frontends
/// drive it through [`apply_text_query`](Self::apply_text_query),
/// [`select_tag`](Self::select_tag) and [`deselect_tag`](Self::deselect_tag),
/// and read results back from [`visible`](Self::visible) or through a
/// subscribed [`FilterObserver`].
pub struct SearchEngine {
    cards: Vec<RecipeCard>,
    min_query_len: usize,
    selection: TagSelection,
    state: FilterState,
    available: AvailableTags,
    observers: Vec<Box<dyn FilterObserver>>,
}

impl SearchEngine {
    /// Builds an engine over `catalog` with the default query-length policy
    ///
    /// All cards start visible and the tag inventory is computed for the
    /// whole catalog. Construction is not a filtering pass, so no observer
    /// is ever notified for it.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_min_query_len(catalog, DEFAULT_MIN_QUERY_LEN)
    }

    /// Builds an engine with a custom minimum query length
    #[must_use]
    pub fn with_min_query_len(catalog: Catalog, min_query_len: usize) -> Self {
        let cards = catalog.into_cards();
        let available = AvailableTags::collect(cards.iter().map(|card| &card.recipe));
        Self {
            cards,
            min_query_len,
            selection: TagSelection::new(),
            state: FilterState::default(),
            available,
            observers: Vec::new(),
        }
    }

    /// Subscribes an observer to filtering passes
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: FilterObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Applies a free-text query
    ///
    /// The input is normalized first. A query of at least the minimum
    /// length replaces the retained query and narrows the records that
    /// satisfy every selected tag. A shorter query rolls the view back to
    /// the tag-only result set (or the whole catalog when no tag is
    /// selected) so that stale text results never linger; if no text filter
    /// was in force, nothing happens at all and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if a match pattern fails to compile.
    pub fn apply_text_query(&mut self, raw: &str) -> Result<Option<FilterUpdate>, SearchError> {
        let query = normalize(raw);
        if query.chars().count() < self.min_query_len {
            if !self.state.text_filtered {
                return Ok(None);
            }
            self.state.last_query = None;
            return self.reapply_filters().map(Some);
        }

        self.state.last_query = Some(query);
        self.reapply_filters().map(Some)
    }

    /// Selects a tag, narrowing the current results
    ///
    /// Returns `None` without running a pass when the tag is already
    /// selected. The caller is expected to offer only values from
    /// [`available_tags`](Self::available_tags); selecting anything else is
    /// harmless but empties the result set.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if a match pattern fails to compile.
    pub fn select_tag(&mut self, tag: &Tag) -> Result<Option<FilterUpdate>, SearchError> {
        if !self.selection.add(tag) {
            return Ok(None);
        }
        self.reapply_filters().map(Some)
    }

    /// Deselects a tag, widening the current results
    ///
    /// Returns `None` without running a pass when the tag was not selected.
    /// Deselecting the last tag restores the text-only view when a query is
    /// retained, and the full catalog otherwise.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if a match pattern fails to compile.
    pub fn deselect_tag(&mut self, tag: &Tag) -> Result<Option<FilterUpdate>, SearchError> {
        if !self.selection.remove(tag) {
            return Ok(None);
        }
        self.reapply_filters().map(Some)
    }

    /// Re-derives visibility from the full catalog and current filter state
    ///
    /// This is the single filtering pass behind every operation: a record
    /// stays visible iff it satisfies every selected tag and the retained
    /// text query. With nothing in force the pass resets the view to the
    /// whole catalog and clears the filter flags.
    fn reapply_filters(&mut self) -> Result<FilterUpdate, SearchError> {
        let tag_patterns = self.compile_tag_patterns()?;
        let text_pattern = match self.state.last_query.as_deref() {
            Some(query) => Some(MatchPattern::new(query)?),
            None => None,
        };

        for card in &mut self.cards {
            let keep = tag_patterns
                .iter()
                .all(|(kind, pattern)| tag_matches(&card.recipe, *kind, pattern))
                && text_pattern
                    .as_ref()
                    .is_none_or(|pattern| text_matches(&card.recipe, pattern));
            card.visibility = if keep {
                Visibility::Shown
            } else {
                Visibility::Hidden
            };
        }

        self.state.text_filtered = text_pattern.is_some();
        self.state.tag_filtered = !tag_patterns.is_empty();
        Ok(self.finish_pass())
    }

    /// All cards in catalog order, visible or not
    #[must_use]
    pub fn cards(&self) -> &[RecipeCard] {
        &self.cards
    }

    /// Card lookup by render handle
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&RecipeCard> {
        self.cards.get(id.index())
    }

    /// The currently visible cards, in catalog order
    pub fn visible(&self) -> impl Iterator<Item = &RecipeCard> {
        self.cards.iter().filter(|card| card.visibility.is_shown())
    }

    /// Number of currently visible records
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.visible().count()
    }

    /// Tag inventory over the currently visible records
    #[must_use]
    pub const fn available_tags(&self) -> &AvailableTags {
        &self.available
    }

    /// The active tag selection
    #[must_use]
    pub const fn selection(&self) -> &TagSelection {
        &self.selection
    }

    /// The current filter state
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub const fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    fn compile_tag_patterns(&self) -> Result<Vec<(TagKind, MatchPattern)>, SearchError> {
        let mut patterns = Vec::with_capacity(self.selection.len());
        for (kind, value) in self.selection.iter() {
            patterns.push((kind, MatchPattern::new(value)?));
        }
        Ok(patterns)
    }

    /// Rebuilds the tag inventory over the visible subset and notifies
    fn finish_pass(&mut self) -> FilterUpdate {
        self.available = AvailableTags::collect(self.visible().map(|card| &card.recipe));
        let update = FilterUpdate {
            result_count: self.result_count(),
            available_tags: self.available.clone(),
        };
        for observer in &mut self.observers {
            observer.on_filter(&update);
        }
        update
    }
}

/// Narrows a candidate tag list as the user types into a tag picker
///
/// Stateless companion to the engine: the same permissive matching is used,
/// but no minimum-length policy applies and no filtering pass runs. Returns
/// the surviving labels in their original order.
///
/// # Errors
///
/// Returns `SearchError` if the match pattern fails to compile.
pub fn filter_candidates<'a>(
    input: &str,
    candidates: &'a [String],
) -> Result<Vec<&'a str>, SearchError> {
    let pattern = MatchPattern::new(&normalize(input))?;
    Ok(candidates
        .iter()
        .filter(|candidate| pattern.matches(candidate.as_str()))
        .map(String::as_str)
        .collect())
}

/// Text matching scans record name, description and ingredient names.
/// Quantities and units are never searched.
#[must_use]
pub fn text_matches(recipe: &Recipe, pattern: &MatchPattern) -> bool {
    pattern.matches(&recipe.name)
        || pattern.matches(&recipe.description)
        || recipe
            .ingredients
            .iter()
            .any(|item| pattern.matches(&item.ingredient))
}

/// Tag matching scans only the record attribute the category names
#[must_use]
pub fn tag_matches(recipe: &Recipe, kind: TagKind, pattern: &MatchPattern) -> bool {
    match kind {
        TagKind::Ingredient => recipe
            .ingredients
            .iter()
            .any(|item| pattern.matches(&item.ingredient)),
        TagKind::Appliance => pattern.matches(&recipe.appliance),
        TagKind::Utensil => recipe.utensils.iter().any(|utensil| pattern.matches(utensil)),
    }
}
