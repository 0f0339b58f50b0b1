//! Incremental recipe filtering
//!
//! The engine combines two narrowing mechanisms over one catalog:
//! 1. A free-text query matched against names, descriptions and ingredients
//! 2. Categorical tags (ingredient, appliance, utensil) selected from the
//!    values still present in the current results
//!
//! Both mechanisms use the same permissive matching and both end a pass by
//! rebuilding the available-tag inventory and notifying observers.

pub mod engine;
pub mod error;
pub mod inventory;
pub mod observer;
pub mod pattern;
pub mod selection;

pub use engine::{
    filter_candidates, tag_matches, text_matches, FilterState, SearchEngine, DEFAULT_MIN_QUERY_LEN,
};
pub use error::SearchError;
pub use inventory::AvailableTags;
pub use observer::{FilterObserver, FilterUpdate};
pub use pattern::{normalize, MatchPattern};
pub use selection::{Tag, TagKind, TagSelection};
