//! Filter-pass notifications
//!
//! Frontends subscribe to the engine and receive one [`FilterUpdate`] per
//! completed filtering pass. The payload carries everything a renderer
//! needs to refresh its result counter and tag pickers without polling the
//! engine again.

use super::inventory::AvailableTags;

/// Payload delivered to observers after every completed filtering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterUpdate {
    /// Number of records visible after the pass
    pub result_count: usize,
    /// Tag inventory rebuilt over the visible records
    pub available_tags: AvailableTags,
}

/// Receives one callback per completed filtering pass
///
/// Operations that decline to run a pass (a duplicate tag selection, a
/// too-short query on an unfiltered view) notify nobody. Any `FnMut`
/// closure over `&FilterUpdate` is an observer.
pub trait FilterObserver {
    fn on_filter(&mut self, update: &FilterUpdate);
}

impl<F> FilterObserver for F
where
    F: FnMut(&FilterUpdate),
{
    fn on_filter(&mut self, update: &FilterUpdate) {
        self(update);
    }
}
