//! Card reveal / carousel transitions without timers or side effects.
//!
//! [`InteractionState`] owns the three pieces of per-view state (revealed
//! cards, active slide, open detail) and applies one user input at a time.
//! It never schedules anything; it reports what happened through
//! [`Activation`] so a driver like
//! [`CardRevealCarousel`](crate::controller::CardRevealCarousel) can arm the
//! expiry countdown and fire the audio cue.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::carousel::CarouselState;
use crate::catalog::{Catalog, ContentItem, ItemId};
use crate::reveal::RevealState;

/// Outcome of activating a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The card flipped face up. `first` is set when it was the first
    /// revealed card (the set went from empty to non-empty).
    Revealed { first: bool },
    /// The card was already face up; its detail view is now open
    Opened,
    /// Unknown id, nothing changed
    Ignored,
}

/// Snapshot handed to the view layer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    pub revealed: BTreeSet<ItemId>,
    pub active_index: usize,
    pub selection: Option<ItemId>,
    pub expiry_pending: bool,
}

impl RenderState {
    pub fn is_revealed(&self, id: ItemId) -> bool {
        self.revealed.contains(&id)
    }
}

/// Reveal set, slide index and selection for one mounted view
#[derive(Clone, Debug)]
pub struct InteractionState {
    catalog: Arc<Catalog>,
    reveal: RevealState,
    carousel: CarouselState,
    selection: Option<ItemId>,
}

impl InteractionState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let carousel = CarouselState::new(catalog.len());
        Self {
            catalog,
            reveal: RevealState::new(),
            carousel,
            selection: None,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    /// Item under the carousel cursor
    pub fn active_item(&self) -> Option<&ContentItem> {
        self.catalog.items().get(self.carousel.active())
    }

    /// Item whose detail view is open
    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.selection.and_then(|id| self.catalog.get(id))
    }

    /// Click on a card: flip it if hidden, open its detail if already flipped.
    pub fn activate(&mut self, id: ItemId) -> Activation {
        if !self.catalog.contains(id) {
            tracing::debug!(id, "Ignoring activation of unknown card");
            return Activation::Ignored;
        }

        if self.reveal.is_revealed(id) {
            self.selection = Some(id);
            Activation::Opened
        } else {
            let first = self.reveal.is_empty();
            self.reveal.reveal(id);
            Activation::Revealed { first }
        }
    }

    /// "Learn More" on a face-up card. Hidden or unknown cards are ignored.
    pub fn open_detail(&mut self, id: ItemId) -> bool {
        if self.reveal.is_revealed(id) {
            self.selection = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close_detail(&mut self) {
        self.selection = None;
    }

    pub fn next(&mut self) {
        self.carousel.next();
    }

    pub fn prev(&mut self) {
        self.carousel.prev();
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.carousel.go_to(index)
    }

    /// Turn every card face down. Returns `true` if anything was revealed.
    ///
    /// The open detail view, if any, stays open.
    pub fn clear_reveals(&mut self) -> bool {
        let had_any = !self.reveal.is_empty();
        self.reveal.clear();
        had_any
    }

    pub fn render_state(&self, expiry_pending: bool) -> RenderState {
        RenderState {
            revealed: self.reveal.revealed().collect(),
            active_index: self.carousel.active(),
            selection: self.selection,
            expiry_pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> InteractionState {
        InteractionState::new(Arc::new(Catalog::xplore25()))
    }

    #[test]
    fn test_reveal_then_open() {
        let mut s = state();
        assert_eq!(s.activate(3), Activation::Revealed { first: true });
        assert!(s.reveal_state().is_revealed(3));
        assert_eq!(s.selection(), None);

        assert_eq!(s.activate(3), Activation::Opened);
        assert_eq!(s.reveal_state().len(), 1);
        assert_eq!(s.selection(), Some(3));
        assert_eq!(s.selected_item().unwrap().title, "Capture the Craft Table");
    }

    #[test]
    fn test_second_reveal_is_not_first() {
        let mut s = state();
        s.activate(1);
        assert_eq!(s.activate(2), Activation::Revealed { first: false });
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut s = state();
        let before = s.render_state(false);
        assert_eq!(s.activate(999), Activation::Ignored);
        assert_eq!(s.render_state(false), before);
    }

    #[test]
    fn test_open_detail_requires_reveal() {
        let mut s = state();
        assert!(!s.open_detail(4));
        assert_eq!(s.selection(), None);

        s.activate(4);
        assert!(s.open_detail(4));
        assert_eq!(s.selection(), Some(4));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut s = state();
        s.activate(5);
        s.activate(5);
        s.close_detail();
        let once = s.render_state(false);
        s.close_detail();
        assert_eq!(s.render_state(false), once);
        assert!(once.is_revealed(5));
    }

    #[test]
    fn test_clear_keeps_selection() {
        let mut s = state();
        s.activate(2);
        s.activate(2);
        assert!(s.clear_reveals());
        assert!(!s.clear_reveals());
        assert_eq!(s.selection(), Some(2));
    }

    #[test]
    fn test_active_item_follows_carousel() {
        let mut s = state();
        assert_eq!(s.active_item().unwrap().id, 1);
        s.prev();
        assert_eq!(s.active_item().unwrap().id, 8);
        assert!(s.go_to(2));
        assert_eq!(s.active_item().unwrap().id, 3);
    }
}
