//! Per-card reveal state.
//!
//! Every card is either face down or face up. Ids that were never revealed
//! are implicitly [`CardFace::Hidden`]; the set only grows until it is cleared
//! as a whole, there is no way to flip a single card back.

use std::collections::BTreeMap;

use crate::catalog::ItemId;

/// Which side of a card is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Hidden,
    Revealed,
}

/// Faces of all cards that have been flipped since the last clear
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    faces: BTreeMap<ItemId, CardFace>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(&self, id: ItemId) -> CardFace {
        self.faces.get(&id).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, id: ItemId) -> bool {
        self.face(id) == CardFace::Revealed
    }

    /// Flip a card face up. Returns `true` if it was hidden before.
    pub fn reveal(&mut self, id: ItemId) -> bool {
        self.faces.insert(id, CardFace::Revealed) != Some(CardFace::Revealed)
    }

    /// Turn every card face down again
    pub fn clear(&mut self) {
        self.faces.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Revealed ids in ascending order
    pub fn revealed(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.faces
            .iter()
            .filter(|(_, face)| **face == CardFace::Revealed)
            .map(|(id, _)| *id)
    }
}
