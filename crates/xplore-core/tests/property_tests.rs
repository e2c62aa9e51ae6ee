//! Property-based tests for the interaction engine
//!
//! Uses proptest to verify invariants of slide navigation and card reveals.

use std::sync::Arc;

use proptest::prelude::*;
use xplore_core::{Activation, CarouselState, Catalog, ContentItem, InteractionState};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Navigation inputs for a carousel
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Prev,
    GoTo(usize),
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Next),
            3 => Just(NavOp::Prev),
            1 => (0..64usize).prop_map(NavOp::GoTo),
        ],
        0..max_ops,
    )
}

/// User inputs on the events page
#[derive(Debug, Clone)]
enum UiOp {
    Activate(u32),
    OpenDetail(u32),
    Close,
    Clear,
}

fn ui_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<UiOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..12u32).prop_map(UiOp::Activate),
            1 => (0..12u32).prop_map(UiOp::OpenDetail),
            1 => Just(UiOp::Close),
            1 => Just(UiOp::Clear),
        ],
        0..max_ops,
    )
}

fn catalog_of(n: u32) -> Arc<Catalog> {
    let items = (1..=n)
        .map(|id| ContentItem {
            id,
            title: format!("Event {}", id),
            image_ref: format!("/assets/{}.png", id),
            description: String::new(),
            category: "Test".to_string(),
        })
        .collect();
    Arc::new(Catalog::new("Test", items, Vec::new()).expect("valid catalog"))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The active index never leaves [0, N)
    #[test]
    fn active_index_stays_in_bounds(len in 1..32usize, ops in nav_ops_strategy(200)) {
        let mut carousel = CarouselState::new(len);
        for op in ops {
            match op {
                NavOp::Next => carousel.next(),
                NavOp::Prev => carousel.prev(),
                NavOp::GoTo(i) => { carousel.go_to(i); }
            }
            prop_assert!(carousel.active() < len);
        }
    }

    /// go_to sets exactly in range and is a no-op out of range
    #[test]
    fn go_to_is_exact_or_noop(len in 1..32usize, start in 0..32usize, target in 0..64usize) {
        let mut carousel = CarouselState::new(len);
        carousel.go_to(start % len);
        let before = carousel.active();

        let moved = carousel.go_to(target);
        if target < len {
            prop_assert!(moved);
            prop_assert_eq!(carousel.active(), target);
        } else {
            prop_assert!(!moved);
            prop_assert_eq!(carousel.active(), before);
        }
    }

    /// next then prev returns to the same slide
    #[test]
    fn next_prev_cancel(len in 1..32usize, steps in 0..100usize) {
        let mut carousel = CarouselState::new(len);
        for _ in 0..steps { carousel.next(); }
        let here = carousel.active();
        carousel.next();
        carousel.prev();
        prop_assert_eq!(carousel.active(), here);
        prop_assert_eq!(here, steps % len);
    }

    /// An open detail view always belongs to an existing card, and only
    /// revealed cards can be opened
    #[test]
    fn selection_only_from_revealed(ops in ui_ops_strategy(100)) {
        let catalog = catalog_of(8);
        let mut state = InteractionState::new(catalog.clone());

        for op in ops {
            match op {
                UiOp::Activate(id) => {
                    let was_revealed = state.reveal_state().is_revealed(id);
                    let outcome = state.activate(id);
                    match outcome {
                        Activation::Opened => prop_assert!(was_revealed),
                        Activation::Revealed { .. } => prop_assert!(!was_revealed),
                        Activation::Ignored => prop_assert!(!catalog.contains(id)),
                    }
                }
                UiOp::OpenDetail(id) => {
                    let was_revealed = state.reveal_state().is_revealed(id);
                    prop_assert_eq!(state.open_detail(id), was_revealed);
                }
                UiOp::Close => state.close_detail(),
                UiOp::Clear => { state.clear_reveals(); }
            }

            if let Some(id) = state.selection() {
                prop_assert!(catalog.contains(id));
            }
            for id in state.reveal_state().revealed() {
                prop_assert!(catalog.contains(id));
            }
        }
    }

    /// The reveal set only grows between clears
    #[test]
    fn reveals_are_monotonic(ids in prop::collection::vec(1..=8u32, 0..50)) {
        let mut state = InteractionState::new(catalog_of(8));
        let mut previous = 0;
        for id in ids {
            state.activate(id);
            let now = state.reveal_state().len();
            prop_assert!(now >= previous);
            previous = now;
        }
    }
}
