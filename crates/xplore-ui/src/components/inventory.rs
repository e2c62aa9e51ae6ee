//! Inventory Components
//!
//! Square item slots and the rows × cols grid they live in.

use dioxus::prelude::*;

use crate::theme::{classes, Biome};

/// Item held in a slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    /// Emoji or short glyph
    pub icon: String,
    pub count: Option<u32>,
    pub name: Option<String>,
}

impl InventoryItem {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            count: None,
            name: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Stack size to print in the corner; single items show none
pub fn stack_badge(count: Option<u32>) -> Option<u32> {
    count.filter(|c| *c > 1)
}

/// Lay `items` out over `rows * cols` slots, padding with empty slots and
/// dropping anything that does not fit.
pub fn fill_slots(items: &[Option<InventoryItem>], rows: usize, cols: usize) -> Vec<Option<InventoryItem>> {
    (0..rows * cols)
        .map(|i| items.get(i).cloned().flatten())
        .collect()
}

#[derive(Clone, PartialEq, Props)]
pub struct InventorySlotProps {
    #[props(default)]
    pub item: Option<String>,
    #[props(default)]
    pub count: Option<u32>,
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub class: Option<String>,
}

/// Single 64px slot with optional stack count
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     InventorySlot { item: "\u{1F9F1}".to_string(), count: 64, biome: Biome::Desert }
/// }
/// ```
#[component]
pub fn InventorySlot(props: InventorySlotProps) -> Element {
    let full_class = classes(
        &format!("mc-slot {}", props.biome.class()),
        props.class.as_deref(),
    );
    let vars = props.biome.palette().css_vars();

    rsx! {
        div { class: "{full_class}", style: "{vars}",
            if let Some(item) = &props.item {
                span { class: "mc-slot__item", "{item}" }
                if let Some(count) = stack_badge(props.count) {
                    span { class: "mc-slot__count", "{count}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct InventoryGridProps {
    #[props(default)]
    pub items: Vec<Option<InventoryItem>>,
    #[props(default = 4)]
    pub rows: usize,
    #[props(default = 9)]
    pub cols: usize,
    #[props(default)]
    pub biome: Biome,
}

#[component]
pub fn InventoryGrid(props: InventoryGridProps) -> Element {
    let slots = fill_slots(&props.items, props.rows, props.cols);
    let cols = props.cols;
    let biome = props.biome;

    rsx! {
        div {
            class: "mc-inventory {biome.class()}",
            style: "grid-template-columns: repeat({cols}, 1fr);",
            for (index, slot) in slots.into_iter().enumerate() {
                InventorySlot {
                    key: "{index}",
                    item: slot.as_ref().map(|s| s.icon.clone()),
                    count: slot.as_ref().and_then(|s| s.count),
                    biome: biome,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_items_have_no_badge() {
        assert_eq!(stack_badge(None), None);
        assert_eq!(stack_badge(Some(1)), None);
        assert_eq!(stack_badge(Some(64)), Some(64));
    }

    #[test]
    fn fill_pads_to_grid() {
        let items = vec![Some(InventoryItem::new("a")), None, Some(InventoryItem::new("b").with_count(3))];
        let slots = fill_slots(&items, 2, 3);
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].as_ref().unwrap().icon, "a");
        assert!(slots[1].is_none());
        assert_eq!(slots[2].as_ref().unwrap().count, Some(3));
        assert!(slots[3..].iter().all(Option::is_none));
    }

    #[test]
    fn fill_truncates_overflow() {
        let items: Vec<_> = (0..10).map(|i| Some(InventoryItem::new(i.to_string()))).collect();
        let slots = fill_slots(&items, 1, 4);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[3].as_ref().unwrap().icon, "3");
    }
}
