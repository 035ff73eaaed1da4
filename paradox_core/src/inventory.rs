use serde::{Deserialize, Serialize};

use crate::Item;

/// Number of items the player can carry unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Your inventory is full ({capacity} items). You can't carry anything else.")]
    Full { capacity: usize },
}

/// Fixed-capacity, ordered collection of carried items.
///
/// Items are appended at the tail and removed by value (first match), so the
/// remaining items keep their relative order. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `item`, or leaves the inventory untouched when it is full.
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first occurrence of `item`. Absent items are a no-op.
    pub fn remove(&mut self, item: Item) -> Option<Item> {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    /// Slot of the first occurrence of `item`.
    pub fn index_of(&self, item: Item) -> Option<usize> {
        self.items.iter().position(|held| *held == item)
    }

    pub fn contains(&self, item: Item) -> bool {
        self.index_of(item).is_some()
    }

    pub fn holds_all(&self, items: &[Item]) -> bool {
        items.iter().all(|item| self.contains(*item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;
    use strum::IntoEnumIterator;

    fn any_item() -> impl Strategy<Value = Item> {
        select(Item::iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn size_never_exceeds_capacity(items in prop::collection::vec(any_item(), 0..40)) {
            let mut inventory = Inventory::new();
            for item in items {
                let before = inventory.len();
                match inventory.add(item) {
                    Ok(()) => prop_assert_eq!(inventory.len(), before + 1),
                    Err(_) => prop_assert_eq!(inventory.len(), before),
                }
                prop_assert!(inventory.len() <= DEFAULT_CAPACITY);
            }
        }

        #[test]
        fn remove_keeps_relative_order(
            items in prop::collection::vec(any_item(), 0..10),
            target in any_item(),
        ) {
            let mut inventory = Inventory::new();
            for item in &items {
                inventory.add(*item).unwrap();
            }
            let mut expected = items.clone();
            if let Some(index) = expected.iter().position(|i| *i == target) {
                expected.remove(index);
            }
            inventory.remove(target);
            prop_assert_eq!(inventory.items(), expected.as_slice());
        }
    }
}
