//! Player inventory.
//!
//! Stacks are kept in acquisition order, which is also the order the
//! inventory grid renders them in.

use super::{InventoryItem, ItemId, ItemKey};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    /// Adds a stack, merging into an existing one with the same key.
    pub fn add(&mut self, item: InventoryItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|stack| stack.matches(&item.key())) {
            Some(stack) => stack.quantity = stack.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    /// Removes up to `quantity` units of an item id across all of its stacks.
    ///
    /// Returns the number of units actually removed. Emptied stacks are
    /// dropped.
    pub fn remove(&mut self, id: &ItemId, quantity: u32) -> u32 {
        let mut remaining = quantity;
        for stack in self.items.iter_mut().filter(|stack| &stack.id == id) {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(stack.quantity);
            stack.quantity -= taken;
            remaining -= taken;
        }
        self.items.retain(|stack| stack.quantity > 0);
        quantity - remaining
    }

    /// Takes a single unit out of the stack identified by `key`.
    pub fn take_one(&mut self, key: &ItemKey) -> Option<InventoryItem> {
        let index = self.items.iter().position(|stack| stack.matches(key))?;
        let stack = &mut self.items[index];
        stack.quantity -= 1;
        let taken = stack.clone().with_quantity(1);
        if stack.quantity == 0 {
            self.items.remove(index);
        }
        Some(taken)
    }

    /// Total units of an item id, across rarities and upgrade levels.
    pub fn quantity_of(&self, id: &ItemId) -> u32 {
        self.items
            .iter()
            .filter(|stack| &stack.id == id)
            .map(|stack| stack.quantity)
            .sum()
    }

    pub fn has(&self, id: &ItemId, quantity: u32) -> bool {
        self.quantity_of(id) >= quantity
    }

    pub fn get(&self, key: &ItemKey) -> Option<&InventoryItem> {
        self.items.iter().find(|stack| stack.matches(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
