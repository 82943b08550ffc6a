use super::types::Item;
use crate::core::constants::{MAX_INVENTORY_SLOTS, STARTING_INVENTORY_SLOTS};
use serde::{Deserialize, Serialize};

/// Owned, unequipped items in pickup order.
///
/// `len() <= slots() <= MAX_INVENTORY_SLOTS` holds after every mutation,
/// and loading refuses records that break it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InventoryRecord")]
pub struct Inventory {
    items: Vec<Item>,
    slots: usize,
}

#[derive(Deserialize)]
struct InventoryRecord {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default = "starting_slots")]
    slots: usize,
}

fn starting_slots() -> usize {
    STARTING_INVENTORY_SLOTS
}

impl TryFrom<InventoryRecord> for Inventory {
    type Error = String;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        let slots = record.slots.min(MAX_INVENTORY_SLOTS);
        if record.items.len() > slots {
            return Err(format!(
                "inventory holds {} items but has only {} slots",
                record.items.len(),
                slots
            ));
        }
        Ok(Self {
            items: record.items,
            slots,
        })
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_slots(STARTING_INVENTORY_SLOTS)
    }

    pub fn with_slots(slots: usize) -> Self {
        Self {
            items: Vec::new(),
            slots: slots.min(MAX_INVENTORY_SLOTS),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.slots
    }

    /// Adds an item, handing it back if there is no room.
    pub fn push(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, item_id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(index))
    }

    /// Puts `replacement` where `item_id` sits and returns the item it
    /// replaced. Capacity is unchanged, so this works on a full inventory.
    pub fn swap(&mut self, item_id: &str, replacement: Item) -> Result<Item, Item> {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(slot) => Ok(std::mem::replace(slot, replacement)),
            None => Err(replacement),
        }
    }

    pub fn get(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn get_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.get(item_id).is_some()
    }

    /// Grows capacity by one. Returns false at the hard maximum.
    pub fn add_slot(&mut self) -> bool {
        if self.slots >= MAX_INVENTORY_SLOTS {
            return false;
        }
        self.slots += 1;
        true
    }
}
