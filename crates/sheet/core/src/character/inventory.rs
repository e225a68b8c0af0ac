//! Inventory entries owned by a character.

use super::CharacterId;
use crate::catalog::Item;

/// Persisted identifier of an inventory entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntryId(pub u32);

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One stack of an item in a character's inventory.
///
/// A quantity of 0 never persists: the entry is deleted instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    pub id: EntryId,
    pub character_id: CharacterId,
    pub item: Item,
    pub quantity: u32,
    pub equipped: bool,
}

impl InventoryEntry {
    pub fn new(id: EntryId, character_id: CharacterId, item: Item, quantity: u32) -> Self {
        Self {
            id,
            character_id,
            item,
            quantity,
            equipped: false,
        }
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }

    /// Applies an inventory delta. Returns `None` when the entry is deleted.
    pub fn apply_delta(mut self, delta: InventoryDelta) -> Option<Self> {
        match delta {
            InventoryDelta::Quantity(0) | InventoryDelta::Deleted => None,
            InventoryDelta::Quantity(quantity) => {
                self.quantity = quantity;
                Some(self)
            }
        }
    }
}

/// Items of every equipped entry, in inventory order.
pub fn equipped_items(entries: &[InventoryEntry]) -> impl Iterator<Item = &Item> {
    entries
        .iter()
        .filter(|entry| entry.equipped)
        .map(|entry| &entry.item)
}

/// Change to one inventory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InventoryDelta {
    /// New quantity.
    Quantity(u32),
    /// Remove the entry.
    Deleted,
}
