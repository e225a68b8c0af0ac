//! In-memory character sheet.
//!
//! [`CharacterSheet`] owns one consistent snapshot (base record, inventory,
//! class definition, granted abilities) and keeps the derived stats and the
//! merged ability list in sync with it. Every mutation re-folds from the full
//! snapshot.
//!
//! Mutations take an [`ActionLock`]. The lock is owned by whatever drives
//! play (a game master, a turn tracker); the sheet only honours it.
//!
//! Charges spent on character abilities are written back to the granted
//! ability and persist with the record. Class and item abilities are rebuilt
//! from catalog data, so their spent charges live in the session until
//! [`CharacterSheet::restore_charges`].

mod lock;

pub use lock::ActionLock;

use std::collections::BTreeMap;

use crate::abilities::{
    Ability, AbilitySource, ChargeError, ChargeType, CharacterAbility, ItemAbilitySource,
    aggregate_abilities,
};
use crate::catalog::{ClassDefinition, ItemId};
use crate::character::{CharacterBase, EntryId, InventoryDelta, InventoryEntry, equipped_items};
use crate::error::{EngineError, ErrorSeverity};
use crate::rules::{ConsumeError, Consumption, RejectionReason, can_equip, resolve_consumption};
use crate::stats::{ComputedStats, compute_stats};

/// Errors from sheet mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    #[error("actions are locked: {reason}")]
    Locked { reason: String },

    #[error("inventory entry {0} not found")]
    EntryNotFound(EntryId),

    #[error("item '{item}' cannot be equipped")]
    NotEquippable { item: ItemId },

    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error(transparent)]
    Consume(#[from] ConsumeError),

    #[error("ability '{ability}' not found")]
    AbilityNotFound { ability: String },

    #[error(transparent)]
    Charge(#[from] ChargeError),
}

impl EngineError for SheetError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Locked { .. } => ErrorSeverity::Recoverable,
            Self::EntryNotFound(_) | Self::NotEquippable { .. } | Self::AbilityNotFound { .. } => {
                ErrorSeverity::Validation
            }
            Self::Rejected(e) => e.severity(),
            Self::Consume(e) => e.severity(),
            Self::Charge(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Locked { .. } => "SHEET_ACTIONS_LOCKED",
            Self::EntryNotFound(_) => "SHEET_ENTRY_NOT_FOUND",
            Self::NotEquippable { .. } => "SHEET_NOT_EQUIPPABLE",
            Self::AbilityNotFound { .. } => "SHEET_ABILITY_NOT_FOUND",
            Self::Rejected(e) => e.error_code(),
            Self::Consume(e) => e.error_code(),
            Self::Charge(e) => e.error_code(),
        }
    }
}

/// A character with everything needed to derive its sheet.
#[derive(Clone, Debug)]
pub struct CharacterSheet {
    base: CharacterBase,
    inventory: Vec<InventoryEntry>,
    class: ClassDefinition,
    granted: Vec<CharacterAbility>,
    /// Remaining charges of class and item abilities, by ability id.
    session_charges: BTreeMap<String, u32>,
    stats: ComputedStats,
    abilities: Vec<Ability>,
}

impl CharacterSheet {
    pub fn new(
        base: CharacterBase,
        inventory: Vec<InventoryEntry>,
        class: ClassDefinition,
        granted: Vec<CharacterAbility>,
    ) -> Self {
        let mut sheet = Self {
            base,
            inventory,
            class,
            granted,
            session_charges: BTreeMap::new(),
            stats: ComputedStats::default(),
            abilities: Vec::new(),
        };
        sheet.refresh();
        sheet
    }

    pub fn base(&self) -> &CharacterBase {
        &self.base
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    pub fn class(&self) -> &ClassDefinition {
        &self.class
    }

    /// Abilities granted directly to the character.
    pub fn granted_abilities(&self) -> &[CharacterAbility] {
        &self.granted
    }

    pub fn stats(&self) -> &ComputedStats {
        &self.stats
    }

    /// Merged abilities: character, class, item.
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn entry(&self, id: EntryId) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|entry| entry.id == id)
    }

    pub fn ability(&self, id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|ability| ability.id == id)
    }

    fn position(&self, id: EntryId) -> Result<usize, SheetError> {
        self.inventory
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(SheetError::EntryNotFound(id))
    }

    /// Dry run of [`Self::equip`]: reports whether the entry could be equipped
    /// now, without honouring or needing the lock.
    pub fn check_equip(&self, id: EntryId) -> Result<(), SheetError> {
        let entry = &self.inventory[self.position(id)?];
        if entry.equipped {
            return Ok(());
        }
        if !entry.item.equippable {
            return Err(SheetError::NotEquippable {
                item: entry.item.id.clone(),
            });
        }
        can_equip(&entry.item, &self.stats)?;
        Ok(())
    }

    /// Equips an entry. Equipping an equipped entry is a no-op.
    pub fn equip(&mut self, id: EntryId, lock: &ActionLock) -> Result<ComputedStats, SheetError> {
        lock.ensure_unlocked()?;
        let index = self.position(id)?;
        if self.inventory[index].equipped {
            return Ok(self.stats.clone());
        }

        if let Err(err) = self.check_equip(id) {
            tracing::info!(character = %self.base.id, entry = %id, %err, "equip refused");
            return Err(err);
        }

        self.inventory[index].equipped = true;
        self.refresh();
        tracing::info!(
            character = %self.base.id,
            item = %self.inventory[index].item.id,
            "equipped"
        );
        Ok(self.stats.clone())
    }

    /// Unequips an entry. Always permitted while unlocked.
    pub fn unequip(&mut self, id: EntryId, lock: &ActionLock) -> Result<ComputedStats, SheetError> {
        lock.ensure_unlocked()?;
        let index = self.position(id)?;
        if self.inventory[index].equipped {
            self.inventory[index].equipped = false;
            self.refresh();
            tracing::info!(
                character = %self.base.id,
                item = %self.inventory[index].item.id,
                "unequipped"
            );
        }
        Ok(self.stats.clone())
    }

    /// Consumes one unit of an entry and applies the result to the snapshot.
    ///
    /// The returned [`Consumption`] is what a persistence layer should write.
    pub fn consume(&mut self, id: EntryId, lock: &ActionLock) -> Result<Consumption, SheetError> {
        lock.ensure_unlocked()?;
        let index = self.position(id)?;
        let entry = &self.inventory[index];
        let consumption = resolve_consumption(&self.base, &entry.item, entry.quantity)?;

        self.base.apply_delta(&consumption.character_delta);
        let entry = self.inventory.remove(index);
        let item = entry.item.id.clone();
        match entry.apply_delta(consumption.inventory_delta) {
            Some(entry) => self.inventory.insert(index, entry),
            None => tracing::debug!(entry = %id, "inventory entry used up"),
        }

        self.refresh();
        tracing::info!(
            character = %self.base.id,
            %item,
            remaining = match consumption.inventory_delta {
                InventoryDelta::Quantity(q) => q,
                InventoryDelta::Deleted => 0,
            },
            "consumed"
        );
        Ok(consumption)
    }

    /// Spends one charge of an ability and returns the charges left.
    ///
    /// Infinite abilities succeed without changing anything.
    pub fn spend_charge(&mut self, ability_id: &str, lock: &ActionLock) -> Result<u32, SheetError> {
        lock.ensure_unlocked()?;
        let index = self
            .abilities
            .iter()
            .position(|ability| ability.id == ability_id)
            .ok_or_else(|| SheetError::AbilityNotFound {
                ability: ability_id.to_string(),
            })?;

        let remaining = self.abilities[index].spend_charge()?;
        let ability = &self.abilities[index];
        if ability.charge_type == ChargeType::Uses {
            match ability.source {
                AbilitySource::Character => {
                    if let Some(granted) = self.granted.iter_mut().find(|g| g.id == ability.id) {
                        granted.current_charges = remaining;
                    }
                }
                AbilitySource::Class | AbilitySource::Item => {
                    self.session_charges.insert(ability.id.clone(), remaining);
                }
            }
        }
        tracing::info!(
            character = %self.base.id,
            ability = %ability.id,
            remaining,
            "charge spent"
        );
        Ok(remaining)
    }

    /// Refills every limited ability, as after a rest.
    pub fn restore_charges(&mut self, lock: &ActionLock) -> Result<(), SheetError> {
        lock.ensure_unlocked()?;
        for granted in &mut self.granted {
            if granted.charge_type == ChargeType::Uses {
                granted.current_charges = granted.max_charges;
            }
        }
        self.session_charges.clear();
        self.refresh();
        tracing::info!(character = %self.base.id, "charges restored");
        Ok(())
    }

    /// Re-derives stats and abilities from the full snapshot.
    fn refresh(&mut self) {
        self.stats = compute_stats(&self.base, equipped_items(&self.inventory), &self.class);
        self.abilities = aggregate_abilities(
            &self.granted,
            &self.base.features,
            ItemAbilitySource::from_inventory(&self.inventory),
        );
        for ability in &mut self.abilities {
            if let Some(&left) = self.session_charges.get(&ability.id) {
                ability.current_charges = left.min(ability.max_charges);
            }
        }
    }
}
