//! Consumable use.
//!
//! Consuming is permanent: every modifier on the item is written into the
//! base record. There is no undo.

use crate::catalog::{HpModType, Item, ItemId};
use crate::character::{CharacterBase, CharacterDelta, InventoryDelta};
use crate::error::{EngineError, ErrorSeverity};
use crate::skills::Skill;

/// Errors from [`resolve_consumption`]. Both indicate a caller or catalog bug.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumeError {
    #[error("item '{item}' is not consumable")]
    ItemNotConsumable { item: ItemId },

    #[error("unknown skill '{name}' in item skill modifiers")]
    UnknownSkill { name: String },
}

impl EngineError for ConsumeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotConsumable { .. } => "ITEM_NOT_CONSUMABLE",
            Self::UnknownSkill { .. } => "UNKNOWN_SKILL",
        }
    }
}

/// Result of consuming one unit of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consumption {
    pub character_delta: CharacterDelta,
    pub inventory_delta: InventoryDelta,
}

/// Resolves consuming one unit of `item` held in a stack of `current_quantity`.
///
/// Fields the item does not touch stay `None` in the character delta.
pub fn resolve_consumption(
    base: &CharacterBase,
    item: &Item,
    current_quantity: u32,
) -> Result<Consumption, ConsumeError> {
    if !item.consumable {
        return Err(ConsumeError::ItemNotConsumable {
            item: item.id.clone(),
        });
    }

    let mods = &item.modifiers;
    let mut delta = CharacterDelta::new();

    if !mods.abilities.is_zero() {
        delta.abilities = Some(base.abilities.plus(&mods.abilities));
    }
    if mods.ac != 0 {
        delta.ac = Some(base.ac + mods.ac);
    }
    if mods.speed != 0 {
        delta.speed = Some(base.speed_or_default() + mods.speed);
    }
    if mods.init != 0 {
        delta.initiative_modifier = Some(base.initiative_or_default() + mods.init);
    }
    if mods.ic != 0 {
        delta.implant_capacity = Some(base.implant_capacity_or_default() + mods.ic);
    }

    if mods.hp != 0 {
        match item.hp_mod_type.unwrap_or(HpModType::Heal) {
            HpModType::Heal => {
                delta.current_hp = Some((base.current_hp + mods.hp).min(base.max_hp));
            }
            HpModType::MaxHp => {
                delta.max_hp = Some(base.max_hp + mods.hp);
                delta.current_hp = Some(base.current_hp + mods.hp);
            }
        }
    }

    if !item.skill_mods.is_empty() {
        let mut skills = base.skills.clone();
        for (name, bonus) in &item.skill_mods {
            let skill = Skill::from_display_name(name)
                .ok_or_else(|| ConsumeError::UnknownSkill { name: name.clone() })?;
            skills.add(skill, *bonus);
        }
        delta.skills = Some(skills);
    }

    let inventory_delta = if current_quantity > 1 {
        InventoryDelta::Quantity(current_quantity - 1)
    } else {
        InventoryDelta::Deleted
    };

    tracing::debug!(
        character = %base.id,
        item = %item.id,
        ?inventory_delta,
        "resolved consumption"
    );

    Ok(Consumption {
        character_delta: delta,
        inventory_delta,
    })
}
