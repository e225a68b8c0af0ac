use std::collections::BTreeMap;

use crate::config::SheetConfig;
use crate::stats::AbilityScores;

/// Catalog identifier of an item definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad item type. Only `Weapon`, `Armor` and `Cyberware` are slot- or
/// capacity-constrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Cyberware,
    #[default]
    Gear,
    Tool,
    Other,
}

/// Armor categories a class can be proficient with.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorCategory {
    Clothes,
    Light,
    Medium,
    Heavy,
}

/// Weapon categories that carry a proficiency rank.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponCategory {
    Melee,
    Pistol,
    Rifle,
    Shotgun,
    Heavy,
    Exotic,
}

/// Weapon proficiency rank (0–5) per weapon category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponProficiencies {
    pub melee: u8,
    pub pistol: u8,
    pub rifle: u8,
    pub shotgun: u8,
    pub heavy: u8,
    pub exotic: u8,
}

impl WeaponProficiencies {
    pub const fn rank(&self, category: WeaponCategory) -> u8 {
        match category {
            WeaponCategory::Melee => self.melee,
            WeaponCategory::Pistol => self.pistol,
            WeaponCategory::Rifle => self.rifle,
            WeaponCategory::Shotgun => self.shotgun,
            WeaponCategory::Heavy => self.heavy,
            WeaponCategory::Exotic => self.exotic,
        }
    }

    /// Sets a rank, saturating at [`SheetConfig::MAX_WEAPON_RANK`].
    pub fn set(&mut self, category: WeaponCategory, rank: u8) {
        let rank = rank.min(SheetConfig::MAX_WEAPON_RANK);
        let slot = match category {
            WeaponCategory::Melee => &mut self.melee,
            WeaponCategory::Pistol => &mut self.pistol,
            WeaponCategory::Rifle => &mut self.rifle,
            WeaponCategory::Shotgun => &mut self.shotgun,
            WeaponCategory::Heavy => &mut self.heavy,
            WeaponCategory::Exotic => &mut self.exotic,
        };
        *slot = rank;
    }
}

/// How a consumable's `hp` modifier is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HpModType {
    /// Restore current HP, capped at max HP.
    Heal,
    /// Raise max HP and current HP by the same amount.
    MaxHp,
}

/// Flat modifiers an item contributes while equipped (or permanently, when consumed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemModifiers {
    pub abilities: AbilityScores,
    pub hp: i32,
    pub ac: i32,
    pub speed: i32,
    pub init: i32,
    pub ic: i32,
}

/// An ability attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemAbility {
    pub name: String,
    pub description: String,
    pub charges: Option<u32>,
    pub damage: Option<String>,
    pub range: Option<String>,
    pub duration: Option<String>,
    pub effects: Vec<String>,
    /// `None` is read as `true`.
    pub requires_equipped: Option<bool>,
}

impl ItemAbility {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn requires_equipped(&self) -> bool {
        self.requires_equipped.unwrap_or(true)
    }
}

/// Static catalog definition of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    /// Weapon or armor category, as written in the catalog.
    pub subtype: Option<String>,
    pub modifiers: ItemModifiers,
    /// Implant capacity consumed while equipped (cyberware only).
    pub ic_cost: i32,
    /// Skill display name → bonus.
    pub skill_mods: BTreeMap<String, i32>,
    pub consumable: bool,
    pub equippable: bool,
    pub stack_size: u32,
    pub hp_mod_type: Option<HpModType>,
    pub price: u32,
    pub abilities: Vec<ItemAbility>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::new(),
            description: String::new(),
            kind: ItemKind::default(),
            subtype: None,
            modifiers: ItemModifiers::default(),
            ic_cost: 0,
            skill_mods: BTreeMap::new(),
            consumable: false,
            equippable: false,
            stack_size: 1,
            hp_mod_type: None,
            price: 0,
            abilities: Vec::new(),
        }
    }
}

impl Item {
    /// Creates an item. Weapons, armor and cyberware start equippable.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            kind,
            equippable: matches!(
                kind,
                ItemKind::Weapon | ItemKind::Armor | ItemKind::Cyberware
            ),
            ..Self::default()
        }
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: ItemModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_ic_cost(mut self, ic_cost: i32) -> Self {
        self.ic_cost = ic_cost;
        self
    }

    pub fn with_skill_mod(mut self, skill: impl Into<String>, bonus: i32) -> Self {
        *self.skill_mods.entry(skill.into()).or_insert(0) += bonus;
        self
    }

    pub fn with_ability(mut self, ability: ItemAbility) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Marks the item consumable with the given HP handling.
    pub fn consumable(mut self, hp_mod_type: Option<HpModType>) -> Self {
        self.consumable = true;
        self.hp_mod_type = hp_mod_type;
        self.stack_size = self.stack_size.max(1);
        self
    }

    pub fn is_armor(&self) -> bool {
        self.kind == ItemKind::Armor
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }

    pub fn is_cyberware(&self) -> bool {
        self.kind == ItemKind::Cyberware
    }

    /// Parsed armor category, if the subtype names one.
    pub fn armor_category(&self) -> Option<ArmorCategory> {
        self.subtype.as_deref()?.trim().parse().ok()
    }

    /// Parsed weapon category, if the subtype names one.
    pub fn weapon_category(&self) -> Option<WeaponCategory> {
        self.subtype.as_deref()?.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_equippable_by_kind() {
        assert!(Item::new("vest", "Vest", ItemKind::Armor).equippable);
        assert!(Item::new("eye", "Eye", ItemKind::Cyberware).equippable);
        assert!(!Item::new("stim", "Stim", ItemKind::Gear).equippable);
    }

    #[test]
    fn subtype_parsing() {
        let vest = Item::new("vest", "Vest", ItemKind::Armor).with_subtype("Light");
        assert_eq!(vest.armor_category(), Some(ArmorCategory::Light));

        let odd = Item::new("odd", "Odd", ItemKind::Armor).with_subtype("powered");
        assert_eq!(odd.armor_category(), None);

        let pistol = Item::new("p", "P", ItemKind::Weapon).with_subtype("pistol");
        assert_eq!(pistol.weapon_category(), Some(WeaponCategory::Pistol));
    }

    #[test]
    fn skill_mods_accumulate_per_name() {
        let item = Item::new("c", "Charm", ItemKind::Gear)
            .with_skill_mod("Persuasion", 1)
            .with_skill_mod("Persuasion", 2);
        assert_eq!(item.skill_mods.get("Persuasion"), Some(&3));
    }

    #[test]
    fn weapon_ranks_saturate() {
        let mut ranks = WeaponProficiencies::default();
        ranks.set(WeaponCategory::Rifle, 9);
        assert_eq!(ranks.rank(WeaponCategory::Rifle), SheetConfig::MAX_WEAPON_RANK);
    }

    #[test]
    fn item_ability_requires_equipped_by_default() {
        let mut ability = ItemAbility::new("Scan");
        assert!(ability.requires_equipped());
        ability.requires_equipped = Some(false);
        assert!(!ability.requires_equipped());
    }
}
