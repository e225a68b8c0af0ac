//! Stat aggregation - folds a base record and its equipped items into
//! [`ComputedStats`].
//!
//! ```text
//! final = base + Σ item modifiers - (non-proficient armor penalty, once)
//! ```
//!
//! The fold is a saturating sum, so item order never changes the result and
//! corrupt catalog values cannot overflow it.

use std::collections::BTreeMap;

use super::abilities::AbilityScores;
use super::computed::ComputedStats;
use crate::catalog::{ClassDefinition, Item};
use crate::character::CharacterBase;
use crate::config::SheetConfig;

/// Running totals over an equipped set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifierTotals {
    pub abilities: AbilityScores,
    pub hp: i32,
    pub ac: i32,
    pub speed: i32,
    pub init: i32,
    pub ic: i32,
    pub skill_mods: BTreeMap<String, i32>,
    pub armor_count: u32,
    pub weapon_count: u32,
    pub ic_used: i32,
    pub has_non_proficient_armor: bool,
}

impl ModifierTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one equipped item into the totals.
    pub fn add_item(&mut self, item: &Item, class_def: &ClassDefinition) {
        if item.is_armor() {
            self.armor_count = self.armor_count.saturating_add(1);
            let proficient = item
                .armor_category()
                .is_some_and(|category| class_def.is_proficient_with(category));
            if !proficient {
                self.has_non_proficient_armor = true;
            }
        }
        if item.is_weapon() {
            self.weapon_count = self.weapon_count.saturating_add(1);
        }
        if item.is_cyberware() {
            self.ic_used = self.ic_used.saturating_add(item.ic_cost);
        }

        let mods = &item.modifiers;
        self.abilities = self.abilities.plus(&mods.abilities);
        self.hp = self.hp.saturating_add(mods.hp);
        self.ac = self.ac.saturating_add(mods.ac);
        self.speed = self.speed.saturating_add(mods.speed);
        self.init = self.init.saturating_add(mods.init);
        self.ic = self.ic.saturating_add(mods.ic);

        for (skill, bonus) in &item.skill_mods {
            let total = self.skill_mods.entry(skill.clone()).or_insert(0);
            *total = total.saturating_add(*bonus);
        }
    }

    /// Applies the armor penalty and resolves the totals against `base`.
    pub fn finish(mut self, base: &CharacterBase) -> ComputedStats {
        if self.has_non_proficient_armor {
            self.ac = self.ac.saturating_sub(SheetConfig::NON_PROFICIENT_AC_PENALTY);
            self.speed = self
                .speed
                .saturating_sub(SheetConfig::NON_PROFICIENT_SPEED_PENALTY);
        }

        let ic = base.implant_capacity_or_default().saturating_add(self.ic);
        ComputedStats {
            hp: base.max_hp.saturating_add(self.hp),
            ac: base.ac.saturating_add(self.ac),
            abilities: base.abilities.plus(&self.abilities),
            speed: base.speed_or_default().saturating_add(self.speed),
            initiative: base.initiative_or_default().saturating_add(self.init),
            ic,
            skill_mods: self.skill_mods,
            has_non_proficient_armor: self.has_non_proficient_armor,
            armor_count: self.armor_count,
            weapon_count: self.weapon_count,
            ic_used: self.ic_used,
            ic_remaining: ic.saturating_sub(self.ic_used),
        }
    }
}

/// Computes effective stats for `base` wearing `equipped`.
///
/// Only the items passed in are considered; filter an inventory with
/// [`crate::character::equipped_items`] first.
pub fn compute_stats<'a>(
    base: &CharacterBase,
    equipped: impl IntoIterator<Item = &'a Item>,
    class_def: &ClassDefinition,
) -> ComputedStats {
    let mut totals = ModifierTotals::new();
    for item in equipped {
        tracing::trace!(item = %item.id, kind = %item.kind, "folding equipped item");
        totals.add_item(item, class_def);
    }

    let stats = totals.finish(base);
    tracing::debug!(
        character = %base.id,
        hp = stats.hp,
        ac = stats.ac,
        ic_remaining = stats.ic_remaining,
        non_proficient = stats.has_non_proficient_armor,
        "computed stats"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArmorCategory, ItemKind, ItemModifiers};

    fn base() -> CharacterBase {
        CharacterBase {
            max_hp: 20,
            current_hp: 20,
            ac: 12,
            abilities: AbilityScores::new(1, 2, 0, 0, 1, -1),
            ..CharacterBase::default()
        }
    }

    fn solo() -> ClassDefinition {
        ClassDefinition::new("solo", "Solo")
            .with_armor_proficiencies([ArmorCategory::Clothes, ArmorCategory::Light])
    }

    fn vest(subtype: &str) -> Item {
        Item::new("vest", "Vest", ItemKind::Armor)
            .with_subtype(subtype)
            .with_modifiers(ItemModifiers {
                ac: 3,
                ..ItemModifiers::default()
            })
    }

    fn eye() -> Item {
        Item::new("eye", "Kiroshi Optics", ItemKind::Cyberware)
            .with_ic_cost(2)
            .with_skill_mod("Perception", 2)
            .with_modifiers(ItemModifiers {
                init: 1,
                ..ItemModifiers::default()
            })
    }

    fn rifle() -> Item {
        Item::new("rifle", "Rifle", ItemKind::Weapon).with_modifiers(ItemModifiers {
            abilities: AbilityScores::new(0, 1, 0, 0, 0, 0),
            ..ItemModifiers::default()
        })
    }

    #[test]
    fn empty_set_uses_base_and_fallbacks() {
        let stats = compute_stats(&base(), [], &solo());
        assert_eq!(stats.hp, 20);
        assert_eq!(stats.ac, 12);
        assert_eq!(stats.speed, 30);
        assert_eq!(stats.initiative, 0);
        assert_eq!(stats.ic, 3);
        assert_eq!(stats.ic_remaining, 3);
        assert!(stats.skill_mods.is_empty());
        assert!(!stats.has_non_proficient_armor);
    }

    #[test]
    fn order_does_not_matter() {
        let items = [vest("light"), eye(), rifle()];
        let forward = compute_stats(&base(), items.iter(), &solo());
        let reverse = compute_stats(&base(), items.iter().rev(), &solo());
        assert_eq!(forward, reverse);
    }

    #[test]
    fn recompute_is_idempotent() {
        let items = [vest("light"), eye()];
        let first = compute_stats(&base(), &items, &solo());
        let second = compute_stats(&base(), &items, &solo());
        assert_eq!(first, second);
    }

    #[test]
    fn non_proficient_armor_penalty() {
        let heavy = [vest("heavy")];
        let stats = compute_stats(&base(), &heavy, &solo());
        assert!(stats.has_non_proficient_armor);
        assert_eq!(stats.ac, 12 + 3 - 2);
        assert_eq!(stats.speed, 30 - 10);

        // Removing the armor removes the penalty.
        let stats = compute_stats(&base(), [], &solo());
        assert!(!stats.has_non_proficient_armor);
        assert_eq!((stats.ac, stats.speed), (12, 30));
    }

    #[test]
    fn unknown_armor_subtype_is_non_proficient() {
        let mut bare = vest("light");
        bare.subtype = None;
        assert!(compute_stats(&base(), [&bare], &solo()).has_non_proficient_armor);
        let odd = vest("powered");
        assert!(compute_stats(&base(), [&odd], &solo()).has_non_proficient_armor);
    }

    #[test]
    fn penalty_applies_once() {
        // Slot rules prevent this state; the fold must still not double the penalty.
        let items = [vest("heavy"), vest("medium")];
        let stats = compute_stats(&base(), &items, &solo());
        assert_eq!(stats.armor_count, 2);
        assert_eq!(stats.ac, 12 + 6 - 2);
        assert_eq!(stats.speed, 20);
    }

    #[test]
    fn capacity_accounting() {
        let items = [eye(), rifle(), rifle()];
        let stats = compute_stats(&base(), &items, &solo());
        assert_eq!(stats.weapon_count, 2);
        assert_eq!(stats.ic_used, 2);
        assert_eq!(stats.ic_remaining, stats.ic - stats.ic_used);
        assert_eq!(stats.initiative, 1);
        assert_eq!(stats.abilities.dex, 2 + 2);
    }

    #[test]
    fn ic_modifiers_raise_capacity() {
        let booster = Item::new("sys", "Neural Link", ItemKind::Cyberware)
            .with_ic_cost(1)
            .with_modifiers(ItemModifiers {
                ic: 2,
                ..ItemModifiers::default()
            });
        let record = CharacterBase {
            implant_capacity: Some(4),
            ..base()
        };
        let stats = compute_stats(&record, [&booster], &solo());
        assert_eq!(stats.ic, 6);
        assert_eq!(stats.ic_remaining, 5);
    }

    #[test]
    fn skill_mods_sum_across_items() {
        let amulet = Item::new("amulet", "Amulet", ItemKind::Gear).with_skill_mod("Stealth", 1);
        let cloak = Item::new("cloak", "Cloak", ItemKind::Gear)
            .with_skill_mod("Stealth", 2)
            .with_skill_mod("Perception", 1);
        let stats = compute_stats(&base(), [&amulet, &cloak], &solo());
        assert_eq!(stats.skill_mods.get("Stealth"), Some(&3));
        assert_eq!(stats.skill_mods.get("Perception"), Some(&1));
    }

    #[test]
    fn extreme_modifiers_saturate() {
        let relic = Item::new("relic", "Relic", ItemKind::Cyberware)
            .with_ic_cost(i32::MIN)
            .with_skill_mod("Stealth", i32::MAX)
            .with_modifiers(ItemModifiers {
                hp: i32::MAX,
                ac: i32::MIN,
                abilities: AbilityScores::new(i32::MAX, 0, 0, 0, 0, 0),
                ..ItemModifiers::default()
            });
        let stats = compute_stats(&base(), [&relic, &relic], &solo());

        assert_eq!(stats.hp, i32::MAX);
        assert_eq!(stats.ac, i32::MIN + 12);
        assert_eq!(stats.abilities.str, i32::MAX);
        assert_eq!(stats.skill_mods.get("Stealth"), Some(&i32::MAX));
        assert_eq!(stats.ic_used, i32::MIN);
        assert_eq!(stats.ic_remaining, i32::MAX);
    }
}
