//! Ability merge.

use super::{Ability, AbilitySource, ChargeType, CharacterAbility};
use crate::catalog::{Item, ItemAbility};
use crate::character::{ClassFeature, InventoryEntry};

/// An item offered to the merge, with whether it is currently equipped.
#[derive(Clone, Copy, Debug)]
pub struct ItemAbilitySource<'a> {
    pub item: &'a Item,
    pub equipped: bool,
}

impl<'a> ItemAbilitySource<'a> {
    pub fn new(item: &'a Item, equipped: bool) -> Self {
        Self { item, equipped }
    }

    /// Every inventory entry carrying at least one ability.
    pub fn from_inventory(entries: &'a [InventoryEntry]) -> impl Iterator<Item = Self> + 'a {
        entries
            .iter()
            .filter(|entry| !entry.item.abilities.is_empty())
            .map(|entry| Self::new(&entry.item, entry.equipped))
    }
}

/// Stable id for a class-feature ability: `class:` + slug of the name.
///
/// The slug lower-cases ASCII letters and turns every other non-alphanumeric
/// character into `_`, so `"Second Wind"` becomes `class:second_wind`.
pub fn class_ability_id(feature_name: &str) -> String {
    let slug: String = feature_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("class:{slug}")
}

fn from_character(ability: &CharacterAbility) -> Ability {
    Ability {
        id: ability.id.clone(),
        name: ability.name.clone(),
        description: ability.description.clone(),
        source: AbilitySource::Character,
        charge_type: ability.charge_type,
        current_charges: ability.current_charges,
        max_charges: ability.max_charges,
        damage: ability.damage.clone(),
        range: ability.range.clone(),
        duration: ability.duration.clone(),
        effects: ability.effects.clone(),
        item_name: None,
    }
}

fn from_feature(feature: &ClassFeature) -> Ability {
    let charges = feature.charges.unwrap_or(0);
    Ability {
        id: class_ability_id(&feature.name),
        name: feature.name.clone(),
        description: feature.description.clone(),
        source: AbilitySource::Class,
        charge_type: ChargeType::from_charges(feature.charges),
        current_charges: charges,
        max_charges: charges,
        damage: None,
        range: None,
        duration: None,
        effects: feature.effects.clone(),
        item_name: None,
    }
}

fn from_item(item: &Item, index: usize, def: &ItemAbility) -> Ability {
    let charges = def.charges.unwrap_or(0);
    Ability {
        id: format!("item:{}:{index}", item.id),
        name: def.name.clone(),
        description: def.description.clone(),
        source: AbilitySource::Item,
        charge_type: ChargeType::from_charges(def.charges),
        current_charges: charges,
        max_charges: charges,
        damage: def.damage.clone(),
        range: def.range.clone(),
        duration: def.duration.clone(),
        effects: def.effects.clone(),
        item_name: Some(item.name.clone()),
    }
}

/// Merges abilities in the order character, class, item.
///
/// Each group keeps its input order. Duplicated names are kept. An item
/// ability is included when its item is equipped, or when it does not
/// require the item to be equipped.
pub fn aggregate_abilities<'a>(
    character_abilities: &[CharacterAbility],
    class_features: &[ClassFeature],
    items: impl IntoIterator<Item = ItemAbilitySource<'a>>,
) -> Vec<Ability> {
    let mut merged: Vec<Ability> = character_abilities.iter().map(from_character).collect();
    merged.extend(class_features.iter().map(from_feature));

    for source in items {
        let item = source.item;
        merged.extend(
            item.abilities
                .iter()
                .enumerate()
                .filter(|(_, def)| source.equipped || !def.requires_equipped())
                .map(|(index, def)| from_item(item, index, def)),
        );
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    fn scope() -> Item {
        Item::new("scope", "Smart Scope", ItemKind::Cyberware)
            .with_ability(ItemAbility::new("Targeting Scope"))
    }

    #[test]
    fn merge_order_is_character_class_item() {
        let character = [CharacterAbility::new("a1", "Second Wind").with_uses(1)];
        let features = [ClassFeature::new("Overdrive", "").with_charges(2)];
        let item = scope();

        let merged =
            aggregate_abilities(&character, &features, [ItemAbilitySource::new(&item, true)]);

        let names: Vec<&str> = merged.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Second Wind", "Overdrive", "Targeting Scope"]);
        let sources: Vec<AbilitySource> = merged.iter().map(|a| a.source).collect();
        assert_eq!(
            sources,
            vec![
                AbilitySource::Character,
                AbilitySource::Class,
                AbilitySource::Item
            ]
        );
        assert_eq!(merged[2].item_name.as_deref(), Some("Smart Scope"));
    }

    #[test]
    fn class_features_become_synthetic_abilities() {
        let features = [
            ClassFeature::new("Overdrive", "").with_charges(2),
            ClassFeature::new("Combat Awareness", ""),
        ];
        let merged = aggregate_abilities(&[], &features, []);

        assert_eq!(merged[0].id, "class:overdrive");
        assert_eq!(merged[0].charge_type, ChargeType::Uses);
        assert_eq!(merged[0].current_charges, 2);
        assert_eq!(merged[1].id, "class:combat_awareness");
        assert_eq!(merged[1].charge_type, ChargeType::Infinite);

        // Ids are stable across calls.
        assert_eq!(aggregate_abilities(&[], &features, [])[0].id, merged[0].id);
    }

    #[test]
    fn unequipped_item_abilities_respect_flag() {
        let mut item = scope();
        item.abilities.push(ItemAbility {
            requires_equipped: Some(false),
            ..ItemAbility::new("Passive Ping")
        });

        let merged = aggregate_abilities(&[], &[], [ItemAbilitySource::new(&item, false)]);
        let names: Vec<&str> = merged.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Passive Ping"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let character = [CharacterAbility::new("a1", "Overdrive")];
        let features = [ClassFeature::new("Overdrive", "")];
        let merged = aggregate_abilities(&character, &features, []);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn slug_replaces_punctuation() {
        assert_eq!(class_ability_id("Netrunner's Edge"), "class:netrunner_s_edge");
    }
}
