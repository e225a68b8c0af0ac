//! Text and JSON output.

use anyhow::{Context, Result};
use console::style;
use rigsheet_core::{
    Ability, CharacterSheet, ChargeType, ClassDefinition, ComputedStats, Consumption,
    InventoryDelta, ProficiencyTable, SheetConfig, Skill, Stat,
};
use serde::Serialize;
use strum::IntoEnumIterator;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn signed(value: i32) -> String {
    format!("{value:+}")
}

pub fn stats(sheet: &CharacterSheet) -> String {
    let base = sheet.base();
    let stats = sheet.stats();
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({}, level {})\n",
        style(&base.name).bold(),
        sheet.class().name,
        base.level
    ));
    out.push_str(&format!(
        "HP {}/{}   AC {}   Speed {}   Init {}\n",
        base.current_hp,
        stats.hp,
        stats.ac,
        stats.speed,
        signed(stats.initiative)
    ));
    out.push_str(&format!(
        "Implants {}/{} IC used, {} remaining\n",
        stats.ic_used, stats.ic, stats.ic_remaining
    ));
    out.push_str(&format!(
        "Slots: armor {}/{}, weapons {}/{}\n",
        stats.armor_count,
        SheetConfig::MAX_EQUIPPED_ARMOR,
        stats.weapon_count,
        SheetConfig::MAX_EQUIPPED_WEAPONS
    ));
    if stats.has_non_proficient_armor {
        out.push_str(&format!(
            "{}\n",
            style("Non-proficient armor: AC -2, speed -10").yellow()
        ));
    }

    let abilities: Vec<String> = Stat::iter()
        .map(|stat| format!("{stat} {}", signed(stats.abilities.get(stat))))
        .collect();
    out.push_str(&abilities.join("  "));
    out.push('\n');

    out.push_str(&format!("\n{}\n", style("Skills").underlined()));
    for skill in Skill::iter() {
        let bonus = stats.skill_bonus(base, skill);
        let gear = stats.skill_mod(skill);
        let note = if gear != 0 {
            format!(" (gear {})", signed(gear))
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {:<16} {:>3}{}\n",
            skill.display_name(),
            signed(bonus),
            note
        ));
    }

    out.push_str(&format!("\n{}\n", style("Inventory").underlined()));
    for entry in sheet.inventory() {
        let marker = if entry.equipped { "*" } else { " " };
        let to_hit = match entry.item.weapon_category() {
            Some(category) if entry.equipped && entry.item.is_weapon() => format!(
                "  to-hit {}",
                signed(ProficiencyTable::weapon_to_hit(base, category))
            ),
            _ => String::new(),
        };
        out.push_str(&format!(
            "  {marker} {:>4}  {} x{}{to_hit}\n",
            entry.id.to_string(),
            entry.item.name,
            entry.quantity
        ));
    }
    out
}

pub fn computed(stats: &ComputedStats) -> String {
    format!(
        "HP {}  AC {}  Speed {}  Init {}  IC {}/{}",
        stats.hp,
        stats.ac,
        stats.speed,
        signed(stats.initiative),
        stats.ic_remaining,
        stats.ic
    )
}

pub fn abilities(list: &[Ability]) -> String {
    let mut out = String::new();
    for ability in list {
        let charges = match ability.charge_type {
            ChargeType::Infinite => "at will".to_string(),
            ChargeType::Uses => format!("{}/{}", ability.current_charges, ability.max_charges),
        };
        let origin = match &ability.item_name {
            Some(item) => format!("{} ({item})", ability.source),
            None => ability.source.to_string(),
        };
        out.push_str(&format!(
            "{} {:<9} {:<24} {} {}\n",
            style(format!("{:<22}", ability.name)).bold(),
            charges,
            origin,
            style(format!("[{}]", ability.id)).dim(),
            ability.description
        ));
    }
    out
}

pub fn consumption(consumption: &Consumption) -> String {
    let delta = &consumption.character_delta;
    let mut out = String::new();
    let mut field = |name: &str, value: Option<i32>| {
        if let Some(value) = value {
            out.push_str(&format!("  {name} -> {value}\n"));
        }
    };
    field("current_hp", delta.current_hp);
    field("max_hp", delta.max_hp);
    field("ac", delta.ac);
    field("speed", delta.speed);
    field("initiative", delta.initiative_modifier);
    field("implant_capacity", delta.implant_capacity);

    if let Some(scores) = delta.abilities {
        let line: Vec<String> = Stat::iter()
            .map(|stat| format!("{stat} {}", signed(scores.get(stat))))
            .collect();
        out.push_str(&format!("  abilities -> {}\n", line.join(" ")));
    }
    if delta.skills.is_some() {
        out.push_str("  skills updated\n");
    }
    match consumption.inventory_delta {
        InventoryDelta::Quantity(q) => out.push_str(&format!("  {q} left\n")),
        InventoryDelta::Deleted => out.push_str("  used up\n"),
    }
    out
}

pub fn classes(classes: &[&ClassDefinition]) -> String {
    let mut out = String::new();
    for class in classes {
        let armor: Vec<String> = class
            .armor_proficiencies
            .iter()
            .map(|a| a.to_string())
            .collect();
        out.push_str(&format!(
            "{:<10} {} HP {:>2}  AC {:>2}  IC {}  armor: {}\n",
            class.id.as_str(),
            style(format!("{:<10}", class.name)).bold(),
            class.base_hp,
            class.base_ac,
            class.base_implant_capacity,
            armor.join(", ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigsheet_core::{
        CharacterBase, CharacterId, EntryId, InventoryEntry, Item, ItemKind, WeaponCategory,
    };

    #[test]
    fn equipped_weapons_show_to_hit() {
        let class = ClassDefinition::new("solo", "Solo");
        let mut base = CharacterBase::from_class(CharacterId(1), "Vex", &class);
        base.weapon_proficiencies.set(WeaponCategory::Pistol, 3);

        let pistol = Item::new("pistol", "Pistol", ItemKind::Weapon).with_subtype("pistol");
        let rifle = Item::new("rifle", "Rifle", ItemKind::Weapon).with_subtype("rifle");
        let inventory = vec![
            InventoryEntry::new(EntryId(1), base.id, pistol, 1).equipped(),
            InventoryEntry::new(EntryId(2), base.id, rifle, 1),
        ];
        let sheet = CharacterSheet::new(base, inventory, class, Vec::new());

        let text = stats(&sheet);
        assert!(text.contains("Pistol x1  to-hit +2"));
        assert!(!text.contains("Rifle x1  to-hit"));
    }
}
