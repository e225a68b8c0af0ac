//! Persisted character state.
//!
//! - CharacterBase: the stored record (base attributes, proficiencies, features)
//! - InventoryEntry: one item stack owned by the character
//! - CharacterDelta / InventoryDelta: partial updates produced by the rules

mod delta;
mod feature;
mod inventory;

pub use delta::CharacterDelta;
pub use feature::{ClassFeature, FeatureKind};
pub use inventory::{EntryId, InventoryDelta, InventoryEntry, equipped_items};

use crate::catalog::{ClassDefinition, ClassId, WeaponProficiencies};
use crate::config::SheetConfig;
use crate::skills::{SaveProficiencies, SkillProficiencies};
use crate::stats::{AbilityScores, ScoreEncoding};

/// Persisted identifier of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(pub u32);

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persisted character record.
///
/// # Invariants
///
/// - `abilities` hold modifiers once [`CharacterBase::normalize_scores`] has run
/// - `features` are owned by the record; they are never re-read from the catalog
/// - `speed`, `initiative_modifier` and `implant_capacity` are `None` only on
///   records that predate those fields; readers use the `*_or_default` accessors
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterBase {
    pub id: CharacterId,
    pub name: String,
    pub class_id: ClassId,
    pub level: u32,

    // === Resources ===
    pub current_hp: i32,
    pub max_hp: i32,
    pub ac: i32,
    /// Combat damage die label, e.g. `"1d8"`.
    pub damage_die: String,

    // === Abilities ===
    pub abilities: AbilityScores,
    /// How `abilities` are encoded. `None` on untagged (pre-migration) records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub score_encoding: Option<ScoreEncoding>,

    // === Fields added after launch ===
    pub speed: Option<i32>,
    pub initiative_modifier: Option<i32>,
    pub implant_capacity: Option<i32>,

    // === Proficiencies ===
    pub skills: SkillProficiencies,
    pub saves: SaveProficiencies,
    pub weapon_proficiencies: WeaponProficiencies,

    pub credits: u32,
    pub features: Vec<ClassFeature>,
}

impl Default for CharacterBase {
    fn default() -> Self {
        Self {
            id: CharacterId::default(),
            name: String::new(),
            class_id: ClassId::default(),
            level: SheetConfig::STARTING_LEVEL,
            current_hp: 0,
            max_hp: 0,
            ac: 10,
            damage_die: "1d6".to_string(),
            abilities: AbilityScores::zero(),
            score_encoding: Some(ScoreEncoding::Modifier),
            speed: None,
            initiative_modifier: None,
            implant_capacity: None,
            skills: SkillProficiencies::default(),
            saves: SaveProficiencies::empty(),
            weapon_proficiencies: WeaponProficiencies::default(),
            credits: 0,
            features: Vec::new(),
        }
    }
}

impl CharacterBase {
    /// Creates a level-1 record from a class definition.
    ///
    /// Base stats, proficiencies and features are copied by value. Later edits
    /// to the catalog do not reach the returned record.
    pub fn from_class(id: CharacterId, name: impl Into<String>, class: &ClassDefinition) -> Self {
        let mut skills = SkillProficiencies::default();
        for skill in &class.skills {
            skills.set(*skill, SheetConfig::CLASS_SKILL_BONUS);
        }

        Self {
            id,
            name: name.into(),
            class_id: class.id.clone(),
            level: SheetConfig::STARTING_LEVEL,
            current_hp: class.base_hp,
            max_hp: class.base_hp,
            ac: class.base_ac,
            damage_die: class.damage_die.clone(),
            abilities: class.stat_bonuses,
            score_encoding: Some(ScoreEncoding::Modifier),
            speed: Some(class.base_speed),
            initiative_modifier: Some(class.base_initiative),
            implant_capacity: Some(class.base_implant_capacity),
            skills,
            saves: class.saves,
            weapon_proficiencies: class.weapon_proficiencies,
            credits: class.starting_credits,
            features: class.features.clone(),
        }
    }

    pub fn speed_or_default(&self) -> i32 {
        self.speed.unwrap_or(SheetConfig::DEFAULT_SPEED)
    }

    pub fn initiative_or_default(&self) -> i32 {
        self.initiative_modifier
            .unwrap_or(SheetConfig::DEFAULT_INITIATIVE)
    }

    pub fn implant_capacity_or_default(&self) -> i32 {
        self.implant_capacity
            .unwrap_or(SheetConfig::DEFAULT_IMPLANT_CAPACITY)
    }

    /// Converts stored ability scores to modifiers and tags the record.
    ///
    /// Untagged records are read with `default`. Idempotent: a record already
    /// tagged `Modifier` is left unchanged.
    pub fn normalize_scores(&mut self, default: ScoreEncoding) {
        let encoding = self.score_encoding.unwrap_or(default);
        if encoding != ScoreEncoding::Modifier {
            self.abilities = encoding.normalize(&self.abilities);
        }
        self.score_encoding = Some(ScoreEncoding::Modifier);
    }

    /// Writes every field present in `delta`.
    pub fn apply_delta(&mut self, delta: &CharacterDelta) {
        if let Some(abilities) = delta.abilities {
            self.abilities = abilities;
        }
        if let Some(max_hp) = delta.max_hp {
            self.max_hp = max_hp;
        }
        if let Some(current_hp) = delta.current_hp {
            self.current_hp = current_hp;
        }
        if let Some(ac) = delta.ac {
            self.ac = ac;
        }
        if let Some(speed) = delta.speed {
            self.speed = Some(speed);
        }
        if let Some(initiative) = delta.initiative_modifier {
            self.initiative_modifier = Some(initiative);
        }
        if let Some(ic) = delta.implant_capacity {
            self.implant_capacity = Some(ic);
        }
        if let Some(skills) = &delta.skills {
            self.skills = skills.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArmorCategory, WeaponCategory};
    use crate::skills::Skill;

    fn solo() -> ClassDefinition {
        let mut class = ClassDefinition::new("solo", "Solo")
            .with_armor_proficiencies([ArmorCategory::Clothes, ArmorCategory::Light])
            .with_feature(ClassFeature::new("Overdrive", "Push past limits").with_charges(2));
        class.base_hp = 12;
        class.base_ac = 12;
        class.base_implant_capacity = 4;
        class.stat_bonuses = AbilityScores::new(2, 1, 1, 0, 0, -1);
        class.skills = vec![Skill::Athletics, Skill::Intimidation];
        class.saves = SaveProficiencies::STR | SaveProficiencies::CON;
        class.weapon_proficiencies.set(WeaponCategory::Rifle, 2);
        class.starting_credits = 500;
        class
    }

    #[test]
    fn from_class_snapshots_definition() {
        let class = solo();
        let base = CharacterBase::from_class(CharacterId(1), "Vex", &class);

        assert_eq!(base.class_id, class.id);
        assert_eq!((base.current_hp, base.max_hp, base.ac), (12, 12, 12));
        assert_eq!(base.implant_capacity_or_default(), 4);
        assert_eq!(base.abilities, class.stat_bonuses);
        assert_eq!(base.skills.get(Skill::Athletics), SheetConfig::CLASS_SKILL_BONUS);
        assert_eq!(base.skills.get(Skill::Stealth), 0);
        assert_eq!(base.weapon_proficiencies.rank(WeaponCategory::Rifle), 2);
        assert_eq!(base.credits, 500);
        assert_eq!(base.features, class.features);
    }

    #[test]
    fn features_do_not_follow_catalog_changes() {
        let mut class = solo();
        let base = CharacterBase::from_class(CharacterId(1), "Vex", &class);

        class.features[0].charges = Some(5);
        class.features.push(ClassFeature::new("New Toy", "Patched in later"));

        assert_eq!(base.features.len(), 1);
        assert_eq!(base.features[0].charges, Some(2));
    }

    #[test]
    fn missing_fields_fall_back() {
        let base = CharacterBase::default();
        assert_eq!(base.speed_or_default(), 30);
        assert_eq!(base.initiative_or_default(), 0);
        assert_eq!(base.implant_capacity_or_default(), 3);
    }

    #[test]
    fn normalize_untagged_record() {
        let mut base = CharacterBase {
            abilities: AbilityScores::new(14, 12, 10, 1, 0, 8),
            score_encoding: None,
            ..CharacterBase::default()
        };
        base.normalize_scores(ScoreEncoding::Detect);
        assert_eq!(base.abilities, AbilityScores::new(4, 2, 0, 1, 0, -2));
        assert_eq!(base.score_encoding, Some(ScoreEncoding::Modifier));

        // Second pass is a no-op.
        base.normalize_scores(ScoreEncoding::Legacy);
        assert_eq!(base.abilities, AbilityScores::new(4, 2, 0, 1, 0, -2));
    }

    #[test]
    fn tagged_legacy_record_shifts_every_score() {
        let mut base = CharacterBase {
            abilities: AbilityScores::new(12, 10, 10, 10, 10, 6),
            score_encoding: Some(ScoreEncoding::Legacy),
            ..CharacterBase::default()
        };
        base.normalize_scores(ScoreEncoding::Modifier);
        assert_eq!(base.abilities, AbilityScores::new(2, 0, 0, 0, 0, -4));
    }

    #[test]
    fn apply_delta_writes_only_present_fields() {
        let mut base = CharacterBase {
            current_hp: 5,
            max_hp: 20,
            ..CharacterBase::default()
        };
        let delta = CharacterDelta {
            current_hp: Some(20),
            speed: Some(35),
            ..CharacterDelta::default()
        };
        base.apply_delta(&delta);
        assert_eq!(base.current_hp, 20);
        assert_eq!(base.max_hp, 20);
        assert_eq!(base.speed, Some(35));
        assert_eq!(base.implant_capacity, None);
    }
}
