use std::collections::BTreeMap;

use super::item::{ArmorCategory, WeaponProficiencies};
use crate::character::ClassFeature;
use crate::config::SheetConfig;
use crate::skills::{SaveProficiencies, Skill};
use crate::stats::AbilityScores;

/// Catalog identifier of a class.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClassId(pub String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ClassId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static definition of a character class.
///
/// Proficiencies and base stats are read live from the catalog. `features`
/// are only a template: they are copied onto a character at creation and the
/// character's copy is authoritative afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassDefinition {
    pub id: ClassId,
    pub name: String,
    pub description: String,
    pub base_hp: i32,
    pub base_ac: i32,
    pub base_speed: i32,
    pub base_initiative: i32,
    pub base_implant_capacity: i32,
    pub damage_die: String,
    pub armor_proficiencies: Vec<ArmorCategory>,
    pub weapon_proficiencies: WeaponProficiencies,
    pub stat_bonuses: AbilityScores,
    pub skills: Vec<Skill>,
    pub saves: SaveProficiencies,
    pub starting_tools: Vec<String>,
    pub starting_credits: u32,
    pub features: Vec<ClassFeature>,
}

impl Default for ClassDefinition {
    fn default() -> Self {
        Self {
            id: ClassId::default(),
            name: String::new(),
            description: String::new(),
            base_hp: 10,
            base_ac: 10,
            base_speed: SheetConfig::DEFAULT_SPEED,
            base_initiative: SheetConfig::DEFAULT_INITIATIVE,
            base_implant_capacity: SheetConfig::DEFAULT_IMPLANT_CAPACITY,
            damage_die: "1d6".to_string(),
            armor_proficiencies: vec![ArmorCategory::Clothes],
            weapon_proficiencies: WeaponProficiencies::default(),
            stat_bonuses: AbilityScores::zero(),
            skills: Vec::new(),
            saves: SaveProficiencies::empty(),
            starting_tools: Vec::new(),
            starting_credits: 0,
            features: Vec::new(),
        }
    }
}

impl ClassDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ClassId::new(id),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_armor_proficiencies(
        mut self,
        categories: impl IntoIterator<Item = ArmorCategory>,
    ) -> Self {
        self.armor_proficiencies = categories.into_iter().collect();
        self
    }

    pub fn with_feature(mut self, feature: ClassFeature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn is_proficient_with(&self, category: ArmorCategory) -> bool {
        self.armor_proficiencies.contains(&category)
    }
}

/// Lookup of class definitions by id.
pub trait ClassOracle: Send + Sync {
    fn class(&self, id: &ClassId) -> Option<&ClassDefinition>;

    /// Returns every class in id order.
    fn all_classes(&self) -> Vec<&ClassDefinition>;
}

/// In-memory class table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticClassCatalog {
    classes: BTreeMap<ClassId, ClassDefinition>,
}

impl StaticClassCatalog {
    pub fn new(classes: impl IntoIterator<Item = ClassDefinition>) -> Self {
        Self {
            classes: classes
                .into_iter()
                .map(|class| (class.id.clone(), class))
                .collect(),
        }
    }

    /// Inserts a class, returning the definition it replaced.
    pub fn insert(&mut self, class: ClassDefinition) -> Option<ClassDefinition> {
        self.classes.insert(class.id.clone(), class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassOracle for StaticClassCatalog {
    fn class(&self, id: &ClassId) -> Option<&ClassDefinition> {
        self.classes.get(id)
    }

    fn all_classes(&self) -> Vec<&ClassDefinition> {
        self.classes.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = StaticClassCatalog::new([
            ClassDefinition::new("solo", "Solo"),
            ClassDefinition::new("netrunner", "Netrunner"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.class(&ClassId::new("solo")).map(|c| c.name.as_str()),
            Some("Solo")
        );
        assert!(catalog.class(&ClassId::new("medtech")).is_none());

        let ids: Vec<&str> = catalog.all_classes().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["netrunner", "solo"]);
    }

    #[test]
    fn armor_proficiency_check() {
        let class = ClassDefinition::new("solo", "Solo")
            .with_armor_proficiencies([ArmorCategory::Clothes, ArmorCategory::Light]);
        assert!(class.is_proficient_with(ArmorCategory::Light));
        assert!(!class.is_proficient_with(ArmorCategory::Heavy));
    }
}
