//! Skills, skill proficiency records and save proficiencies.
//!
//! Skill display names ("Sleight of Hand") are what item catalogs and stat
//! displays use; record field keys ("skill_sleight_of_hand") are what the
//! persisted character record uses. The two are tied together by exhaustive
//! matches below, so adding a skill without a key is a compile error.

use bitflags::bitflags;

use crate::stats::Stat;

/// The eighteen skills tracked on a character record.
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
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    #[strum(serialize = "Acrobatics")]
    Acrobatics,
    #[strum(serialize = "Animal Handling")]
    AnimalHandling,
    #[strum(serialize = "Arcana")]
    Arcana,
    #[strum(serialize = "Athletics")]
    Athletics,
    #[strum(serialize = "Deception")]
    Deception,
    #[strum(serialize = "History")]
    History,
    #[strum(serialize = "Insight")]
    Insight,
    #[strum(serialize = "Intimidation")]
    Intimidation,
    #[strum(serialize = "Investigation")]
    Investigation,
    #[strum(serialize = "Medicine")]
    Medicine,
    #[strum(serialize = "Nature")]
    Nature,
    #[strum(serialize = "Perception")]
    Perception,
    #[strum(serialize = "Performance")]
    Performance,
    #[strum(serialize = "Persuasion")]
    Persuasion,
    #[strum(serialize = "Religion")]
    Religion,
    #[strum(serialize = "Sleight of Hand")]
    SleightOfHand,
    #[strum(serialize = "Stealth")]
    Stealth,
    #[strum(serialize = "Survival")]
    Survival,
}

impl Skill {
    /// Prefix shared by every skill field key on the character record.
    pub const FIELD_PREFIX: &'static str = "skill_";

    /// Display name as used by item catalogs and stat displays.
    pub fn display_name(self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// Record field key: `skill_` + lower-cased display name, spaces as underscores.
    pub fn field_key(self) -> &'static str {
        match self {
            Skill::Acrobatics => "skill_acrobatics",
            Skill::AnimalHandling => "skill_animal_handling",
            Skill::Arcana => "skill_arcana",
            Skill::Athletics => "skill_athletics",
            Skill::Deception => "skill_deception",
            Skill::History => "skill_history",
            Skill::Insight => "skill_insight",
            Skill::Intimidation => "skill_intimidation",
            Skill::Investigation => "skill_investigation",
            Skill::Medicine => "skill_medicine",
            Skill::Nature => "skill_nature",
            Skill::Perception => "skill_perception",
            Skill::Performance => "skill_performance",
            Skill::Persuasion => "skill_persuasion",
            Skill::Religion => "skill_religion",
            Skill::SleightOfHand => "skill_sleight_of_hand",
            Skill::Stealth => "skill_stealth",
            Skill::Survival => "skill_survival",
        }
    }

    /// Looks a skill up by its exact display name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|skill| skill.display_name() == name)
    }

    /// Looks a skill up by its record field key.
    pub fn from_field_key(key: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|skill| skill.field_key() == key)
    }

    /// Ability that governs checks with this skill.
    pub fn ability(self) -> Stat {
        match self {
            Skill::Athletics => Stat::Str,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Stat::Dex,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Stat::Int,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Stat::Wis,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Stat::Cha
            }
        }
    }
}

/// Per-skill proficiency bonus table stored on the character record.
///
/// Missing keys (older records) default to 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillProficiencies {
    #[cfg_attr(feature = "serde", serde(rename = "skill_acrobatics"))]
    pub acrobatics: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_animal_handling"))]
    pub animal_handling: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_arcana"))]
    pub arcana: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_athletics"))]
    pub athletics: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_deception"))]
    pub deception: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_history"))]
    pub history: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_insight"))]
    pub insight: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_intimidation"))]
    pub intimidation: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_investigation"))]
    pub investigation: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_medicine"))]
    pub medicine: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_nature"))]
    pub nature: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_perception"))]
    pub perception: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_performance"))]
    pub performance: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_persuasion"))]
    pub persuasion: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_religion"))]
    pub religion: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_sleight_of_hand"))]
    pub sleight_of_hand: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_stealth"))]
    pub stealth: i32,
    #[cfg_attr(feature = "serde", serde(rename = "skill_survival"))]
    pub survival: i32,
}

impl SkillProficiencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: Skill) -> i32 {
        match skill {
            Skill::Acrobatics => self.acrobatics,
            Skill::AnimalHandling => self.animal_handling,
            Skill::Arcana => self.arcana,
            Skill::Athletics => self.athletics,
            Skill::Deception => self.deception,
            Skill::History => self.history,
            Skill::Insight => self.insight,
            Skill::Intimidation => self.intimidation,
            Skill::Investigation => self.investigation,
            Skill::Medicine => self.medicine,
            Skill::Nature => self.nature,
            Skill::Perception => self.perception,
            Skill::Performance => self.performance,
            Skill::Persuasion => self.persuasion,
            Skill::Religion => self.religion,
            Skill::SleightOfHand => self.sleight_of_hand,
            Skill::Stealth => self.stealth,
            Skill::Survival => self.survival,
        }
    }

    pub fn get_mut(&mut self, skill: Skill) -> &mut i32 {
        match skill {
            Skill::Acrobatics => &mut self.acrobatics,
            Skill::AnimalHandling => &mut self.animal_handling,
            Skill::Arcana => &mut self.arcana,
            Skill::Athletics => &mut self.athletics,
            Skill::Deception => &mut self.deception,
            Skill::History => &mut self.history,
            Skill::Insight => &mut self.insight,
            Skill::Intimidation => &mut self.intimidation,
            Skill::Investigation => &mut self.investigation,
            Skill::Medicine => &mut self.medicine,
            Skill::Nature => &mut self.nature,
            Skill::Perception => &mut self.perception,
            Skill::Performance => &mut self.performance,
            Skill::Persuasion => &mut self.persuasion,
            Skill::Religion => &mut self.religion,
            Skill::SleightOfHand => &mut self.sleight_of_hand,
            Skill::Stealth => &mut self.stealth,
            Skill::Survival => &mut self.survival,
        }
    }

    pub fn set(&mut self, skill: Skill, value: i32) {
        *self.get_mut(skill) = value;
    }

    pub fn add(&mut self, skill: Skill, delta: i32) {
        *self.get_mut(skill) += delta;
    }
}

bitflags! {
    /// Saving throws the character is proficient in.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SaveProficiencies: u8 {
        const STR = 1 << 0;
        const DEX = 1 << 1;
        const CON = 1 << 2;
        const INT = 1 << 3;
        const WIS = 1 << 4;
        const CHA = 1 << 5;
    }
}

impl SaveProficiencies {
    pub const fn for_stat(stat: Stat) -> Self {
        match stat {
            Stat::Str => Self::STR,
            Stat::Dex => Self::DEX,
            Stat::Con => Self::CON,
            Stat::Int => Self::INT,
            Stat::Wis => Self::WIS,
            Stat::Cha => Self::CHA,
        }
    }

    pub fn is_proficient(&self, stat: Stat) -> bool {
        self.contains(Self::for_stat(stat))
    }
}
