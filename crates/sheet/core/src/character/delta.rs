//! Partial updates to a character record.

use crate::skills::SkillProficiencies;
use crate::stats::AbilityScores;

/// New values for the fields of a [`super::CharacterBase`] that changed.
///
/// `None` leaves a field untouched. Values are absolute, not increments, so a
/// persistence layer can write them as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterDelta {
    pub abilities: Option<AbilityScores>,
    pub current_hp: Option<i32>,
    pub max_hp: Option<i32>,
    pub ac: Option<i32>,
    pub speed: Option<i32>,
    pub initiative_modifier: Option<i32>,
    pub implant_capacity: Option<i32>,
    pub skills: Option<SkillProficiencies>,
}

impl CharacterDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
