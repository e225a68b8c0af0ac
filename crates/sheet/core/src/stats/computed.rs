//! Derived stats - the output of the aggregation fold.

use std::collections::BTreeMap;

use super::abilities::AbilityScores;
use crate::character::CharacterBase;
use crate::skills::Skill;

/// Effective values for a character with a given equipped set.
///
/// NEVER stored. Recompute with [`super::compute_stats`] whenever the base
/// record or the equipped set changes.
///
/// # Invariants
///
/// - `ic_remaining == ic - ic_used`
/// - `armor_count` and `weapon_count` count equipped items by kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputedStats {
    pub hp: i32,
    pub ac: i32,
    pub abilities: AbilityScores,
    pub speed: i32,
    pub initiative: i32,
    /// Total implant capacity.
    pub ic: i32,
    /// Equipment skill bonuses keyed by skill display name.
    pub skill_mods: BTreeMap<String, i32>,
    pub has_non_proficient_armor: bool,
    pub armor_count: u32,
    pub weapon_count: u32,
    pub ic_used: i32,
    pub ic_remaining: i32,
}

impl ComputedStats {
    /// Equipment bonus for one skill.
    pub fn skill_mod(&self, skill: Skill) -> i32 {
        self.skill_mods
            .get(skill.display_name())
            .copied()
            .unwrap_or(0)
    }

    /// Full check bonus: governing ability + record proficiency + equipment.
    pub fn skill_bonus(&self, base: &CharacterBase, skill: Skill) -> i32 {
        self.abilities.get(skill.ability()) + base.skills.get(skill) + self.skill_mod(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bonus_sums_three_sources() {
        let mut base = CharacterBase::default();
        base.skills.set(Skill::Stealth, 2);

        let stats = ComputedStats {
            abilities: AbilityScores::new(0, 3, 0, 0, 0, 0),
            skill_mods: BTreeMap::from([("Stealth".to_string(), 1)]),
            ..ComputedStats::default()
        };

        assert_eq!(stats.skill_mod(Skill::Stealth), 1);
        assert_eq!(stats.skill_bonus(&base, Skill::Stealth), 6);
        assert_eq!(stats.skill_bonus(&base, Skill::Athletics), 0);
    }
}
