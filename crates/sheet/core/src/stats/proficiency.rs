//! Weapon proficiency rank → to-hit modifier.

use crate::catalog::WeaponCategory;
use crate::character::CharacterBase;
use crate::config::SheetConfig;

/// Maps a weapon proficiency rank (0–5) to a to-hit modifier.
///
/// | rank | to-hit |
/// |------|--------|
/// | 0    | -2     |
/// | 1    | +0     |
/// | 2    | +1     |
/// | 3    | +2     |
/// | 4    | +3     |
/// | 5    | +4     |
///
/// Ranks above 5 read as 5.
pub struct ProficiencyTable;

impl ProficiencyTable {
    const TO_HIT: [i32; SheetConfig::MAX_WEAPON_RANK as usize + 1] = [-2, 0, 1, 2, 3, 4];

    pub const fn to_hit(rank: u8) -> i32 {
        let rank = if rank > SheetConfig::MAX_WEAPON_RANK {
            SheetConfig::MAX_WEAPON_RANK
        } else {
            rank
        };
        Self::TO_HIT[rank as usize]
    }

    /// To-hit modifier for the character's rank in `category`.
    pub fn weapon_to_hit(base: &CharacterBase, category: WeaponCategory) -> i32 {
        Self::to_hit(base.weapon_proficiencies.rank(category))
    }
}
