//! The six ability scores.
//!
//! Scores are stored as direct modifiers (+2, -1), not 10-centered scores.
//! See [`super::legacy`] for records still in the older encoding.

/// One of the six abilities.
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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Stat {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

/// Six ability values, one per [`Stat`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityScores {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl AbilityScores {
    pub const fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            str,
            dex,
            con,
            int,
            wis,
            cha,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Str => self.str,
            Stat::Dex => self.dex,
            Stat::Con => self.con,
            Stat::Int => self.int,
            Stat::Wis => self.wis,
            Stat::Cha => self.cha,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Str => &mut self.str,
            Stat::Dex => &mut self.dex,
            Stat::Con => &mut self.con,
            Stat::Int => &mut self.int,
            Stat::Wis => &mut self.wis,
            Stat::Cha => &mut self.cha,
        }
    }

    /// Field-wise sum.
    /// Field-wise saturating sum.
    pub const fn plus(&self, other: &Self) -> Self {
        Self {
            str: self.str.saturating_add(other.str),
            dex: self.dex.saturating_add(other.dex),
            con: self.con.saturating_add(other.con),
            int: self.int.saturating_add(other.int),
            wis: self.wis.saturating_add(other.wis),
            cha: self.cha.saturating_add(other.cha),
        }
    }

    /// Applies `f` to every score.
    pub fn map(&self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self {
            str: f(self.str),
            dex: f(self.dex),
            con: f(self.con),
            int: f(self.int),
            wis: f(self.wis),
            cha: f(self.cha),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
