use crate::stats::ScoreEncoding;

/// Rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Encoding assumed for records that carry no `score_encoding` tag.
    /// `Detect` keeps the pre-migration heuristic; set to `Modifier` once
    /// every stored record has been migrated.
    pub default_score_encoding: ScoreEncoding,
}

impl SheetConfig {
    // ===== slot and capacity rules =====
    pub const MAX_EQUIPPED_ARMOR: u32 = 1;
    pub const MAX_EQUIPPED_WEAPONS: u32 = 3;

    // ===== fallbacks for records that predate a field =====
    pub const DEFAULT_SPEED: i32 = 30;
    pub const DEFAULT_INITIATIVE: i32 = 0;
    pub const DEFAULT_IMPLANT_CAPACITY: i32 = 3;

    // ===== non-proficient armor penalty (applied once) =====
    pub const NON_PROFICIENT_AC_PENALTY: i32 = 2;
    pub const NON_PROFICIENT_SPEED_PENALTY: i32 = 10;

    // ===== character creation =====
    /// Skill bonus granted for every skill listed on the class.
    pub const CLASS_SKILL_BONUS: i32 = 2;
    pub const STARTING_LEVEL: u32 = 1;

    /// Highest weapon proficiency rank.
    pub const MAX_WEAPON_RANK: u8 = 5;

    pub fn new() -> Self {
        Self {
            default_score_encoding: ScoreEncoding::Detect,
        }
    }

    pub fn with_default_score_encoding(default_score_encoding: ScoreEncoding) -> Self {
        Self {
            default_score_encoding,
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}
