//! Pre-migration ability score encoding.
//!
//! Older records store `10 + modifier` (a 14 means +2). Newer records store the
//! modifier directly. Records are normalized to modifiers once, when they are
//! read, and every rule in this crate assumes modifiers.
//!
//! An untagged record can only be classified by [`ScoreEncoding::Detect`],
//! which treats any score of [`ScoreEncoding::LEGACY_THRESHOLD`] or more as
//! legacy. A genuine modifier of +8 is indistinguishable from a legacy 18, so
//! stored records should be migrated and tagged rather than detected forever.

use super::abilities::AbilityScores;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreEncoding {
    /// Scores are modifiers. Never rewritten.
    Modifier,
    /// Scores are `10 + modifier`. Always shifted down by 10.
    Legacy,
    /// Unknown; apply the per-score threshold heuristic.
    #[default]
    Detect,
}

impl ScoreEncoding {
    /// Scores at or above this value are read as legacy under `Detect`.
    pub const LEGACY_THRESHOLD: i32 = 8;
    /// Center of the legacy encoding.
    pub const LEGACY_CENTER: i32 = 10;

    /// Converts one stored score to a modifier.
    pub const fn normalize_score(self, raw: i32) -> i32 {
        match self {
            ScoreEncoding::Modifier => raw,
            ScoreEncoding::Legacy => raw - Self::LEGACY_CENTER,
            ScoreEncoding::Detect => {
                if raw >= Self::LEGACY_THRESHOLD {
                    raw - Self::LEGACY_CENTER
                } else {
                    raw
                }
            }
        }
    }

    /// Converts all six stored scores to modifiers.
    pub fn normalize(self, scores: &AbilityScores) -> AbilityScores {
        scores.map(|raw| self.normalize_score(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_shifts_only_high_scores() {
        assert_eq!(ScoreEncoding::Detect.normalize_score(14), 4);
        assert_eq!(ScoreEncoding::Detect.normalize_score(8), -2);
        assert_eq!(ScoreEncoding::Detect.normalize_score(3), 3);
        assert_eq!(ScoreEncoding::Detect.normalize_score(-1), -1);
    }

    #[test]
    fn explicit_encodings_are_unconditional() {
        assert_eq!(ScoreEncoding::Modifier.normalize_score(14), 14);
        assert_eq!(ScoreEncoding::Legacy.normalize_score(3), -7);
    }

    #[test]
    fn normalize_mixed_record() {
        let stored = AbilityScores::new(14, 2, 10, 0, 8, 1);
        assert_eq!(
            ScoreEncoding::Detect.normalize(&stored),
            AbilityScores::new(4, 2, 0, 0, -2, 1)
        );
    }
}
