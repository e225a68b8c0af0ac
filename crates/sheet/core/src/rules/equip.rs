//! Equip-time constraints.

use crate::catalog::Item;
use crate::config::SheetConfig;
use crate::error::{EngineError, ErrorSeverity};
use crate::stats::ComputedStats;

/// Why an item cannot be equipped right now.
///
/// Rejections are expected outcomes, not faults. Each variant carries the
/// current value and the limit so a client can explain the refusal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectionReason {
    #[error("armor slot full: {equipped} armor already equipped")]
    ArmorSlotFull { equipped: u32 },

    #[error("weapon slots full: {equipped} of {max} equipped")]
    WeaponSlotsFull { equipped: u32, max: u32 },

    #[error("insufficient implant capacity: need {required} IC, have {remaining} remaining")]
    InsufficientImplantCapacity { required: i32, remaining: i32 },
}

impl EngineError for RejectionReason {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ArmorSlotFull { .. } => "ARMOR_SLOT_FULL",
            Self::WeaponSlotsFull { .. } => "WEAPON_SLOTS_FULL",
            Self::InsufficientImplantCapacity { .. } => "INSUFFICIENT_IMPLANT_CAPACITY",
        }
    }
}

/// Checks whether `item` may move from unequipped to equipped.
///
/// `stats` must be computed from the current equipped set, without `item`.
/// Rules run in order and the first failure wins. Items other than armor,
/// weapons and cyberware are never constrained. Unequipping needs no check.
pub fn can_equip(item: &Item, stats: &ComputedStats) -> Result<(), RejectionReason> {
    if item.is_armor() && stats.armor_count >= SheetConfig::MAX_EQUIPPED_ARMOR {
        return Err(RejectionReason::ArmorSlotFull {
            equipped: stats.armor_count,
        });
    }

    if item.is_weapon() && stats.weapon_count >= SheetConfig::MAX_EQUIPPED_WEAPONS {
        return Err(RejectionReason::WeaponSlotsFull {
            equipped: stats.weapon_count,
            max: SheetConfig::MAX_EQUIPPED_WEAPONS,
        });
    }

    if item.is_cyberware() && item.ic_cost > stats.ic_remaining {
        return Err(RejectionReason::InsufficientImplantCapacity {
            required: item.ic_cost,
            remaining: stats.ic_remaining,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    fn stats() -> ComputedStats {
        ComputedStats {
            ic: 3,
            ic_remaining: 3,
            ..ComputedStats::default()
        }
    }

    #[test]
    fn second_armor_is_rejected() {
        let vest = Item::new("vest", "Vest", ItemKind::Armor);
        assert_eq!(can_equip(&vest, &stats()), Ok(()));

        let worn = ComputedStats {
            armor_count: 1,
            ..stats()
        };
        let err = can_equip(&vest, &worn).unwrap_err();
        assert_eq!(err, RejectionReason::ArmorSlotFull { equipped: 1 });
        assert_eq!(err.error_code(), "ARMOR_SLOT_FULL");
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn fourth_weapon_is_rejected() {
        let pistol = Item::new("pistol", "Pistol", ItemKind::Weapon);
        let two = ComputedStats {
            weapon_count: 2,
            ..stats()
        };
        assert!(can_equip(&pistol, &two).is_ok());

        let three = ComputedStats {
            weapon_count: 3,
            ..stats()
        };
        assert_eq!(
            can_equip(&pistol, &three),
            Err(RejectionReason::WeaponSlotsFull {
                equipped: 3,
                max: 3
            })
        );
    }

    #[test]
    fn cyberware_needs_remaining_capacity() {
        let deck = Item::new("deck", "Cyberdeck", ItemKind::Cyberware).with_ic_cost(3);
        let nearly_full = ComputedStats {
            ic_used: 2,
            ic_remaining: 1,
            ..stats()
        };
        let err = can_equip(&deck, &nearly_full).unwrap_err();
        assert_eq!(
            err,
            RejectionReason::InsufficientImplantCapacity {
                required: 3,
                remaining: 1
            }
        );
        assert_eq!(err.error_code(), "INSUFFICIENT_IMPLANT_CAPACITY");
        assert!(err.to_string().contains("need 3 IC, have 1 remaining"));

        // Exact fit is allowed.
        let exact = Item::new("chip", "Chip", ItemKind::Cyberware).with_ic_cost(1);
        assert!(can_equip(&exact, &nearly_full).is_ok());
    }

    #[test]
    fn other_kinds_are_unconstrained() {
        let packed = ComputedStats {
            armor_count: 1,
            weapon_count: 3,
            ic_remaining: 0,
            ..stats()
        };
        for kind in [ItemKind::Gear, ItemKind::Tool, ItemKind::Other] {
            assert!(can_equip(&Item::new("x", "X", kind), &packed).is_ok());
        }
    }
}
