//! Character rules shared across clients.
//!
//! `rigsheet-core` turns a persisted character record plus its equipped
//! inventory into the numbers used at the table, validates equip transitions,
//! resolves consumable use into permanent record deltas, and merges abilities
//! from every source into one chargeable list. Every function here is pure:
//! callers fetch a consistent snapshot, call in, and persist the deltas that
//! come back.
pub mod abilities;
pub mod catalog;
pub mod character;
pub mod config;
pub mod error;
pub mod rules;
pub mod sheet;
pub mod skills;
pub mod stats;

pub use abilities::{
    Ability, AbilitySource, ChargeError, ChargeType, CharacterAbility, ItemAbilitySource,
    aggregate_abilities, class_ability_id,
};
pub use catalog::{
    ArmorCategory, ClassDefinition, ClassId, ClassOracle, HpModType, Item, ItemAbility, ItemId,
    ItemKind, ItemModifiers, StaticClassCatalog, WeaponCategory, WeaponProficiencies,
};
pub use character::{
    CharacterBase, CharacterDelta, CharacterId, ClassFeature, EntryId, FeatureKind,
    InventoryDelta, InventoryEntry, equipped_items,
};
pub use config::SheetConfig;
pub use error::{EngineError, ErrorSeverity};
pub use rules::{Consumption, ConsumeError, RejectionReason, can_equip, resolve_consumption};
pub use sheet::{ActionLock, CharacterSheet, SheetError};
pub use skills::{SaveProficiencies, Skill, SkillProficiencies};
pub use stats::{
    AbilityScores, ComputedStats, ProficiencyTable, ScoreEncoding, Stat, compute_stats,
};
