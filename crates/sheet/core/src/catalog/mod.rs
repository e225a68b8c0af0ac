//! Read-only reference data.
//!
//! Item definitions and class definitions are static catalog content. They are
//! consumed by the rules but never mutated by them; the content crate loads
//! them from data files.
mod class;
mod item;

pub use class::{ClassDefinition, ClassId, ClassOracle, StaticClassCatalog};
pub use item::{
    ArmorCategory, HpModType, Item, ItemAbility, ItemId, ItemKind, ItemModifiers, WeaponCategory,
    WeaponProficiencies,
};
