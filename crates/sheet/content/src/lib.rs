//! Data-driven content and character files.
//!
//! This crate reads and writes the RON/TOML files a table uses:
//! - Class catalog (`classes.ron`)
//! - Item catalog (`items.ron`)
//! - Character files (`characters/<name>.ron`)
//! - Engine options (`config.toml`)
//!
//! Catalogs are read-only. Character files are the only thing written back.

pub mod loaders;

pub use loaders::{
    CharacterFile, CharacterLoader, ClassLoader, ConfigLoader, ContentFactory, InventoryRecord,
    ItemCatalog, ItemLoader, LoadResult,
};
