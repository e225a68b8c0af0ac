//! Character file loader.
//!
//! A character file holds the persisted record, inventory entries that
//! reference catalog items by id, and abilities granted to the character.
//! Items and class definitions are resolved against the catalogs when the
//! file is turned into a [`CharacterSheet`].

use std::path::Path;

use anyhow::Context;
use rigsheet_core::{
    CharacterAbility, CharacterBase, CharacterSheet, ClassOracle, EntryId, InventoryEntry, ItemId,
    SheetConfig,
};
use serde::{Deserialize, Serialize};

use crate::loaders::items::ItemCatalog;
use crate::loaders::{LoadResult, read_file, write_file};

/// One inventory entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: EntryId,
    pub item: ItemId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub equipped: bool,
}

fn default_quantity() -> u32 {
    1
}

/// Character file structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFile {
    pub character: CharacterBase,
    #[serde(default)]
    pub inventory: Vec<InventoryRecord>,
    #[serde(default)]
    pub abilities: Vec<CharacterAbility>,
}

impl CharacterFile {
    /// Resolves items and class, normalizes legacy ability scores, and builds
    /// the sheet.
    pub fn into_sheet(
        self,
        items: &ItemCatalog,
        classes: &dyn ClassOracle,
        config: &SheetConfig,
    ) -> LoadResult<CharacterSheet> {
        let mut base = self.character;
        if base.score_encoding != Some(rigsheet_core::ScoreEncoding::Modifier) {
            tracing::info!(
                character = %base.id,
                encoding = ?base.score_encoding,
                "normalizing ability scores"
            );
        }
        base.normalize_scores(config.default_score_encoding);

        let class = classes
            .class(&base.class_id)
            .with_context(|| {
                format!(
                    "Character '{}' has unknown class '{}'",
                    base.name, base.class_id
                )
            })?
            .clone();

        let mut inventory = Vec::with_capacity(self.inventory.len());
        for record in self.inventory {
            if record.quantity == 0 {
                tracing::warn!(entry = %record.id, "skipping inventory entry with quantity 0");
                continue;
            }
            let item = items
                .get(&record.item)
                .with_context(|| {
                    format!(
                        "Inventory entry {} references unknown item '{}'",
                        record.id, record.item
                    )
                })?
                .clone();
            let mut entry = InventoryEntry::new(record.id, base.id, item, record.quantity);
            entry.equipped = record.equipped;
            inventory.push(entry);
        }

        Ok(CharacterSheet::new(base, inventory, class, self.abilities))
    }

    /// Snapshot of a sheet in file form.
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            character: sheet.base().clone(),
            inventory: sheet
                .inventory()
                .iter()
                .map(|entry| InventoryRecord {
                    id: entry.id,
                    item: entry.item.id.clone(),
                    quantity: entry.quantity,
                    equipped: entry.equipped,
                })
                .collect(),
            abilities: sheet.granted_abilities().to_vec(),
        }
    }
}

/// Loader for character files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<CharacterFile> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<CharacterFile> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))
    }

    /// Writes a character file as pretty RON.
    pub fn save(path: &Path, file: &CharacterFile) -> LoadResult<()> {
        let pretty = ron::ser::PrettyConfig::default().struct_names(false);
        let content = ron::ser::to_string_pretty(file, pretty)
            .map_err(|e| anyhow::anyhow!("Failed to serialize character RON: {}", e))?;
        write_file(path, &content)?;
        tracing::info!(path = %path.display(), "saved character");
        Ok(())
    }
}
