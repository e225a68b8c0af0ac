//! Content factory for building sheets from data files.

use std::path::{Path, PathBuf};

use rigsheet_core::{CharacterSheet, SheetConfig, StaticClassCatalog};

use crate::loaders::{
    CharacterFile, CharacterLoader, ClassLoader, ConfigLoader, ItemCatalog, ItemLoader, LoadResult,
};

/// Content factory that loads catalogs and characters from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── classes.ron
/// ├── items.ron
/// └── characters/
///     ├── vex.ron
///     └── rook.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine options from `config.toml`. A missing file means defaults.
    pub fn load_config(&self) -> LoadResult<SheetConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(SheetConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the class catalog from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<StaticClassCatalog> {
        ClassLoader::load(&self.data_dir.join("classes.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Path of `characters/{name}.ron`.
    pub fn character_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join("characters")
            .join(format!("{}.ron", name))
    }

    pub fn load_character(&self, name: &str) -> LoadResult<CharacterFile> {
        CharacterLoader::load(&self.character_path(name))
    }

    /// Loads every catalog and resolves a character into a sheet.
    pub fn load_sheet(&self, name: &str) -> LoadResult<CharacterSheet> {
        let config = self.load_config()?;
        let classes = self.load_classes()?;
        let items = self.load_items()?;
        self.load_character(name)?
            .into_sheet(&items, &classes, &config)
    }

    /// Writes a sheet back to `characters/{name}.ron`.
    pub fn save_sheet(&self, name: &str, sheet: &CharacterSheet) -> LoadResult<()> {
        CharacterLoader::save(&self.character_path(name), &CharacterFile::from_sheet(sheet))
    }

    /// Names of every character file, sorted.
    pub fn list_characters(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("characters");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
