//! Item catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use rigsheet_core::{Item, ItemId, Skill};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<Item>,
}

/// Item definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, Item>,
}

impl ItemCatalog {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.id.clone(), item))
                .collect(),
        }
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a catalog.
    ///
    /// Duplicate ids, negative implant costs and skill modifiers naming an
    /// unknown skill are rejected.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut items = BTreeMap::new();
        for item in file.items {
            if let Some(name) = item
                .skill_mods
                .keys()
                .find(|name| Skill::from_display_name(name).is_none())
            {
                anyhow::bail!("Item '{}' modifies unknown skill '{}'", item.id, name);
            }
            if item.ic_cost < 0 {
                anyhow::bail!(
                    "Item '{}' has negative implant cost {}; grant capacity with an ic modifier",
                    item.id,
                    item.ic_cost
                );
            }
            if item.is_armor() && item.armor_category().is_none() {
                tracing::warn!(item = %item.id, "armor without a known category; always non-proficient");
            }

            let id = item.id.clone();
            if items.insert(id.clone(), item).is_some() {
                anyhow::bail!("Duplicate item id '{}' in item catalog", id);
            }
        }

        tracing::debug!(items = items.len(), "loaded item catalog");
        Ok(ItemCatalog { items })
    }
}
