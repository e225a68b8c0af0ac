//! Class catalog loader.

use std::path::Path;

use rigsheet_core::{ClassDefinition, StaticClassCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalogFile {
    pub classes: Vec<ClassDefinition>,
}

/// Loader for the class catalog from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class definitions from a RON file.
    ///
    /// Duplicate ids are rejected.
    pub fn load(path: &Path) -> LoadResult<StaticClassCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StaticClassCatalog> {
        let file: ClassCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        let mut catalog = StaticClassCatalog::default();
        for class in file.classes {
            let id = class.id.clone();
            if catalog.insert(class).is_some() {
                anyhow::bail!("Duplicate class id '{}' in class catalog", id);
            }
        }

        tracing::debug!(classes = catalog.len(), "loaded class catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigsheet_core::{ArmorCategory, ClassId, ClassOracle, Skill};

    #[test]
    fn parses_minimal_class() {
        let catalog = ClassLoader::parse(
            r#"(
                classes: [
                    (
                        id: "solo",
                        name: "Solo",
                        base_hp: 12,
                        armor_proficiencies: [Clothes, Light, Medium],
                        skills: [Athletics, Intimidation],
                        saves: "STR | CON",
                    ),
                ],
            )"#,
        )
        .expect("valid catalog");

        let solo = catalog.class(&ClassId::new("solo")).expect("solo");
        assert_eq!(solo.base_hp, 12);
        assert_eq!(solo.base_speed, 30);
        assert!(solo.is_proficient_with(ArmorCategory::Medium));
        assert_eq!(solo.skills, vec![Skill::Athletics, Skill::Intimidation]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ClassLoader::parse(
            r#"(classes: [(id: "solo", name: "A"), (id: "solo", name: "B")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate class id 'solo'"));
    }
}
