use anyhow::Result;
use clap::Parser;
use rigsheet_core::EntryId;

use super::{Context, MutationArgs, sheet_error};
use crate::render;

/// Use one unit of a consumable. Its effects are permanent
#[derive(Parser, Debug)]
pub struct Consume {
    /// Character file name (without `.ron`)
    character: String,

    /// Inventory entry id
    entry: u32,

    #[command(flatten)]
    mutation: MutationArgs,
}

impl Consume {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut sheet = ctx.load_sheet(&self.character)?;
        let entry = EntryId(self.entry);
        let name = sheet
            .entry(entry)
            .map(|e| e.item.name.clone())
            .unwrap_or_default();

        let consumption = sheet
            .consume(entry, &self.mutation.lock())
            .map_err(sheet_error)?;

        if ctx.json {
            render::print_json(&consumption)?;
        } else {
            println!("{} consumed {}", sheet.base().name, name);
            print!("{}", render::consumption(&consumption));
        }
        ctx.persist(&self.character, &sheet, self.mutation.write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigsheet_content::{CharacterLoader, ContentFactory};
    use std::path::{Path, PathBuf};

    fn copy_data(to: &Path) {
        let from = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
        std::fs::create_dir_all(to.join("characters")).expect("mkdir");
        for file in ["classes.ron", "items.ron", "config.toml", "characters/vex.ron"] {
            std::fs::copy(from.join(file), to.join(file)).expect("copy");
        }
    }

    fn consume(entry: u32, locked: Option<&str>) -> Consume {
        Consume {
            character: "vex".into(),
            entry,
            mutation: MutationArgs {
                locked: locked.map(String::from),
                write: true,
            },
        }
    }

    #[test]
    fn write_persists_consumption() {
        let dir = tempfile::tempdir().expect("tempdir");
        copy_data(dir.path());
        let ctx = Context {
            factory: ContentFactory::new(dir.path()),
            json: true,
        };

        consume(8, None).execute(&ctx).expect("stim");
        let saved = CharacterLoader::load(&ctx.factory.character_path("vex")).expect("reload");
        let stims = saved.inventory.iter().find(|r| r.id == EntryId(8));
        assert_eq!(stims.map(|r| r.quantity), Some(2));
    }

    #[test]
    fn locked_consumption_fails_and_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        copy_data(dir.path());
        let ctx = Context {
            factory: ContentFactory::new(dir.path()),
            json: true,
        };
        let before = std::fs::read_to_string(ctx.factory.character_path("vex")).expect("read");

        let err = consume(8, Some("combat")).execute(&ctx).unwrap_err();
        assert!(err.to_string().contains("SHEET_ACTIONS_LOCKED"));

        let after = std::fs::read_to_string(ctx.factory.character_path("vex")).expect("read");
        assert_eq!(before, after);
    }
}
