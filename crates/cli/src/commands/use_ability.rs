use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::{Context, MutationArgs, sheet_error};
use crate::render;

/// Spend one charge of an ability, or refill every ability with --rest
#[derive(Parser, Debug)]
pub struct UseAbility {
    /// Character file name (without `.ron`)
    character: String,

    /// Ability id, as shown by `abilities --json` (e.g. `class:overdrive`)
    #[arg(required_unless_present = "rest")]
    ability: Option<String>,

    /// Restore every limited ability instead of spending one
    #[arg(long, conflicts_with = "ability")]
    rest: bool,

    #[command(flatten)]
    mutation: MutationArgs,
}

#[derive(Serialize)]
struct UseReport<'a> {
    ability: &'a str,
    remaining: u32,
}

impl UseAbility {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut sheet = ctx.load_sheet(&self.character)?;
        let lock = self.mutation.lock();

        match &self.ability {
            Some(id) => {
                let remaining = sheet.spend_charge(id, &lock).map_err(sheet_error)?;
                if ctx.json {
                    render::print_json(&UseReport {
                        ability: id,
                        remaining,
                    })?;
                } else {
                    let name = sheet.ability(id).map(|a| a.name.as_str()).unwrap_or(id.as_str());
                    println!("{} used {name} ({remaining} left)", sheet.base().name);
                }
            }
            None => {
                sheet.restore_charges(&lock).map_err(sheet_error)?;
                if !ctx.json {
                    println!("{} rests; abilities restored", sheet.base().name);
                }
            }
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

    fn use_ability(ability: Option<&str>, rest: bool) -> UseAbility {
        UseAbility {
            character: "vex".into(),
            ability: ability.map(String::from),
            rest,
            mutation: MutationArgs {
                locked: None,
                write: true,
            },
        }
    }

    fn granted_charges(ctx: &Context) -> u32 {
        let saved = CharacterLoader::load(&ctx.factory.character_path("vex")).expect("reload");
        saved
            .abilities
            .iter()
            .find(|a| a.id == "ab-1")
            .map(|a| a.current_charges)
            .expect("ab-1")
    }

    #[test]
    fn spending_and_resting_are_saved() {
        let dir = tempfile::tempdir().expect("tempdir");
        copy_data(dir.path());
        let ctx = Context {
            factory: ContentFactory::new(dir.path()),
            json: true,
        };

        use_ability(Some("ab-1"), false)
            .execute(&ctx)
            .expect("one use left");
        assert_eq!(granted_charges(&ctx), 0);

        let err = use_ability(Some("ab-1"), false).execute(&ctx).unwrap_err();
        assert!(err.to_string().contains("ABILITY_NO_CHARGES"));

        use_ability(None, true).execute(&ctx).expect("rest");
        assert_eq!(granted_charges(&ctx), 1);
    }
}
