use anyhow::Result;
use clap::Parser;

use super::Context;
use crate::render;

/// List abilities from the character, its class features and its items
#[derive(Parser, Debug)]
pub struct Abilities {
    /// Character file name (without `.ron`)
    character: String,
}

impl Abilities {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let sheet = ctx.load_sheet(&self.character)?;
        if ctx.json {
            return render::print_json(&sheet.abilities());
        }
        print!("{}", render::abilities(sheet.abilities()));
        Ok(())
    }
}
