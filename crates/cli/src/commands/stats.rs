use anyhow::Result;
use clap::Parser;

use super::Context;
use crate::render;

/// Show derived stats, skills and inventory
#[derive(Parser, Debug)]
pub struct Stats {
    /// Character file name (without `.ron`)
    character: String,
}

impl Stats {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let sheet = ctx.load_sheet(&self.character)?;
        if ctx.json {
            return render::print_json(sheet.stats());
        }
        print!("{}", render::stats(&sheet));
        Ok(())
    }
}
