use anyhow::Result;
use clap::Parser;
use rigsheet_core::ClassOracle;

use super::Context;
use crate::render;

/// List the class catalog
#[derive(Parser, Debug)]
pub struct Classes {}

impl Classes {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let catalog = ctx.factory.load_classes()?;
        let classes = catalog.all_classes();
        if ctx.json {
            return render::print_json(&classes);
        }
        print!("{}", render::classes(&classes));
        Ok(())
    }
}
