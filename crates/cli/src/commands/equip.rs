use anyhow::Result;
use clap::Parser;
use rigsheet_core::{EngineError, EntryId};
use serde::Serialize;

use super::{Context, MutationArgs, sheet_error};
use crate::render;

/// Check whether an inventory entry could be equipped right now
#[derive(Parser, Debug)]
pub struct CheckEquip {
    /// Character file name (without `.ron`)
    character: String,

    /// Inventory entry id
    entry: u32,
}

#[derive(Serialize)]
struct CheckReport {
    entry: EntryId,
    allowed: bool,
    code: Option<&'static str>,
    message: Option<String>,
}

impl CheckEquip {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let sheet = ctx.load_sheet(&self.character)?;
        let entry = EntryId(self.entry);
        let report = match sheet.check_equip(entry) {
            Ok(()) => CheckReport {
                entry,
                allowed: true,
                code: None,
                message: None,
            },
            Err(err) => CheckReport {
                entry,
                allowed: false,
                code: Some(err.error_code()),
                message: Some(err.to_string()),
            },
        };

        if ctx.json {
            return render::print_json(&report);
        }
        match (report.code, report.message) {
            (Some(code), Some(message)) => println!("entry {entry}: refused [{code}] {message}"),
            _ => println!("entry {entry}: can be equipped"),
        }
        Ok(())
    }
}

/// Equip an inventory entry
#[derive(Parser, Debug)]
pub struct Equip {
    /// Character file name (without `.ron`)
    character: String,

    /// Inventory entry id
    entry: u32,

    #[command(flatten)]
    mutation: MutationArgs,
}

impl Equip {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut sheet = ctx.load_sheet(&self.character)?;
        let stats = sheet
            .equip(EntryId(self.entry), &self.mutation.lock())
            .map_err(sheet_error)?;

        if ctx.json {
            render::print_json(&stats)?;
        } else {
            println!("{}", render::computed(&stats));
        }
        ctx.persist(&self.character, &sheet, self.mutation.write)
    }
}

/// Unequip an inventory entry
#[derive(Parser, Debug)]
pub struct Unequip {
    /// Character file name (without `.ron`)
    character: String,

    /// Inventory entry id
    entry: u32,

    #[command(flatten)]
    mutation: MutationArgs,
}

impl Unequip {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut sheet = ctx.load_sheet(&self.character)?;
        let stats = sheet
            .unequip(EntryId(self.entry), &self.mutation.lock())
            .map_err(sheet_error)?;

        if ctx.json {
            render::print_json(&stats)?;
        } else {
            println!("{}", render::computed(&stats));
        }
        ctx.persist(&self.character, &sheet, self.mutation.write)
    }
}
