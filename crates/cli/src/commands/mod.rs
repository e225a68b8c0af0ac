//! Subcommands.

mod abilities;
mod classes;
mod consume;
mod equip;
mod stats;
mod use_ability;

pub use abilities::Abilities;
pub use classes::Classes;
pub use consume::Consume;
pub use equip::{CheckEquip, Equip, Unequip};
pub use stats::Stats;
pub use use_ability::UseAbility;

use anyhow::{Context as _, Result};
use clap::Args;
use rigsheet_content::ContentFactory;
use rigsheet_core::{ActionLock, CharacterSheet, EngineError, SheetError};

/// Shared state for every command.
pub struct Context {
    pub factory: ContentFactory,
    pub json: bool,
}

impl Context {
    pub fn load_sheet(&self, character: &str) -> Result<CharacterSheet> {
        self.factory
            .load_sheet(character)
            .with_context(|| format!("Failed to load character '{character}'"))
    }

    /// Saves the sheet when `write` is set, otherwise notes that nothing was persisted.
    pub fn persist(&self, character: &str, sheet: &CharacterSheet, write: bool) -> Result<()> {
        if write {
            self.factory.save_sheet(character, sheet)?;
        } else if !self.json {
            println!("(dry run: pass --write to save)");
        }
        Ok(())
    }
}

/// Flags for commands that change a character.
#[derive(Args, Debug, Clone)]
pub struct MutationArgs {
    /// Refuse the action as if a game master had locked actions
    #[arg(long, value_name = "REASON", num_args = 0..=1, default_missing_value = "actions locked")]
    pub locked: Option<String>,

    /// Save the changed character file
    #[arg(short, long)]
    pub write: bool,
}

impl MutationArgs {
    pub fn lock(&self) -> ActionLock {
        match &self.locked {
            Some(reason) => ActionLock::locked(reason.clone()),
            None => ActionLock::unlocked(),
        }
    }
}

/// Converts a sheet error into a CLI error carrying its stable code.
pub fn sheet_error(err: SheetError) -> anyhow::Error {
    anyhow::anyhow!("{} [{}]", err, err.error_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_flag_maps_to_action_lock() {
        let free = MutationArgs {
            locked: None,
            write: false,
        };
        assert!(!free.lock().is_locked());

        let held = MutationArgs {
            locked: Some("combat".into()),
            write: false,
        };
        assert_eq!(held.lock().reason(), Some("combat"));
    }
}
