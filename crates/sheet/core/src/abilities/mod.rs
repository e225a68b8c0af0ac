//! Abilities available to a character.
//!
//! Abilities come from three places: granted directly to the character
//! (persisted with their own charge count), class features on the character
//! record, and items. [`aggregate_abilities`] merges them into one list.

mod aggregate;

pub use aggregate::{ItemAbilitySource, aggregate_abilities, class_ability_id};

use crate::error::{EngineError, ErrorSeverity};

/// Where an ability came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum AbilitySource {
    Character,
    Class,
    Item,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ChargeType {
    /// Limited uses, restored on rest.
    Uses,
    #[default]
    Infinite,
}

impl ChargeType {
    pub fn from_charges(charges: Option<u32>) -> Self {
        if charges.is_some() {
            Self::Uses
        } else {
            Self::Infinite
        }
    }
}

/// An ability granted directly to a character and persisted with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterAbility {
    pub id: String,
    pub name: String,
    pub description: String,
    pub charge_type: ChargeType,
    pub current_charges: u32,
    pub max_charges: u32,
    pub damage: Option<String>,
    pub range: Option<String>,
    pub duration: Option<String>,
    pub effects: Vec<String>,
}

impl CharacterAbility {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Limited to `max` uses, starting full.
    pub fn with_uses(mut self, max: u32) -> Self {
        self.charge_type = ChargeType::Uses;
        self.max_charges = max;
        self.current_charges = max;
        self
    }
}

/// One entry in the merged ability list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub source: AbilitySource,
    pub charge_type: ChargeType,
    pub current_charges: u32,
    pub max_charges: u32,
    pub damage: Option<String>,
    pub range: Option<String>,
    pub duration: Option<String>,
    pub effects: Vec<String>,
    /// Owning item's name, for item abilities.
    pub item_name: Option<String>,
}

impl Ability {
    pub fn is_available(&self) -> bool {
        self.charge_type == ChargeType::Infinite || self.current_charges > 0
    }

    /// Uses one charge. Infinite abilities never deplete.
    pub fn spend_charge(&mut self) -> Result<u32, ChargeError> {
        match self.charge_type {
            ChargeType::Infinite => Ok(self.current_charges),
            ChargeType::Uses if self.current_charges == 0 => Err(ChargeError::NoChargesLeft {
                ability: self.id.clone(),
            }),
            ChargeType::Uses => {
                self.current_charges -= 1;
                Ok(self.current_charges)
            }
        }
    }

    pub fn restore_charges(&mut self) {
        self.current_charges = self.max_charges;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChargeError {
    #[error("ability '{ability}' has no charges left")]
    NoChargesLeft { ability: String },
}

impl EngineError for ChargeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoChargesLeft { .. } => "ABILITY_NO_CHARGES",
        }
    }
}
