//! Class features copied onto a character record.

/// How a feature is used at the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FeatureKind {
    #[default]
    Passive,
    Action,
    BonusAction,
    Reaction,
}

/// A class feature as stored on the character.
///
/// Features carry no persisted id; abilities derived from them are keyed by
/// name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassFeature {
    pub name: String,
    pub description: String,
    pub kind: FeatureKind,
    /// Uses per rest. `None` means unlimited.
    pub charges: Option<u32>,
    pub effects: Vec<String>,
}

impl ClassFeature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: FeatureKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_charges(mut self, charges: u32) -> Self {
        self.charges = Some(charges);
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effects.push(effect.into());
        self
    }
}
