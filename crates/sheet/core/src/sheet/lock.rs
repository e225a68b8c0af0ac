use super::SheetError;

/// Whether the character may act right now.
///
/// Passed explicitly to every sheet mutation. When locked, the whole
/// operation is refused before any rule runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLock {
    locked: bool,
    reason: Option<String>,
}

impl ActionLock {
    pub fn unlocked() -> Self {
        Self::default()
    }

    pub fn locked(reason: impl Into<String>) -> Self {
        Self {
            locked: true,
            reason: Some(reason.into()),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn ensure_unlocked(&self) -> Result<(), SheetError> {
        if self.locked {
            return Err(SheetError::Locked {
                reason: self
                    .reason
                    .clone()
                    .unwrap_or_else(|| "locked".to_string()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_passes() {
        assert!(ActionLock::unlocked().ensure_unlocked().is_ok());
    }

    #[test]
    fn locked_reports_reason() {
        let lock = ActionLock::locked("waiting for GM");
        assert!(lock.is_locked());
        assert_eq!(
            lock.ensure_unlocked(),
            Err(SheetError::Locked {
                reason: "waiting for GM".into()
            })
        );
    }
}
