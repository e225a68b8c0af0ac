//! Common error infrastructure for rigsheet-core.
//!
//! Domain-specific errors (`RejectionReason`, `ConsumeError`, `SheetError`)
//! live next to the rules that produce them. This module provides the shared
//! severity classification they all report through [`EngineError`].
//!
//! # Design Principles
//!
//! - **Type Safety**: Each rule has its own error type with specific variants
//! - **Rich Context**: Variants carry the values a caller needs to render a message
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Expected, user-facing outcomes (slot full, actions locked)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Caller misuse or corrupted catalog data; surface loudly
/// - **Fatal**: Unrecoverable state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the player can act differently and succeed.
    ///
    /// Examples: armor slot full, not enough implant capacity
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: inventory entry not found, item cannot be equipped
    Validation,

    /// Internal error - a caller or catalog bug.
    ///
    /// Examples: consuming a non-consumable item, unknown skill name on an item
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all rigsheet-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable string identifier for this error variant.
    ///
    /// Clients key user-facing copy and metrics off these codes.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
