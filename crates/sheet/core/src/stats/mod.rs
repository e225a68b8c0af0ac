//! Stat system.
//!
//! # Data Flow
//!
//! ```text
//! [ CharacterBase (persisted) ] + [ equipped Items ] + [ ClassDefinition ]
//!                         ↓ compute_stats
//!                  [ ComputedStats (never stored) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Only the base record is persisted; everything here is derived
//! 2. **Full Recompute**: There is no incremental path; every change re-folds
//!    the complete equipped set
//! 3. **Order Independent**: Accumulation is a commutative sum
//! 4. **Total**: Missing fields fall back to neutral values, never errors

pub mod abilities;
pub mod aggregate;
pub mod computed;
pub mod legacy;
pub mod proficiency;

pub use abilities::{AbilityScores, Stat};
pub use aggregate::{ModifierTotals, compute_stats};
pub use computed::ComputedStats;
pub use legacy::ScoreEncoding;
pub use proficiency::ProficiencyTable;
