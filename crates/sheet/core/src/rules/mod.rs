//! Table rules over a snapshot.
//!
//! - equip: slot and implant-capacity checks for unequipped → equipped
//! - consume: permanent deltas produced by using a consumable
//!
//! Both are pure functions. The caller persists whatever they return.

mod consume;
mod equip;

pub use consume::{ConsumeError, Consumption, resolve_consumption};
pub use equip::{RejectionReason, can_equip};
