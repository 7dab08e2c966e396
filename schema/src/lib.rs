// Creature Battle Schema - Shared type definitions
// This crate holds the elemental types and the effectiveness table that are
// shared between the battle engine and anything that serializes combatants.

pub use effectiveness::*;
pub use element_types::*;

pub mod effectiveness;
pub mod element_types;
