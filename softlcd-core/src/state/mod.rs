//! State machine for the demo sequence
//!
//! The sequence is linear: boot, two button-gated messages, halt.
//! Transitions are explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
