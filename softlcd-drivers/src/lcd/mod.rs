//! Character LCD drivers
//!
//! The controller wrapper takes one command per register write and raises
//! its busy flag until the command has reached the panel.

pub mod controller;
pub mod spin;

pub use controller::{Lcd, LcdError};
pub use spin::SpinPolicy;
