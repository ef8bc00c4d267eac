//! Board-agnostic core logic for the softlcd bring-up demo
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (character display, push-button, console)
//! - State machine for the demo sequence
//! - The two fixed messages
//! - The sequence runner tying it all together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod demo;
pub mod message;
pub mod state;
pub mod traits;

pub use demo::{Demo, DemoError};
pub use message::Message;
pub use state::{Event, State};
