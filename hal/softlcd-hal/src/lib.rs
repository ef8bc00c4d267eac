//! softlcd Hardware Abstraction Layer
//!
//! This crate defines the register-block abstraction the rest of the
//! workspace is written against, plus typed register maps for the two
//! peripherals the demo touches. Chip-specific crates provide the actual
//! memory-mapped implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (softlcd-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  softlcd-drivers (LCD, push-button)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  softlcd-hal (this crate - traits/maps) │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ softlcd-hal-  │       │  sim (tests)  │
//! │    fpga       │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`regs::RegisterBlock`] - Word-indexed register access
//! - [`lcd::LcdRegisters`] - LCD controller register map
//! - [`switch::SwitchRegister`], [`switch::KeyPin`] - Push-button register

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod regs;
pub mod switch;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

// Re-export key types at crate root for convenience
pub use lcd::{LcdRegisters, Position, Status};
pub use regs::RegisterBlock;
pub use switch::{KeyPin, Keys, SwitchRegister, KEY0, KEY3};
