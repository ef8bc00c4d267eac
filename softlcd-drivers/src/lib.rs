//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in softlcd-core:
//!
//! - Character LCD behind the controller wrapper's register block
//! - Push-button read through an `embedded-hal` input pin

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod lcd;

pub use button::{Button, Polarity};
pub use lcd::{Lcd, LcdError, SpinPolicy};
