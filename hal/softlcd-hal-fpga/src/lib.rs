//! Soft-core FPGA backend for the softlcd HAL
//!
//! Implements [`softlcd_hal::RegisterBlock`] with volatile accesses to the
//! memory-mapped peripherals of the FPGA design, and hands out the demo's
//! two peripherals exactly once through [`Board::take`].
//!
//! # Usage
//!
//! ```ignore
//! let config = BoardConfig { lcd_base: 0x4000_1000, keys_base: 0x4000_2000, button_mask: KEY0 };
//! let board = unsafe { Board::take(&config) }.unwrap();
//! ```

#![no_std]

pub mod board;
pub mod mmio;

pub use board::{Board, BoardConfig};
pub use mmio::Mmio;
