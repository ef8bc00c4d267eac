//! Board peripherals
//!
//! The FPGA design places the LCD controller wrapper and the key register
//! at fixed bus addresses. [`Board::take`] turns those addresses into owned
//! handles, once per boot.

use portable_atomic::{AtomicBool, Ordering};
use softlcd_hal::{KeyPin, LcdRegisters, SwitchRegister};

use crate::mmio::Mmio;

/// Set once the peripherals have been handed out
static TAKEN: AtomicBool = AtomicBool::new(false);

/// Bus layout of the demo peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Base address of the LCD controller register block
    pub lcd_base: usize,
    /// Base address of the key/switch register
    pub keys_base: usize,
    /// Bit of the demo push-button in the key register
    pub button_mask: u32,
}

/// Owned demo peripherals
pub struct Board {
    /// LCD controller registers
    pub lcd: LcdRegisters<Mmio>,
    /// Demo push-button, raw level
    pub button: KeyPin<Mmio>,
}

impl Board {
    /// Take the board peripherals
    ///
    /// Returns `None` if they were already taken.
    ///
    /// # Safety
    ///
    /// `config` must describe the actual bus addresses of the peripherals.
    pub unsafe fn take(config: &BoardConfig) -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }

        // SAFETY: the caller vouches for the addresses and TAKEN makes
        // these the only handles.
        let (lcd, keys) = unsafe { (Mmio::new(config.lcd_base), Mmio::new(config.keys_base)) };

        Some(Self {
            lcd: LcdRegisters::new(lcd),
            button: SwitchRegister::new(keys).into_pin(config.button_mask),
        })
    }
}
