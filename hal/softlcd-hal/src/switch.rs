//! Switch/button register
//!
//! Word 0 of the switch block carries the raw key levels, one bit per key.
//! The keys on the board are wired active-low: a pressed key reads 0.
//! This module only reports raw levels; polarity is the button driver's
//! concern.

use core::convert::Infallible;

use crate::regs::RegisterBlock;

/// Key level register
pub const KEYS_REG: usize = 0x0;

/// KEY0, the demo's push-button
pub const KEY0: u32 = 0x4;
/// KEY3, present on the board but not used by the demo
pub const KEY3: u32 = 0x2;

/// Raw key levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keys(pub u32);

impl Keys {
    /// Check if every bit in `mask` reads high
    pub fn is_high(self, mask: u32) -> bool {
        self.0 & mask == mask
    }
}

/// Typed view of the switch register block
pub struct SwitchRegister<B> {
    block: B,
}

impl<B: RegisterBlock> SwitchRegister<B> {
    /// Wrap a register block located at the switch base address
    pub fn new(block: B) -> Self {
        Self { block }
    }

    /// Sample all key levels
    pub fn keys(&mut self) -> Keys {
        Keys(self.block.read(KEYS_REG))
    }

    /// Single key of this register as a digital input
    pub fn into_pin(self, mask: u32) -> KeyPin<B> {
        KeyPin {
            switches: self,
            mask,
        }
    }

    /// Borrow the underlying block
    pub fn block(&self) -> &B {
        &self.block
    }

    /// Mutably borrow the underlying block
    pub fn block_mut(&mut self) -> &mut B {
        &mut self.block
    }
}

/// One key of the switch register, read as a raw digital level
///
/// Implements [`embedded_hal::digital::InputPin`] so button drivers stay
/// independent of where the level comes from.
pub struct KeyPin<B> {
    switches: SwitchRegister<B>,
    mask: u32,
}

impl<B: RegisterBlock> KeyPin<B> {
    /// Bit mask selecting this key
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Borrow the switch register
    pub fn switches(&self) -> &SwitchRegister<B> {
        &self.switches
    }

    /// Mutably borrow the switch register
    pub fn switches_mut(&mut self) -> &mut SwitchRegister<B> {
        &mut self.switches
    }
}

impl<B> embedded_hal::digital::ErrorType for KeyPin<B> {
    type Error = Infallible;
}

impl<B: RegisterBlock> embedded_hal::digital::InputPin for KeyPin<B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.switches.keys().is_high(self.mask))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.switches.keys().is_high(self.mask))
    }
}
