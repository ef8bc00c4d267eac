//! Register block abstraction
//!
//! Peripherals on the soft-core bus are 32-bit registers addressed by word
//! index from a base address. Implementations decide what a "register" is:
//! volatile memory on hardware, an in-memory model in tests.

/// A block of word-indexed 32-bit registers
///
/// `offset` is a register index, not a byte offset. Register `n` of a
/// memory-mapped block lives at `base + n * 4`.
///
/// Reads take `&mut self` because reading a hardware register can have
/// side effects (and a simulated block advances its model on every read).
pub trait RegisterBlock {
    /// Read the register at `offset`
    fn read(&mut self, offset: usize) -> u32;

    /// Write `value` to the register at `offset`
    fn write(&mut self, offset: usize, value: u32);
}

impl<T: RegisterBlock + ?Sized> RegisterBlock for &mut T {
    fn read(&mut self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}
