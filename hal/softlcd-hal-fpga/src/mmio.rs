//! Volatile memory-mapped register block

use softlcd_hal::RegisterBlock;

/// Size of one bus register in bytes
const WORD: usize = core::mem::size_of::<u32>();

/// Register block at a fixed bus address
///
/// Register `n` is the 32-bit word at `base + n * 4`.
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Create a register block at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the word-aligned address of a peripheral register
    /// block, and nothing else may access that block while this value
    /// exists.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Bus address of the block
    pub fn base(&self) -> usize {
        self.base
    }

    fn register(&self, offset: usize) -> *mut u32 {
        (self.base + offset * WORD) as *mut u32
    }
}

impl RegisterBlock for Mmio {
    fn read(&mut self, offset: usize) -> u32 {
        // SAFETY: `new` guarantees `base` is an owned peripheral block.
        unsafe { core::ptr::read_volatile(self.register(offset)) }
    }

    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: `new` guarantees `base` is an owned peripheral block.
        unsafe { core::ptr::write_volatile(self.register(offset), value) }
    }
}
