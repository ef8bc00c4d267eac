//! LCD controller register map
//!
//! The controller wrapper exposes three registers:
//!
//! ```text
//! ┌────────┬──────────┬────────┬──────────────────────────────────┐
//! │ Offset │ Name     │ Access │ Semantics                        │
//! ├────────┼──────────┼────────┼──────────────────────────────────┤
//! │ 0x0    │ CHAR     │ W      │ character code at current cursor │
//! │ 0x1    │ POSITION │ W      │ (x << 2) | y                     │
//! │ 0x2    │ STATUS   │ R      │ bit0 = busy                      │
//! └────────┴──────────┴────────┴──────────────────────────────────┘
//! ```

use crate::regs::RegisterBlock;

/// Character-data register
pub const CHAR_REG: usize = 0x0;
/// Cursor-position register
pub const POSITION_REG: usize = 0x1;
/// Status register
pub const STATUS_REG: usize = 0x2;

/// Busy bit in the status register
pub const STATUS_BUSY: u32 = 0x1;

/// Character columns on the panel
pub const COLUMNS: u8 = 20;
/// Character rows on the panel
pub const ROWS: u8 = 4;

/// Width of the row field in the packed position
const ROW_BITS: u32 = 2;

/// Value read from the status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u32);

impl Status {
    /// Controller is still processing the last command
    pub fn is_busy(self) -> bool {
        self.0 & STATUS_BUSY == STATUS_BUSY
    }
}

/// Cursor position on the panel
///
/// Encodes as `(x << 2) | y` in the position register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a position, or `None` if it falls outside the panel
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < COLUMNS && y < ROWS {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Column (0-based)
    pub fn x(self) -> u8 {
        self.x
    }

    /// Row (0-based)
    pub fn y(self) -> u8 {
        self.y
    }

    /// Packed register value
    pub fn bits(self) -> u32 {
        (u32::from(self.x) << ROW_BITS) | u32::from(self.y)
    }
}

/// Typed view of the LCD controller register block
pub struct LcdRegisters<B> {
    block: B,
}

impl<B: RegisterBlock> LcdRegisters<B> {
    /// Wrap a register block located at the controller's base address
    pub fn new(block: B) -> Self {
        Self { block }
    }

    /// Write a character code at the current cursor
    pub fn write_char(&mut self, code: u8) {
        self.block.write(CHAR_REG, u32::from(code));
    }

    /// Move the cursor
    pub fn write_position(&mut self, position: Position) {
        self.block.write(POSITION_REG, position.bits());
    }

    /// Sample the status register
    pub fn status(&mut self) -> Status {
        Status(self.block.read(STATUS_REG))
    }

    /// Borrow the underlying block
    pub fn block(&self) -> &B {
        &self.block
    }

    /// Mutably borrow the underlying block
    pub fn block_mut(&mut self) -> &mut B {
        &mut self.block
    }

    /// Release the underlying block
    pub fn release(self) -> B {
        self.block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain array of registers, no busy modelling
    struct ArrayBlock {
        regs: [u32; 4],
    }

    impl RegisterBlock for ArrayBlock {
        fn read(&mut self, offset: usize) -> u32 {
            self.regs[offset]
        }

        fn write(&mut self, offset: usize, value: u32) {
            self.regs[offset] = value;
        }
    }

    #[test]
    fn test_position_packing() {
        assert_eq!(Position::new(0, 0).unwrap().bits(), 0);
        assert_eq!(Position::new(0, 3).unwrap().bits(), 3);
        assert_eq!(Position::new(1, 0).unwrap().bits(), 4);
        assert_eq!(Position::new(3, 2).unwrap().bits(), 14);
        assert_eq!(Position::new(19, 3).unwrap().bits(), 79);
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(COLUMNS, 0).is_none());
        assert!(Position::new(0, ROWS).is_none());
        assert!(Position::new(COLUMNS - 1, ROWS - 1).is_some());
    }

    #[test]
    fn test_status_busy_bit() {
        assert!(Status(0x1).is_busy());
        assert!(Status(0xFFFF_FFFF).is_busy());
        assert!(!Status(0x0).is_busy());
        assert!(!Status(0x2).is_busy());
    }

    #[test]
    fn test_register_offsets() {
        let mut lcd = LcdRegisters::new(ArrayBlock { regs: [0; 4] });

        lcd.write_char(b'A');
        lcd.write_position(Position::new(2, 1).unwrap());

        assert_eq!(lcd.block().regs[CHAR_REG], u32::from(b'A'));
        assert_eq!(lcd.block().regs[POSITION_REG], (2 << 2) | 1);

        let mut block = lcd.release();
        block.regs[STATUS_REG] = STATUS_BUSY;
        let mut lcd = LcdRegisters::new(block);
        assert!(lcd.status().is_busy());
    }
}
