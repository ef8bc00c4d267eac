//! LCD controller wrapper driver
//!
//! Every command is a single register write followed by a spin on the
//! status register's busy bit. The driver never resets the controller; it
//! assumes hardware reset has already happened.

use softlcd_core::traits::{CharacterDisplay, DisplayError};
use softlcd_hal::lcd::{COLUMNS, ROWS};
use softlcd_hal::{LcdRegisters, Position, RegisterBlock};

use super::spin::SpinPolicy;

/// LCD driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Busy bit still set when the spin policy ran out
    Timeout,
    /// Cursor position outside the panel
    InvalidPosition,
}

impl From<LcdError> for DisplayError {
    fn from(e: LcdError) -> Self {
        match e {
            LcdError::Timeout => DisplayError::Timeout,
            LcdError::InvalidPosition => DisplayError::InvalidPosition,
        }
    }
}

/// Character LCD behind the controller wrapper
pub struct Lcd<B> {
    regs: LcdRegisters<B>,
    policy: SpinPolicy,
}

impl<B: RegisterBlock> Lcd<B> {
    /// Create a driver that spins on busy without limit
    pub fn new(regs: LcdRegisters<B>) -> Self {
        Self::with_policy(regs, SpinPolicy::Forever)
    }

    /// Create a driver with an explicit busy-wait policy
    pub fn with_policy(regs: LcdRegisters<B>, policy: SpinPolicy) -> Self {
        Self { regs, policy }
    }

    /// Current busy-wait policy
    pub fn policy(&self) -> SpinPolicy {
        self.policy
    }

    /// Borrow the register map
    pub fn registers(&self) -> &LcdRegisters<B> {
        &self.regs
    }

    /// Mutably borrow the register map
    pub fn registers_mut(&mut self) -> &mut LcdRegisters<B> {
        &mut self.regs
    }

    /// Release the register map
    pub fn release(self) -> LcdRegisters<B> {
        self.regs
    }

    /// Spin until the controller clears its busy bit
    pub fn wait_ready(&mut self) -> Result<(), LcdError> {
        let regs = &mut self.regs;
        self.policy
            .wait_while(|| regs.status().is_busy())
            .map_err(|()| LcdError::Timeout)
    }

    /// Write one character code at the cursor
    pub fn write_char(&mut self, code: u8) -> Result<(), LcdError> {
        self.regs.write_char(code);
        self.wait_ready()
    }

    /// Write the bytes of `text` in order, stopping at a NUL byte
    pub fn write_string(&mut self, text: &[u8]) -> Result<(), LcdError> {
        for &code in text.iter().take_while(|&&code| code != 0) {
            self.write_char(code)?;
        }
        Ok(())
    }

    /// Move the cursor to column `x`, row `y`
    pub fn goto(&mut self, x: u8, y: u8) -> Result<(), LcdError> {
        let position = Position::new(x, y).ok_or(LcdError::InvalidPosition)?;
        self.regs.write_position(position);
        self.wait_ready()
    }

    /// Wait for the controller to come out of power-on busy
    ///
    /// Only reads the status register. Safe to call any number of times.
    pub fn init(&mut self) -> Result<(), LcdError> {
        self.wait_ready()
    }
}

impl<B: RegisterBlock> CharacterDisplay for Lcd<B> {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(Lcd::init(self)?)
    }

    fn goto(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        Ok(Lcd::goto(self, x, y)?)
    }

    fn write_char(&mut self, code: u8) -> Result<(), DisplayError> {
        Ok(Lcd::write_char(self, code)?)
    }

    fn write_string(&mut self, text: &str) -> Result<(), DisplayError> {
        Ok(Lcd::write_string(self, text.as_bytes())?)
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLUMNS, ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softlcd_hal::lcd::{CHAR_REG, POSITION_REG, STATUS_REG};
    use softlcd_hal::sim::{Access, SimRegisters};

    fn lcd(busy_reads: u32) -> Lcd<SimRegisters> {
        let mut lcd = Lcd::new(LcdRegisters::new(SimRegisters::lcd(busy_reads)));
        lcd.init().unwrap();
        lcd.regs.block_mut().clear_journal();
        lcd
    }

    #[test]
    fn test_write_char_then_wait() {
        let mut lcd = lcd(2);
        lcd.write_char(b'Z').unwrap();

        assert_eq!(
            lcd.registers().block().journal(),
            &[
                Access::Write {
                    offset: CHAR_REG,
                    value: u32::from(b'Z')
                },
                Access::Read {
                    offset: STATUS_REG,
                    value: 1
                },
                Access::Read {
                    offset: STATUS_REG,
                    value: 1
                },
                Access::Read {
                    offset: STATUS_REG,
                    value: 0
                },
            ]
        );
    }

    #[test]
    fn test_goto_packs_position() {
        let mut lcd = lcd(0);
        lcd.goto(3, 2).unwrap();

        let writes: Vec<_> = lcd.registers().block().writes().collect();
        assert_eq!(writes, vec![(POSITION_REG, (3 << 2) | 2)]);
        assert_eq!(lcd.registers().block().reads_of(STATUS_REG), 1);
    }

    #[test]
    fn test_goto_out_of_range_touches_nothing() {
        let mut lcd = lcd(0);
        assert_eq!(lcd.goto(0, 4), Err(LcdError::InvalidPosition));
        assert_eq!(lcd.goto(20, 0), Err(LcdError::InvalidPosition));
        assert!(lcd.registers().block().journal().is_empty());
    }

    #[test]
    fn test_write_string_stops_at_nul() {
        let mut lcd = lcd(0);
        lcd.write_string(b"hi\0there").unwrap();

        let writes: Vec<_> = lcd.registers().block().writes().collect();
        assert_eq!(
            writes,
            vec![(CHAR_REG, u32::from(b'h')), (CHAR_REG, u32::from(b'i'))]
        );
    }

    #[test]
    fn test_init_only_reads_status() {
        let mut lcd = Lcd::new(LcdRegisters::new(SimRegisters::lcd(3)));

        for _ in 0..5 {
            lcd.init().unwrap();
        }

        let sim = lcd.registers().block();
        assert_eq!(sim.writes().count(), 0);
        assert!(sim.journal().iter().all(|a| a.offset() == STATUS_REG));
        // Three busy samples from power-on, then one ready sample per call
        assert_eq!(sim.reads_of(STATUS_REG), 3 + 5);
    }

    #[test]
    fn test_bounded_policy_times_out() {
        let mut sim = SimRegisters::lcd(0);
        sim.set_stuck_busy(true);
        let mut lcd = Lcd::with_policy(LcdRegisters::new(sim), SpinPolicy::Bounded(8));

        assert_eq!(lcd.write_char(b'a'), Err(LcdError::Timeout));
        assert_eq!(lcd.registers().block().reads_of(STATUS_REG), 8);
        assert_eq!(lcd.policy(), SpinPolicy::Bounded(8));
    }

    #[test]
    fn test_forever_outlasts_long_busy() {
        let mut lcd = lcd(1_000);
        lcd.write_char(b'a').unwrap();
        assert_eq!(lcd.registers().block().reads_of(STATUS_REG), 1_001);
    }

    #[test]
    fn test_error_maps_into_display_error() {
        assert_eq!(DisplayError::from(LcdError::Timeout), DisplayError::Timeout);
        assert_eq!(
            DisplayError::from(LcdError::InvalidPosition),
            DisplayError::InvalidPosition
        );
    }

    #[test]
    fn test_character_display_impl() {
        let mut lcd = lcd(1);
        let display: &mut dyn CharacterDisplay = &mut lcd;

        assert_eq!(display.dimensions(), (20, 4));
        display.goto(0, 1).unwrap();
        display.write_string("ok").unwrap();

        let writes: Vec<_> = lcd.registers().block().writes().collect();
        assert_eq!(
            writes,
            vec![
                (POSITION_REG, 1),
                (CHAR_REG, u32::from(b'o')),
                (CHAR_REG, u32::from(b'k')),
            ]
        );
    }
}
