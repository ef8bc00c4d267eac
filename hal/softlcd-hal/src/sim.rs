//! Simulated register blocks
//!
//! In-memory stand-ins for the LCD controller and the switch register,
//! used by host tests. Every access is recorded in a bounded journal so
//! tests can check the exact register traffic a driver produced.

use heapless::{Deque, Vec};

use crate::lcd::{STATUS_BUSY, STATUS_REG};
use crate::regs::RegisterBlock;
use crate::switch::KEYS_REG;

/// Number of registers in a simulated block
pub const SIM_REGISTERS: usize = 8;

/// Accesses kept in the journal before it stops recording
pub const JOURNAL_CAPACITY: usize = 4096;

/// Scripted key levels that can be queued at once
pub const SCRIPT_CAPACITY: usize = 64;

/// One recorded register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Register read and the value it returned
    Read { offset: usize, value: u32 },
    /// Register write and the value written
    Write { offset: usize, value: u32 },
}

impl Access {
    /// Register offset touched by this access
    pub fn offset(&self) -> usize {
        match *self {
            Access::Read { offset, .. } | Access::Write { offset, .. } => offset,
        }
    }

    /// Check if this access is a write
    pub fn is_write(&self) -> bool {
        matches!(self, Access::Write { .. })
    }
}

/// Behaviour of the simulated block
enum Model {
    /// LCD controller: status reports busy for a number of reads after
    /// every write
    Lcd {
        busy_reads: u32,
        remaining: u32,
        stuck: bool,
    },
    /// Switch register: reads of word 0 replay a script, then hold the
    /// last level
    Switch {
        script: Deque<u32, SCRIPT_CAPACITY>,
        held: u32,
    },
}

/// In-memory register block
pub struct SimRegisters {
    regs: [u32; SIM_REGISTERS],
    model: Model,
    journal: Vec<Access, JOURNAL_CAPACITY>,
    overflowed: bool,
}

impl SimRegisters {
    /// LCD controller that stays busy for `busy_reads` status reads after
    /// power-on and after every write
    pub fn lcd(busy_reads: u32) -> Self {
        Self::with_model(Model::Lcd {
            busy_reads,
            remaining: busy_reads,
            stuck: false,
        })
    }

    /// Switch register idling at `level`
    pub fn switch(level: u32) -> Self {
        Self::with_model(Model::Switch {
            script: Deque::new(),
            held: level,
        })
    }

    fn with_model(model: Model) -> Self {
        Self {
            regs: [0; SIM_REGISTERS],
            model,
            journal: Vec::new(),
            overflowed: false,
        }
    }

    /// Make the LCD busy bit stick (or release it)
    ///
    /// No effect on a switch block.
    pub fn set_stuck_busy(&mut self, stuck_busy: bool) {
        if let Model::Lcd { stuck, .. } = &mut self.model {
            *stuck = stuck_busy;
        }
    }

    /// Queue key levels returned by successive reads of the switch register
    ///
    /// Returns the first level that did not fit. No effect on an LCD block.
    pub fn push_levels(&mut self, levels: &[u32]) -> Result<(), u32> {
        if let Model::Switch { script, .. } = &mut self.model {
            for &level in levels {
                script.push_back(level)?;
            }
        }
        Ok(())
    }

    /// Scripted levels not yet consumed
    pub fn pending_levels(&self) -> usize {
        match &self.model {
            Model::Switch { script, .. } => script.len(),
            Model::Lcd { .. } => 0,
        }
    }

    /// Recorded accesses, oldest first
    pub fn journal(&self) -> &[Access] {
        &self.journal
    }

    /// Recorded writes as `(offset, value)`, oldest first
    pub fn writes(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.journal.iter().filter_map(|access| match *access {
            Access::Write { offset, value } => Some((offset, value)),
            Access::Read { .. } => None,
        })
    }

    /// Number of recorded reads of `offset`
    pub fn reads_of(&self, offset: usize) -> usize {
        self.journal
            .iter()
            .filter(|access| !access.is_write() && access.offset() == offset)
            .count()
    }

    /// Check if accesses were dropped because the journal filled up
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Forget recorded accesses
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        self.overflowed = false;
    }

    fn record(&mut self, access: Access) {
        if self.journal.push(access).is_err() {
            self.overflowed = true;
        }
    }
}

impl RegisterBlock for SimRegisters {
    fn read(&mut self, offset: usize) -> u32 {
        let value = match &mut self.model {
            Model::Lcd {
                remaining, stuck, ..
            } if offset == STATUS_REG => {
                if *stuck || *remaining > 0 {
                    *remaining = remaining.saturating_sub(1);
                    STATUS_BUSY
                } else {
                    0
                }
            }
            Model::Switch { script, held } if offset == KEYS_REG => {
                if let Some(level) = script.pop_front() {
                    *held = level;
                }
                *held
            }
            _ => self.regs.get(offset).copied().unwrap_or(0),
        };

        self.record(Access::Read { offset, value });
        value
    }

    fn write(&mut self, offset: usize, value: u32) {
        if let Some(reg) = self.regs.get_mut(offset) {
            *reg = value;
        }
        if let Model::Lcd {
            busy_reads,
            remaining,
            ..
        } = &mut self.model
        {
            *remaining = *busy_reads;
        }

        self.record(Access::Write { offset, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::CHAR_REG;

    #[test]
    fn test_lcd_busy_after_write() {
        let mut sim = SimRegisters::lcd(2);

        // Power-on busy period
        assert_eq!(sim.read(STATUS_REG), STATUS_BUSY);
        assert_eq!(sim.read(STATUS_REG), STATUS_BUSY);
        assert_eq!(sim.read(STATUS_REG), 0);

        sim.write(CHAR_REG, u32::from(b'x'));
        assert_eq!(sim.read(STATUS_REG), STATUS_BUSY);
        assert_eq!(sim.read(STATUS_REG), STATUS_BUSY);
        assert_eq!(sim.read(STATUS_REG), 0);

        assert_eq!(sim.writes().count(), 1);
        assert_eq!(sim.reads_of(STATUS_REG), 6);
    }

    #[test]
    fn test_lcd_stuck_busy() {
        let mut sim = SimRegisters::lcd(0);
        sim.set_stuck_busy(true);

        for _ in 0..10 {
            assert_eq!(sim.read(STATUS_REG), STATUS_BUSY);
        }

        sim.set_stuck_busy(false);
        assert_eq!(sim.read(STATUS_REG), 0);
    }

    #[test]
    fn test_switch_script_then_hold() {
        let mut sim = SimRegisters::switch(0x4);
        sim.push_levels(&[0x0, 0x0, 0x4]).unwrap();

        assert_eq!(sim.pending_levels(), 3);
        assert_eq!(sim.read(KEYS_REG), 0x0);
        assert_eq!(sim.read(KEYS_REG), 0x0);
        assert_eq!(sim.read(KEYS_REG), 0x4);
        assert_eq!(sim.pending_levels(), 0);

        // Holds the last level once the script runs out
        assert_eq!(sim.read(KEYS_REG), 0x4);
    }

    #[test]
    fn test_script_capacity() {
        let mut sim = SimRegisters::switch(0);
        let levels = [1u32; SCRIPT_CAPACITY];
        assert!(sim.push_levels(&levels).is_ok());
        assert_eq!(sim.push_levels(&[7]), Err(7));
    }

    #[test]
    fn test_journal_overflow() {
        let mut sim = SimRegisters::lcd(0);
        for _ in 0..JOURNAL_CAPACITY + 1 {
            sim.write(CHAR_REG, 0);
        }
        assert!(sim.overflowed());
        assert_eq!(sim.journal().len(), JOURNAL_CAPACITY);

        sim.clear_journal();
        assert!(!sim.overflowed());
        assert!(sim.journal().is_empty());
    }
}
