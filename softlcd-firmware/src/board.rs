//! Board configuration
//!
//! Constants come from board.toml, validated and turned into Rust by
//! build.rs.

use softlcd_drivers::{Polarity, SpinPolicy};
use softlcd_hal_fpga::BoardConfig;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

pub use generated::{ACTIVE_LOW, BUTTON_MASK, KEYS_BASE, LCD_BASE, SPIN_MAX_READS};

/// Bus layout of the demo peripherals
pub const fn config() -> BoardConfig {
    BoardConfig {
        lcd_base: LCD_BASE,
        keys_base: KEYS_BASE,
        button_mask: BUTTON_MASK,
    }
}

/// How long the LCD driver waits on the busy flag
pub fn spin_policy() -> SpinPolicy {
    SpinPolicy::from_max_reads(SPIN_MAX_READS)
}

/// Which key level means "pressed"
pub fn button_polarity() -> Polarity {
    if ACTIVE_LOW {
        Polarity::ActiveLow
    } else {
        Polarity::ActiveHigh
    }
}
