//! Narration over RTT

use softlcd_core::traits::Console;

/// Console that forwards every line to the defmt log
pub struct DefmtConsole;

impl Console for DefmtConsole {
    fn line(&mut self, text: &str) {
        defmt::info!("{=str}", text);
    }
}
