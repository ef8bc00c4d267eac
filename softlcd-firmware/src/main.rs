//! softlcd - LCD bring-up demo firmware
//!
//! Runs on the soft core inside the FPGA. Waits for the LCD controller,
//! then prints two fixed messages, one per KEY0 click, and halts.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use softlcd_core::Demo;
use softlcd_drivers::{Button, Lcd};
use softlcd_hal_fpga::Board;

use crate::console::DefmtConsole;

mod board;
mod console;

#[entry]
fn main() -> ! {
    info!("softlcd firmware starting...");

    let config = board::config();
    debug!(
        "LCD at {=usize:#x}, keys at {=usize:#x}, button mask {=u32:#x}",
        config.lcd_base, config.keys_base, config.button_mask
    );

    // SAFETY: board.toml is validated against the FPGA design at build
    // time, and this is the only place the board is taken.
    let board = match unsafe { Board::take(&config) } {
        Some(board) => board,
        None => defmt::panic!("board peripherals already taken"),
    };

    let policy = board::spin_policy();
    let polarity = board::button_polarity();
    debug!("spin policy {}, button {}", policy, polarity);

    let lcd = Lcd::with_policy(board.lcd, policy);
    let button = Button::new(board.button, polarity);

    let mut demo = Demo::new(lcd, button, DefmtConsole);
    match demo.run() {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("demo stopped in {}: {}", demo.state(), e),
    }
}
