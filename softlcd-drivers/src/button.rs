//! Push-button driver
//!
//! Reads a single key through an `embedded-hal` input pin. The board's keys
//! are wired active-low (a pressed key pulls its line to 0), so the default
//! polarity inverts the raw level.

use embedded_hal::digital::InputPin;
use softlcd_core::traits::PushButton;

/// Which raw level means "pressed"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed reads low (board default)
    #[default]
    ActiveLow,
    /// Pressed reads high
    ActiveHigh,
}

/// Single push-button
///
/// Debouncing comes from the polling itself: callers wait for a press and
/// then for a release, see [`PushButton::wait_for_click`].
pub struct Button<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> Button<P> {
    /// Create a button with explicit polarity
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Create a button that reads pressed when its line is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }

    /// Create a button that reads pressed when its line is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Configured polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Borrow the pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Mutably borrow the pin
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Check if the button is held down
    ///
    /// A pin read error counts as "not pressed".
    pub fn is_pressed(&mut self) -> bool {
        let level = match self.polarity {
            Polarity::ActiveLow => self.pin.is_low(),
            Polarity::ActiveHigh => self.pin.is_high(),
        };
        level.unwrap_or(false)
    }
}

impl<P: InputPin> PushButton for Button<P> {
    fn is_pressed(&mut self) -> bool {
        Button::is_pressed(self)
    }
}
