//! State machine definition
//!
//! What the demo does next is a function of the current state and an
//! event, nothing else.

use super::events::Event;

/// Demo states, in sequence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on, waiting for the display controller
    Booting,
    /// Waiting for the first button press
    WaitPress1,
    /// Writing the first message
    ShowMsg1,
    /// Waiting for the second button press
    WaitPress2,
    /// Writing the second message
    ShowMsg2,
    /// Demo finished; nothing leaves this state
    Halted,
}

impl State {
    /// Check if this state blocks on the push-button
    pub fn awaits_button(&self) -> bool {
        matches!(self, State::WaitPress1 | State::WaitPress2)
    }

    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Halted)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Booting, InitComplete) => WaitPress1,

            (WaitPress1, ButtonClicked) => ShowMsg1,
            (ShowMsg1, MessageShown) => WaitPress2,

            (WaitPress2, ButtonClicked) => ShowMsg2,
            (ShowMsg2, MessageShown) => Halted,

            // Default: stay in current state
            _ => self,
        }
    }
}
