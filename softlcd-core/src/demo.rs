//! Demo sequence runner
//!
//! Owns the display, the push-button and the console, and drives them
//! through the state machine:
//!
//! ```text
//! Booting → WaitPress1 → ShowMsg1 → WaitPress2 → ShowMsg2 → Halted
//! ```

use core::convert::Infallible;

use crate::message::{Message, FIRST, SECOND};
use crate::state::{Event, State};
use crate::traits::{CharacterDisplay, ClickDetector, Console, DisplayError, DisplayExt, PushButton};

/// Printed before waiting on the display controller
pub const NARRATION_BOOT: &str = "Initializing soft core and LCD";
/// Printed once the display controller is ready
pub const NARRATION_READY: &str = "Ready for the demo";
/// Printed when waiting for the first press
pub const NARRATION_PROMPT_FIRST: &str = "Press KEY0 to print something...";
/// Printed when waiting for the second press
pub const NARRATION_PROMPT_SECOND: &str = "Press KEY0 to print a second message...";
/// Printed when the demo halts
pub const NARRATION_END: &str = "End of the demo";

/// Errors that stop the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoError {
    /// The display driver gave up
    Display(DisplayError),
}

impl From<DisplayError> for DemoError {
    fn from(e: DisplayError) -> Self {
        DemoError::Display(e)
    }
}

/// The bring-up demo
///
/// Single-threaded and synchronous: every call blocks until the hardware
/// lets it finish.
pub struct Demo<'m, D, B, C> {
    display: D,
    button: B,
    console: C,
    state: State,
    clicks: ClickDetector,
    messages: [Message<'m>; 2],
}

impl<D, B, C> Demo<'static, D, B, C>
where
    D: CharacterDisplay,
    B: PushButton,
    C: Console,
{
    /// Create the demo with its two fixed messages
    pub fn new(display: D, button: B, console: C) -> Self {
        Self::with_messages(display, button, console, FIRST, SECOND)
    }
}

impl<'m, D, B, C> Demo<'m, D, B, C>
where
    D: CharacterDisplay,
    B: PushButton,
    C: Console,
{
    /// Create the demo with custom messages
    ///
    /// Every line must fit on one panel row.
    pub fn with_messages(
        display: D,
        button: B,
        console: C,
        first: Message<'m>,
        second: Message<'m>,
    ) -> Self {
        debug_assert!(first.fits() && second.fits(), "message wider than the panel");
        Self {
            display,
            button,
            console,
            state: State::Booting,
            clicks: ClickDetector::new(),
            messages: [first, second],
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Borrow the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutably borrow the display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Borrow the push-button
    pub fn button(&self) -> &B {
        &self.button
    }

    /// Mutably borrow the push-button
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    /// Borrow the console
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Do one unit of work without waiting on the button
    ///
    /// In a wait state this samples the button once and advances only
    /// when that sample completes a press-release edge. In every other
    /// state it performs the state's work and advances. Display work
    /// still blocks on the controller's busy flag.
    ///
    /// On error the state is left unchanged.
    pub fn poll(&mut self) -> Result<State, DemoError> {
        let event = match self.state {
            State::Booting => {
                self.console.line(NARRATION_BOOT);
                self.display.init()?;
                self.console.line(NARRATION_READY);
                self.console.line(NARRATION_PROMPT_FIRST);
                Some(Event::InitComplete)
            }
            State::WaitPress1 | State::WaitPress2 => {
                let pressed = self.button.is_pressed();
                self.clicks.update(pressed).then_some(Event::ButtonClicked)
            }
            State::ShowMsg1 => {
                self.show(0)?;
                self.console.line(NARRATION_PROMPT_SECOND);
                Some(Event::MessageShown)
            }
            State::ShowMsg2 => {
                self.show(1)?;
                self.console.line(NARRATION_END);
                Some(Event::MessageShown)
            }
            State::Halted => None,
        };

        if let Some(event) = event {
            self.state = self.state.transition(event);
        }
        Ok(self.state)
    }

    /// Advance exactly one state
    ///
    /// Wait states block until a full press-release edge. A press already
    /// seen by [`poll`](Self::poll) counts towards that edge. Returns the
    /// new state; `Halted` returns immediately and stays put.
    pub fn step(&mut self) -> Result<State, DemoError> {
        if self.state.awaits_button() {
            while !self.clicks.update(self.button.is_pressed()) {
                core::hint::spin_loop();
            }
            self.state = self.state.transition(Event::ButtonClicked);
            return Ok(self.state);
        }
        self.poll()
    }

    /// Run the whole sequence, then spin forever
    ///
    /// Only returns if the display driver gives up.
    pub fn run(&mut self) -> Result<Infallible, DemoError> {
        while !self.step()?.is_terminal() {}

        loop {
            core::hint::spin_loop();
        }
    }

    /// Echo a message on the console, then write it to the display
    fn show(&mut self, index: usize) -> Result<(), DisplayError> {
        let message = self.messages[index];
        for (_, line) in message.rows() {
            self.console.line(line);
        }
        self.display.show(&message)
    }
}
