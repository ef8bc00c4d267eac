//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Display controller reported ready after power-on
    InitComplete,
    /// One full press-release edge on the push-button
    ButtonClicked,
    /// All four rows of the current message were written
    MessageShown,
}
