//! Hardware abstraction traits
//!
//! These traits define the interface between the demo sequence and the
//! hardware-specific drivers.

pub mod console;
pub mod display;
pub mod input;

pub use console::{Console, NullConsole};
pub use display::{CharacterDisplay, DisplayError, DisplayExt};
pub use input::{ClickDetector, PushButton};
