//! Push-button trait and press-release edge detection

/// Trait for a single push-button
pub trait PushButton {
    /// Sample the button; `true` while it is held down
    fn is_pressed(&mut self) -> bool;

    /// Block until one full press-release edge has been observed
    ///
    /// Spins until the button is pressed, then spins until it is released.
    /// The polling latency doubles as debouncing. A button already held
    /// when this is called counts once it is released.
    fn wait_for_click(&mut self) {
        let mut clicks = ClickDetector::new();
        while !clicks.update(self.is_pressed()) {
            core::hint::spin_loop();
        }
    }
}

/// Press-release edge detector
///
/// Fed one button sample at a time; reports a click exactly once per
/// unpressed → pressed → unpressed transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickDetector {
    /// A press has been seen and the release is pending
    armed: bool,
}

impl ClickDetector {
    /// Create a detector waiting for a press
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Feed one sample; returns `true` when it completes a click
    pub fn update(&mut self, pressed: bool) -> bool {
        match (self.armed, pressed) {
            (false, true) => {
                self.armed = true;
                false
            }
            (true, false) => {
                self.armed = false;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of samples, then reports released
    struct ScriptedButton {
        samples: Vec<bool>,
        reads: usize,
    }

    impl PushButton for ScriptedButton {
        fn is_pressed(&mut self) -> bool {
            let pressed = self.samples.get(self.reads).copied().unwrap_or(false);
            self.reads += 1;
            pressed
        }
    }

    #[test]
    fn test_click_needs_press_then_release() {
        let mut clicks = ClickDetector::new();

        // Release alone does nothing
        assert!(!clicks.update(false));
        assert!(!clicks.update(false));

        // Press alone does nothing
        assert!(!clicks.update(true));
        assert!(!clicks.update(true));
        assert_eq!(clicks, ClickDetector { armed: true });

        // Release completes the click
        assert!(clicks.update(false));
        assert_eq!(clicks, ClickDetector::new());

        // ...exactly once
        assert!(!clicks.update(false));
    }

    #[test]
    fn test_wait_for_click_consumes_one_edge() {
        let mut button = ScriptedButton {
            samples: vec![false, false, true, true, true, false, true, false],
            reads: 0,
        };

        button.wait_for_click();
        // Stops on the first release after the press
        assert_eq!(button.reads, 6);

        button.wait_for_click();
        assert_eq!(button.reads, 8);
    }

    #[test]
    fn test_wait_for_click_with_button_already_held() {
        let mut button = ScriptedButton {
            samples: vec![true, true, false],
            reads: 0,
        };

        button.wait_for_click();
        assert_eq!(button.reads, 3);
    }
}
