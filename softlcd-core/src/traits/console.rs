//! Console trait for the demo narration

/// Low-level text sink
///
/// Purely informational output; nothing in the demo depends on it.
/// Implementations should emit each line immediately.
pub trait Console {
    /// Emit one line of text
    fn line(&mut self, text: &str);
}

impl<T: Console + ?Sized> Console for &mut T {
    fn line(&mut self, text: &str) {
        (**self).line(text)
    }
}

/// Console that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConsole;

impl Console for NullConsole {
    fn line(&mut self, _text: &str) {}
}
