//! Fixed four-row messages
//!
//! A message fills the whole 20x4 panel, one line per row.

/// Number of rows in a message
pub const MESSAGE_ROWS: usize = 4;

/// Maximum characters per row
pub const MESSAGE_COLS: usize = 20;

/// Four lines of text, one per display row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message<'a> {
    lines: [&'a str; MESSAGE_ROWS],
}

impl<'a> Message<'a> {
    /// Create a message from its four lines
    pub const fn new(lines: [&'a str; MESSAGE_ROWS]) -> Self {
        Self { lines }
    }

    /// Lines paired with their row number, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = (u8, &'a str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(row, line)| (row as u8, *line))
    }

    /// Check that every line fits on the panel
    pub fn fits(&self) -> bool {
        self.lines.iter().all(|line| line.len() <= MESSAGE_COLS)
    }
}

/// Shown after the first button press
pub const FIRST: Message<'static> = Message::new([
    "+------------------+",
    "| Trabajo Practico |",
    "|       MyS        |",
    "+------------------+",
]);

/// Shown after the second button press
pub const SECOND: Message<'static> = Message::new([
    "+------------------+",
    "| Segundo mensaje  |",
    "|   y... ultimo    |",
    "+------------------+",
]);
