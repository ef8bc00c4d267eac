//! Character display trait

use crate::message::Message;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Controller stayed busy longer than the spin policy allows
    Timeout,
    /// Cursor position outside the panel
    InvalidPosition,
}

/// Trait for a character LCD with a busy-flag handshake
///
/// Every operation returns only once the controller reports ready.
pub trait CharacterDisplay {
    /// Wait until the controller is ready for its first command
    ///
    /// Issues no commands; the controller is assumed to be out of
    /// hardware reset already.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `x`: Column (0-based)
    /// - `y`: Row (0-based)
    fn goto(&mut self, x: u8, y: u8) -> Result<(), DisplayError>;

    /// Write one character code at the cursor
    fn write_char(&mut self, code: u8) -> Result<(), DisplayError>;

    /// Write a string, one character at a time
    ///
    /// Stops early at a NUL byte.
    fn write_string(&mut self, text: &str) -> Result<(), DisplayError> {
        for code in text.bytes().take_while(|&code| code != 0) {
            self.write_char(code)?;
        }
        Ok(())
    }

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

/// Helper trait for drawing whole messages
pub trait DisplayExt: CharacterDisplay {
    /// Write every row of `message`, top to bottom, starting at column 0
    fn show(&mut self, message: &Message<'_>) -> Result<(), DisplayError> {
        for (row, line) in message.rows() {
            self.goto(0, row)?;
            self.write_string(line)?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay + ?Sized> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Goto(u8, u8),
        Char(u8),
    }

    /// Records every operation
    struct MockDisplay {
        ops: Vec<Op>,
    }

    impl CharacterDisplay for MockDisplay {
        fn init(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn goto(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
            self.ops.push(Op::Goto(x, y));
            Ok(())
        }

        fn write_char(&mut self, code: u8) -> Result<(), DisplayError> {
            self.ops.push(Op::Char(code));
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (20, 4)
        }
    }

    #[test]
    fn test_write_string_in_order() {
        let mut display = MockDisplay { ops: Vec::new() };
        display.write_string("abc").unwrap();
        assert_eq!(
            display.ops,
            vec![Op::Char(b'a'), Op::Char(b'b'), Op::Char(b'c')]
        );
    }

    #[test]
    fn test_write_string_stops_at_nul() {
        let mut display = MockDisplay { ops: Vec::new() };
        display.write_string("ab\0cd").unwrap();
        assert_eq!(display.ops, vec![Op::Char(b'a'), Op::Char(b'b')]);
    }

    #[test]
    fn test_show_positions_each_row() {
        let mut display = MockDisplay { ops: Vec::new() };
        let message = Message::new(["ab", "", "c", "d"]);
        display.show(&message).unwrap();

        assert_eq!(
            display.ops,
            vec![
                Op::Goto(0, 0),
                Op::Char(b'a'),
                Op::Char(b'b'),
                Op::Goto(0, 1),
                Op::Goto(0, 2),
                Op::Char(b'c'),
                Op::Goto(0, 3),
                Op::Char(b'd'),
            ]
        );
    }

    #[test]
    fn test_show_stops_on_error() {
        struct Failing;

        impl CharacterDisplay for Failing {
            fn init(&mut self) -> Result<(), DisplayError> {
                Ok(())
            }

            fn goto(&mut self, _x: u8, _y: u8) -> Result<(), DisplayError> {
                Err(DisplayError::Timeout)
            }

            fn write_char(&mut self, _code: u8) -> Result<(), DisplayError> {
                panic!("nothing should be written after a failed goto");
            }

            fn dimensions(&self) -> (u8, u8) {
                (20, 4)
            }
        }

        let result = Failing.show(&Message::new(["x", "x", "x", "x"]));
        assert_eq!(result, Err(DisplayError::Timeout));
    }
}
