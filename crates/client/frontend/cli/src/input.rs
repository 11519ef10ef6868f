//! Line-oriented player input.

use std::io::{self, BufRead};

use game_core::{GameError, parse_selection};

/// One line read from the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Number(i64),
    /// The line was consumed but is not an integer.
    Malformed(GameError),
    /// Input is exhausted.
    Closed,
}

/// Reads whole lines from any buffered reader.
pub struct LineInput<R> {
    reader: R,
    bytes: Vec<u8>,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
            line: String::new(),
        }
    }

    /// Read one line, `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    pub fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.bytes.clear();
        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            return Ok(None);
        }
        self.line = String::from_utf8_lossy(&self.bytes).into_owned();
        Ok(Some(self.line.trim()))
    }

    /// Read one line and parse it as a menu number.
    pub fn read_selection(&mut self) -> io::Result<Selection> {
        Ok(match self.read_line()? {
            None => Selection::Closed,
            Some(line) => match parse_selection(line) {
                Ok(number) => Selection::Number(number),
                Err(error) => Selection::Malformed(error),
            },
        })
    }

    /// Read a yes/no answer; anything but `y`/`Y` (or end of input) is no.
    pub fn read_confirmation(&mut self) -> io::Result<bool> {
        Ok(self
            .read_line()?
            .and_then(|line| line.chars().next())
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn numbers_garbage_and_end_of_input() {
        let mut input = LineInput::new(Cursor::new("2\n  abc \n"));

        assert_eq!(input.read_selection().unwrap(), Selection::Number(2));
        assert_eq!(
            input.read_selection().unwrap(),
            Selection::Malformed(GameError::MalformedInput {
                input: "abc".into()
            })
        );
        assert_eq!(input.read_selection().unwrap(), Selection::Closed);
    }

    #[test]
    fn invalid_utf8_is_a_malformed_line() {
        let mut input = LineInput::new(Cursor::new(&b"\xff\xfe\n2\n"[..]));

        assert!(matches!(
            input.read_selection().unwrap(),
            Selection::Malformed(GameError::MalformedInput { .. })
        ));
        assert_eq!(input.read_selection().unwrap(), Selection::Number(2));
        assert_eq!(input.read_selection().unwrap(), Selection::Closed);
    }

    #[test]
    fn confirmation_checks_first_character() {
        let mut input = LineInput::new(Cursor::new("Yes\nn\n\n"));

        assert!(input.read_confirmation().unwrap());
        assert!(!input.read_confirmation().unwrap());
        assert!(!input.read_confirmation().unwrap());
        assert!(!input.read_confirmation().unwrap());
    }
}
