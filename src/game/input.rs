//! Line-based player input.
//!
//! The match loop reads through [`PlayerInput`] so tests can script a whole
//! match from a string, while the binary reads stdin.

use std::io::BufRead;

use crate::error::GameError;

/// Source of typed lines.
pub trait PlayerInput {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, GameError>;
}

/// [`PlayerInput`] over any buffered reader.
///
/// ```
/// use std::io::Cursor;
/// use badminton_rally::game::{LineReader, PlayerInput};
///
/// let mut input = LineReader::new(Cursor::new("smash\r\ndrop\n"));
/// assert_eq!(input.next_line().unwrap().as_deref(), Some("smash"));
/// assert_eq!(input.next_line().unwrap().as_deref(), Some("drop"));
/// assert_eq!(input.next_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct LineReader<B> {
    reader: B,
}

impl<B: BufRead> LineReader<B> {
    pub fn new(reader: B) -> Self {
        Self { reader }
    }
}

impl<B: BufRead> PlayerInput for LineReader<B> {
    fn next_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
