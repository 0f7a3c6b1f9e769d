//! Message to column stream
//!
//! Turns a validated message into the endless sequence of columns that get
//! shifted into the scroll buffer: five glyph columns per character, one
//! blank spacer column after each, wrapping back to the first character.

use crate::text::{Message, GLYPH_WIDTH};

/// Blank column inserted after every character
pub const SPACER_COLUMN: u8 = 0x00;

/// Scroll steps per character (glyph plus spacer)
pub const COLUMNS_PER_CHARACTER: usize = GLYPH_WIDTH + 1;

/// Where the stream is within the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamPosition {
    /// Index of the character being emitted
    pub character: usize,
    /// Column within that character (0-4 glyph, 5 spacer)
    pub column: usize,
}

/// Endless column source for one message
///
/// `next()` never returns `None`.
#[derive(Debug, Clone)]
pub struct ColumnStream<'a> {
    message: Message<'a>,
    position: StreamPosition,
}

impl<'a> ColumnStream<'a> {
    /// Start streaming `message` from its first column
    pub fn new(message: Message<'a>) -> Self {
        Self {
            message,
            position: StreamPosition::default(),
        }
    }

    /// Message being streamed
    pub fn message(&self) -> &Message<'a> {
        &self.message
    }

    /// Position of the column the next call to `next()` returns
    pub fn position(&self) -> StreamPosition {
        self.position
    }

    /// Number of columns before the stream repeats
    pub fn cycle_len(&self) -> usize {
        self.message.len() * COLUMNS_PER_CHARACTER
    }

    /// Rewind to the first column of the message
    pub fn reset(&mut self) {
        self.position = StreamPosition::default();
    }

    fn current(&self) -> u8 {
        let StreamPosition { character, column } = self.position;
        if column < GLYPH_WIDTH {
            self.message.glyph_at(character)[column]
        } else {
            SPACER_COLUMN
        }
    }

    fn advance(&mut self) {
        self.position.column += 1;
        if self.position.column == COLUMNS_PER_CHARACTER {
            self.position.column = 0;
            self.position.character = (self.position.character + 1) % self.message.len();
        }
    }
}

impl Iterator for ColumnStream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let column = self.current();
        self.advance();
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
