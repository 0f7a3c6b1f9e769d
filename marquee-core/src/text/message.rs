//! Validated scroll messages

use super::glyph::{Glyph, GlyphTable, BLANK_GLYPH};

/// Longest message accepted
pub const MAX_MESSAGE_LEN: usize = 256;

/// Message validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Nothing to scroll
    Empty,
    /// More than `MAX_MESSAGE_LEN` characters
    TooLong,
    /// Character has no glyph in the table
    UnsupportedCharacter {
        /// Position in the message
        index: usize,
        /// Offending character code
        code: u8,
    },
}

/// Immutable message whose every character has a glyph
///
/// Validation happens once here, so scrolling never has to handle a
/// missing glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    text: &'a [u8],
    table: GlyphTable,
}

impl<'a> Message<'a> {
    /// Validate `text` against `table`
    pub fn new(text: &'a [u8], table: GlyphTable) -> Result<Self, MessageError> {
        if text.is_empty() {
            return Err(MessageError::Empty);
        }
        if text.len() > MAX_MESSAGE_LEN {
            return Err(MessageError::TooLong);
        }
        if let Some((index, &code)) = text
            .iter()
            .enumerate()
            .find(|&(_, &code)| !table.contains(code))
        {
            return Err(MessageError::UnsupportedCharacter { index, code });
        }

        Ok(Self { text, table })
    }

    /// Validate ASCII text against the built-in font
    pub fn ascii(text: &'a str) -> Result<Self, MessageError> {
        Self::new(text.as_bytes(), GlyphTable::ascii())
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed message
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Raw character codes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    /// Table the message was validated against
    pub fn table(&self) -> GlyphTable {
        self.table
    }

    /// Glyph for the character at `index`
    ///
    /// Indices past the end yield a blank glyph.
    pub fn glyph_at(&self, index: usize) -> &'static Glyph {
        self.text
            .get(index)
            .and_then(|&code| self.table.lookup(code).ok())
            .unwrap_or(&BLANK_GLYPH)
    }
}
