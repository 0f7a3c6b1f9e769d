//! Text handling
//!
//! Glyph lookup and validated messages. Glyphs are 5 columns wide, one byte
//! per column, bit 0 is the top row.

pub mod font;
pub mod glyph;
pub mod message;

pub use font::FONT_5X8;
pub use glyph::{Glyph, GlyphError, GlyphTable, BLANK_GLYPH, GLYPH_WIDTH, PRINTABLE_BASE};
pub use message::{Message, MessageError, MAX_MESSAGE_LEN};
