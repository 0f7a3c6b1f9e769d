//! Glyph table lookup

use super::font::FONT_5X8;

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Column patterns for one character, leftmost column first
pub type Glyph = [u8; GLYPH_WIDTH];

/// Glyph with no lit pixels
pub const BLANK_GLYPH: Glyph = [0x00; GLYPH_WIDTH];

/// First printable ASCII code (space)
pub const PRINTABLE_BASE: u8 = 0x20;

/// Glyph lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// Character code not covered by the table
    Unsupported(u8),
}

/// Read-only table of glyphs indexed by `code - base`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: &'static [Glyph],
    base: u8,
}

impl GlyphTable {
    /// Create a table whose first entry is the glyph for `base`
    pub const fn new(glyphs: &'static [Glyph], base: u8) -> Self {
        Self { glyphs, base }
    }

    /// Built-in 5x8 font covering printable ASCII (0x20-0x7E)
    pub fn ascii() -> Self {
        Self::new(&FONT_5X8, PRINTABLE_BASE)
    }

    /// Character code of the first entry
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Number of glyphs in the table
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the table has no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Table index for a character code
    pub fn index_of(&self, code: u8) -> Result<usize, GlyphError> {
        code.checked_sub(self.base)
            .map(usize::from)
            .filter(|&index| index < self.glyphs.len())
            .ok_or(GlyphError::Unsupported(code))
    }

    /// Check whether a character code has a glyph
    pub fn contains(&self, code: u8) -> bool {
        self.index_of(code).is_ok()
    }

    /// Glyph for a character code
    pub fn lookup(&self, code: u8) -> Result<&'static Glyph, GlyphError> {
        let index = self.index_of(code)?;
        Ok(&self.glyphs[index])
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIGITS: [Glyph; 3] = [
        [0x3E, 0x51, 0x49, 0x45, 0x3E],
        [0x00, 0x42, 0x7F, 0x40, 0x00],
        [0x42, 0x61, 0x51, 0x49, 0x46],
    ];

    #[test]
    fn test_base_maps_to_index_zero() {
        let table = GlyphTable::ascii();
        assert_eq!(table.index_of(PRINTABLE_BASE), Ok(0));
        assert_eq!(table.index_of(PRINTABLE_BASE + 1), Ok(1));
        assert_eq!(table.lookup(b' '), Ok(&BLANK_GLYPH));
    }

    #[test]
    fn test_indexing_is_contiguous() {
        let table = GlyphTable::ascii();
        for (expected, code) in (0x20u8..=0x7E).enumerate() {
            assert_eq!(table.index_of(code), Ok(expected));
        }
    }

    #[test]
    fn test_codes_outside_table_are_rejected() {
        let table = GlyphTable::ascii();
        assert_eq!(table.index_of(0x1F), Err(GlyphError::Unsupported(0x1F)));
        assert_eq!(table.index_of(0x7F), Err(GlyphError::Unsupported(0x7F)));
        assert_eq!(table.index_of(0x00), Err(GlyphError::Unsupported(0x00)));
        assert!(!table.contains(0xFF));
    }

    #[test]
    fn test_custom_base() {
        let table = GlyphTable::new(&DIGITS, b'0');
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup(b'1'), Ok(&DIGITS[1]));
        assert_eq!(table.lookup(b'3'), Err(GlyphError::Unsupported(b'3')));
        assert_eq!(table.lookup(b'/'), Err(GlyphError::Unsupported(b'/')));
    }

    #[test]
    fn test_known_glyph() {
        assert_eq!(
            GlyphTable::ascii().lookup(b'A'),
            Ok(&[0x7E, 0x11, 0x11, 0x11, 0x7E])
        );
    }
}
