use tinycanvas_abi::{FONT_HEIGHT, FONT_WIDTH, PixelSurface, glyph};

use crate::bitmap::{self, Bitmap};

/// Character cell geometry and the screen it wraps within.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLayout {
    pub screen_width: u8,
    pub screen_height: u8,
    pub char_spacing: u8,
    pub line_spacing: u8,
}

impl TextLayout {
    /// Horizontal cursor step per character at `scale`.
    #[inline]
    pub const fn char_advance(&self, scale: u8) -> u32 {
        scale as u32 * (FONT_WIDTH as u32 + self.char_spacing as u32)
    }

    /// Vertical cursor step per line at `scale`.
    #[inline]
    pub const fn line_advance(&self, scale: u8) -> u32 {
        scale as u32 * (FONT_HEIGHT as u32 + self.line_spacing as u32)
    }
}

/// Text cursor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextCursor {
    pub x: u8,
    pub y: u8,
}

/// What a cursor advance did besides moving right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Stayed on the same line.
    Inline,
    /// Moved to the start of the next line.
    NewLine,
    /// Ran off the bottom and restarted at the top row; earlier text there
    /// is overwritten, not scrolled.
    WrappedToTop,
}

impl TextCursor {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Step past one character cell.
    ///
    /// The cursor always moves right by one cell. It then drops to column 0
    /// of the next line when it reaches the right edge or `code` is `'\n'`,
    /// and returns to row 0 when that line starts at or past the bottom.
    pub fn advance(&mut self, code: u8, layout: &TextLayout, scale: u8) -> Advance {
        let x = self.x as u32 + layout.char_advance(scale);
        if x < layout.screen_width as u32 && code != b'\n' {
            self.x = x as u8;
            return Advance::Inline;
        }

        self.x = 0;
        let y = self.y as u32 + layout.line_advance(scale);
        if y >= layout.screen_height as u32 {
            self.y = 0;
            Advance::WrappedToTop
        } else {
            self.y = y as u8;
            Advance::NewLine
        }
    }
}

/// Blit the glyph for `code` at `(x, y)`. Returns `false` (drawing nothing)
/// for codes the font does not cover.
pub fn draw_glyph<S: PixelSurface>(
    target: &mut S,
    x: u8,
    y: u8,
    code: u8,
    scale: u8,
    color: S::Color,
) -> bool {
    match glyph(code) {
        Some(g) => {
            bitmap::blit(target, x, y, &Bitmap::glyph(g), scale, color);
            true
        }
        None => false,
    }
}

/// Width in pixels of the first line of `text` at `scale`, counting the
/// trailing character spacing of every cell.
///
/// Saturates at `u32::MAX`.
pub fn string_width(text: &[u8], layout: &TextLayout, scale: u8) -> u32 {
    let cells = text.iter().take_while(|&&ch| ch != b'\n').count();
    u32::try_from(cells)
        .unwrap_or(u32::MAX)
        .saturating_mul(layout.char_advance(scale))
}

/// Number of lines `text` occupies before any wrapping.
pub fn string_lines(text: &[u8]) -> usize {
    text.iter()
        .filter(|&&ch| ch == b'\n')
        .count()
        .saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: TextLayout = TextLayout {
        screen_width: 128,
        screen_height: 160,
        char_spacing: 1,
        line_spacing: 1,
    };

    #[test]
    fn advance_moves_one_cell() {
        let mut cursor = TextCursor::new(0, 0);
        assert_eq!(cursor.advance(b'A', &LAYOUT, 1), Advance::Inline);
        assert_eq!(cursor, TextCursor::new(6, 0));
        assert_eq!(cursor.advance(b'A', &LAYOUT, 2), Advance::Inline);
        assert_eq!(cursor, TextCursor::new(18, 0));
    }

    #[test]
    fn right_edge_wraps_to_next_line() {
        let mut cursor = TextCursor::new(122, 8);
        assert_eq!(cursor.advance(b'x', &LAYOUT, 1), Advance::NewLine);
        assert_eq!(cursor, TextCursor::new(0, 16));
    }

    #[test]
    fn bottom_edge_wraps_to_top() {
        let mut cursor = TextCursor::new(40, 152);
        assert_eq!(cursor.advance(b'\n', &LAYOUT, 1), Advance::WrappedToTop);
        assert_eq!(cursor, TextCursor::new(0, 0));
    }

    #[test]
    fn no_u8_overflow_near_coordinate_limit() {
        let wide = TextLayout {
            screen_width: 255,
            screen_height: 255,
            ..LAYOUT
        };
        let mut cursor = TextCursor::new(252, 250);
        assert_eq!(cursor.advance(b'a', &wide, 4), Advance::WrappedToTop);
        assert_eq!(cursor, TextCursor::new(0, 0));
    }

    #[test]
    fn largest_cell_does_not_overflow() {
        let sparse = TextLayout {
            screen_width: 255,
            screen_height: 255,
            char_spacing: 255,
            line_spacing: 255,
        };
        assert_eq!(sparse.char_advance(255), 255 * 260);
        assert_eq!(sparse.line_advance(255), 255 * 262);

        let mut cursor = TextCursor::new(254, 254);
        assert_eq!(cursor.advance(b'a', &sparse, 255), Advance::WrappedToTop);
        assert_eq!(cursor, TextCursor::new(0, 0));
    }

    #[test]
    fn metrics_of_huge_strings() {
        let line = std::vec![b'a'; 65536];
        assert_eq!(string_width(&line, &LAYOUT, 1), 65536 * 6);
        let breaks = std::vec![b'\n'; 65535];
        assert_eq!(string_lines(&breaks), 65536);
    }

    #[test]
    fn string_metrics() {
        assert_eq!(string_width(b"abc\ndefg", &LAYOUT, 1), 18);
        assert_eq!(string_width(b"", &LAYOUT, 3), 0);
        assert_eq!(string_lines(b"abc\ndefg\n"), 3);
    }
}
