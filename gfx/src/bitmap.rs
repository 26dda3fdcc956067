//! Monochrome bitmap blitting.
//!
//! Source images are column-major and vertically bit-packed: each byte holds
//! eight rows of one column with the least-significant bit on top. A column
//! taller than eight rows continues in the next byte. This is the layout of
//! the embedded font and of most icon converters aimed at page-addressed LCDs.

use tinycanvas_abi::{FONT_HEIGHT, FONT_WIDTH, PixelSurface};

/// A borrowed 1-bit image with explicit geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u8,
    height: u8,
}

impl<'a> Bitmap<'a> {
    pub const fn new(data: &'a [u8], width: u8, height: u8) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Wrap one glyph of the embedded font.
    pub const fn glyph(glyph: &'a [u8; FONT_WIDTH as usize]) -> Self {
        Self::new(glyph, FONT_WIDTH, FONT_HEIGHT)
    }

    /// Bytes a `width` x `height` image occupies.
    pub const fn bytes_required(width: u8, height: u8) -> usize {
        (width as usize) * (height as usize).div_ceil(8)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Whether the source pixel at `(col, row)` is set. Out-of-range
    /// positions and bytes past the end of `data` read as clear.
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let stride = (self.height as usize).div_ceil(8);
        let index = col as usize * stride + row as usize / 8;
        self.data
            .get(index)
            .is_some_and(|byte| (byte >> (row % 8)) & 1 != 0)
    }

    /// Number of set pixels inside the image geometry.
    pub fn count_set(&self) -> usize {
        (0..self.width)
            .flat_map(|col| (0..self.height).map(move |row| (col, row)))
            .filter(|&(col, row)| self.is_set(col, row))
            .count()
    }
}

/// Draw `bitmap` with its top-left corner at `(x, y)`.
///
/// Set bits become single pixels at scale 1, otherwise `scale` x `scale`
/// blocks at `(x + i * scale, y + j * scale)`. Clear bits are left untouched
/// (transparent background). A short `data` slice reads as zeros.
pub fn blit<S: PixelSurface>(
    target: &mut S,
    x: u8,
    y: u8,
    bitmap: &Bitmap<'_>,
    scale: u8,
    color: S::Color,
) {
    let mut bytes = bitmap.data.iter().copied();

    for i in 0..bitmap.width {
        let mut line = 0u8;
        for j in 0..bitmap.height {
            if j & 0x7 == 0 {
                line = bytes.next().unwrap_or(0);
            }
            if line & 0x1 != 0 {
                if scale == 1 {
                    target.set_pixel(x.wrapping_add(i), y.wrapping_add(j), color);
                } else {
                    target.fill_rect(
                        x.wrapping_add(i.wrapping_mul(scale)),
                        y.wrapping_add(j.wrapping_mul(scale)),
                        scale,
                        scale,
                        color,
                    );
                }
            }
            line >>= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_addressing_is_column_major_lsb_top() {
        // 2 columns x 10 rows: two bytes per column.
        let data = [0b0000_0001, 0b0000_0010, 0b1000_0000, 0b0000_0000];
        let bmp = Bitmap::new(&data, 2, 10);
        assert_eq!(Bitmap::bytes_required(2, 10), 4);
        assert!(bmp.is_set(0, 0));
        assert!(bmp.is_set(0, 9));
        assert!(bmp.is_set(1, 7));
        assert!(!bmp.is_set(1, 8));
        assert!(!bmp.is_set(2, 0));
        assert_eq!(bmp.count_set(), 3);
    }

    #[test]
    fn short_data_reads_clear() {
        let bmp = Bitmap::new(&[0xFF], 3, 8);
        assert_eq!(bmp.count_set(), 8);
        assert!(!bmp.is_set(2, 0));
    }

    #[test]
    fn glyph_geometry() {
        let g = [0x7C, 0x12, 0x11, 0x12, 0x7C];
        let bmp = Bitmap::glyph(&g);
        assert_eq!((bmp.width(), bmp.height()), (5, 7));
        assert_eq!(bmp.data().len(), 5);
    }
}
