use tinycanvas_abi::{CanvasError, CanvasResult, PixelSurface};

/// An in-memory surface over a caller-supplied pixel slice.
///
/// `FrameBuffer` stores one `C` per pixel, row-major, with no padding. Writes
/// outside `width` x `height` are clipped, which makes it a convenient
/// off-screen target: render into RAM, then push the slice to the panel in
/// one bus transfer. Spans are clipped rather than wrapped, so a shape that
/// runs off the right edge does not reappear on the left.
pub struct FrameBuffer<'a, C> {
    data: &'a mut [C],
    width: u8,
    height: u8,
}

impl<'a, C: Copy> FrameBuffer<'a, C> {
    pub fn new(data: &'a mut [C], width: u8, height: u8) -> CanvasResult<Self> {
        if width == 0 {
            return Err(CanvasError::ZeroWidth);
        }
        if height == 0 {
            return Err(CanvasError::ZeroHeight);
        }
        let required = width as usize * height as usize;
        if data.len() < required {
            return Err(CanvasError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn data(&self) -> &[C] {
        &self.data[..self.width as usize * self.height as usize]
    }

    pub fn data_mut(&mut self) -> &mut [C] {
        let len = self.width as usize * self.height as usize;
        &mut self.data[..len]
    }

    /// One row of pixels, or `None` past the bottom edge.
    pub fn row(&self, y: u8) -> Option<&[C]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.data.get(start..start + self.width as usize)
    }

    pub fn pixel(&self, x: u8, y: u8) -> Option<C> {
        self.index(x, y).map(|i| self.data[i])
    }

    pub fn clear(&mut self, color: C) {
        self.data_mut().fill(color);
    }

    #[inline]
    fn index(&self, x: u8, y: u8) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Clip `[start, start + len)` against `[0, limit)`.
    #[inline]
    fn clip(start: u8, len: u8, limit: u8) -> Option<(usize, usize)> {
        if start >= limit || len == 0 {
            return None;
        }
        let end = (start as usize + len as usize).min(limit as usize);
        Some((start as usize, end))
    }
}

impl<C: Copy> PixelSurface for FrameBuffer<'_, C> {
    type Color = C;

    #[inline]
    fn set_pixel(&mut self, x: u8, y: u8, color: C) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = color;
        }
    }

    fn draw_h_span(&mut self, x: u8, y: u8, len: u8, color: C) {
        if y >= self.height {
            return;
        }
        let Some((x0, x1)) = Self::clip(x, len, self.width) else {
            return;
        };
        let row = y as usize * self.width as usize;
        self.data[row + x0..row + x1].fill(color);
    }

    fn draw_v_span(&mut self, x: u8, y: u8, len: u8, color: C) {
        if x >= self.width {
            return;
        }
        let Some((y0, y1)) = Self::clip(y, len, self.height) else {
            return;
        };
        let stride = self.width as usize;
        for row in y0..y1 {
            self.data[row * stride + x as usize] = color;
        }
    }

    fn fill_rect(&mut self, x: u8, y: u8, w: u8, h: u8, color: C) {
        let Some((x0, x1)) = Self::clip(x, w, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip(y, h, self.height) else {
            return;
        };
        let stride = self.width as usize;
        for row in y0..y1 {
            self.data[row * stride + x0..row * stride + x1].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_geometry() {
        let mut buf = [0u8; 12];
        assert_eq!(
            FrameBuffer::new(&mut buf, 0, 3).err(),
            Some(CanvasError::ZeroWidth)
        );
        assert_eq!(
            FrameBuffer::new(&mut buf, 4, 0).err(),
            Some(CanvasError::ZeroHeight)
        );
        assert_eq!(
            FrameBuffer::new(&mut buf, 4, 4).err(),
            Some(CanvasError::BufferTooSmall {
                required: 16,
                actual: 12
            })
        );
        assert!(FrameBuffer::new(&mut buf, 4, 3).is_ok());
    }

    #[test]
    fn writes_are_clipped() {
        let mut buf = [0u8; 16];
        let mut fb = FrameBuffer::new(&mut buf, 4, 4).unwrap();
        fb.set_pixel(4, 0, 1);
        fb.set_pixel(0, 4, 1);
        fb.draw_h_span(2, 1, 10, 2);
        fb.draw_v_span(3, 2, 200, 3);
        fb.fill_rect(250, 0, 10, 10, 4);
        assert_eq!(
            fb.data(),
            &[
                0, 0, 0, 0, //
                0, 0, 2, 2, //
                0, 0, 0, 3, //
                0, 0, 0, 3, //
            ]
        );
    }

    #[test]
    fn fill_and_query() {
        let mut buf = [false; 6];
        let mut fb = FrameBuffer::new(&mut buf, 3, 2).unwrap();
        fb.fill_rect(1, 0, 2, 2, true);
        assert_eq!(fb.row(0), Some(&[false, true, true][..]));
        assert_eq!(fb.pixel(0, 1), Some(false));
        assert_eq!(fb.pixel(3, 0), None);
        assert_eq!(fb.row(2), None);
        fb.clear(true);
        assert!(fb.data().iter().all(|&p| p));
    }
}
