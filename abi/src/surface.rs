/// Device contract consumed by the rendering engine.
///
/// A display driver implements `PixelSurface` for whatever bus and pixel
/// storage its controller uses; the engine only ever talks to these four
/// operations. The engine owns the pen color and passes it on every call,
/// so a driver holds no drawing state of its own.
///
/// Only [`PixelSurface::set_pixel`] is required. The span and rectangle
/// operations default to loops over it; drivers with a bulk write path
/// (address window + burst transfer) should override them.
///
/// Implementations are assumed infallible. Writes that land outside the
/// physical panel are the driver's problem: clip them, wrap them, or let the
/// controller ignore them. The engine does no bounds checking of its own.
pub trait PixelSurface {
    /// Device-defined pixel value (e.g. RGB565 for a TFT, `bool` for a
    /// monochrome LCD).
    type Color: Copy;

    /// Set one pixel.
    fn set_pixel(&mut self, x: u8, y: u8, color: Self::Color);

    /// Set `len` pixels to the right of and including `(x, y)`.
    #[inline]
    fn draw_h_span(&mut self, x: u8, y: u8, len: u8, color: Self::Color) {
        for i in 0..len {
            self.set_pixel(x.wrapping_add(i), y, color);
        }
    }

    /// Set `len` pixels downward from and including `(x, y)`.
    #[inline]
    fn draw_v_span(&mut self, x: u8, y: u8, len: u8, color: Self::Color) {
        for j in 0..len {
            self.set_pixel(x, y.wrapping_add(j), color);
        }
    }

    /// Set a `w` x `h` block whose top-left corner is `(x, y)`.
    #[inline]
    fn fill_rect(&mut self, x: u8, y: u8, w: u8, h: u8, color: Self::Color) {
        for i in 0..w {
            self.draw_v_span(x.wrapping_add(i), y, h, color);
        }
    }
}

impl<T: PixelSurface + ?Sized> PixelSurface for &mut T {
    type Color = T::Color;

    #[inline]
    fn set_pixel(&mut self, x: u8, y: u8, color: Self::Color) {
        (**self).set_pixel(x, y, color);
    }

    #[inline]
    fn draw_h_span(&mut self, x: u8, y: u8, len: u8, color: Self::Color) {
        (**self).draw_h_span(x, y, len, color);
    }

    #[inline]
    fn draw_v_span(&mut self, x: u8, y: u8, len: u8, color: Self::Color) {
        (**self).draw_v_span(x, y, len, color);
    }

    #[inline]
    fn fill_rect(&mut self, x: u8, y: u8, w: u8, h: u8, color: Self::Color) {
        (**self).fill_rect(x, y, w, h, color);
    }
}
