use core::fmt;
use core::ops::{Deref, DerefMut};

use tinycanvas_abi::{CanvasResult, PixelSurface};
use tinycanvas_lib::{klog_debug, klog_set_level, klog_trace, klog_warn};

use crate::bitmap::{self, Bitmap};
use crate::config::CanvasConfig;
use crate::font_render::{self, Advance, TextCursor, TextLayout};
use crate::primitives;

/// Drawing context for one physical display.
///
/// `Canvas` owns the device surface and the drawing state: pen color for
/// shapes, text color for glyphs, the text cursor, and the text
/// magnification. Every drawing call runs to completion against the surface;
/// there is no internal locking, so a canvas shared between main code and an
/// interrupt handler must be serialized by the caller.
pub struct Canvas<S: PixelSurface> {
    surface: S,
    config: CanvasConfig,
    layout: TextLayout,
    pen_color: S::Color,
    text_color: S::Color,
    cursor: TextCursor,
    scale: u8,
}

impl<S: PixelSurface> Canvas<S> {
    pub fn new(
        surface: S,
        config: CanvasConfig,
        pen_color: S::Color,
        text_color: S::Color,
    ) -> CanvasResult<Self> {
        config.validate()?;
        if let Some(level) = config.log_level {
            klog_set_level(level);
        }
        klog_debug!(
            "canvas: {}x{} scale {} spacing {}/{}",
            config.width,
            config.height,
            config.scale,
            config.char_spacing,
            config.line_spacing
        );

        Ok(Self {
            surface,
            layout: config.layout(),
            config,
            pen_color,
            text_color,
            cursor: TextCursor::default(),
            scale: config.scale,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn width(&self) -> u8 {
        self.config.width
    }

    pub fn height(&self) -> u8 {
        self.config.height
    }

    // -- state --------------------------------------------------------------

    pub fn pen_color(&self) -> S::Color {
        self.pen_color
    }

    pub fn set_pen_color(&mut self, color: S::Color) {
        self.pen_color = color;
    }

    pub fn text_color(&self) -> S::Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: S::Color) {
        self.text_color = color;
    }

    pub fn text_scale(&self) -> u8 {
        self.scale
    }

    /// Set the text magnification. Zero is treated as 1.
    pub fn set_text_scale(&mut self, scale: u8) {
        if scale == 0 {
            klog_warn!("canvas: text scale 0 clamped to 1");
        }
        self.scale = scale.max(1);
    }

    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor.x, self.cursor.y)
    }

    /// Move the text cursor. A coordinate at or beyond the screen edge wraps
    /// to 0, the same place the cursor lands when text runs off that edge.
    pub fn set_cursor(&mut self, x: u8, y: u8) {
        let x = if x < self.config.width { x } else { 0 };
        let y = if y < self.config.height { y } else { 0 };
        self.cursor = TextCursor::new(x, y);
    }

    // -- shapes -------------------------------------------------------------

    pub fn draw_pixel(&mut self, x: u8, y: u8) {
        self.surface.set_pixel(x, y, self.pen_color);
    }

    pub fn draw_horizontal_line(&mut self, x: u8, y: u8, length: u8) {
        self.surface.draw_h_span(x, y, length, self.pen_color);
    }

    pub fn draw_vertical_line(&mut self, x: u8, y: u8, length: u8) {
        self.surface.draw_v_span(x, y, length, self.pen_color);
    }

    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        primitives::line(&mut self.surface, x0, y0, x1, y1, self.pen_color);
    }

    pub fn draw_rect(&mut self, x: u8, y: u8, width: u8, height: u8) {
        primitives::rect(&mut self.surface, x, y, width, height, self.pen_color);
    }

    pub fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8) {
        self.surface.fill_rect(x, y, width, height, self.pen_color);
    }

    /// Fill the whole screen with the pen color.
    pub fn fill_screen(&mut self) {
        self.surface
            .fill_rect(0, 0, self.config.width, self.config.height, self.pen_color);
    }

    pub fn draw_circle(&mut self, x: u8, y: u8, radius: u8) {
        primitives::circle(&mut self.surface, x, y, radius, self.pen_color);
    }

    pub fn fill_circle(&mut self, x: u8, y: u8, radius: u8) {
        primitives::circle_filled(&mut self.surface, x, y, radius, self.pen_color);
    }

    /// Blit a monochrome bitmap in the pen color, magnified by the current
    /// text scale.
    pub fn draw_bitmap(&mut self, x: u8, y: u8, data: &[u8], width: u8, height: u8) {
        let bmp = Bitmap::new(data, width, height);
        bitmap::blit(&mut self.surface, x, y, &bmp, self.scale, self.pen_color);
    }

    // -- text ---------------------------------------------------------------

    /// Draw one character at the cursor in the text color and advance the
    /// cursor.
    ///
    /// Codes without a glyph (control characters, DEL, non-ASCII bytes) draw
    /// nothing but still take up a cell. `'\n'` additionally starts a new
    /// line. Running off the bottom restarts at the top row without clearing.
    pub fn draw_char(&mut self, c: u8) {
        let mut pen = TextPen::new(self);
        let (x, y, scale, color) = (pen.cursor.x, pen.cursor.y, pen.scale, pen.pen_color);
        font_render::draw_glyph(&mut pen.surface, x, y, c, scale, color);

        let layout = pen.layout;
        if pen.cursor.advance(c, &layout, scale) == Advance::WrappedToTop {
            klog_trace!("canvas: text wrapped to top row");
        }
    }

    /// Draw each byte of `s` with [`Canvas::draw_char`].
    pub fn draw_string(&mut self, s: &str) {
        for c in s.bytes() {
            self.draw_char(c);
        }
    }

    /// Pixel width of the first line of `s` at the current scale.
    pub fn text_width(&self, s: &str) -> u32 {
        font_render::string_width(s.as_bytes(), &self.layout, self.scale)
    }

    /// Number of lines `s` spans, ignoring wrap at the right edge.
    pub fn text_lines(&self, s: &str) -> usize {
        font_render::string_lines(s.as_bytes())
    }
}

impl<S: PixelSurface> fmt::Write for Canvas<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.draw_string(s);
        Ok(())
    }
}

/// Pen color swapped for the text color for as long as the guard lives.
///
/// The previous pen color comes back on drop, on every exit path.
struct TextPen<'c, S: PixelSurface> {
    canvas: &'c mut Canvas<S>,
    saved: S::Color,
}

impl<'c, S: PixelSurface> TextPen<'c, S> {
    fn new(canvas: &'c mut Canvas<S>) -> Self {
        let saved = canvas.pen_color;
        canvas.pen_color = canvas.text_color;
        Self { canvas, saved }
    }
}

impl<S: PixelSurface> Deref for TextPen<'_, S> {
    type Target = Canvas<S>;

    fn deref(&self) -> &Canvas<S> {
        self.canvas
    }
}

impl<S: PixelSurface> DerefMut for TextPen<'_, S> {
    fn deref_mut(&mut self) -> &mut Canvas<S> {
        self.canvas
    }
}

impl<S: PixelSurface> Drop for TextPen<'_, S> {
    fn drop(&mut self) {
        self.canvas.pen_color = self.saved;
    }
}
