//! Types shared between display drivers and the rendering engine.
//!
//! A driver crate depends on this crate alone: it implements
//! [`PixelSurface`] and picks a color type (often [`Rgb565`]). The engine in
//! `tinycanvas-gfx` is generic over the same trait, so any conformant driver
//! can be swapped in without touching drawing code.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod font;
pub mod pixel;
pub mod surface;

pub use error::{CanvasError, CanvasResult};
pub use font::{FONT_5X7, FONT_FIRST, FONT_GLYPHS, FONT_HEIGHT, FONT_LAST, FONT_WIDTH, glyph};
pub use pixel::Rgb565;
pub use surface::PixelSurface;
