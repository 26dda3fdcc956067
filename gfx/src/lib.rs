//! Device-agnostic 2D rasterizer for small pixel-addressable displays.
//!
//! Shapes and 5x7 bitmap text are rendered through the four operations of
//! [`PixelSurface`], so the same drawing code runs on any panel whose driver
//! implements that trait. [`Canvas`] holds the per-display drawing state and
//! is the usual entry point; the free functions in [`primitives`],
//! [`bitmap`] and [`font_render`] are available for stateless use.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bitmap;
pub mod canvas;
pub mod config;
pub mod font_render;
pub mod framebuffer;
pub mod primitives;


pub use bitmap::Bitmap;
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use framebuffer::FrameBuffer;
pub use tinycanvas_abi::{CanvasError, CanvasResult, PixelSurface, Rgb565};
