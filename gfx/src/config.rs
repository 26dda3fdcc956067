use tinycanvas_abi::{CanvasError, CanvasResult};
use tinycanvas_lib::cmdline::{cmdline_u8, tokens};
use tinycanvas_lib::{KlogLevel, klog_debug};

use crate::font_render::TextLayout;

const DEFAULT_WIDTH: u8 = 128;
const DEFAULT_HEIGHT: u8 = 160;
const DEFAULT_SCALE: u8 = 1;
const DEFAULT_CHAR_SPACING: u8 = 1;
const DEFAULT_LINE_SPACING: u8 = 1;

/// Fixed per-display parameters of a [`Canvas`](crate::Canvas).
///
/// The defaults describe a 128x160 ST7735R-class panel with the usual one
/// pixel of spacing between characters and between lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u8,
    pub height: u8,
    /// Initial text magnification.
    pub scale: u8,
    pub char_spacing: u8,
    pub line_spacing: u8,
    /// Log level applied when the canvas is built; `None` leaves it alone.
    pub log_level: Option<KlogLevel>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            char_spacing: DEFAULT_CHAR_SPACING,
            line_spacing: DEFAULT_LINE_SPACING,
            log_level: None,
        }
    }
}

impl CanvasConfig {
    pub const fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub const fn with_scale(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_spacing(mut self, char_spacing: u8, line_spacing: u8) -> Self {
        self.char_spacing = char_spacing;
        self.line_spacing = line_spacing;
        self
    }

    pub const fn with_log_level(mut self, level: KlogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if self.width == 0 {
            return Err(CanvasError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(CanvasError::ZeroHeight);
        }
        if self.scale == 0 {
            return Err(CanvasError::ZeroScale);
        }
        Ok(())
    }

    pub(crate) fn layout(&self) -> TextLayout {
        TextLayout {
            screen_width: self.width,
            screen_height: self.height,
            char_spacing: self.char_spacing,
            line_spacing: self.line_spacing,
        }
    }

    /// Build a config from `canvas.*` tokens, starting from the defaults.
    ///
    /// `canvas.log=<level>` takes a level name (`error` through `trace`); every
    /// other key takes an integer. Unknown keys and malformed values are
    /// skipped; validation happens when the canvas is constructed.
    pub fn from_cmdline(cmdline: Option<&str>) -> Self {
        let mut cfg = Self::default();
        let Some(cmdline) = cmdline else {
            return cfg;
        };

        for (key, value) in tokens(cmdline, "canvas") {
            if key == "log" {
                match KlogLevel::from_name(value) {
                    Some(level) => cfg.log_level = Some(level),
                    None => klog_debug!("canvas: ignoring unknown log level {}", value),
                }
                continue;
            }
            let Some(parsed) = cmdline_u8(value) else {
                klog_debug!("canvas: ignoring malformed value {}={}", key, value);
                continue;
            };
            match key {
                "width" => cfg.width = parsed,
                "height" => cfg.height = parsed,
                "scale" => cfg.scale = parsed,
                "char_spacing" => cfg.char_spacing = parsed,
                "line_spacing" => cfg.line_spacing = parsed,
                _ => klog_debug!("canvas: ignoring unknown key {}", key),
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = CanvasConfig::default();
        assert_eq!((cfg.width, cfg.height), (128, 160));
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let cfg = CanvasConfig::default();
        assert_eq!(cfg.with_size(0, 10).validate(), Err(CanvasError::ZeroWidth));
        assert_eq!(cfg.with_size(10, 0).validate(), Err(CanvasError::ZeroHeight));
        assert_eq!(cfg.with_scale(0).validate(), Err(CanvasError::ZeroScale));
    }

    #[test]
    fn cmdline_overrides_defaults() {
        let cfg = CanvasConfig::from_cmdline(Some(
            "quiet canvas.width=84 canvas.height=48 canvas.scale=2 canvas.line_spacing=0x2",
        ));
        assert_eq!(
            cfg,
            CanvasConfig::default()
                .with_size(84, 48)
                .with_scale(2)
                .with_spacing(1, 2)
        );
    }

    #[test]
    fn cmdline_skips_garbage() {
        let cfg = CanvasConfig::from_cmdline(Some("canvas.width=wide canvas.depth=3 canvas.scale"));
        assert_eq!(cfg, CanvasConfig::default());
        assert_eq!(CanvasConfig::from_cmdline(None), CanvasConfig::default());
    }

    #[test]
    fn cmdline_log_level() {
        let cfg = CanvasConfig::from_cmdline(Some("canvas.log=TRACE canvas.scale=3"));
        assert_eq!(
            cfg,
            CanvasConfig::default()
                .with_scale(3)
                .with_log_level(KlogLevel::Trace)
        );
        let cfg = CanvasConfig::from_cmdline(Some("canvas.log=loud canvas.log=7"));
        assert_eq!(cfg.log_level, None);
    }
}
