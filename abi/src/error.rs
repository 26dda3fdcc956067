use core::fmt;

/// Result type for canvas construction and configuration.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Configuration errors.
///
/// Drawing itself never fails; these only surface when a canvas or a
/// framebuffer is being set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// Screen width of zero.
    ZeroWidth,
    /// Screen height of zero.
    ZeroHeight,
    /// Text magnification of zero.
    ZeroScale,
    /// Backing store cannot hold `width * height` pixels.
    BufferTooSmall { required: usize, actual: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => f.write_str("screen width must be non-zero"),
            Self::ZeroHeight => f.write_str("screen height must be non-zero"),
            Self::ZeroScale => f.write_str("text scale must be at least 1"),
            Self::BufferTooSmall { required, actual } => {
                write!(f, "pixel buffer too small: need {required}, have {actual}")
            }
        }
    }
}

impl core::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names_the_problem() {
        assert_eq!(
            CanvasError::ZeroScale.to_string(),
            "text scale must be at least 1"
        );
        assert_eq!(
            CanvasError::BufferTooSmall {
                required: 20,
                actual: 4
            }
            .to_string(),
            "pixel buffer too small: need 20, have 4"
        );
    }
}
