//! 16-bit RGB<5,6,5> color, the native format of the small TFT controllers
//! (ST7735R, ILI9341, ...) this engine targets.

/// Packed 0bRRRRRGGGGGGBBBBB pixel value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);

    /// Pack 8-bit channels, dropping the low bits each channel cannot hold.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// Red channel scaled back to 8 bits (low bits zero).
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 8) as u8) & 0xF8
    }

    /// Green channel scaled back to 8 bits (low bits zero).
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 3) as u8) & 0xFC
    }

    /// Blue channel scaled back to 8 bits (low bits zero).
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 << 3) as u8
    }

    /// Raw value in the order the controller expects on the wire.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Big-endian bytes, as clocked out over SPI.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    #[inline]
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_pack_to_constants() {
        assert_eq!(Rgb565::rgb(255, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::rgb(0, 255, 0), Rgb565::GREEN);
        assert_eq!(Rgb565::rgb(0, 0, 255), Rgb565::BLUE);
        assert_eq!(Rgb565::rgb(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::rgb(0, 0, 0), Rgb565::BLACK);
    }

    #[test]
    fn channels_survive_truncation() {
        let c = Rgb565::rgb(0x88, 0x44, 0x20);
        assert_eq!(c.red(), 0x88);
        assert_eq!(c.green(), 0x44);
        assert_eq!(c.blue(), 0x20);

        let lossy = Rgb565::rgb(0x8F, 0x47, 0x27);
        assert_eq!(lossy, c);
    }

    #[test]
    fn wire_order_is_big_endian() {
        assert_eq!(Rgb565::RED.to_be_bytes(), [0xF8, 0x00]);
    }
}
