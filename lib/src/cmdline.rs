//! `key=value` configuration tokens.
//!
//! Configuration arrives as a whitespace-separated string, e.g. baked into
//! the firmware image or read from EEPROM at boot:
//!
//! ```text
//! canvas.width=128 canvas.height=160 canvas.scale=2
//! ```
//!
//! Parsers here never fail loudly; a malformed value yields `None` and the
//! caller keeps its default.

/// Iterate over `(key, value)` pairs whose key starts with `prefix.`.
///
/// The prefix and the dot are stripped from the yielded key. Tokens without
/// an `=` or with a different prefix are skipped.
pub fn tokens<'a>(cmdline: &'a str, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
    cmdline.split_whitespace().filter_map(move |token| {
        let rest = token.strip_prefix(prefix)?.strip_prefix('.')?;
        rest.split_once('=')
    })
}

/// Generate `cmdline_$suffix` for an unsigned integer type.
///
/// Accepts decimal or `0x`-prefixed hex. A trailing `px` unit is tolerated so
/// sizes read naturally (`canvas.width=128px`).
macro_rules! impl_cmdline_int {
    ($ty:ty, $suffix:ident) => {
        paste::paste! {
            #[doc = concat!("Parse a `", stringify!($ty), "` configuration value.")]
            pub fn [<cmdline_ $suffix>](value: &str) -> Option<$ty> {
                let value = value.trim_end_matches("px");
                if let Some(hex) = value
                    .strip_prefix("0x")
                    .or_else(|| value.strip_prefix("0X"))
                {
                    <$ty>::from_str_radix(hex, 16).ok()
                } else {
                    value.parse::<$ty>().ok()
                }
            }
        }
    };
}

impl_cmdline_int!(u8, u8);

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn tokens_filter_by_prefix() {
        let line = "canvas.width=128 klog=debug canvas.scale=2 canvasx.y=1 canvas.bogus";
        let pairs: Vec<_> = tokens(line, "canvas").collect();
        assert_eq!(pairs, [("width", "128"), ("scale", "2")]);
    }

    #[test]
    fn integers_accept_hex_and_units() {
        assert_eq!(cmdline_u8("128"), Some(128));
        assert_eq!(cmdline_u8("0x40"), Some(64));
        assert_eq!(cmdline_u8("96px"), Some(96));
        assert_eq!(cmdline_u8("256"), None);
        assert_eq!(cmdline_u8("-1"), None);
        assert_eq!(cmdline_u8(""), None);
    }
}
