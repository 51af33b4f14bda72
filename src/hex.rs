//! Conversion between `#RRGGBB` / `#RGB` strings and [`RGB8`].

use rgb::RGB8;

/// The string is not a `#RGB` or `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color code “{input}” (expected #RGB or #RRGGBB)")]
pub struct InvalidColorFormat {
    /// The rejected input.
    pub input: String,
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0' ..= b'9' => Some(c - b'0'),
        b'a' ..= b'f' => Some(c - b'a' + 10),
        b'A' ..= b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse `#RGB` or `#RRGGBB` (hex digits in any case).  The short
/// form duplicates each digit, so `#abc` is `#aabbcc`.
///
/// # Example
///
/// ```
/// use statusbar_color::{parse_color, RGB8};
/// assert_eq!(parse_color("#abc").unwrap(), RGB8::new(0xaa, 0xbb, 0xcc));
/// assert!(parse_color("red").is_err());
/// ```
pub fn parse_color(hex: &str) -> Result<RGB8, InvalidColorFormat> {
    let err = || InvalidColorFormat { input: hex.to_string() };
    let digits = hex.strip_prefix('#').ok_or_else(err)?.as_bytes();
    let d = |i: usize| nibble(digits[i]).ok_or_else(err);
    match digits.len() {
        3 => Ok(RGB8::new(d(0)? * 17, d(1)? * 17, d(2)? * 17)),
        6 => Ok(RGB8::new(d(0)? << 4 | d(1)?,
                          d(2)? << 4 | d(3)?,
                          d(4)? << 4 | d(5)?)),
        _ => Err(err()),
    }
}

/// Render `c` as `#rrggbb` with lowercase digits.
pub fn format_color(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_expands() {
        assert_eq!(parse_color("#fA0").unwrap(), RGB8::new(255, 170, 0));
        assert_eq!(format_color(parse_color("#abc").unwrap()), "#aabbcc");
    }

    #[test]
    fn normalizes_case() {
        for s in ["#FF0000", "#3498DB", "#336699", "#000000", "#Ab12eF"] {
            let c = parse_color(s).unwrap();
            assert_eq!(format_color(c), s.to_ascii_lowercase());
        }
    }

    #[test]
    fn rejects_malformed() {
        for s in ["red", "#12345", "#gggggg", "", "#", "123456", "#1234567",
                  " #123456", "#12g", "#ééé"] {
            let e = parse_color(s).unwrap_err();
            assert_eq!(e.input, s);
        }
    }

    #[test]
    fn zero_padded() {
        assert_eq!(format_color(RGB8::new(1, 2, 3)), "#010203");
    }
}
