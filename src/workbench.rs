//! Boundary with the editor: turning what the user typed into a
//! request, and a derived palette into color-customization keys.

use std::collections::BTreeMap;
use rgb::RGB8;
use crate::hex::{format_color, parse_color, InvalidColorFormat};
use crate::palette::{self, DerivedPalette, PaletteOptions};

/// Theme keys painted with the status-bar background.
pub const BACKGROUND_KEYS: [&str; 4] = [
    "statusBar.background",
    "statusBar.debuggingBackground",
    "statusBar.noFolderBackground",
    "statusBar.prominentBackground",
];
pub const FOREGROUND_KEY: &str = "statusBar.foreground";
pub const HOVER_KEY: &str = "statusBarItem.hoverBackground";
pub const ACTIVE_KEY: &str = "statusBarItem.activeBackground";

/// What the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Color the status bar.
    Color(RGB8),
    /// Drop every customization.
    Reset,
}

impl Request {
    /// Interpret user input: `reset`, a preset name (see
    /// [`preset`](crate::preset)) or a hex color code.
    ///
    /// # Example
    ///
    /// ```
    /// use statusbar_color::{Request, RGB8};
    /// assert_eq!(Request::from_input("Reset").unwrap(), Request::Reset);
    /// assert_eq!(Request::from_input("#0f0").unwrap(),
    ///            Request::Color(RGB8::new(0, 255, 0)));
    /// ```
    pub fn from_input(input: &str) -> Result<Request, InvalidColorFormat> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("reset") {
            return Ok(Request::Reset)
        }
        match crate::preset(input) {
            Some(c) => Ok(Request::Color(c)),
            None => Ok(Request::Color(parse_color(input)?)),
        }
    }

    /// The palette to apply, `None` for a reset.
    pub fn palette(&self, opts: &PaletteOptions) -> Option<DerivedPalette> {
        match *self {
            Request::Color(c) => Some(palette::derive(c, opts)),
            Request::Reset => None,
        }
    }
}

/// Map the roles of `palette` to the editor's theme keys.  No palette
/// gives an empty map, which clears the customizations.
pub fn customizations(palette: Option<&DerivedPalette>)
                      -> BTreeMap<&'static str, String> {
    let mut keys = BTreeMap::new();
    if let Some(p) = palette {
        let bg = format_color(p.background);
        for k in BACKGROUND_KEYS {
            keys.insert(k, bg.clone());
        }
        keys.insert(FOREGROUND_KEY, format_color(p.foreground));
        keys.insert(HOVER_KEY, format_color(p.hover_background));
        keys.insert(ACTIVE_KEY, format_color(p.active_background));
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_forms() {
        assert_eq!(Request::from_input("  RESET ").unwrap(), Request::Reset);
        assert_eq!(Request::from_input("Blue").unwrap(),
                   Request::Color(RGB8::new(0, 122, 204)));
        assert_eq!(Request::from_input("#3498DB").unwrap(),
                   Request::Color(RGB8::new(0x34, 0x98, 0xdb)));
        let e = Request::from_input("crimson").unwrap_err();
        assert_eq!(e.input, "crimson");
    }

    #[test]
    fn reset_is_empty() {
        let opts = PaletteOptions::default();
        assert_eq!(Request::Reset.palette(&opts), None);
        assert!(customizations(None).is_empty());
    }

    #[test]
    fn keys_of_a_palette() {
        let opts = PaletteOptions::default();
        let p = Request::from_input("#3498db").unwrap().palette(&opts);
        let keys = customizations(p.as_ref());
        assert_eq!(keys.len(), 7);
        for k in BACKGROUND_KEYS {
            assert_eq!(keys[k], "#3498db");
        }
        assert_eq!(keys[FOREGROUND_KEY], "#000000");
        assert_eq!(keys[HOVER_KEY], "#2084c7");
        assert_eq!(keys[ACTIVE_KEY], "#0c70b3");
    }
}
