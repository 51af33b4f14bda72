//! Status-bar colors for code editors.
//!
//! From one background color (typed as `#RRGGBB`/`#RGB` or picked
//! among the [`presets()`]), derive a [`DerivedPalette`]:
//!
//! - a foreground color readable on the background, either the first
//!   gray reaching a contrast ratio ([`Foreground::Contrast`]) or
//!   plainly black or white ([`Foreground::BrightDark`]);
//! - hover and active shades, moved away from the background's own
//!   brightness extreme.
//!
//! The [`StatusColor`] trait provides the operations on the
//! [`rgb`] pixel types; the free functions ([`parse_color`],
//! [`derive_palette`],...) work on [`RGB8`].  [`Request`] and
//! [`customizations`] translate between user input, palettes and the
//! editor's theme keys.
//!
//! ```
//! use statusbar_color::{parse_color, derive_palette, format_color};
//! let p = derive_palette(parse_color("#3498db")?);
//! assert_eq!(format_color(p.foreground), "#000000");
//! assert_eq!(format_color(p.hover_background), "#2084c7");
//! # Ok::<(), statusbar_color::InvalidColorFormat>(())
//! ```

pub use rgb::{RGB8, RGBA8};

mod hex;
mod luminance;
mod contrast;
mod palette;
mod presets;
mod workbench;

pub use hex::{format_color, parse_color, InvalidColorFormat};
pub use luminance::Weights;
pub use contrast::{ContrastUnreachable, CONTRAST_STEP, MAX_CONTRAST_STEPS,
                   WCAG_AA};
pub use palette::{DerivedPalette, Foreground, PaletteOptions};
pub use workbench::{customizations, Request, ACTIVE_KEY, BACKGROUND_KEYS,
                    FOREGROUND_KEY, HOVER_KEY};

/// Specifies the methods a color encoding must provide to be used as
/// a status-bar color.  Only the red, green and blue channels take
/// part in the computations; the other components of the receiver
/// are carried over to the results.
pub trait StatusColor: Sized + Copy {
    /// Return the red, green and blue components of the color.
    fn to_rgb8(&self) -> RGB8;

    /// Return a copy of `self` with its red, green and blue
    /// components replaced by those of `c`.
    fn with_rgb8(&self, c: RGB8) -> Self;

    /// Gamma-corrected relative luminance, in \[0, 1\].
    fn luminance(&self) -> f64 { luminance::luminance(self.to_rgb8()) }

    /// Weighted brightness without gamma correction, in \[0, 1\].
    fn brightness(&self, weights: Weights) -> f64 {
        luminance::brightness(self.to_rgb8(), weights)
    }

    /// Whether the color counts as bright (BT.709 brightness > 0.5).
    ///
    /// # Example
    ///
    /// ```
    /// use statusbar_color::{StatusColor, RGB8};
    /// assert!(RGB8::new(255, 255, 255).is_bright());
    /// assert!(!RGB8::new(0, 0, 0).is_bright());
    /// ```
    fn is_bright(&self) -> bool {
        luminance::is_bright(self.to_rgb8(), Weights::Rec709)
    }

    /// Contrast ratio between `self` and `other`, in \[1, 21\].
    fn contrast_ratio(&self, other: &Self) -> f64 {
        luminance::contrast_ratio(self.to_rgb8(), other.to_rgb8())
    }

    /// Return a text color with a contrast ratio of at least
    /// `min_ratio` against `self`, or the reason it does not exist.
    ///
    /// The first candidate is black if `self` is bright, white
    /// otherwise.  It is then moved along the gray axis by
    /// [`CONTRAST_STEP`], for at most [`MAX_CONTRAST_STEPS`] steps.
    fn try_contrasting(&self, min_ratio: f64)
                       -> Result<Self, ContrastUnreachable> {
        contrast::search(self.to_rgb8(), min_ratio, Weights::Rec709)
            .map(|c| self.with_rgb8(c))
    }

    /// Same as [`StatusColor::try_contrasting`] but, when `min_ratio`
    /// is out of reach, return the last (saturated) candidate.
    ///
    /// # Example
    ///
    /// ```
    /// use statusbar_color::{StatusColor, RGB8};
    /// let black = RGB8::new(0, 0, 0);
    /// assert_eq!(black.contrasting(4.5), RGB8::new(255, 255, 255));
    /// assert_eq!(black.contrasting(100.), black);
    /// ```
    fn contrasting(&self, min_ratio: f64) -> Self {
        match self.try_contrasting(min_ratio) {
            Ok(c) => c,
            Err(e) => self.with_rgb8(e.saturated),
        }
    }

    /// Shift all channels by `shift`: towards white if the color is
    /// dark, towards black if it is bright.  Channels saturate.
    fn shift(&self, shift: u8) -> Self {
        self.with_rgb8(palette::shift(self.to_rgb8(), shift, Weights::Rec709))
    }

    /// Derive foreground, hover and active colors using `opts`.
    fn palette(&self, opts: &PaletteOptions) -> DerivedPalette {
        palette::derive(self.to_rgb8(), opts)
    }

    /// Render the color as `#rrggbb`.
    fn to_hex(&self) -> String { format_color(self.to_rgb8()) }
}

impl StatusColor for RGB8 {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { *self }

    #[inline]
    fn with_rgb8(&self, c: RGB8) -> Self { c }
}

impl StatusColor for RGBA8 {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { RGB8 { r: self.r, g: self.g, b: self.b } }

    #[inline]
    fn with_rgb8(&self, c: RGB8) -> Self {
        RGBA8 { r: c.r, g: c.g, b: c.b, a: self.a }
    }
}

/// Whether `c` is bright.  See [`StatusColor::is_bright`].
#[inline]
pub fn is_bright(c: RGB8) -> bool { c.is_bright() }

/// Contrast ratio of `a` and `b`.  Symmetric, and 1 exactly when the
/// two luminances are equal.
#[inline]
pub fn contrast_ratio(a: RGB8, b: RGB8) -> f64 { a.contrast_ratio(&b) }

/// See [`StatusColor::contrasting`].
#[inline]
pub fn find_contrasting_color(base: RGB8, min_ratio: f64) -> RGB8 {
    base.contrasting(min_ratio)
}

/// See [`StatusColor::try_contrasting`].
#[inline]
pub fn find_contrasting_color_checked(
    base: RGB8, min_ratio: f64,
) -> Result<RGB8, ContrastUnreachable> {
    base.try_contrasting(min_ratio)
}

/// See [`StatusColor::shift`].
#[inline]
pub fn shift_color(base: RGB8, shift: u8) -> RGB8 { base.shift(shift) }

/// Palette of `base` with the default [`PaletteOptions`]: foreground
/// reaching [`WCAG_AA`], hover shifted by 20 and active by 40.
pub fn derive_palette(base: RGB8) -> DerivedPalette {
    palette::derive(base, &PaletteOptions::default())
}

/// Palette of `base` with the given options.
pub fn derive_palette_with(base: RGB8, opts: &PaletteOptions)
                           -> DerivedPalette {
    palette::derive(base, opts)
}

/// Return the built-in preset named `name` (case-insensitive).
pub fn preset(name: &str) -> Option<RGB8> {
    presets::PRESETS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Iterate over the built-in presets, sorted by name.
pub fn presets() -> impl Iterator<Item = (&'static str, RGB8)> {
    presets::PRESETS.iter().map(|(&n, &c)| (n, c))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(s: &str) -> RGB8 { parse_color(s).unwrap() }

    #[test]
    fn bright_extremes() {
        assert!(is_bright(rgb("#FFFFFF")));
        assert!(!is_bright(rgb("#000000")));
    }

    #[test]
    fn contrast_against_black() {
        let black = rgb("#000000");
        let c = find_contrasting_color(black, 4.5);
        assert!(contrast_ratio(c, black) >= 4.5);
    }

    #[test]
    fn unreachable_ratio_terminates() {
        for s in ["#000000", "#ffffff", "#336699", "#3498db", "#00b200"] {
            let base = rgb(s);
            let c = find_contrasting_color(base, 100.);
            let e = find_contrasting_color_checked(base, 100.).unwrap_err();
            assert_eq!(c, e.saturated);
            assert!(c == RGB8::new(0, 0, 0) || c == RGB8::new(255, 255, 255));
        }
    }

    #[test]
    fn shifts() {
        assert_eq!(shift_color(rgb("#202020"), 20), rgb("#343434"));
        assert_eq!(shift_color(rgb("#FFFFFF"), 20), rgb("#EBEBEB"));
    }

    #[test]
    fn palette_of_336699() {
        let base = rgb("#336699");
        let p = derive_palette(base);
        assert!(contrast_ratio(p.foreground, base) >= 4.5);
        assert_ne!(p.hover_background, p.active_background);
        assert_ne!(p.hover_background, base);
        assert_ne!(p.active_background, base);
    }

    #[test]
    fn end_to_end() {
        let base = rgb("#3498db");
        assert!(is_bright(base));
        let p = derive_palette(base);
        assert_eq!(p.foreground, rgb("#000000"));
        assert_eq!(p.hover_background, RGB8::new(0x34 - 20, 0x98 - 20, 0xdb - 20));
        assert_eq!(p.active_background, RGB8::new(0x34 - 40, 0x98 - 40, 0xdb - 40));
    }

    #[test]
    fn rgba_keeps_alpha() {
        let c = RGBA8 { r: 0x20, g: 0x20, b: 0x20, a: 128 };
        assert_eq!(c.shift(20), RGBA8 { r: 0x34, g: 0x34, b: 0x34, a: 128 });
        assert_eq!(c.contrasting(4.5), RGBA8 { r: 255, g: 255, b: 255, a: 128 });
        assert_eq!(c.to_hex(), "#202020");
        assert_eq!(c.contrast_ratio(&c), 1.);
    }

    #[test]
    fn preset_lookup() {
        assert_eq!(preset("TEAL"), Some(rgb("#008080")));
        assert_eq!(preset("chartreuse"), None);
        let names: Vec<_> = presets().map(|(n, _)| n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        // Every preset yields a readable palette.
        for (_, c) in presets() {
            let p = derive_palette(c);
            assert!(contrast_ratio(p.foreground, c) >= WCAG_AA);
        }
    }
}
