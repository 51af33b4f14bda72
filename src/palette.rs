use rgb::RGB8;
use tracing::debug;
use crate::contrast::{self, BLACK, WHITE, WCAG_AA};
use crate::hex::format_color;
use crate::luminance::{self, Weights};

/// How the foreground (text) color of a [`DerivedPalette`] is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Foreground {
    /// Search the gray axis for the first color reaching this
    /// contrast ratio against the background.  When the ratio cannot
    /// be met, the candidate with the best ratio is used.
    Contrast(f64),
    /// Black on bright backgrounds, white on dark ones.
    BrightDark,
}

impl Default for Foreground {
    fn default() -> Self { Foreground::Contrast(WCAG_AA) }
}

/// Parameters of [`derive_palette_with`](crate::derive_palette_with).
///
/// # Example
///
/// ```
/// use statusbar_color::{PaletteOptions, Foreground, Weights};
/// let opts = PaletteOptions::default()
///     .foreground(Foreground::BrightDark)
///     .weights(Weights::Rec601)
///     .hover_shift(10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteOptions {
    foreground: Foreground,
    weights: Weights,
    hover_shift: u8,
    active_shift: u8,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        PaletteOptions { foreground: Foreground::default(),
                         weights: Weights::Rec709,
                         hover_shift: 20,
                         active_shift: 40 }
    }
}

impl PaletteOptions {
    /// Strategy for the text color.
    pub fn foreground(mut self, f: Foreground) -> Self {
        self.foreground = f;
        self
    }

    /// Weights of the bright/dark classification, which decides the
    /// direction of the shades and of the contrast search.
    pub fn weights(mut self, w: Weights) -> Self {
        self.weights = w;
        self
    }

    /// Channel shift of the hover background.
    pub fn hover_shift(mut self, shift: u8) -> Self {
        self.hover_shift = shift;
        self
    }

    /// Channel shift of the active (pressed) background.
    pub fn active_shift(mut self, shift: u8) -> Self {
        self.active_shift = shift;
        self
    }
}

/// Colors derived from one status-bar background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedPalette {
    /// The color everything else is derived from.
    pub background: RGB8,
    /// Text color.
    pub foreground: RGB8,
    /// Background of an item under the mouse.
    pub hover_background: RGB8,
    /// Background of a pressed item.
    pub active_background: RGB8,
}

/// Move every channel of `c` by `shift`, up if `c` is dark and down
/// if it is bright, saturating at 0 and 255.
pub(crate) fn shift(c: RGB8, shift: u8, weights: Weights) -> RGB8 {
    if luminance::is_bright(c, weights) {
        RGB8::new(c.r.saturating_sub(shift),
                  c.g.saturating_sub(shift),
                  c.b.saturating_sub(shift))
    } else {
        RGB8::new(c.r.saturating_add(shift),
                  c.g.saturating_add(shift),
                  c.b.saturating_add(shift))
    }
}

pub(crate) fn derive(base: RGB8, opts: &PaletteOptions) -> DerivedPalette {
    let foreground = match opts.foreground {
        Foreground::Contrast(min_ratio) => {
            contrast::search(base, min_ratio, opts.weights)
                .unwrap_or_else(|e| e.best)
        }
        Foreground::BrightDark => {
            if luminance::is_bright(base, opts.weights) { BLACK } else { WHITE }
        }
    };
    let p = DerivedPalette {
        background: base,
        foreground,
        hover_background: shift(base, opts.hover_shift, opts.weights),
        active_background: shift(base, opts.active_shift, opts.weights),
    };
    debug!(background = %format_color(base),
           foreground = %format_color(p.foreground),
           hover = %format_color(p.hover_background),
           active = %format_color(p.active_background),
           "derived palette");
    p
}
