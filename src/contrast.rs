//! Search for a text color readable on a given background.

use rgb::RGB8;
use tracing::{debug, trace};
use crate::hex::format_color;
use crate::luminance::{self, Weights};

/// Amount added to (or removed from) every channel at each step of
/// the search: 1/5 of the channel range.
pub const CONTRAST_STEP: u8 = 51;

/// Number of steps after which every channel is saturated.
pub const MAX_CONTRAST_STEPS: usize = 255 / CONTRAST_STEP as usize;

/// Minimum contrast ratio for body text (WCAG 2 level AA).
pub const WCAG_AA: f64 = 4.5;

pub(crate) const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub(crate) const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

/// The requested contrast ratio cannot be reached, even once the
/// candidate's channels are saturated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("contrast ratio {min_ratio} unreachable against {} \
         (best {best_ratio:.2} with {})", hex(.base), hex(.best))]
pub struct ContrastUnreachable {
    /// Background the search ran against.
    pub base: RGB8,
    /// Requested ratio.
    pub min_ratio: f64,
    /// Last candidate of the walk, with all channels saturated.
    pub saturated: RGB8,
    /// Candidate with the highest ratio encountered.
    pub best: RGB8,
    /// Contrast ratio of `best` against `base`.
    pub best_ratio: f64,
}

fn hex(c: &RGB8) -> String { format_color(*c) }

#[inline]
fn nudge(c: RGB8, lighten: bool) -> RGB8 {
    if lighten {
        RGB8::new(c.r.saturating_add(CONTRAST_STEP),
                  c.g.saturating_add(CONTRAST_STEP),
                  c.b.saturating_add(CONTRAST_STEP))
    } else {
        RGB8::new(c.r.saturating_sub(CONTRAST_STEP),
                  c.g.saturating_sub(CONTRAST_STEP),
                  c.b.saturating_sub(CONTRAST_STEP))
    }
}

/// Start from black on bright backgrounds (white otherwise) and walk
/// the gray axis towards the opposite end until `min_ratio` is met.
pub(crate) fn search(
    base: RGB8, min_ratio: f64, weights: Weights,
) -> Result<RGB8, ContrastUnreachable> {
    let mut candidate =
        if luminance::is_bright(base, weights) { BLACK } else { WHITE };
    let lighten = candidate == BLACK;
    let mut ratio = luminance::contrast_ratio(base, candidate);
    let (mut best, mut best_ratio) = (candidate, ratio);
    let mut step = 0;
    // `!(ratio >= min_ratio)` so that a NaN ratio is never "reached".
    while !(ratio >= min_ratio) {
        if step == MAX_CONTRAST_STEPS {
            debug!(base = %format_color(base), min_ratio, best_ratio,
                   "contrast ratio unreachable");
            return Err(ContrastUnreachable {
                base, min_ratio, saturated: candidate, best, best_ratio });
        }
        step += 1;
        candidate = nudge(candidate, lighten);
        ratio = luminance::contrast_ratio(base, candidate);
        trace!(step, candidate = %format_color(candidate), ratio);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    Ok(candidate)
}
