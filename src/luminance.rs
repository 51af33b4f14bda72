use rgb::RGB8;

/// Weights given to the red, green and blue channels when reducing a
/// color to a single brightness value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Weights {
    /// ITU-R BT.709 (sRGB) weights 0.2126, 0.7152, 0.0722.  Used for
    /// the contrast ratio and, by default, for [`is_bright`].
    ///
    /// [`is_bright`]: crate::is_bright
    #[default]
    Rec709,
    /// ITU-R BT.601 weights 0.299, 0.587, 0.114.
    Rec601,
}

impl Weights {
    #[inline]
    fn rgb(self) -> [f64; 3] {
        match self {
            Weights::Rec709 => [0.2126, 0.7152, 0.0722],
            Weights::Rec601 => [0.299, 0.587, 0.114],
        }
    }

    fn apply(self, c: [f64; 3]) -> f64 {
        let [wr, wg, wb] = self.rgb();
        wr * c[0] + wg * c[1] + wb * c[2]
    }
}

const GAMMA: f64 = 2.2;

#[inline]
fn unit(c: RGB8) -> [f64; 3] {
    [c.r as f64 / 255., c.g as f64 / 255., c.b as f64 / 255.]
}

/// Gamma-corrected relative luminance in \[0, 1\].
pub(crate) fn luminance(c: RGB8) -> f64 {
    Weights::Rec709.apply(unit(c).map(|x| x.powf(GAMMA)))
}

/// Brightness without gamma correction, in \[0, 1\].
pub(crate) fn brightness(c: RGB8, weights: Weights) -> f64 {
    weights.apply(unit(c))
}

pub(crate) fn is_bright(c: RGB8, weights: Weights) -> bool {
    brightness(c, weights) > 0.5
}

/// WCAG-style contrast ratio, in \[1, 21\].
pub(crate) fn contrast_ratio(a: RGB8, b: RGB8) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
    const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

    #[test]
    fn extremes() {
        assert_eq!(luminance(BLACK), 0.);
        assert!((luminance(WHITE) - 1.).abs() < 1e-12);
        assert!((contrast_ratio(BLACK, WHITE) - 21.).abs() < 1e-9);
        assert!(is_bright(WHITE, Weights::Rec709));
        assert!(!is_bright(BLACK, Weights::Rec601));
    }

    #[test]
    fn ratio_symmetric_and_at_least_one() {
        let colors = [BLACK, WHITE, RGB8::new(0x33, 0x66, 0x99),
                      RGB8::new(0x34, 0x98, 0xdb), RGB8::new(200, 10, 90)];
        for &a in &colors {
            assert_eq!(contrast_ratio(a, a), 1.);
            for &b in &colors {
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
                assert!(contrast_ratio(a, b) >= 1.);
            }
        }
    }

    #[test]
    fn weightings_disagree() {
        // Pure green is bright under BT.709 but not under BT.601.
        let green = RGB8::new(0, 190, 0);
        assert!(is_bright(green, Weights::Rec709));
        assert!(!is_bright(green, Weights::Rec601));
    }
}
