//! Green-screen background removal.

use image::{Rgba, RgbaImage};

/// Fully transparent black, written over every keyed pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Color key for a pure-green backdrop.
///
/// Tolerant enough to catch the anti-aliased fringe where the subject blends
/// into the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreenScreenKey {
    /// Green must be strictly above this value.
    pub min_green: u8,
    /// Green must exceed both red and blue by more than this factor.
    pub dominance: f32,
}

impl Default for GreenScreenKey {
    fn default() -> Self {
        Self {
            min_green: 150,
            dominance: 1.5,
        }
    }
}

impl GreenScreenKey {
    /// Returns true if the pixel belongs to the backdrop.
    pub fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        let g_f = f32::from(g);
        g > self.min_green
            && g_f > f32::from(r) * self.dominance
            && g_f > f32::from(b) * self.dominance
    }

    /// Makes every backdrop pixel transparent, in place. Returns how many
    /// pixels were keyed out.
    pub fn apply(&self, img: &mut RgbaImage) -> usize {
        let mut keyed = 0;
        for pixel in img.pixels_mut() {
            if self.is_background(pixel) {
                *pixel = TRANSPARENT;
                keyed += 1;
            }
        }
        keyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_green_is_background() {
        let key = GreenScreenKey::default();
        assert!(key.is_background(&Rgba([0, 255, 0, 255])));
        // anti-aliased fringe
        assert!(key.is_background(&Rgba([90, 200, 60, 255])));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let key = GreenScreenKey::default();
        // green not above 150
        assert!(!key.is_background(&Rgba([0, 150, 0, 255])));
        assert!(key.is_background(&Rgba([0, 151, 0, 255])));
        // green exactly 1.5x red is not enough
        assert!(!key.is_background(&Rgba([100, 150, 0, 255])));
        assert!(!key.is_background(&Rgba([120, 180, 0, 255])));
        assert!(key.is_background(&Rgba([119, 180, 0, 255])));
        // blue is checked as well
        assert!(!key.is_background(&Rgba([0, 180, 120, 255])));
    }

    #[test]
    fn test_subject_colors_are_kept() {
        let key = GreenScreenKey::default();
        assert!(!key.is_background(&Rgba([255, 204, 0, 255]))); // smiley yellow
        assert!(!key.is_background(&Rgba([255, 255, 255, 255])));
        assert!(!key.is_background(&Rgba([0, 0, 0, 255])));
        assert!(!key.is_background(&Rgba([20, 100, 20, 255]))); // dark green
    }

    #[test]
    fn test_apply_only_touches_background() {
        let mut img = RgbaImage::new(4, 1);
        img.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 204, 0, 255]));
        img.put_pixel(2, 0, Rgba([10, 200, 30, 128]));
        img.put_pixel(3, 0, Rgba([40, 100, 40, 7]));

        let keyed = GreenScreenKey::default().apply(&mut img);

        assert_eq!(keyed, 2);
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(1, 0), Rgba([255, 204, 0, 255]));
        assert_eq!(*img.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(3, 0), Rgba([40, 100, 40, 7]));
    }

    #[test]
    fn test_apply_matches_predicate_for_every_pixel() {
        let key = GreenScreenKey::default();
        let original = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4 + 3) as u8, ((x + y) * 2) as u8, 255])
        });
        let mut img = original.clone();
        key.apply(&mut img);

        for (x, y, before) in original.enumerate_pixels() {
            let after = img.get_pixel(x, y);
            if key.is_background(before) {
                assert_eq!(*after, TRANSPARENT, "pixel ({x}, {y})");
            } else {
                assert_eq!(after, before, "pixel ({x}, {y})");
            }
        }
    }
}
