//! Content bounds, padded cropping and square canvases.

use image::RgbaImage;

/// Axis-aligned rectangle in pixel coordinates; `right` and `bottom` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// First column containing content.
    pub left: u32,
    /// First row containing content.
    pub top: u32,
    /// One past the last column containing content.
    pub right: u32,
    /// One past the last row containing content.
    pub bottom: u32,
}

impl BoundingBox {
    /// Width of the box in pixels.
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the box in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Grows the box by `padding` on every side, clamped to a
    /// `width` x `height` image.
    pub fn padded(&self, padding: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width),
            bottom: self.bottom.saturating_add(padding).min(height),
        }
    }
}

/// Smallest box holding every pixel that is not fully transparent, or `None`
/// if the whole image is transparent.
pub fn content_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }
    bounds
}

/// Crops to the content plus `padding`. An image with no content is returned
/// unchanged.
pub fn crop_to_content(img: RgbaImage, padding: u32) -> RgbaImage {
    let Some(bounds) = content_bounds(&img) else {
        tracing::debug!("image is fully transparent, skipping crop");
        return img;
    };
    let padded = bounds.padded(padding, img.width(), img.height());
    tracing::debug!(?bounds, ?padded, "cropping to content");
    image::imageops::crop_imm(
        &img,
        padded.left,
        padded.top,
        padded.width(),
        padded.height(),
    )
    .to_image()
}

/// Offset at which a `width` x `height` image is centered in a square of
/// side `side`.
pub fn centered_offset(side: u32, width: u32, height: u32) -> (u32, u32) {
    ((side - width) / 2, (side - height) / 2)
}

/// Copies `img` into the center of a transparent square canvas whose side is
/// the larger of its dimensions.
pub fn square_canvas(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let side = width.max(height);
    if width == height {
        return img.clone();
    }

    let mut canvas = RgbaImage::new(side, side);
    let (x, y) = centered_offset(side, width, height);
    // replace copies pixels verbatim; overlay would alpha-blend
    image::imageops::replace(&mut canvas, img, i64::from(x), i64::from(y));
    canvas
}
