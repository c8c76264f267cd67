//! From generated image bytes to the square base icon.

use crate::error::Result;
use crate::icon::geometry::{crop_to_content, square_canvas};
use crate::icon::keying::GreenScreenKey;
use crate::icon::output::{IconSet, MacIconStyle};
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Settings for the icon pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Backdrop color key.
    pub key: GreenScreenKey,
    /// Margin kept around the content when cropping.
    pub padding: u32,
    /// Side length of the base image every output is derived from.
    pub base_size: u32,
    /// How `icon.icns` is produced.
    pub mac_style: MacIconStyle,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            key: GreenScreenKey::default(),
            padding: 10,
            base_size: 512,
            mac_style: MacIconStyle::default(),
        }
    }
}

/// Turns a generated image into an icon set.
#[derive(Debug, Clone, Default)]
pub struct IconPipeline {
    config: PipelineConfig,
}

impl IconPipeline {
    /// Creates a pipeline with the given settings.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Returns the pipeline settings.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Decodes `bytes`, keys out the backdrop, crops, squares and resizes
    /// to the base size.
    pub fn process(&self, bytes: &[u8]) -> Result<RgbaImage> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        self.process_image(img)
    }

    /// Same as [`process`](Self::process) for an already decoded image.
    pub fn process_image(&self, mut img: RgbaImage) -> Result<RgbaImage> {
        let (width, height) = img.dimensions();
        let keyed = self.config.key.apply(&mut img);
        tracing::info!(width, height, keyed, "removed background");

        let cropped = crop_to_content(img, self.config.padding);
        let square = square_canvas(&cropped);
        tracing::debug!(
            cropped = ?cropped.dimensions(),
            side = square.width(),
            "squared content"
        );

        let size = self.config.base_size;
        if square.dimensions() == (size, size) {
            return Ok(square);
        }
        Ok(image::imageops::resize(
            &square,
            size,
            size,
            FilterType::Lanczos3,
        ))
    }

    /// Processes `bytes` and writes the full icon set into `out_dir`.
    pub fn run(&self, bytes: &[u8], out_dir: &Path) -> Result<Vec<PathBuf>> {
        let base = self.process(bytes)?;
        IconSet::standard(self.config.mac_style).write_all(&base, out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::output::encode_png;
    use image::Rgba;

    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const YELLOW: Rgba<u8> = Rgba([255, 204, 0, 255]);

    #[test]
    fn test_solid_green_becomes_transparent_base() {
        let img = RgbaImage::from_pixel(100, 100, GREEN);
        let base = IconPipeline::default().process_image(img).unwrap();

        assert_eq!(base.dimensions(), (512, 512));
        assert!(base.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_subject_is_cropped_and_centered() {
        // 50x50 subject at (75, 25) on a 200x100 green backdrop
        let img = RgbaImage::from_fn(200, 100, |x, y| {
            if (75..125).contains(&x) && (25..75).contains(&y) {
                YELLOW
            } else {
                GREEN
            }
        });

        let config = PipelineConfig {
            base_size: 70,
            ..PipelineConfig::default()
        };
        // padded crop is 70x70, so a 70px base keeps pixels 1:1
        let base = IconPipeline::new(config).process_image(img).unwrap();

        assert_eq!(base.dimensions(), (70, 70));
        assert_eq!(*base.get_pixel(35, 35), YELLOW);
        assert_eq!(*base.get_pixel(10, 10), YELLOW);
        assert_eq!(base.get_pixel(5, 5)[3], 0);
        assert_eq!(base.get_pixel(65, 65)[3], 0);
    }

    #[test]
    fn test_wide_subject_is_padded_to_square() {
        // 120x20 subject; padded crop 140x40, square side 140
        let img = RgbaImage::from_fn(300, 300, |x, y| {
            if (100..220).contains(&x) && (150..170).contains(&y) {
                YELLOW
            } else {
                GREEN
            }
        });

        let config = PipelineConfig {
            base_size: 140,
            ..PipelineConfig::default()
        };
        let base = IconPipeline::new(config).process_image(img).unwrap();

        assert_eq!(base.dimensions(), (140, 140));
        // vertical offset (140 - 40) / 2 = 50, content starts 10px further down
        assert_eq!(*base.get_pixel(70, 60), YELLOW);
        assert_eq!(*base.get_pixel(70, 79), YELLOW);
        assert_eq!(base.get_pixel(70, 59)[3], 0);
        assert_eq!(base.get_pixel(70, 20)[3], 0);
        assert_eq!(base.get_pixel(70, 120)[3], 0);
    }

    #[test]
    fn test_process_decodes_png_bytes() {
        let img = RgbaImage::from_fn(64, 64, |x, _| if x < 32 { YELLOW } else { GREEN });
        let bytes = encode_png(&img).unwrap();

        let base = IconPipeline::default().process(&bytes).unwrap();
        assert_eq!(base.dimensions(), (512, 512));
    }

    #[test]
    fn test_process_rejects_garbage() {
        assert!(IconPipeline::default().process(b"definitely not an image").is_err());
    }

    #[test]
    fn test_failed_decode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = IconPipeline::default().run(b"garbage", dir.path());

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
