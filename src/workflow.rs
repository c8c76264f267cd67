//! End-to-end run: request an image, process it, write the icon set.

use crate::error::Result;
use crate::generation::{GenerationRequest, ImageProvider, ImageProviderExt, RetryPolicy};
use crate::icon::IconPipeline;
use std::path::{Path, PathBuf};

/// Generates an image with `provider` and writes the icon set to `out_dir`.
///
/// Returns the paths of the written files. Any failure aborts the run before
/// the first file is written.
pub async fn generate_icon_set<P: ImageProvider>(
    provider: &P,
    request: &GenerationRequest,
    retry: &RetryPolicy,
    pipeline: &IconPipeline,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    tracing::info!(provider = provider.name(), "requesting image");
    let image = provider.generate_with_retries(request, retry).await?;
    tracing::info!(
        bytes = image.size(),
        format = image.format.extension(),
        duration_ms = image.metadata.duration_ms,
        "received image"
    );

    pipeline.run(&image.data, out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenIconError;
    use crate::generation::{
        rate_limited, GeneratedImage, GenerationMetadata, ImageFormat, ScriptedProvider,
    };
    use crate::icon::output::encode_png;
    use crate::icon::{MacIconStyle, PipelineConfig};
    use image::{Rgba, RgbaImage};

    fn generated(img: &RgbaImage) -> Result<GeneratedImage> {
        Ok(GeneratedImage::new(
            encode_png(img).unwrap(),
            ImageFormat::Png,
            GenerationMetadata::default(),
        ))
    }

    fn smiley_on_green() -> RgbaImage {
        RgbaImage::from_fn(200, 100, |x, y| {
            if (75..125).contains(&x) && (25..75).contains(&y) {
                Rgba([255, 204, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            }
        })
    }

    fn pipeline() -> IconPipeline {
        IconPipeline::new(PipelineConfig {
            mac_style: MacIconStyle::Placeholder,
            ..PipelineConfig::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_writes_five_icons_after_rate_limit() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new(vec![rate_limited(), generated(&smiley_on_green())]);

        let written = generate_icon_set(
            &provider,
            &GenerationRequest::new("smiley"),
            &RetryPolicy::default(),
            &pipeline(),
            dir.path(),
        )
        .await
        .unwrap();

        assert_eq!(written.len(), 5);
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "128x128.png",
                "128x128@2x.png",
                "32x32.png",
                "icon.icns",
                "icon.ico"
            ]
        );
        for path in &written {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }

        let large = image::open(dir.path().join("128x128@2x.png")).unwrap();
        assert_eq!((large.width(), large.height()), (256, 256));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ScriptedProvider::new(vec![rate_limited(), rate_limited()]);

        let result = generate_icon_set(
            &provider,
            &GenerationRequest::new("smiley"),
            &RetryPolicy::with_max_attempts(2),
            &pipeline(),
            dir.path(),
        )
        .await;

        assert!(matches!(
            result,
            Err(GenIconError::RetryExhausted { attempts: 2 })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_all_green_image_still_produces_icons() {
        let dir = tempfile::tempdir().unwrap();
        let green = RgbaImage::from_pixel(100, 100, Rgba([0, 255, 0, 255]));
        let provider = ScriptedProvider::new(vec![generated(&green)]);

        let written = generate_icon_set(
            &provider,
            &GenerationRequest::new("nothing"),
            &RetryPolicy::default(),
            &pipeline(),
            dir.path(),
        )
        .await
        .unwrap();

        assert_eq!(written.len(), 5);
        let small = image::open(dir.path().join("32x32.png")).unwrap().to_rgba8();
        assert!(small.pixels().all(|p| p[3] == 0));
    }
}
