//! The fixed set of icon files written from the base image.

use crate::error::{GenIconError, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Frame sizes packed into `icon.ico`.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Side length of the stand-in `icon.icns`.
pub const ICNS_PLACEHOLDER_SIZE: u32 = 128;

/// How `icon.icns` is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacIconStyle {
    /// A real Apple icon family with several resolutions.
    IconFamily,
    /// A 128x128 PNG saved under the `.icns` name.
    Placeholder,
}

impl Default for MacIconStyle {
    fn default() -> Self {
        if cfg!(feature = "icns") {
            Self::IconFamily
        } else {
            Self::Placeholder
        }
    }
}

impl std::str::FromStr for MacIconStyle {
    type Err = GenIconError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icns" | "family" => Ok(Self::IconFamily),
            "png" | "placeholder" => Ok(Self::Placeholder),
            other => Err(GenIconError::Config(format!(
                "unknown macOS icon style '{other}' (expected 'icns' or 'placeholder')"
            ))),
        }
    }
}

/// What one output file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Single PNG at the given side length.
    Png(u32),
    /// Windows icon with one frame per entry of [`ICO_SIZES`].
    Ico,
    /// macOS icon.
    Icns(MacIconStyle),
}

/// One entry of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// Contents of the file.
    pub kind: IconKind,
}

/// The five files written for an app bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    specs: Vec<IconSpec>,
}

impl IconSet {
    /// Standard Tauri icon set.
    pub fn standard(mac_style: MacIconStyle) -> Self {
        Self {
            specs: vec![
                IconSpec {
                    file_name: "32x32.png",
                    kind: IconKind::Png(32),
                },
                IconSpec {
                    file_name: "128x128.png",
                    kind: IconKind::Png(128),
                },
                IconSpec {
                    file_name: "128x128@2x.png",
                    kind: IconKind::Png(256),
                },
                IconSpec {
                    file_name: "icon.ico",
                    kind: IconKind::Ico,
                },
                IconSpec {
                    file_name: "icon.icns",
                    kind: IconKind::Icns(mac_style),
                },
            ],
        }
    }

    /// Entries in write order.
    pub fn specs(&self) -> &[IconSpec] {
        &self.specs
    }

    /// Encodes every entry from `base`, then writes them all to `out_dir`.
    ///
    /// Nothing is written unless every file encoded successfully.
    pub fn write_all(&self, base: &RgbaImage, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let encoded = self
            .specs
            .iter()
            .map(|spec| Ok((spec, encode(base, spec.kind)?)))
            .collect::<Result<Vec<_>>>()?;

        std::fs::create_dir_all(out_dir)?;

        let mut written = Vec::with_capacity(encoded.len());
        for (spec, bytes) in encoded {
            let path = out_dir.join(spec.file_name);
            std::fs::write(&path, &bytes)?;
            tracing::info!(file = spec.file_name, bytes = bytes.len(), "wrote icon");
            written.push(path);
        }
        Ok(written)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::standard(MacIconStyle::default())
    }
}

fn resized(base: &RgbaImage, size: u32) -> RgbaImage {
    if base.dimensions() == (size, size) {
        return base.clone();
    }
    image::imageops::resize(base, size, size, FilterType::Lanczos3)
}

fn encode(base: &RgbaImage, kind: IconKind) -> Result<Vec<u8>> {
    match kind {
        IconKind::Png(size) => encode_png(&resized(base, size)),
        IconKind::Ico => encode_ico(base),
        IconKind::Icns(MacIconStyle::Placeholder) => {
            encode_png(&resized(base, ICNS_PLACEHOLDER_SIZE))
        }
        IconKind::Icns(MacIconStyle::IconFamily) => encode_icns(base),
    }
}

/// Encodes an image as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encodes a multi-frame ICO; every frame is resized from `base` on its own.
pub fn encode_ico(base: &RgbaImage) -> Result<Vec<u8>> {
    let frames = ICO_SIZES
        .iter()
        .map(|&size| {
            let frame = resized(base, size);
            IcoFrame::as_png(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
        })
        .collect::<image::ImageResult<Vec<_>>>()?;

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf).encode_images(&frames)?;
    Ok(buf)
}

#[cfg(feature = "icns")]
fn encode_icns(base: &RgbaImage) -> Result<Vec<u8>> {
    use icns::{IconFamily, IconType, PixelFormat};

    // Only types the 512px base can fill without upscaling
    const TYPES: [IconType; 7] = [
        IconType::RGBA32_16x16_2x,
        IconType::RGBA32_32x32_2x,
        IconType::RGBA32_128x128,
        IconType::RGBA32_128x128_2x,
        IconType::RGBA32_256x256,
        IconType::RGBA32_256x256_2x,
        IconType::RGBA32_512x512,
    ];

    let mut family = IconFamily::new();
    for icon_type in TYPES {
        let size = icon_type.pixel_width();
        let frame = resized(base, size);
        let image = icns::Image::from_data(PixelFormat::RGBA, size, size, frame.into_raw())?;
        family.add_icon_with_type(&image, icon_type)?;
    }

    let mut buf = Vec::new();
    family.write(&mut buf)?;
    Ok(buf)
}

#[cfg(not(feature = "icns"))]
fn encode_icns(_base: &RgbaImage) -> Result<Vec<u8>> {
    Err(GenIconError::Config(
        "icon family output needs the `icns` feature".into(),
    ))
}
