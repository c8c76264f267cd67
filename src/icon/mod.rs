//! Icon post-processing: background keying, cropping, squaring and the
//! output file set.

pub mod geometry;
pub mod keying;
pub mod output;
mod pipeline;

pub use geometry::{content_bounds, crop_to_content, square_canvas, BoundingBox};
pub use keying::GreenScreenKey;
pub use output::{IconKind, IconSet, IconSpec, MacIconStyle, ICO_SIZES};
pub use pipeline::{IconPipeline, PipelineConfig};

/// Prompt for the app icon: a smiley on a keyable green backdrop.
pub const DEFAULT_ICON_PROMPT: &str = "A single happy smiling emoji face, classic yellow round smiley with big friendly smile and simple oval eyes.
Google Noto emoji style - soft 3D, subtle gradients, clean and simple.
Solid pure green (#00FF00) background, nothing else.";
