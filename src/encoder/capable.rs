//! Full-pipeline encoder built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF, WebP) | `image` crate (pure Rust decoders) |
//! | Exact resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Normalize | `DynamicImage::write_to` → in-memory PNG |
//!
//! Every payload this encoder produces decodes to a PNG, whatever the source
//! format. PNG rather than GIF because GIF re-encoding forces 256-color
//! palette quantization, PNG is lossless and deterministic, and
//! `tk.PhotoImage` accepts base64 PNG data on Tk 8.6+ (every supported
//! Python 3).

use super::{EncodeError, Encoder, payload};
use crate::types::ImageAsset;
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;

/// Decode → optional exact resize → PNG → base64.
pub struct CapableEncoder;

impl CapableEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CapableEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for CapableEncoder {
    fn encode(&self, asset: &ImageAsset) -> Result<String, EncodeError> {
        let img = ImageReader::open(&asset.source_path)?
            .decode()
            .map_err(|e| {
                EncodeError::Decode(format!("{}: {}", asset.source_path.display(), e))
            })?;

        let img = match asset.target_size {
            Some((width, height)) => img.resize_exact(width, height, FilterType::Lanczos3),
            None => img,
        };

        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png).map_err(|e| {
            EncodeError::Encode(format!("{}: {}", asset.source_path.display(), e))
        })?;

        Ok(payload::encode_payload(png.get_ref()))
    }

    fn mode(&self) -> &'static str {
        "capable"
    }
}
