//! Raw-bytes encoder, available in every build.

use super::{EncodeError, Encoder, payload};
use crate::types::ImageAsset;

/// Embeds source bytes verbatim, with no decoding or normalization.
///
/// The source must already be in a format the consuming Tkinter runtime can
/// display (GIF, or PNG on Tk 8.6+). Resize is unsupported: there is no
/// pixel access without decoding.
pub struct MinimalEncoder;

impl MinimalEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinimalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for MinimalEncoder {
    fn encode(&self, asset: &ImageAsset) -> Result<String, EncodeError> {
        if asset.target_size.is_some() {
            return Err(EncodeError::ResizeUnsupported);
        }
        let bytes = std::fs::read(&asset.source_path)?;
        Ok(payload::encode_payload(&bytes))
    }

    fn mode(&self) -> &'static str {
        "raw"
    }
}
