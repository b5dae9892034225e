//! Shared types passed between the encoder, generator, and pack stages.

use std::path::PathBuf;

/// One selected source image, as handed to the encoder.
///
/// Immutable once built. The `logical_name` is the key end users will pass
/// to the generated module's `load_image` accessor — it carries no path
/// component and must be unique within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub logical_name: String,
    pub source_path: PathBuf,
    /// Exact output dimensions (width, height). No aspect-ratio
    /// preservation: the caller decides the geometry.
    pub target_size: Option<(u32, u32)>,
}

impl ImageAsset {
    pub fn new(logical_name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            logical_name: logical_name.into(),
            source_path: source_path.into(),
            target_size: None,
        }
    }

    pub fn with_target_size(mut self, width: u32, height: u32) -> Self {
        self.target_size = Some((width, height));
        self
    }
}

/// The encoder's output for one asset: a text-safe payload ready to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    pub logical_name: String,
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_builder_sets_fields() {
        let asset = ImageAsset::new("dawn.png", "/photos/dawn.png").with_target_size(64, 48);
        assert_eq!(asset.logical_name, "dawn.png");
        assert_eq!(asset.source_path, PathBuf::from("/photos/dawn.png"));
        assert_eq!(asset.target_size, Some((64, 48)));
    }

    #[test]
    fn asset_defaults_to_no_resize() {
        let asset = ImageAsset::new("a.gif", "a.gif");
        assert_eq!(asset.target_size, None);
    }
}
