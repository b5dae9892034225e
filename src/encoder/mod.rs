//! Image encoding — turning a source file into an embeddable payload.
//!
//! The [`Encoder`] trait defines the single operation both strategies must
//! support: encode one [`ImageAsset`] to a text-safe payload string.
//!
//! Two implementations exist, selected once at process start:
//! - [`CapableEncoder`] (default `imaging` feature): decode, optionally
//!   resize to exact dimensions, normalize to PNG, then base64.
//! - [`MinimalEncoder`] (always compiled): base64 the raw file bytes; resize
//!   is unsupported and the source must already be in a format the consuming
//!   Tkinter runtime accepts (GIF or PNG).
//!
//! The module is split into:
//! - **Payload**: the reversible byte-to-text transform shared by both
//! - **Capable / Minimal**: the two strategies

pub mod minimal;
pub mod payload;

#[cfg(feature = "imaging")]
pub mod capable;

#[cfg(feature = "imaging")]
pub use capable::CapableEncoder;
pub use minimal::MinimalEncoder;
pub use payload::{decode_payload, encode_payload};

use crate::types::ImageAsset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Read(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Resize requested but this encoder cannot resize")]
    ResizeUnsupported,
    #[error("Re-encode failed: {0}")]
    Encode(String),
}

/// Trait for payload encoders.
///
/// Each call is independent: no shared state, no side effects beyond reading
/// the source file. The rest of the codebase is strategy-agnostic — the pack
/// stage takes `&dyn Encoder` and never asks which mode it got.
pub trait Encoder {
    /// Encode one asset to a payload safe to embed in the generated module.
    fn encode(&self, asset: &ImageAsset) -> Result<String, EncodeError>;

    /// Short mode name for CLI reporting ("capable" / "raw").
    fn mode(&self) -> &'static str;
}

/// The encoder this build selects at startup.
///
/// Capable when the `imaging` feature is compiled in, minimal otherwise.
#[cfg(feature = "imaging")]
pub fn default_encoder() -> Box<dyn Encoder> {
    Box::new(CapableEncoder::new())
}

#[cfg(not(feature = "imaging"))]
pub fn default_encoder() -> Box<dyn Encoder> {
    Box::new(MinimalEncoder::new())
}
