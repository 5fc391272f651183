//! Image decoding and pixel-frame handling.
//!
//! This module provides:
//! - Format-sniffing decode of raw upload bytes into a [`SourceImage`]
//! - Color-mode tagging and explicit flattening to RGB
//! - Aspect-preserving resize operations on [`RgbFrame`]s
//!
//! Decoding is the collaborator's gate: invalid or corrupt input is rejected
//! here, so the compressor in [`crate::compress`] always starts from a valid
//! decoded raster.

mod reader;
mod resize;
mod types;

pub use reader::decode_image;
pub use resize::{resize, resize_to_fit};
pub use types::{ColorMode, DecodeError, FilterType, Orientation, RgbFrame, SourceImage};
