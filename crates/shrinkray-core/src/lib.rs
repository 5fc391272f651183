//! Shrinkray Core - size-constrained image compression
//!
//! This crate takes an uploaded raster image and a target size in kilobytes
//! and produces a JPEG as close to the target as achievable, trading quality
//! first and pixel dimensions second.
//!
//! # Module Structure
//!
//! - `decode` - Format-sniffing decode, color-mode tagging, resize
//! - `encode` - JPEG encoding at a chosen quality (the search's probe)
//! - `compress` - The size-constrained quality search and fallback downscale
//! - `preview` - Bounded inline thumbnails with placeholder fallback
//! - `report` - Request validation and result packaging for hosts
//! - `scratch` - Host-side temp-directory lifecycle
//!
//! The compressor is pure and stateless between calls: it performs no I/O,
//! owns no shared state, and is safe to invoke concurrently from independent
//! requests without locking.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod preview;
pub mod report;
pub mod scratch;

pub use compress::{compress_to_target, CompressError, CompressOutcome};
pub use decode::{decode_image, ColorMode, DecodeError, RgbFrame, SourceImage};
pub use encode::{encode_frame, encode_jpeg, EncodeError};
pub use preview::{generate_preview, Preview};
pub use report::{
    build_report, download_data_uri, download_filename, validate_request, CompressionReport,
    RequestError,
};
pub use scratch::ScratchDir;
