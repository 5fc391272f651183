//! Compression WASM bindings.
//!
//! Exposes the whole request path as one call for the browser host:
//! validate, decode, compress, and package the report. The host only ever
//! sees the upload bytes going in and a [`JsCompressedImage`] coming out.

use wasm_bindgen::prelude::*;

use crate::types::JsCompressedImage;
use shrinkray_core::{build_report, decode_image, validate_request};

/// Compress uploaded image bytes toward a target size in kilobytes.
///
/// # Arguments
///
/// * `bytes` - The raw upload (JPEG, PNG, GIF, or WebP), at most 5 MiB
/// * `filename` - The original filename, used for the download name
/// * `target_kb` - Desired size in kilobytes (5-200)
///
/// # Returns
///
/// A [`JsCompressedImage`] with the encoded JPEG, final dimensions, and a
/// summary report. The target is best-effort; check `size_kb` against the
/// request to report a shortfall.
///
/// # Errors
///
/// Returns a string error if the request is out of bounds, the bytes are
/// not a decodable image, or an internal encode fails.
#[wasm_bindgen]
pub fn compress_to_target(
    bytes: &[u8],
    filename: &str,
    target_kb: u32,
) -> Result<JsCompressedImage, JsValue> {
    validate_request(bytes.len(), target_kb).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let source = decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let original_dimensions = (source.width(), source.height());

    let outcome = shrinkray_core::compress::compress_to_target(&source, target_kb)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let report = build_report(filename, bytes.len(), original_dimensions, &outcome);
    Ok(JsCompressedImage::from_parts(outcome, report))
}
