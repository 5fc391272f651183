//! Preview WASM bindings.

use wasm_bindgen::prelude::*;

/// Generate an inline preview for arbitrary image bytes.
///
/// Returns a data URI ready for an `img` tag: a JPEG thumbnail bounded to
/// 300 px on the longer edge, or an SVG placeholder when the bytes cannot
/// be decoded. This function never fails.
#[wasm_bindgen]
pub fn generate_preview(bytes: &[u8]) -> String {
    shrinkray_core::generate_preview(bytes).data_uri()
}

/// Whether a preview for these bytes would be the fallback placeholder.
#[wasm_bindgen]
pub fn preview_is_placeholder(bytes: &[u8]) -> bool {
    shrinkray_core::generate_preview(bytes).is_placeholder()
}
