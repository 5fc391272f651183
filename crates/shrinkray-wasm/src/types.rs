//! WASM-compatible wrapper types for compression results.
//!
//! These wrap the core result types in a JavaScript-friendly surface,
//! handling the copy between WASM memory and JavaScript values.

use shrinkray_core::{CompressOutcome, CompressionReport};
use wasm_bindgen::prelude::*;

/// A compression result for JavaScript: the encoded JPEG plus its summary
/// report.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory; `bytes()` and `data_uri()` copy
/// them out. wasm-bindgen's finalizer releases the WASM side automatically,
/// or call `free()` to drop it eagerly after a large compression.
#[wasm_bindgen]
pub struct JsCompressedImage {
    outcome: CompressOutcome,
    report: CompressionReport,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Final image width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.outcome.width
    }

    /// Final image height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.outcome.height
    }

    /// JPEG quality the result was encoded at.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> u8 {
        self.outcome.quality
    }

    /// Exact encoded size in bytes.
    #[wasm_bindgen(getter)]
    pub fn size_bytes(&self) -> usize {
        self.outcome.size_bytes()
    }

    /// Encoded size in kilobytes.
    #[wasm_bindgen(getter)]
    pub fn size_kb(&self) -> f64 {
        self.outcome.size_kb()
    }

    /// Suggested download filename.
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.report.filename.clone()
    }

    /// The encoded JPEG as a `Uint8Array` (copies out of WASM memory).
    pub fn bytes(&self) -> Vec<u8> {
        self.outcome.bytes.clone()
    }

    /// The encoded JPEG as a `data:image/jpeg` URI for download links.
    pub fn data_uri(&self) -> String {
        shrinkray_core::download_data_uri(&self.outcome)
    }

    /// The full summary report (sizes, dimensions, ratio, filename) as a
    /// plain JavaScript object.
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Explicitly free WASM memory. Optional; the finalizer handles this.
    pub fn free_bytes(self) {
        // Dropping self releases the buffer
    }
}

impl JsCompressedImage {
    /// Internal constructor used by the compress binding.
    pub(crate) fn from_parts(outcome: CompressOutcome, report: CompressionReport) -> Self {
        Self { outcome, report }
    }
}
