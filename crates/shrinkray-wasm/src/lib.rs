//! Shrinkray WASM - WebAssembly bindings for Shrinkray
//!
//! This crate exposes the shrinkray-core compression pipeline to
//! JavaScript/TypeScript hosts. The heavy work (decode, quality search,
//! resize, encode) stays in WASM memory; only the final bytes and report
//! cross the boundary.
//!
//! # Module Structure
//!
//! - `compress` - One-call validate + decode + compress + report binding
//! - `preview` - Inline thumbnail data URIs with placeholder fallback
//! - `types` - JavaScript-friendly result wrappers
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_to_target, generate_preview } from '@shrinkray/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress_to_target(bytes, file.name, 15);
//! console.log(`${result.width}x${result.height} at ${result.size_kb} KB`);
//! const preview = generate_preview(result.bytes());
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod preview;
mod types;

// Re-export public bindings
pub use compress::compress_to_target;
pub use preview::{generate_preview, preview_is_placeholder};
pub use types::JsCompressedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&"Shrinkray WASM ready".into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
