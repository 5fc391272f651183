//! JPEG encoding.
//!
//! A thin wrapper around the `image` crate's JPEG encoder. The compressor
//! calls [`encode_frame`] repeatedly with different quality levels; each
//! call is a full, real encode of the current pixel buffer.

mod jpeg;

pub use jpeg::{encode_frame, encode_jpeg, EncodeError};
