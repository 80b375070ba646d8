//! QR recognition pipeline
//!
//! Normalizes uploaded image bytes into detection-friendly grids and runs
//! the two-pass decode policy over them.

pub mod decode;
pub mod normalize;

pub use decode::decode_payload;
pub use normalize::NormalizedImage;
