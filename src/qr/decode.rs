//! Barcode detection and the two-pass decode policy
//!
//! The policy tries the thresholded grid first and falls back to the
//! untouched grayscale grid, short-circuiting on the first hit.

use image::GrayImage;
use tracing::debug;

use super::normalize::NormalizedImage;
use crate::utils::errors::Result;

/// Locates and decodes 2D barcodes in a single-channel grid.
///
/// The policy only ever consumes the first payload; ordering among several
/// codes in frame is decoder-defined and must not be relied on.
trait Detect {
    fn detect(&self, grid: GrayImage) -> Option<String>;
}

/// `rqrr`-backed detector.
#[derive(Debug, Clone, Copy, Default)]
struct QrDetector;

impl Detect for QrDetector {
    fn detect(&self, grid: GrayImage) -> Option<String> {
        let mut prepared = rqrr::PreparedImage::prepare(grid);
        prepared
            .detect_grids()
            .iter()
            .find_map(|grid| grid.decode().ok().map(|(_, payload)| payload))
    }
}

/// Decode `bytes` into the first barcode payload found, or `None`.
///
/// Two attempts in a fixed order: the thresholded grid recovers
/// low-contrast and unevenly lit photos, the raw grid recovers codes the
/// thresholding destroys (clean screenshots, already-binary scans). The
/// order decides which payload wins when both passes would succeed, so the
/// attempts are never run concurrently.
pub fn decode_payload(bytes: &[u8]) -> Result<Option<String>> {
    decode_with(&QrDetector, bytes)
}

fn decode_with<D: Detect>(detector: &D, bytes: &[u8]) -> Result<Option<String>> {
    let image = NormalizedImage::from_bytes(bytes)?;
    if let Some(payload) = detector.detect(image.binary) {
        debug!("Barcode decoded from the thresholded grid");
        return Ok(Some(payload));
    }
    Ok(detector.detect(image.gray))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;

    use assert_matches::assert_matches;
    use image::{DynamicImage, ImageFormat, Luma};

    use super::*;
    use crate::utils::errors::ScanBuddyError;

    /// Detector that replays scripted answers and records every grid it
    /// was handed.
    struct ScriptedDetector {
        responses: RefCell<Vec<Option<String>>>,
        seen: RefCell<Vec<GrayImage>>,
    }

    impl ScriptedDetector {
        fn new(responses: Vec<Option<String>>) -> Self {
            Self {
                responses: RefCell::new(responses),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Detect for ScriptedDetector {
        fn detect(&self, grid: GrayImage) -> Option<String> {
            self.seen.borrow_mut().push(grid);
            self.responses.borrow_mut().remove(0)
        }
    }

    /// Gradient image, encoded as PNG, whose binary and gray grids are
    /// clearly distinguishable.
    fn gradient_png() -> Vec<u8> {
        let gradient = GrayImage::from_fn(64, 64, |x, _| Luma([(x * 4) as u8]));
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(gradient)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn is_two_level(grid: &GrayImage) -> bool {
        grid.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255)
    }

    #[test]
    fn test_thresholded_grid_is_tried_first() {
        let detector = ScriptedDetector::new(vec![None, Some("payload".to_string())]);

        let result = decode_with(&detector, &gradient_png()).unwrap();
        assert_eq!(result, Some("payload".to_string()));

        let seen = detector.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(is_two_level(&seen[0]), "first pass must get the binary grid");
        assert!(!is_two_level(&seen[1]), "second pass must get the raw grid");
    }

    #[test]
    fn test_first_hit_short_circuits() {
        let detector = ScriptedDetector::new(vec![Some("first".to_string())]);

        let result = decode_with(&detector, &gradient_png()).unwrap();
        assert_eq!(result, Some("first".to_string()));
        assert_eq!(detector.seen.borrow().len(), 1);
    }

    #[test]
    fn test_both_misses_yield_none() {
        let detector = ScriptedDetector::new(vec![None, None]);

        let result = decode_with(&detector, &gradient_png()).unwrap();
        assert_eq!(result, None);
        assert_eq!(detector.seen.borrow().len(), 2);
    }

    #[test]
    fn test_malformed_bytes_never_reach_the_detector() {
        let detector = ScriptedDetector::new(vec![]);

        let result = decode_with(&detector, b"garbage");
        assert_matches!(result, Err(ScanBuddyError::Image(_)));
        assert!(detector.seen.borrow().is_empty());
    }
}
