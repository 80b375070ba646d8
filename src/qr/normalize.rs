//! Image normalization for barcode detection
//!
//! Decodes raw uploaded bytes and derives the grids the decode policy runs
//! on: a plain grayscale view and a smoothed, globally thresholded binary
//! view for low-contrast shots.

use image::GrayImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::gaussian_blur_f32;

/// Smoothing strength for the denoising pass.
const BLUR_SIGMA: f32 = 1.1;

/// Pixel grids derived from one uploaded image.
#[derive(Debug)]
pub struct NormalizedImage {
    /// Plain luma conversion of the decoded pixels, no preprocessing.
    pub gray: GrayImage,
    /// Gaussian-blurred, Otsu-thresholded view.
    pub binary: GrayImage,
}

impl NormalizedImage {
    /// Decode `bytes` and derive both grids.
    ///
    /// Fails only when the bytes are not a valid image in a format the
    /// `image` crate recognizes; callers treat that as "cannot decode"
    /// rather than a fatal condition.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let gray = decoded.to_luma8();
        let blurred = gaussian_blur_f32(&gray, BLUR_SIGMA);
        let level = otsu_level(&blurred);
        let binary = threshold(&blurred, level, ThresholdType::Binary);
        Ok(Self { gray, binary })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Luma};

    use super::*;

    fn png_bytes(img: GrayImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_binary_grid_is_two_level() {
        // Horizontal gradient: the thresholded view must collapse to pure
        // black and white while the gray view keeps midtones.
        let gradient = GrayImage::from_fn(64, 64, |x, _| Luma([(x * 4) as u8]));
        let normalized = NormalizedImage::from_bytes(&png_bytes(gradient)).unwrap();

        assert!(normalized
            .binary
            .pixels()
            .all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert!(normalized
            .gray
            .pixels()
            .any(|p| p.0[0] != 0 && p.0[0] != 255));
    }

    #[test]
    fn test_grids_keep_source_dimensions() {
        let img = GrayImage::from_pixel(40, 30, Luma([200u8]));
        let normalized = NormalizedImage::from_bytes(&png_bytes(img)).unwrap();

        assert_eq!(normalized.gray.dimensions(), (40, 30));
        assert_eq!(normalized.binary.dimensions(), (40, 30));
    }

    #[test]
    fn test_malformed_bytes_are_rejected() {
        assert!(NormalizedImage::from_bytes(b"not an image at all").is_err());
    }
}
