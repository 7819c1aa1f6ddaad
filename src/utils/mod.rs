//! Utility functions for image handling and output validation.

use crate::core::{LeafError, PROBABILITY_SUM_TOLERANCE};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Converts a DynamicImage to an RgbImage.
///
/// The conversion performs the pipeline's channel adjustment: an alpha
/// channel is dropped and grayscale is expanded to three channels.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// # Errors
///
/// Returns `LeafError::ImageLoad` if the file cannot be decoded into a
/// pixel grid. This failure is scoped to the one request that carried the
/// image.
pub fn load_image(path: &Path) -> Result<RgbImage, LeafError> {
    let img = image::open(path).map_err(LeafError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Checks that a classifier output is a valid probability vector.
///
/// Valid means: the expected number of entries, every value in `[0, 1]`,
/// and a sum within [`PROBABILITY_SUM_TOLERANCE`] of 1.0 (softmax output).
///
/// # Errors
///
/// Returns `LeafError::ClassCountMismatch` on a length mismatch and
/// `LeafError::InvalidInput` when values fall outside the softmax range.
pub fn validate_probabilities(probabilities: &[f32], expected_len: usize) -> Result<(), LeafError> {
    if probabilities.len() != expected_len {
        return Err(LeafError::ClassCountMismatch {
            expected: expected_len,
            actual: probabilities.len(),
        });
    }

    for (i, &p) in probabilities.iter().enumerate() {
        if !(0.0..=1.0).contains(&p) || !p.is_finite() {
            return Err(LeafError::InvalidInput {
                message: format!("probability at index {} is out of range: {}", i, p),
            });
        }
    }

    let sum: f32 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(LeafError::InvalidInput {
            message: format!("probabilities sum to {}, expected approximately 1.0", sum),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_image_rejects_non_image_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not an image").unwrap();

        assert!(matches!(
            load_image(file.path()),
            Err(LeafError::ImageLoad(_))
        ));
    }

    #[test]
    fn test_validate_probabilities_accepts_softmax_output() {
        let probs = vec![0.7, 0.2, 0.1];
        assert!(validate_probabilities(&probs, 3).is_ok());
    }

    #[test]
    fn test_validate_probabilities_length_mismatch() {
        let probs = vec![0.5, 0.5];
        assert!(matches!(
            validate_probabilities(&probs, 3),
            Err(LeafError::ClassCountMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_validate_probabilities_out_of_range() {
        assert!(validate_probabilities(&[1.2, -0.2], 2).is_err());
    }

    #[test]
    fn test_validate_probabilities_sum_tolerance() {
        // Within +-0.01 of 1.0 passes, beyond it fails.
        assert!(validate_probabilities(&[0.6, 0.395], 2).is_ok());
        assert!(validate_probabilities(&[0.6, 0.3], 2).is_err());
    }
}
