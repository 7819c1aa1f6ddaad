//! Image normalization for classifier input.
//!
//! Converts decoded images into fixed-range floating-point tensors. The
//! leaf classifier descends from a TensorFlow training pipeline, so the
//! default configuration is scale-only (pixel / 255) in HWC channel order;
//! mean/std parameters are still accepted for artifacts that expect them.

use crate::core::{LeafError, Tensor4D};
use image::DynamicImage;

/// Specifies the order of channels in an image tensor.
#[derive(Debug, Clone)]
pub enum ChannelOrder {
    /// Channel, Height, Width order (common in PyTorch)
    CHW,
    /// Height, Width, Channel order (common in TensorFlow)
    HWC,
}

/// Normalizes images into model-input tensors.
///
/// This struct encapsulates the parameters needed to normalize images:
/// per-channel scaling factors, offsets, and channel ordering. Conversion
/// to RGB happens first, which also performs the channel adjustment the
/// pipeline requires (grayscale is expanded to three channels, an alpha
/// channel is dropped).
#[derive(Debug)]
pub struct NormalizeImage {
    /// Scaling factors for each channel (alpha = scale / std)
    pub alpha: Vec<f32>,
    /// Offset values for each channel (beta = -mean / std)
    pub beta: Vec<f32>,
    /// Channel ordering (CHW or HWC)
    pub order: ChannelOrder,
}

impl NormalizeImage {
    /// Creates a new NormalizeImage instance with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `scale` - Optional scaling factor (defaults to 1.0/255.0)
    /// * `mean` - Optional mean values for each channel (defaults to [0.0, 0.0, 0.0])
    /// * `std` - Optional standard deviation values for each channel (defaults to [1.0, 1.0, 1.0])
    /// * `order` - Optional channel ordering (defaults to HWC)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * Scale is less than or equal to 0
    /// * Mean or std vectors don't have exactly 3 elements
    /// * Any standard deviation value is less than or equal to 0
    pub fn new(
        scale: Option<f32>,
        mean: Option<Vec<f32>>,
        std: Option<Vec<f32>>,
        order: Option<ChannelOrder>,
    ) -> Result<Self, LeafError> {
        let scale = scale.unwrap_or(1.0 / 255.0);
        let mean = mean.unwrap_or_else(|| vec![0.0, 0.0, 0.0]);
        let std = std.unwrap_or_else(|| vec![1.0, 1.0, 1.0]);
        let order = order.unwrap_or(ChannelOrder::HWC);

        if scale <= 0.0 {
            return Err(LeafError::ConfigError {
                message: "Scale must be greater than 0".to_string(),
            });
        }

        if mean.len() != 3 {
            return Err(LeafError::ConfigError {
                message: "Mean must have exactly 3 elements for RGB".to_string(),
            });
        }

        if std.len() != 3 {
            return Err(LeafError::ConfigError {
                message: "Std must have exactly 3 elements for RGB".to_string(),
            });
        }

        for (i, &s) in std.iter().enumerate() {
            if s <= 0.0 {
                return Err(LeafError::ConfigError {
                    message: format!(
                        "Standard deviation at index {i} must be greater than 0, got {s}"
                    ),
                });
            }
        }

        let alpha: Vec<f32> = std.iter().map(|s| scale / s).collect();
        let beta: Vec<f32> = mean.iter().zip(&std).map(|(m, s)| -m / s).collect();

        Ok(Self { alpha, beta, order })
    }

    /// Creates a NormalizeImage instance for the leaf classifier.
    ///
    /// Scale-only normalization (pixel / 255) in HWC order, matching the
    /// trained artifact's expectations.
    pub fn for_leaf_classification() -> Result<Self, LeafError> {
        Self::new(None, None, None, Some(ChannelOrder::HWC))
    }

    /// Normalizes a single image and returns it as a 4D batch tensor.
    ///
    /// The output carries a leading batch axis of size 1: `(1, H, W, C)`
    /// for HWC order, `(1, C, H, W)` for CHW.
    ///
    /// # Errors
    ///
    /// Returns a tensor-operation error if the normalized buffer cannot be
    /// shaped into the batch tensor.
    pub fn normalize_to(&self, img: DynamicImage) -> Result<Tensor4D, LeafError> {
        let rgb_img = img.to_rgb8();
        let (width, height) = rgb_img.dimensions();
        let channels = 3usize;
        let (h, w) = (height as usize, width as usize);

        let mut result = vec![0.0f32; channels * h * w];

        match self.order {
            ChannelOrder::HWC => {
                for y in 0..h {
                    for x in 0..w {
                        let pixel = rgb_img.get_pixel(x as u32, y as u32);
                        for c in 0..channels {
                            let dst_idx = y * w * channels + x * channels + c;
                            result[dst_idx] = pixel[c] as f32 * self.alpha[c] + self.beta[c];
                        }
                    }
                }

                ndarray::Array4::from_shape_vec((1, h, w, channels), result).map_err(|e| {
                    LeafError::tensor_operation(
                        &format!(
                            "failed to create HWC batch tensor for {}x{} image",
                            width, height
                        ),
                        e,
                    )
                })
            }
            ChannelOrder::CHW => {
                for c in 0..channels {
                    for y in 0..h {
                        for x in 0..w {
                            let pixel = rgb_img.get_pixel(x as u32, y as u32);
                            let dst_idx = c * h * w + y * w + x;
                            result[dst_idx] = pixel[c] as f32 * self.alpha[c] + self.beta[c];
                        }
                    }
                }

                ndarray::Array4::from_shape_vec((1, channels, h, w), result).map_err(|e| {
                    LeafError::tensor_operation(
                        &format!(
                            "failed to create CHW batch tensor for {}x{} image",
                            width, height
                        ),
                        e,
                    )
                })
            }
        }
    }
}
