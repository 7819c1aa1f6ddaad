//! Leaf Species Classifier
//!
//! This module provides the high-level classifier for identifying medicinal
//! plant species from leaf photographs. It runs the full pipeline on a
//! single image: resize and normalize into the model's input tensor, one
//! forward pass through the frozen ONNX artifact, and resolution of the
//! output probabilities into a species name, confidence, and remedy text.
//!
//! The model handle is created once at build time and shared read-only
//! afterwards; each classification is an independent, stateless request.

use crate::core::{
    DEFAULT_TOPK, INPUT_CHANNELS, INPUT_SHAPE, LeafError, OrtClassifier, SimpleError, Tensor2D,
    Tensor4D,
};
use crate::processors::NormalizeImage;
use crate::predictor::resolver::{self, LeafPrediction};
use crate::utils::load_image;
use image::{DynamicImage, imageops::FilterType};
use std::path::Path;
use tracing::debug;

/// Configuration for the leaf classifier.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LeafClassifierConfig {
    /// Input shape for the model (height, width).
    pub input_shape: Option<(u32, u32)>,
    /// Override for the model's input tensor name.
    pub input_name: Option<String>,
    /// Number of ranked predictions to retain for each image.
    pub topk: Option<usize>,
}

impl LeafClassifierConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self {
            input_shape: Some(INPUT_SHAPE),
            input_name: None,
            topk: Some(DEFAULT_TOPK),
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), LeafError> {
        if let Some(topk) = self.topk
            && topk == 0
        {
            return Err(LeafError::config_error("topk must be greater than 0"));
        }

        if let Some((height, width)) = self.input_shape
            && (height == 0 || width == 0)
        {
            return Err(LeafError::config_error(format!(
                "input shape dimensions must be positive, got {}x{}",
                height, width
            )));
        }

        Ok(())
    }
}

/// Classifier for identifying plant species from leaf images.
///
/// Holds the loaded model handle, the normalizer, and the resolution
/// parameters. Construct through [`LeafClassifierBuilder`].
#[derive(Debug)]
pub struct LeafClassifier {
    /// Input shape for the model (height, width).
    input_shape: (u32, u32),
    /// Resizing filter applied before normalization.
    resize_filter: FilterType,
    /// Number of ranked predictions to retain.
    topk: usize,
    /// Image normalizer for preprocessing.
    normalize: NormalizeImage,
    /// ONNX Runtime inference engine.
    infer: OrtClassifier,
}

/// Preprocesses one image into the model's input tensor.
///
/// Resizes to `input_shape` without preserving aspect ratio (compatibility
/// with how the model was trained; the stretch is deliberate, not an
/// oversight to fix), then normalizes pixel values into `[0, 1]` with a
/// leading batch axis. Output shape is `(1, height, width, 3)`.
///
/// Sources with one channel are expanded to RGB and a fourth alpha channel
/// is dropped; any other channel count is rejected as unsupported.
pub fn preprocess_image(
    img: &DynamicImage,
    input_shape: (u32, u32),
    filter: FilterType,
    normalize: &NormalizeImage,
) -> Result<Tensor4D, LeafError> {
    let channels = img.color().channel_count();
    if !matches!(channels, 1 | 3 | 4) {
        return Err(LeafError::UnsupportedImage {
            message: format!("expected 1, 3, or 4 channels, got {channels}"),
        });
    }

    if img.width() == 0 || img.height() == 0 {
        return Err(LeafError::resize(
            "source image has no pixels",
            SimpleError::new(format!("source is {}x{}", img.width(), img.height())),
        ));
    }

    let (height, width) = input_shape;
    let resized = DynamicImage::ImageRgb8(image::imageops::resize(
        &img.to_rgb8(),
        width,
        height,
        filter,
    ));

    let tensor = normalize.normalize_to(resized)?;

    debug_assert_eq!(
        tensor.shape(),
        &[1, height as usize, width as usize, INPUT_CHANNELS]
    );
    Ok(tensor)
}

impl LeafClassifier {
    /// Preprocesses one image into the model's input tensor.
    ///
    /// See [`preprocess_image`] for the pipeline details.
    pub fn preprocess(&self, img: DynamicImage) -> Result<Tensor4D, LeafError> {
        preprocess_image(&img, self.input_shape, self.resize_filter, &self.normalize)
    }

    /// Runs inference on the preprocessed batch tensor.
    ///
    /// # Returns
    ///
    /// Model predictions as a 2D tensor (batch_size x num_classes).
    pub fn infer(&self, batch_tensor: &Tensor4D) -> Result<Tensor2D, LeafError> {
        self.infer.infer_2d(batch_tensor)
    }

    /// Resolves a probability vector into a species prediction.
    pub fn resolve(&self, probabilities: &[f32]) -> Result<LeafPrediction, LeafError> {
        resolver::resolve_topk(probabilities, self.topk)
    }

    /// Classifies one leaf image: preprocess -> infer -> resolve.
    pub fn classify(&self, img: DynamicImage) -> Result<LeafPrediction, LeafError> {
        let batch_tensor = self.preprocess(img)?;
        let predictions = self.infer(&batch_tensor)?;

        let row: Vec<f32> = predictions.row(0).to_vec();
        let prediction = self.resolve(&row)?;

        debug!(
            model = %self.infer.model_name(),
            label = %prediction.label,
            confidence = prediction.confidence,
            "classified leaf image"
        );
        Ok(prediction)
    }

    /// Classifies a leaf image loaded from a file path.
    pub fn classify_path(&self, path: &Path) -> Result<LeafPrediction, LeafError> {
        let img = load_image(path)?;
        self.classify(DynamicImage::ImageRgb8(img))
    }

    /// Returns the name of the loaded model.
    pub fn model_name(&self) -> &str {
        self.infer.model_name()
    }
}

/// Builder for the leaf classifier.
#[derive(Debug)]
pub struct LeafClassifierBuilder {
    config: LeafClassifierConfig,
    resize_filter: FilterType,
}

impl LeafClassifierBuilder {
    /// Creates a new leaf classifier builder with default settings.
    pub fn new() -> Self {
        Self {
            config: LeafClassifierConfig::new(),
            resize_filter: FilterType::Triangle,
        }
    }

    /// Sets the input image shape (height, width).
    pub fn input_shape(mut self, shape: (u32, u32)) -> Self {
        self.config.input_shape = Some(shape);
        self
    }

    /// Sets the number of ranked predictions to retain.
    pub fn topk(mut self, topk: usize) -> Self {
        self.config.topk = Some(topk);
        self
    }

    /// Sets the model's input tensor name, overriding discovery.
    pub fn input_name(mut self, name: impl Into<String>) -> Self {
        self.config.input_name = Some(name.into());
        self
    }

    /// Sets the resizing filter.
    pub fn resize_filter(mut self, filter: FilterType) -> Self {
        self.resize_filter = filter;
        self
    }

    /// Builds the leaf classifier, loading the model artifact.
    ///
    /// The model is read from disk here, once; the returned classifier
    /// shares the handle across all subsequent classifications.
    ///
    /// # Errors
    ///
    /// Returns `LeafError::ModelNotFound` or `LeafError::ModelLoad` when
    /// the artifact cannot be loaded (both fatal), or a configuration
    /// error for invalid parameters.
    pub fn build(self, model_path: &Path) -> Result<LeafClassifier, LeafError> {
        self.config.validate()?;

        let infer = OrtClassifier::new(model_path, self.config.input_name.as_deref())?;
        let normalize = NormalizeImage::for_leaf_classification()?;

        Ok(LeafClassifier {
            input_shape: self.config.input_shape.unwrap_or(INPUT_SHAPE),
            resize_filter: self.resize_filter,
            topk: self.config.topk.unwrap_or(DEFAULT_TOPK).max(1),
            normalize,
            infer,
        })
    }
}

impl Default for LeafClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessingStage;

    fn normalizer() -> NormalizeImage {
        NormalizeImage::for_leaf_classification().unwrap()
    }

    #[test]
    fn test_preprocess_stretches_extreme_aspect_ratio() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            640,
            3,
            image::Rgb([10, 200, 130]),
        ));
        let tensor =
            preprocess_image(&img, INPUT_SHAPE, FilterType::Triangle, &normalizer()).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_preprocess_upscales_single_pixel() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(1, 1, image::Rgb([255, 0, 128])));
        let tensor =
            preprocess_image(&img, INPUT_SHAPE, FilterType::Triangle, &normalizer()).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_preprocess_rejects_empty_image() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(0, 0));
        let result = preprocess_image(&img, INPUT_SHAPE, FilterType::Triangle, &normalizer());
        assert!(matches!(
            result,
            Err(LeafError::Processing {
                kind: ProcessingStage::Resize,
                ..
            })
        ));
    }

    #[test]
    fn test_preprocess_rejects_two_channel_image() {
        let img = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(8, 8));
        let result = preprocess_image(&img, INPUT_SHAPE, FilterType::Triangle, &normalizer());
        assert!(matches!(result, Err(LeafError::UnsupportedImage { .. })));
    }

    #[test]
    fn test_config_defaults() {
        let config = LeafClassifierConfig::new();
        assert_eq!(config.input_shape, Some((224, 224)));
        assert_eq!(config.topk, Some(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_topk() {
        let config = LeafClassifierConfig {
            topk: Some(0),
            ..LeafClassifierConfig::new()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_dimension() {
        let config = LeafClassifierConfig {
            input_shape: Some((0, 224)),
            ..LeafClassifierConfig::new()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_fails_on_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let result = LeafClassifierBuilder::new().build(&dir.path().join("missing.onnx"));
        assert!(matches!(result, Err(LeafError::ModelNotFound { .. })));
    }

    #[test]
    fn test_builder_validates_before_loading() {
        // Invalid config is reported even when the model path is also bad.
        let dir = tempfile::tempdir().unwrap();
        let result = LeafClassifierBuilder::new()
            .topk(0)
            .build(&dir.path().join("missing.onnx"));
        assert!(matches!(result, Err(LeafError::ConfigError { .. })));
    }
}
