//! Error types for the classification pipeline.
//!
//! This module defines the error types that can occur while identifying a
//! plant, including model loading errors, image decoding errors, processing
//! errors, and inference errors, along with utility constructors for
//! creating them with appropriate context.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Enum representing different stages of processing in the pipeline.
///
/// This enum is used to identify which stage of the pipeline an error
/// occurred in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessingStage {
    /// Error occurred during tensor operations.
    TensorOperation,
    /// Error occurred during image normalization.
    Normalization,
    /// Error occurred during image resizing.
    Resize,
    /// Error occurred during post-processing.
    PostProcessing,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::TensorOperation => write!(f, "tensor operation"),
            ProcessingStage::Normalization => write!(f, "normalization"),
            ProcessingStage::Resize => write!(f, "resize"),
            ProcessingStage::PostProcessing => write!(f, "post-processing"),
        }
    }
}

/// Enum representing the errors that can occur in the classification
/// pipeline.
///
/// Model loading failures are fatal to the process (no inference is possible
/// without a model); image errors are scoped to the one request that carried
/// the image; a class-count mismatch signals an inconsistency between the
/// model artifact and the compiled-in label list and aborts the request
/// rather than indexing out of bounds.
#[derive(Error, Debug)]
pub enum LeafError {
    /// The model artifact path does not resolve to a file.
    #[error("model artifact not found: {path}")]
    ModelNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The model artifact exists but could not be deserialized into a
    /// usable session.
    #[error("failed to load model '{path}': {context}")]
    ModelLoad {
        /// The path of the artifact.
        path: PathBuf,
        /// Additional context about the failure.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error occurred while decoding an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// The image decoded but is not usable as classifier input.
    #[error("unsupported image: {message}")]
    UnsupportedImage {
        /// A message describing why the image was rejected.
        message: String,
    },

    /// Error occurred during processing.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error occurred during inference.
    #[error("inference failed for model '{model_name}': {context}")]
    Inference {
        /// Name of the model that failed.
        model_name: String,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The probability vector length does not match the class label list.
    ///
    /// Indicates a model/label-list mismatch; never silently truncated.
    #[error("class count mismatch: model produced {actual} probabilities, label list has {expected}")]
    ClassCountMismatch {
        /// Number of entries in the class label list.
        expected: usize,
        /// Number of probabilities the model produced.
        actual: usize,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for pipeline operations.
pub type LeafResult<T> = Result<T, LeafError>;

/// A minimal error wrapper for string-only failure descriptions.
///
/// Used where an underlying error source is required but the failure is
/// described entirely by a message.
#[derive(Debug)]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SimpleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SimpleError {}

impl LeafError {
    /// Creates a LeafError for tensor operations.
    pub fn tensor_operation(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::TensorOperation,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a LeafError for normalization operations.
    pub fn normalization(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::Normalization,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a LeafError for resize operations.
    pub fn resize(context: &str, error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Processing {
            kind: ProcessingStage::Resize,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a LeafError for post-processing operations.
    pub fn post_processing(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::PostProcessing,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a LeafError for a model artifact that failed to load.
    pub fn model_load_error(
        path: &Path,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ModelLoad {
            path: path.to_path_buf(),
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a LeafError for a failed inference run.
    pub fn inference_error(
        model_name: &str,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Inference {
            model_name: model_name.to_string(),
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a LeafError for a configuration problem.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_stage_display() {
        assert_eq!(ProcessingStage::Normalization.to_string(), "normalization");
        assert_eq!(ProcessingStage::Resize.to_string(), "resize");
    }

    #[test]
    fn test_class_count_mismatch_message() {
        let err = LeafError::ClassCountMismatch {
            expected: 80,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("80"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_constructor_preserves_context() {
        let err = LeafError::normalization("bad pixel data", SimpleError::new("boom"));
        assert!(err.to_string().contains("normalization"));
        assert!(err.to_string().contains("bad pixel data"));
    }
}
