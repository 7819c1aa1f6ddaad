//! The core module of the classification pipeline.
//!
//! This module contains the fundamental components of the pipeline, including:
//! - Tensor type aliases
//! - Constants used throughout the pipeline
//! - Error handling
//! - Inference engine integration
//!
//! It also provides re-exports of commonly used types and functions for convenience.

pub mod constants;
pub mod errors;
pub mod inference;

pub use constants::*;
pub use errors::{LeafError, LeafResult, ProcessingStage, SimpleError};
pub use inference::OrtClassifier;

/// A 2-dimensional tensor represented as a 2D array of f32 values.
pub type Tensor2D = ndarray::Array2<f32>;

/// A 4-dimensional tensor represented as a 4D array of f32 values.
pub type Tensor4D = ndarray::Array4<f32>;

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and
/// formatting layer. It's typically called at the start of an application to
/// enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
