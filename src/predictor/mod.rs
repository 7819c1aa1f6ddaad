//! Task predictor for leaf classification.
//!
//! This module provides the high-level interface the caller consumes: a
//! [`LeafClassifier`] that runs the full preprocess → infer → resolve
//! pipeline on a single image, and the standalone [`resolve`] step that
//! turns a probability vector into a species prediction with remedy text.

pub mod leaf_classifier;
pub mod resolver;

pub use leaf_classifier::{
    LeafClassifier, LeafClassifierBuilder, LeafClassifierConfig, preprocess_image,
};
pub use resolver::{LeafPrediction, resolve};
