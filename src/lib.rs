//! # LeafSnap Core
//!
//! Inference core of a medicinal-plant identifier: classify a leaf
//! photograph into one of 80 plant species with a frozen ONNX model, and
//! look up a medicinal-use description for the predicted species.
//!
//! The pipeline runs three steps per request:
//!
//! 1. Preprocess: resize to 224x224 and normalize pixels into `[0, 1]`
//!    with a leading batch axis (`(1, 224, 224, 3)`, HWC).
//! 2. Infer: one forward pass through the loaded classifier, yielding a
//!    softmax probability per species.
//! 3. Resolve: argmax (lowest index wins ties) into a species label,
//!    confidence, and remedy text, with a fixed fallback when the remedy
//!    table has no entry for the species.
//!
//! The model artifact is loaded once and shared read-only; each request is
//! otherwise independent and stateless.
//!
//! ## Modules
//!
//! * [`core`] - Error handling, tensor aliases, and the inference engine
//! * [`labels`] - Compiled-in species labels and remedy table
//! * [`processors`] - Normalization and top-k processing
//! * [`predictor`] - The high-level classifier and resolver
//! * [`utils`] - Image loading and output validation helpers

pub mod core;
pub mod labels;
pub mod predictor;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error handling
    pub use crate::core::{LeafError, LeafResult};

    // Label data
    pub use crate::labels::{CLASS_LABELS, FALLBACK_REMEDY, remedy_for};

    // Image utilities
    pub use crate::utils::load_image;

    // Predictor (high-level API)
    pub use crate::predictor::{
        LeafClassifier, LeafClassifierBuilder, LeafClassifierConfig, LeafPrediction,
        preprocess_image, resolve,
    };
}
