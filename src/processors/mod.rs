//! Image processors for the classification pipeline.
//!
//! This module provides the preprocessing and postprocessing building
//! blocks: pixel normalization into model-input tensors and top-k
//! extraction from classifier outputs.

pub mod normalization;
pub mod topk;

pub use normalization::{ChannelOrder, NormalizeImage};
pub use topk::{Topk, TopkResult};
