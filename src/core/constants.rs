//! Constants used throughout the classification pipeline.

/// The input shape (height, width) the classifier expects.
///
/// Images are resized to this shape without preserving aspect ratio, for
/// compatibility with how the model was trained.
pub const INPUT_SHAPE: (u32, u32) = (224, 224);

/// The number of color channels the classifier expects.
pub const INPUT_CHANNELS: usize = 3;

/// Tolerance for the softmax sum check on model outputs.
pub const PROBABILITY_SUM_TOLERANCE: f32 = 0.01;

/// The default number of ranked predictions a classifier returns.
pub const DEFAULT_TOPK: usize = 1;
