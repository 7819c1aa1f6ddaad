//! ONNX Runtime inference engine for the leaf classifier.
//!
//! Wraps an `ort` session behind a small interface: construct once from a
//! model artifact path, then run forward passes that map a preprocessed
//! NHWC batch tensor to a `(batch, num_classes)` probability matrix. The
//! session is created exactly once per engine; callers share the engine
//! read-only, so load-once semantics fall out of ownership rather than any
//! global cache.

use crate::core::errors::{LeafError, SimpleError};
use crate::core::{Tensor2D, Tensor4D};
use ndarray::ArrayView2;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::value::TensorRef;
use std::path::Path;
use std::sync::Mutex;

pub struct OrtClassifier {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    model_path: std::path::PathBuf,
    model_name: String,
}

impl std::fmt::Debug for OrtClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtClassifier")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtClassifier {
    /// Creates a new OrtClassifier from a model artifact path.
    ///
    /// The input and output tensor names are discovered from the session
    /// metadata; `input_name` overrides discovery when the artifact uses a
    /// non-standard input binding.
    ///
    /// # Errors
    ///
    /// Returns `LeafError::ModelNotFound` if the path does not resolve to a
    /// file, or `LeafError::ModelLoad` if the artifact cannot be
    /// deserialized into a session. Both are fatal: no inference is
    /// possible without a model.
    pub fn new(model_path: impl AsRef<Path>, input_name: Option<&str>) -> Result<Self, LeafError> {
        let path = model_path.as_ref();
        if !path.is_file() {
            return Err(LeafError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }

        let session = Session::builder()?
            .with_log_level(LogLevel::Error)?
            .commit_from_file(path)
            .map_err(|e| {
                LeafError::model_load_error(
                    path,
                    "failed to deserialize ONNX session from artifact",
                    e,
                )
            })?;

        let discovered_input = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| {
                LeafError::model_load_error(
                    path,
                    "session has no outputs; artifact may be invalid",
                    SimpleError::new("no output metadata"),
                )
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        tracing::info!(
            model = %model_name,
            input = %input_name.unwrap_or(discovered_input.as_str()),
            output = %output_name,
            "loaded classifier artifact"
        );

        Ok(OrtClassifier {
            session: Mutex::new(session),
            input_name: input_name.map(|s| s.to_string()).unwrap_or(discovered_input),
            output_name,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &std::path::Path {
        &self.model_path
    }

    /// Returns the model name associated with this inference engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Runs a forward pass on a preprocessed batch tensor.
    ///
    /// Pure given a fixed loaded model: the same input tensor always yields
    /// the same probability matrix.
    ///
    /// # Arguments
    ///
    /// * `x` - Batch tensor of shape `(batch, height, width, channels)`
    ///
    /// # Returns
    ///
    /// A `(batch, num_classes)` matrix of class probabilities.
    pub fn infer_2d(&self, x: &Tensor4D) -> Result<Tensor2D, LeafError> {
        let input_shape = x.shape().to_vec();

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            LeafError::inference_error(
                &self.model_name,
                &format!(
                    "failed to convert input tensor with shape {:?}",
                    input_shape
                ),
                e,
            )
        })?;

        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        let mut session_guard = self.session.lock().map_err(|_| {
            LeafError::inference_error(
                &self.model_name,
                "failed to acquire session lock",
                SimpleError::new("session lock poisoned"),
            )
        })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            LeafError::inference_error(
                &self.model_name,
                &format!(
                    "forward pass failed with input '{}' -> output '{}'",
                    self.input_name, self.output_name
                ),
                e,
            )
        })?;

        let (output_shape, output_data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                LeafError::inference_error(
                    &self.model_name,
                    &format!("failed to extract output tensor '{}' as f32", self.output_name),
                    e,
                )
            })?;

        if output_shape.len() != 2 {
            return Err(LeafError::inference_error(
                &self.model_name,
                &format!(
                    "expected 2D output tensor, got {}D with shape {:?}",
                    output_shape.len(),
                    output_shape
                ),
                SimpleError::new("invalid output tensor dimensions"),
            ));
        }

        let batch_size = output_shape[0] as usize;
        let num_classes = output_shape[1] as usize;
        if output_data.len() != batch_size * num_classes {
            return Err(LeafError::InvalidInput {
                message: format!(
                    "output data size mismatch: expected {}, got {}",
                    batch_size * num_classes,
                    output_data.len()
                ),
            });
        }

        let array_view = ArrayView2::from_shape((batch_size, num_classes), output_data)
            .map_err(LeafError::Tensor)?;
        Ok(array_view.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_rejected_before_session_creation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_model.onnx");

        match OrtClassifier::new(&path, None) {
            Err(LeafError::ModelNotFound { path: reported }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected ModelNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_directory_path_is_not_a_model() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            OrtClassifier::new(dir.path(), None),
            Err(LeafError::ModelNotFound { .. })
        ));
    }
}
