//! Leaf Classification Example
//!
//! This example demonstrates how to use the leafsnap library to identify
//! medicinal plant species from leaf photographs and print the remedy
//! description for each prediction.
//!
//! Usage:
//! ```
//! cargo run --example leaf_classification -- --model-path <path_to_model> <image_paths>...
//! ```

use clap::Parser;
use leafsnap::core::init_tracing;
use leafsnap::predictor::LeafClassifierBuilder;
use std::path::Path;
use tracing::{error, info};

/// Command-line arguments for the leaf classification example
#[derive(Parser)]
#[command(name = "leaf_classification")]
#[command(about = "Leaf Classification Example - identifies medicinal plant species")]
struct Args {
    /// Path to the ONNX model file
    #[arg(short, long)]
    model_path: String,

    /// Leaf image file paths to classify
    #[arg(required = true)]
    images: Vec<String>,

    /// Number of ranked predictions to show per image
    #[arg(short, long, default_value_t = 1)]
    topk: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();

    info!("Leaf Classification Example");

    if !Path::new(&args.model_path).exists() {
        error!("Model file not found: {}", args.model_path);
        return Err("Model file not found".into());
    }

    // Filter out non-existent image files and log errors for missing files
    let existing_images: Vec<String> = args
        .images
        .iter()
        .filter(|path| {
            let exists = Path::new(path).exists();
            if !exists {
                error!("Image file not found: {}", path);
            }
            exists
        })
        .cloned()
        .collect();

    if existing_images.is_empty() {
        error!("No valid image files found");
        return Err("No valid image files found".into());
    }

    let classifier = LeafClassifierBuilder::new()
        .topk(args.topk)
        .input_shape((224, 224))
        .build(Path::new(&args.model_path))?;

    for (i, image_path) in existing_images.iter().enumerate() {
        info!(
            "Processing image {} of {}: {}",
            i + 1,
            existing_images.len(),
            image_path
        );

        match classifier.classify_path(Path::new(image_path)) {
            Ok(prediction) => {
                info!(
                    "Identified: {} with {}% confidence",
                    prediction.label,
                    prediction.confidence_percent()
                );
                info!("Medicinal uses: {}", prediction.remedy);

                if prediction.ranked.len() > 1 {
                    for (rank, (_, label, score)) in prediction.ranked.iter().enumerate() {
                        info!("  {}. {} ({:.3})", rank + 1, label, score);
                    }
                }
            }
            Err(e) => {
                error!("Classification failed for {}: {}", image_path, e);
                continue;
            }
        }
    }

    info!(
        "This model is for educational purposes. Please consult a healthcare \
         provider before using herbal remedies."
    );
    Ok(())
}
