//! S3 model code generator.
//!
//! Reads the AWS S3 Smithy JSON AST model and writes the generated modules
//! of the `s3sdk-model` crate.
//!
//! ```text
//! s3sdk-codegen [MODEL_PATH] [OUTPUT_DIR]
//! ```

mod codegen;
mod model;
mod shapes;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let model_path = args
        .next()
        .map_or_else(|| PathBuf::from("smithy-model/s3.json"), PathBuf::from);
    let output_dir = args
        .next()
        .map_or_else(|| PathBuf::from("../crates/s3sdk-model/src"), PathBuf::from);

    eprintln!("Reading Smithy model from: {}", model_path.display());

    let model_json = fs::read_to_string(&model_path)
        .with_context(|| format!("Failed to read model file: {}", model_path.display()))?;
    let smithy_model: model::SmithyModel =
        serde_json::from_str(&model_json).context("Failed to parse Smithy JSON model")?;

    let resolved =
        shapes::resolve_model(&smithy_model).context("Failed to resolve model shapes")?;
    let unit_ops = resolved
        .operations
        .iter()
        .filter(|op| op.result.is_none())
        .count();

    eprintln!(
        "Resolved: {} operations ({unit_ops} without a result), {} enums, {} shared structs, \
         {} requests, {} results",
        resolved.operations.len(),
        resolved.enums.len(),
        resolved.shared_structs.len(),
        resolved.requests.len(),
        resolved.results.len(),
    );

    let files = codegen::generate_all(&resolved).context("Failed to generate code")?;
    for (rel_path, content) in &files {
        let full_path = output_dir.join(rel_path);
        ensure_parent_dir(&full_path)?;
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
    }

    eprintln!(
        "Wrote {} files to {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
