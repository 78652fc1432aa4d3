//! Reading matrices from disk and writing results back out.
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use matrix_ops::Matrix;

/// Read a matrix stored as a JSON array of rows, e.g. `[[1, 2], [3, 4]]`.
///
/// The matrix is not validated here; operations reject ragged input.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read matrix: {}", path.as_ref().display()))?;
    let matrix: Matrix = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse matrix: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded {:?} matrix from {}",
        matrix.shape(),
        path.as_ref().display()
    );
    Ok(matrix)
}

/// Result of running one job.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutput {
    /// Shape of a valid matrix, or `None` when the matrix is invalid.
    Validity(Option<(usize, usize)>),
    Matrix(Matrix),
    Scalar(f64),
}

impl JobOutput {
    pub fn render(&self, precision: Option<usize>) -> String {
        match (self, precision) {
            (JobOutput::Validity(Some((rows, cols))), _) => format!("valid {}x{}\n", rows, cols),
            (JobOutput::Validity(None), _) => "invalid\n".to_string(),
            (JobOutput::Matrix(m), Some(p)) => format!("{:.*}", p, m),
            (JobOutput::Matrix(m), None) => m.to_string(),
            (JobOutput::Scalar(v), Some(p)) => format!("{:.*}\n", p, v),
            (JobOutput::Scalar(v), None) => format!("{}\n", v),
        }
    }
}

/// Write the rendered output to `path`, or to stdout when no path is given.
pub fn write_output(output: &JobOutput, precision: Option<usize>, path: Option<&Path>) -> Result<()> {
    let rendered = output.render(precision);
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            file.write_all(rendered.as_bytes())
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            log::info!("Wrote result to {}", path.display());
        }
        None => {
            io::stdout()
                .lock()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
