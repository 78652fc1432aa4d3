use anyhow::{bail, Result};

use crate::config::{JobConfig, Operation};
use crate::input::{load_matrix, JobOutput};

/// Load the job's inputs and run its operation.
pub fn run_job(config: &JobConfig) -> Result<JobOutput> {
    let expected = config.operation.arity();
    if config.inputs.len() != expected {
        bail!(
            "Operation '{}' takes {} input matrix file(s), got {}",
            config.operation.name(),
            expected,
            config.inputs.len()
        );
    }

    let matrices = config
        .inputs
        .iter()
        .map(load_matrix)
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Running {} on {} matrix input(s)",
        config.operation.name(),
        matrices.len()
    );

    let output = match config.operation {
        Operation::Check => {
            let m = &matrices[0];
            JobOutput::Validity(m.is_valid().then(|| m.shape()))
        }
        Operation::Transpose => JobOutput::Matrix(matrices[0].transpose()?),
        Operation::Scale => JobOutput::Matrix(matrices[0].scale(config.scalar)?),
        Operation::Multiply => JobOutput::Matrix(matrices[0].multiply(&matrices[1])?),
        Operation::Add => JobOutput::Matrix(matrices[0].add(&matrices[1])?),
        Operation::Dot => JobOutput::Scalar(matrices[0].dot(&matrices[1])?),
    };
    Ok(output)
}
