//! Integration tests for job configs, matrix loading and the job runner.

use std::path::PathBuf;

use matrix_ops::Matrix;
use matrix_ops_cli::config::{load_job_config, JobConfig, Operation};
use matrix_ops_cli::input::{load_matrix, write_output, JobOutput};
use matrix_ops_cli::runner::run_job;

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

#[test]
fn operation_from_str_is_case_insensitive() {
    let op: Operation = "Multiply".parse().unwrap();
    assert_eq!(op, Operation::Multiply);
    assert_eq!("dot".parse::<Operation>(), Ok(Operation::Dot));
}

#[test]
fn operation_from_str_unknown_errors() {
    let result: Result<Operation, _> = "invert".parse();
    assert!(result.is_err());
}

#[test]
fn operation_arity() {
    assert_eq!(Operation::Transpose.arity(), 1);
    assert_eq!(Operation::Scale.arity(), 1);
    assert_eq!(Operation::Add.arity(), 2);
    assert_eq!(Operation::Dot.arity(), 2);
}

// ---------------------------------------------------------------------------
// JobConfig
// ---------------------------------------------------------------------------

#[test]
fn job_config_default_values() {
    let cfg = JobConfig::default();
    assert_eq!(cfg.operation, Operation::Transpose);
    assert_eq!(cfg.inputs.len(), 1);
    assert_eq!(cfg.scalar, 1.0);
    assert!(cfg.precision.is_none());
    assert!(cfg.output.is_none());
}

#[test]
fn job_config_serializes_lowercase_operation() {
    let cfg = JobConfig::new(Operation::Multiply, vec![]);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"operation\":\"multiply\""));
}

#[test]
fn job_config_missing_fields_use_defaults() {
    let cfg: JobConfig = serde_json::from_str(r#"{"operation": "add"}"#).unwrap();
    assert_eq!(cfg.operation, Operation::Add);
    assert_eq!(cfg.scalar, 1.0);
}

#[test]
fn load_job_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.json");
    std::fs::write(
        &path,
        r#"{"operation": "scale", "inputs": ["m.json"], "scalar": 2.5, "precision": 3}"#,
    )
    .unwrap();
    let cfg = load_job_config(&path).unwrap();
    assert_eq!(cfg.operation, Operation::Scale);
    assert_eq!(cfg.inputs, vec![PathBuf::from("m.json")]);
    assert_eq!(cfg.scalar, 2.5);
    assert_eq!(cfg.precision, Some(3));
}

#[test]
fn load_job_config_bad_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_job_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

// ---------------------------------------------------------------------------
// Matrix loading & output
// ---------------------------------------------------------------------------

#[test]
fn load_matrix_reads_nested_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.json");
    std::fs::write(&path, "[[1, 2], [3, 4.5]]").unwrap();
    let m = load_matrix(&path).unwrap();
    assert_eq!(m, Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]));
}

#[test]
fn load_matrix_missing_file_errors() {
    let err = load_matrix("/nonexistent/m.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read matrix"));
}

#[test]
fn render_outputs() {
    let m = JobOutput::Matrix(Matrix::identity(2));
    assert_eq!(m.render(None), "1 0\n0 1\n");
    assert_eq!(m.render(Some(1)), "1.0 0.0\n0.0 1.0\n");
    assert_eq!(JobOutput::Scalar(2.5).render(None), "2.5\n");
    assert_eq!(JobOutput::Validity(Some((2, 3))).render(None), "valid 2x3\n");
    assert_eq!(JobOutput::Validity(None).render(None), "invalid\n");
}

#[test]
fn write_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    write_output(&JobOutput::Scalar(32.0), None, Some(path.as_path())).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "32\n");
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

fn write_matrix(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn run_job_multiply() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(dir.path(), "a.json", "[[1, 2], [3, 4]]");
    let b = write_matrix(dir.path(), "b.json", "[[5, 6], [7, 8]]");
    let out = run_job(&JobConfig::new(Operation::Multiply, vec![a, b])).unwrap();
    assert_eq!(
        out,
        JobOutput::Matrix(Matrix::from_rows(vec![
            vec![19.0, 22.0],
            vec![43.0, 50.0]
        ]))
    );
}

#[test]
fn run_job_check_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(dir.path(), "a.json", "[[1, 2], [3]]");
    let out = run_job(&JobConfig::new(Operation::Check, vec![a])).unwrap();
    assert_eq!(out, JobOutput::Validity(None));
}

#[test]
fn run_job_propagates_matrix_errors() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(dir.path(), "a.json", "[[1, 2, 3]]");
    let b = write_matrix(dir.path(), "b.json", "[[1], [2]]");
    let err = run_job(&JobConfig::new(Operation::Dot, vec![a, b])).unwrap_err();
    let matrix_err = err.downcast_ref::<matrix_ops::MatrixError>().unwrap();
    assert_eq!(
        matrix_err,
        &matrix_ops::MatrixError::LengthMismatch { left: 3, right: 2 }
    );
}

#[test]
fn run_job_wrong_arity_errors() {
    let job = JobConfig::new(Operation::Add, vec![PathBuf::from("only.json")]);
    assert!(run_job(&job).is_err());
}
