use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Operations a job can run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Check,
    #[default]
    Transpose,
    Scale,
    Multiply,
    Add,
    Dot,
}

impl Operation {
    /// Number of matrix inputs the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Check | Operation::Transpose | Operation::Scale => 1,
            Operation::Multiply | Operation::Add | Operation::Dot => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Check => "check",
            Operation::Transpose => "transpose",
            Operation::Scale => "scale",
            Operation::Multiply => "multiply",
            Operation::Add => "add",
            Operation::Dot => "dot",
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "check" => Ok(Operation::Check),
            "transpose" => Ok(Operation::Transpose),
            "scale" => Ok(Operation::Scale),
            "multiply" => Ok(Operation::Multiply),
            "add" => Ok(Operation::Add),
            "dot" => Ok(Operation::Dot),
            _ => Err(format!(
                "Unknown operation: {}. Expected one of check, transpose, scale, multiply, add, dot",
                s
            )),
        }
    }
}

/// A single matrix job, usually loaded from a JSON file.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct JobConfig {
    pub operation: Operation,
    /// Paths to JSON files holding the operand matrices, in order.
    pub inputs: Vec<PathBuf>,
    /// Factor used by `scale`.
    pub scalar: f64,
    /// Decimal places for every printed cell.
    pub precision: Option<usize>,
    /// Write the result here instead of stdout.
    pub output: Option<PathBuf>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            inputs: vec![PathBuf::from("matrix.json")],
            scalar: 1.0,
            precision: None,
            output: None,
        }
    }
}

impl JobConfig {
    pub fn new(operation: Operation, inputs: Vec<PathBuf>) -> Self {
        Self {
            operation,
            inputs,
            ..Self::default()
        }
    }
}

/// Load a job configuration from a JSON file.
pub fn load_job_config<P: AsRef<Path>>(path: P) -> Result<JobConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: JobConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
