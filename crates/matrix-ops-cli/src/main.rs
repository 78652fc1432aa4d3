use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use matrix_ops_cli::config::{load_job_config, JobConfig, Operation};
use matrix_ops_cli::input::write_output;
use matrix_ops_cli::runner::run_job;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRIX_OPS_LOG", "error,matrix_ops=info,matops=info"))
        .init();

    let matches = Command::new("matops")
        .version(clap::crate_version!())
        .about("Dense matrix utilities: check, transpose, scale, multiply, add, dot")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Number of decimal places used when printing values")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the result to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether a matrix is rectangular, and its shape")
                .arg(matrix_arg("matrix", "Path to the matrix JSON file")),
        )
        .subcommand(
            Command::new("transpose")
                .about("Transpose a matrix")
                .arg(matrix_arg("matrix", "Path to the matrix JSON file")),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply every cell of a matrix by a scalar")
                .arg(matrix_arg("matrix", "Path to the matrix JSON file"))
                .arg(
                    Arg::new("scalar")
                        .help("Scalar factor")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("multiply")
                .about("Matrix product lhs * rhs")
                .arg(matrix_arg("lhs", "Path to the left matrix JSON file"))
                .arg(matrix_arg("rhs", "Path to the right matrix JSON file")),
        )
        .subcommand(
            Command::new("add")
                .about("Elementwise sum of two matrices of equal shape")
                .arg(matrix_arg("lhs", "Path to the left matrix JSON file"))
                .arg(matrix_arg("rhs", "Path to the right matrix JSON file")),
        )
        .subcommand(
            Command::new("dot")
                .about("Dot product of two row or column vectors")
                .arg(matrix_arg("lhs", "Path to the left vector JSON file"))
                .arg(matrix_arg("rhs", "Path to the right vector JSON file")),
        )
        .subcommand(
            Command::new("run")
                .about("Run a job described by a JSON configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the job configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .get_matches();

    let Some((name, sub_m)) = matches.subcommand() else {
        unreachable!("Subcommand is required by CLI configuration")
    };

    let config = if name == "run" {
        match sub_m.get_one::<PathBuf>("config") {
            Some(config_path) => {
                log::info!("[matops] Running job from config: {:?}", config_path);
                load_job_config(config_path)?
            }
            None => {
                let template = serde_json::to_string_pretty(&JobConfig::default())?;
                println!("{}", template);
                eprintln!("[matops] No config file provided; printed a job template.");
                return Ok(());
            }
        }
    } else {
        job_from_arguments(name, sub_m)?
    };

    // Global options are propagated down to the subcommand's matches.
    let precision = sub_m
        .get_one::<usize>("precision")
        .copied()
        .or(config.precision);
    let output = sub_m
        .get_one::<PathBuf>("output")
        .cloned()
        .or_else(|| config.output.clone());

    match run_job(&config) {
        Ok(result) => write_output(&result, precision, output.as_deref()),
        Err(e) => {
            log::error!("{} failed: {:#}", config.operation.name(), e);
            std::process::exit(1)
        }
    }
}

fn matrix_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn job_from_arguments(name: &str, matches: &ArgMatches) -> Result<JobConfig> {
    let operation: Operation = name.parse().map_err(anyhow::Error::msg)?;
    let inputs = ["matrix", "lhs", "rhs"]
        .into_iter()
        .filter_map(|id| matches.try_get_one::<PathBuf>(id).ok().flatten().cloned())
        .collect();

    let mut config = JobConfig::new(operation, inputs);
    if let Some(scalar) = matches.try_get_one::<f64>("scalar").ok().flatten() {
        config.scalar = *scalar;
    }
    Ok(config)
}
