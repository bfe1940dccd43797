use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{builder::RangedU64ValueParser, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stride_dataset::{
    config::{Config, DataType, DEFAULT_ELEMENTS_PER_LINE, DEFAULT_SEED},
    generate,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of elements to be accessed.
    #[arg(long)]
    num_accessed_elements: usize,

    /// Distance of elements of consecutive accesses.
    #[arg(long)]
    stride: usize,

    /// Name of the output file.
    #[arg(long)]
    output_name: PathBuf,

    /// Data type of each element in the arrays, one of int, short or long.
    #[arg(long)]
    data_type: String,

    /// Seed of the random elements.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of elements on each line of the arrays.
    #[arg(
        long,
        default_value_t = DEFAULT_ELEMENTS_PER_LINE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    elements_per_line: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot init logger: {}", e))?;

    let command = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let cli = Cli::parse();

    let data_type: DataType = cli.data_type.parse()?;
    let config = Config::new(cli.num_accessed_elements, cli.stride, data_type)?
        .with_seed(cli.seed)
        .with_elements_per_line(cli.elements_per_line);

    let dataset = generate(&config, &command, &cli.output_name)
        .with_context(|| format!("could not generate dataset `{:?}`", cli.output_name))?;
    info!("dataset written to `{:?}`", dataset.path());

    Ok(())
}
