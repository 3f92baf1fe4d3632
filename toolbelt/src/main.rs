use clap::Parser;
use std::path::{Path, PathBuf};
use toolbelt::error::DemoError;
use toolbelt::format::OutputFormat;
use toolbelt::report::{
    build_report, render, DemoInput, DEFAULT_CHUNK_SIZE, DEFAULT_NAMES, DEFAULT_NUMBERS,
    DEFAULT_SUM_VALUES,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "toolbelt")]
#[command(about = "Runs the toolbelt string and sequence helpers over sample data", long_about = None)]
struct Args {
    /// Names to capitalize, kebab-case and chunk
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_NAMES.map(String::from))]
    names: Vec<String>,

    /// Numbers to deduplicate
    #[arg(long, num_args = 1.., allow_negative_numbers = true, default_values_t = DEFAULT_NUMBERS)]
    numbers: Vec<i64>,

    /// Values to add up
    #[arg(long = "sum", num_args = 1.., allow_negative_numbers = true, default_values_t = DEFAULT_SUM_VALUES)]
    sum_values: Vec<i64>,

    /// Number of names per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file path (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn write_output(path: &Path, output: &str) -> Result<(), DemoError> {
    std::fs::write(path, output).map_err(|source| DemoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: Args) -> Result<(), DemoError> {
    let format = OutputFormat::from_name(&args.format)
        .ok_or_else(|| DemoError::UnknownFormat(args.format.clone()))?;
    debug!(format = format.as_str(), "output format selected");

    let input = DemoInput {
        names: args.names,
        numbers: args.numbers,
        sum_values: args.sum_values,
        chunk_size: args.chunk_size,
    };
    info!(
        names = input.names.len(),
        numbers = input.numbers.len(),
        chunk_size = input.chunk_size,
        "running demo"
    );

    let report = build_report(&input)?;
    debug!(chunks = report.chunks.len(), unique = report.unique_numbers.len(), "report built");

    let output = render(&report, format)?;

    if let Some(output_path) = &args.output {
        write_output(output_path, &output)?;
        info!(path = %output_path.display(), "output written");
    } else {
        print!("{output}");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
