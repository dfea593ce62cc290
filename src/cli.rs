use clap::Parser;
use std::path::PathBuf;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "dependencies.csv";

/// Depster: Convert package-lock.json to CSV.
#[derive(Parser, Debug)]
#[command(name = "depster")]
#[command(version)]
#[command(about = "Depster: Convert package-lock.json to CSV.", long_about = None)]
pub struct Args {
    /// Path to the package-lock.json file.
    pub input_file: PathBuf,

    /// Path to the output CSV file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
