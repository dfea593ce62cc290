mod cli;

use cli::Args;
use depster::adapters::outbound::console::StderrProgressReporter;
use depster::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use depster::adapters::outbound::formatters::CsvFormatter;
use depster::adapters::outbound::network::NpmRegistryRepository;
use depster::application::dto::ConversionRequest;
use depster::application::use_cases::ConvertLockfileUseCase;
use depster::config::{discover_config, ConfigFile};
use depster::ports::outbound::{OutputPresenter, TableFormatter};
use depster::shared::error::ExitCode;
use depster::shared::Result;
use std::process;

fn main() {
    // clap exits with ExitCode::InvalidArguments (2) on its own
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = discover_config(&working_dir)?.unwrap_or_default();

    let registry = create_registry(&config)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ConvertLockfileUseCase::new(FileSystemReader::new(), registry, progress_reporter);
    let response = use_case.execute(ConversionRequest::new(args.input_file))?;

    eprintln!("📝 Generating CSV output...");
    let csv = CsvFormatter::new().format(&response.records)?;

    let writer = FileSystemWriter::new(args.output);
    writer.present(&csv)?;

    eprintln!(
        "✅ Conversion complete. CSV saved to {}",
        writer.output_path().display()
    );
    Ok(())
}

fn create_registry(config: &ConfigFile) -> Result<NpmRegistryRepository> {
    NpmRegistryRepository::with_registry(config.registry_url(), config.timeout())
}
